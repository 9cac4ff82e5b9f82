use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Closed set of clothing categories the clothing rule engine can recommend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ClothingType {
    HeavyCoat,
    WaterproofCoat,
    WinterJacket,
    LightJacket,
    Raincoat,
    Sweater,
    LightClothing,
    ThermalLayers,
}

impl ClothingType {
    /// French display label, as shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::HeavyCoat => "Manteau épais / Doudoune",
            Self::WaterproofCoat => "Imperméable chaud",
            Self::WinterJacket => "Veste d'hiver",
            Self::LightJacket => "Veste légère",
            Self::Raincoat => "Imperméable léger",
            Self::Sweater => "Pull / Sweat",
            Self::LightClothing => "Vêtements légers",
            Self::ThermalLayers => "Sous-vêtements thermiques",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_type_has_a_label() {
        for clothing in ClothingType::iter() {
            assert!(!clothing.label().is_empty());
        }
    }

    #[test]
    fn serializes_as_screaming_snake() {
        let json = serde_json::to_string(&ClothingType::HeavyCoat).unwrap();
        assert_eq!(json, "\"HEAVY_COAT\"");
    }
}
