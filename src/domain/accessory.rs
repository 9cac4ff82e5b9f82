use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Closed set of accessories the accessory rule engine can recommend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessoryType {
    Umbrella,
    Hat,
    Gloves,
    Scarf,
    Sunglasses,
    Cap,
    AntiSlipShoes,
    WinterBoots,
    Sunscreen,
}

impl AccessoryType {
    /// French display label, as shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Umbrella => "Parapluie",
            Self::Hat => "Bonnet",
            Self::Gloves => "Gants",
            Self::Scarf => "Écharpe",
            Self::Sunglasses => "Lunettes de soleil",
            Self::Cap => "Casquette",
            Self::AntiSlipShoes => "Chaussures anti-glisse",
            Self::WinterBoots => "Bottes d'hiver",
            Self::Sunscreen => "Crème solaire",
        }
    }
}
