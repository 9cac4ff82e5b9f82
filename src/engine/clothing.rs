use crate::domain::{ClothingType, WeatherCondition};

/// Very-cold offset below the user threshold, in °C.
const VERY_COLD_OFFSET: i32 = 5;

/// Outcome of the clothing decision chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ClothingDecision {
    pub types: Vec<ClothingType>,
    pub primary: ClothingType,
    pub reason: String,
}

/// Decide what to wear from a weather snapshot.
///
/// The rules form an ordered if/else-if chain: the first matching branch
/// wins, so precipitation-plus-cold dominates the plain temperature bands.
/// Total for any numeric input; `threshold` is taken as-is, bounds are the
/// config boundary's concern.
pub fn decide_clothing(
    temperature: i32,
    threshold: i32,
    will_rain: bool,
    will_snow: bool,
    _condition: WeatherCondition,
) -> ClothingDecision {
    let (types, primary, reason) = if will_snow && temperature < threshold {
        (
            vec![ClothingType::HeavyCoat, ClothingType::ThermalLayers],
            ClothingType::HeavyCoat,
            format!(
                "Il va neiger et il fait {temperature}°C. Portez une doudoune ou un manteau \
                 épais avec des sous-vêtements thermiques."
            ),
        )
    } else if will_rain && temperature < threshold {
        (
            vec![ClothingType::WaterproofCoat, ClothingType::WinterJacket],
            ClothingType::WaterproofCoat,
            format!(
                "Il va pleuvoir et il fait {temperature}°C. Portez un imperméable chaud ou une \
                 veste d'hiver imperméable."
            ),
        )
    } else if temperature < threshold - VERY_COLD_OFFSET {
        (
            vec![ClothingType::HeavyCoat, ClothingType::ThermalLayers],
            ClothingType::HeavyCoat,
            format!("Il fait très froid ({temperature}°C). Portez une doudoune ou un manteau épais."),
        )
    } else if temperature < threshold {
        (
            vec![ClothingType::WinterJacket, ClothingType::Sweater],
            ClothingType::WinterJacket,
            format!("Il fait {temperature}°C. Portez une veste d'hiver ou un manteau."),
        )
    } else if will_rain {
        (
            vec![ClothingType::Raincoat, ClothingType::LightJacket],
            ClothingType::Raincoat,
            format!("Il va pleuvoir mais il fait {temperature}°C. Portez un imperméable léger."),
        )
    } else if temperature > 25 {
        (
            vec![ClothingType::LightClothing],
            ClothingType::LightClothing,
            format!("Il fait chaud ({temperature}°C). Portez des vêtements légers et respirants."),
        )
    } else if temperature < 20 {
        (
            vec![ClothingType::LightJacket, ClothingType::Sweater],
            ClothingType::LightJacket,
            format!("Il fait {temperature}°C. Portez une veste légère ou un pull."),
        )
    } else {
        (
            vec![ClothingType::LightJacket, ClothingType::LightClothing],
            ClothingType::LightClothing,
            format!(
                "Il fait {temperature}°C. Temps agréable, vêtements légers suffisent. Une veste \
                 légère peut être utile."
            ),
        )
    };

    ClothingDecision {
        types,
        primary,
        reason,
    }
}
