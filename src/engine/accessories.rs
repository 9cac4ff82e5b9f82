use crate::domain::{AccessoryType, ForecastPoint, WeatherCondition};

/// Very-cold offset below the user threshold, in °C.
const VERY_COLD_OFFSET: i32 = 5;

/// Outcome of the accessory rules.
///
/// `essential` and `optional` are disjoint; [`AccessoryDecision::all`] gives
/// the de-duplicated union, essentials first.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessoryDecision {
    pub essential: Vec<AccessoryType>,
    pub optional: Vec<AccessoryType>,
    pub reason: String,
}

impl AccessoryDecision {
    pub fn all(&self) -> Vec<AccessoryType> {
        let mut all = self.essential.clone();
        for item in &self.optional {
            if !all.contains(item) {
                all.push(*item);
            }
        }
        all
    }
}

fn push_unique(items: &mut Vec<AccessoryType>, item: AccessoryType) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Decide which accessories to take.
///
/// Unlike the clothing chain, these rules are additive: several conditions
/// can each contribute items and a reason clause. `forecast` is accepted for
/// parity with the weather service contract but not consulted by the current
/// rules.
pub fn decide_accessories(
    temperature: i32,
    threshold: i32,
    will_rain: bool,
    will_snow: bool,
    condition: WeatherCondition,
    _forecast: &[ForecastPoint],
) -> AccessoryDecision {
    let mut essential = Vec::new();
    let mut optional = Vec::new();
    let mut reasons: Vec<String> = Vec::new();

    if will_rain {
        push_unique(&mut essential, AccessoryType::Umbrella);
        reasons.push("Prenez un parapluie car il va pleuvoir".to_string());
    }

    let icy = will_snow
        || condition == WeatherCondition::Freezing
        || condition == WeatherCondition::Sleet;
    if icy {
        push_unique(&mut essential, AccessoryType::AntiSlipShoes);
        push_unique(&mut essential, AccessoryType::WinterBoots);
        push_unique(&mut essential, AccessoryType::Hat);
        push_unique(&mut essential, AccessoryType::Gloves);
        push_unique(&mut optional, AccessoryType::Scarf);
        reasons.push(
            "Attention au verglas/neige : portez des chaussures adaptées et couvrez-vous"
                .to_string(),
        );
    } else if temperature < threshold {
        push_unique(&mut essential, AccessoryType::Hat);
        push_unique(&mut essential, AccessoryType::Gloves);
        push_unique(&mut optional, AccessoryType::Scarf);
        reasons.push(format!(
            "Il fait froid ({temperature}°C) : bonnet et gants recommandés"
        ));
    }

    // Cold-critical, so the scarf is promoted to essential regardless of
    // which branch (if any) added it to optional.
    if temperature < threshold - VERY_COLD_OFFSET {
        optional.retain(|item| *item != AccessoryType::Scarf);
        push_unique(&mut essential, AccessoryType::Scarf);
    }

    if temperature > 25 && condition == WeatherCondition::Clear {
        push_unique(&mut optional, AccessoryType::Sunglasses);
        push_unique(&mut optional, AccessoryType::Cap);
        push_unique(&mut optional, AccessoryType::Sunscreen);
        reasons.push("Il fait très beau : protégez-vous du soleil".to_string());
    } else if temperature > 20 && condition == WeatherCondition::Clear {
        push_unique(&mut optional, AccessoryType::Sunglasses);
    }

    if condition == WeatherCondition::Wind {
        if !essential.contains(&AccessoryType::Hat) {
            push_unique(&mut optional, AccessoryType::Hat);
        }
        reasons.push("Vent fort prévu".to_string());
    }

    let reason = if reasons.is_empty() {
        format!("Accessoires recommandés pour {temperature}°C.")
    } else {
        format!("{}.", reasons.join(". "))
    };

    AccessoryDecision {
        essential,
        optional,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(
        temperature: i32,
        threshold: i32,
        rain: bool,
        snow: bool,
        condition: WeatherCondition,
    ) -> AccessoryDecision {
        decide_accessories(temperature, threshold, rain, snow, condition, &[])
    }

    #[test]
    fn rain_adds_umbrella_as_essential() {
        let decision = decide(15, 10, true, false, WeatherCondition::Rain);
        assert!(decision.essential.contains(&AccessoryType::Umbrella));
        assert!(decision.reason.contains("parapluie"));
    }

    #[test]
    fn snow_adds_winter_kit() {
        let decision = decide(5, 10, false, true, WeatherCondition::Snow);
        for item in [
            AccessoryType::AntiSlipShoes,
            AccessoryType::WinterBoots,
            AccessoryType::Hat,
            AccessoryType::Gloves,
        ] {
            assert!(decision.essential.contains(&item), "missing {item:?}");
        }
        assert!(decision.optional.contains(&AccessoryType::Scarf));
    }

    #[test]
    fn freezing_condition_triggers_ice_rules_without_snow_flag() {
        let decision = decide(2, 10, false, false, WeatherCondition::Freezing);
        assert!(decision.essential.contains(&AccessoryType::AntiSlipShoes));
        assert!(decision.reason.contains("verglas"));
    }

    #[test]
    fn plain_cold_adds_hat_and_gloves_only() {
        let decision = decide(7, 10, false, false, WeatherCondition::Cloudy);
        assert!(decision.essential.contains(&AccessoryType::Hat));
        assert!(decision.essential.contains(&AccessoryType::Gloves));
        assert!(!decision.essential.contains(&AccessoryType::WinterBoots));
        assert!(decision.optional.contains(&AccessoryType::Scarf));
    }

    #[test]
    fn very_cold_promotes_scarf_to_essential() {
        let decision = decide(2, 10, false, false, WeatherCondition::Cloudy);
        assert!(decision.essential.contains(&AccessoryType::Scarf));
        assert!(!decision.optional.contains(&AccessoryType::Scarf));
    }

    #[test]
    fn very_cold_scarf_promotion_fires_on_the_ice_branch_too() {
        let decision = decide(0, 10, false, true, WeatherCondition::Snow);
        assert!(decision.essential.contains(&AccessoryType::Scarf));
        assert!(!decision.optional.contains(&AccessoryType::Scarf));
    }

    #[test]
    fn strong_sun_adds_full_protection() {
        let decision = decide(28, 10, false, false, WeatherCondition::Clear);
        for item in [
            AccessoryType::Sunglasses,
            AccessoryType::Cap,
            AccessoryType::Sunscreen,
        ] {
            assert!(decision.optional.contains(&item), "missing {item:?}");
        }
        assert!(decision.reason.contains("soleil"));
    }

    #[test]
    fn mild_sun_adds_sunglasses_only() {
        let decision = decide(22, 10, false, false, WeatherCondition::Clear);
        assert!(decision.optional.contains(&AccessoryType::Sunglasses));
        assert!(!decision.optional.contains(&AccessoryType::Cap));
        assert!(!decision.optional.contains(&AccessoryType::Sunscreen));
    }

    #[test]
    fn wind_adds_optional_hat_unless_already_essential() {
        let windy_mild = decide(15, 10, false, false, WeatherCondition::Wind);
        assert!(windy_mild.optional.contains(&AccessoryType::Hat));
        assert!(windy_mild.reason.contains("Vent fort"));

        let windy_cold = decide(5, 10, false, false, WeatherCondition::Wind);
        assert!(windy_cold.essential.contains(&AccessoryType::Hat));
        assert!(!windy_cold.optional.contains(&AccessoryType::Hat));
    }

    #[test]
    fn essential_and_optional_stay_disjoint_and_union_has_no_duplicates() {
        let cases = [
            (5, 10, true, true, WeatherCondition::Snow),
            (2, 10, true, false, WeatherCondition::Freezing),
            (28, 10, false, false, WeatherCondition::Clear),
            (15, 10, false, false, WeatherCondition::Wind),
            (0, 10, false, false, WeatherCondition::Cloudy),
        ];
        for (temperature, threshold, rain, snow, condition) in cases {
            let decision = decide(temperature, threshold, rain, snow, condition);
            for item in &decision.essential {
                assert!(
                    !decision.optional.contains(item),
                    "{item:?} in both sets for t={temperature}"
                );
            }
            let all = decision.all();
            let mut deduped = all.clone();
            deduped.dedup();
            assert_eq!(all.len(), deduped.len());
            assert_eq!(
                all.len(),
                decision.essential.len() + decision.optional.len()
            );
        }
    }

    #[test]
    fn quiet_weather_falls_back_to_templated_reason() {
        let decision = decide(15, 10, false, false, WeatherCondition::Cloudy);
        assert!(decision.essential.is_empty());
        assert!(decision.optional.is_empty());
        assert_eq!(decision.reason, "Accessoires recommandés pour 15°C.");
    }

    #[test]
    fn reason_clauses_are_joined_with_terminating_period() {
        let decision = decide(5, 10, true, true, WeatherCondition::Snow);
        assert!(decision.reason.ends_with('.'));
        assert!(decision.reason.contains(". "));
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let first = decide(3, 10, true, false, WeatherCondition::Rain);
        let second = decide(3, 10, true, false, WeatherCondition::Rain);
        assert_eq!(first, second);
    }
}
