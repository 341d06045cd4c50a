//! uconv Standard Catalog
//!
//! The built-in set of categories and conversions, in display order:
//! fractions, length, weight, volume, area, speed, temperature, time,
//! energy, pressure, power, angles, currency, number bases, data storage,
//! Julian dates, trigonometry and RGB colors.
//!
//! Each conversion is a static record: typed field descriptors plus one
//! pure formula that guards its inputs and formats its outputs.

mod helpers;
pub mod fraction;
pub mod length;
pub mod mass;
pub mod motion;
pub mod temperature;
pub mod energy;
pub mod angle;
pub mod currency;
pub mod digital;
pub mod calendar;
pub mod color;

use uconv_registry::ConversionRegistry;

/// Load the standard catalog into registry
pub fn load_standard_catalog(registry: ConversionRegistry) -> ConversionRegistry {
    registry
        .with_category(fraction::category())
        .with_category(length::length_category())
        .with_category(mass::weight_category())
        .with_category(mass::volume_category())
        .with_category(length::area_category())
        .with_category(motion::speed_category())
        .with_category(temperature::category())
        .with_category(motion::time_category())
        .with_category(energy::energy_category())
        .with_category(energy::pressure_category())
        .with_category(energy::power_category())
        .with_category(angle::angles_category())
        .with_category(currency::category())
        .with_category(digital::base_category())
        .with_category(digital::storage_category())
        .with_category(calendar::category())
        .with_category(angle::trigonometry_category())
        .with_category(color::category())
}

/// A fresh registry holding only the standard catalog
pub fn standard_registry() -> ConversionRegistry {
    load_standard_catalog(ConversionRegistry::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use uconv_core::InputBag;
    use uconv_registry::Conversion;

    fn all_conversions(registry: &ConversionRegistry) -> Vec<&Conversion> {
        registry.categories().iter().flat_map(|c| c.conversions()).collect()
    }

    fn declared_keys(conversion: &Conversion) -> HashSet<&str> {
        conversion.output_fields.iter().map(|f| f.key).collect()
    }

    #[test]
    fn test_standard_catalog_validates() {
        assert_eq!(standard_registry().validate(), Ok(()));
    }

    #[test]
    fn test_category_order() {
        let registry = standard_registry();
        let names: Vec<_> = registry.categories().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Fraction and Decimal",
                "Length/Distance",
                "Weight/Mass",
                "Volume",
                "Area",
                "Speed",
                "Temperature",
                "Time",
                "Energy",
                "Pressure",
                "Power",
                "Angles",
                "Currency (Static Rate Example)",
                "Base Conversions",
                "Data Storage",
                "Geographical Conversions (Example)",
                "Trigonometric Conversions",
                "Miscellaneous",
            ]
        );
        assert_eq!(registry.conversion_count(), 30);
    }

    #[test]
    fn test_conversion_order_within_category() {
        let registry = standard_registry();
        let length = registry.category("Length/Distance").unwrap().summary();
        assert_eq!(
            length.conversions,
            vec!["Meters to Kilometers", "Miles to Kilometers", "Meters to Feet", "Feet to Meters"]
        );
    }

    #[test]
    fn test_empty_bag_blanks_every_output() {
        let registry = standard_registry();
        for conversion in all_conversions(&registry) {
            let out = conversion.evaluate(&InputBag::new());
            assert!(out.is_blank(), "{} produced a value from nothing", conversion.name);
            assert_eq!(out.keys().collect::<HashSet<_>>(), declared_keys(conversion));
        }
    }

    #[test]
    fn test_garbage_blanks_every_output() {
        let registry = standard_registry();
        for conversion in all_conversions(&registry) {
            let inputs: InputBag = conversion.input_fields.iter().map(|f| (f.key, "abc")).collect();
            let out = conversion.evaluate(&inputs);
            assert!(out.is_blank(), "{} accepted garbage", conversion.name);
            assert_eq!(out.keys().collect::<HashSet<_>>(), declared_keys(conversion));
        }
    }

    #[test]
    fn test_valid_bag_fills_every_output() {
        let registry = standard_registry();
        for conversion in all_conversions(&registry) {
            let inputs: InputBag = conversion.input_fields.iter().map(|f| (f.key, "1")).collect();
            let out = conversion.evaluate(&inputs);
            assert_eq!(out.keys().collect::<HashSet<_>>(), declared_keys(conversion));
            for (key, value) in out.iter() {
                assert!(!value.is_empty(), "{}: {} is blank", conversion.name, key);
            }
        }
    }

    #[test]
    fn test_missing_any_required_key_blanks_outputs() {
        let registry = standard_registry();
        for conversion in all_conversions(&registry) {
            for skipped in conversion.input_fields {
                let inputs: InputBag = conversion
                    .input_fields
                    .iter()
                    .filter(|f| f.key != skipped.key)
                    .map(|f| (f.key, "1"))
                    .collect();
                let out = conversion.evaluate(&inputs);
                assert!(out.is_blank(), "{} without {}", conversion.name, skipped.key);
            }
        }
    }
}
