//! # Unit Conversion Module
//!
//! Converts quantities between compatible units through two base-unit
//! systems: every volume unit reduces to tablespoons, every weight unit
//! reduces to ounces. Count units form a pass-through class with no shared
//! base.
//!
//! All quantity arithmetic uses `rust_decimal::Decimal` so that repeated
//! merges never accumulate binary floating-point error. Conversion is only
//! defined within one unit family; a cross-family request is reported as
//! [`Conversion::Incompatible`] with the quantity untouched, never
//! silently approximated.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::ingredient_model::{UnitTag, VolumeUnit, WeightUnit};

/// Volume threshold at which an unanchored `from_base` switches the
/// display unit to cups (16 tbsp = 1 cup)
pub const VOLUME_DISPLAY_THRESHOLD_TBSP: Decimal = dec!(16);
/// Weight threshold at which an unanchored `from_base` switches the
/// display unit to pounds (16 oz = 1 lb)
pub const WEIGHT_DISPLAY_THRESHOLD_OZ: Decimal = dec!(16);

impl VolumeUnit {
    /// Conversion factor to the volume base unit (tablespoons).
    ///
    /// US customary factors are exact (1 cup = 16 tbsp, 1 fl oz = 2 tbsp);
    /// the teaspoon factor is the decimal expansion of 1/3; the metric
    /// crossings are the stated approximations 1 ml = 0.067628 tbsp and
    /// 1 l = 67.628 tbsp (1 tbsp = 14.7868 ml).
    pub fn tablespoons(self) -> Decimal {
        match self {
            VolumeUnit::Teaspoon => dec!(0.3333333333333333),
            VolumeUnit::Tablespoon => Decimal::ONE,
            VolumeUnit::FluidOunce => dec!(2),
            VolumeUnit::Cup => dec!(16),
            VolumeUnit::Pint => dec!(32),
            VolumeUnit::Quart => dec!(64),
            VolumeUnit::Gallon => dec!(256),
            VolumeUnit::Milliliter => dec!(0.067628),
            VolumeUnit::Liter => dec!(67.628),
        }
    }
}

impl WeightUnit {
    /// Conversion factor to the weight base unit (ounces).
    ///
    /// 1 lb = 16 oz exactly; the metric crossings are the stated
    /// approximations 1 g = 0.035274 oz and 1 kg = 35.274 oz.
    pub fn ounces(self) -> Decimal {
        match self {
            WeightUnit::Gram => dec!(0.035274),
            WeightUnit::Kilogram => dec!(35.274),
            WeightUnit::Ounce => Decimal::ONE,
            WeightUnit::Pound => dec!(16),
        }
    }
}

/// Outcome of a `from_base` request.
///
/// Callers must branch on `Incompatible` rather than expect an error;
/// unit incompatibility is a value, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// The quantity expressed in the requested (or display-scaled) unit
    Converted { quantity: Decimal, unit: UnitTag },
    /// The target unit belongs to a different family; the quantity is
    /// returned unchanged in the base unit
    Incompatible { quantity: Decimal, unit: UnitTag },
}

impl Conversion {
    /// The quantity/unit pair regardless of outcome
    pub fn into_parts(self) -> (Decimal, UnitTag) {
        match self {
            Conversion::Converted { quantity, unit } => (quantity, unit),
            Conversion::Incompatible { quantity, unit } => (quantity, unit),
        }
    }

    pub fn is_compatible(&self) -> bool {
        matches!(self, Conversion::Converted { .. })
    }
}

/// The base unit of a tag's family: tablespoon for volume, ounce for
/// weight, the tag itself for counts.
pub fn base_unit_of(unit: UnitTag) -> UnitTag {
    match unit {
        UnitTag::Volume(_) => UnitTag::Volume(VolumeUnit::Tablespoon),
        UnitTag::Weight(_) => UnitTag::Weight(WeightUnit::Ounce),
        UnitTag::Count(c) => UnitTag::Count(c),
    }
}

/// Reduce a quantity to its family base unit.
///
/// Volumes multiply into tablespoons, weights into ounces; count
/// quantities pass through unchanged with themselves as base.
pub fn to_base(quantity: Decimal, unit: UnitTag) -> (Decimal, UnitTag) {
    match unit {
        UnitTag::Volume(v) => (
            quantity * v.tablespoons(),
            UnitTag::Volume(VolumeUnit::Tablespoon),
        ),
        UnitTag::Weight(w) => (quantity * w.ounces(), UnitTag::Weight(WeightUnit::Ounce)),
        UnitTag::Count(c) => (quantity, UnitTag::Count(c)),
    }
}

/// Re-express a base-unit quantity in a display or target unit.
///
/// With no explicit target the display-scaling rule applies: volumes of
/// at least 16 tbsp convert to cups, weights of at least 16 oz convert to
/// pounds, anything below threshold stays in the base unit. With an
/// explicit target of the same family the inverse factor applies; a
/// target in a different family yields [`Conversion::Incompatible`].
pub fn from_base(base_quantity: Decimal, base_unit: UnitTag, target: Option<UnitTag>) -> Conversion {
    match target {
        None => display_scale(base_quantity, base_unit),
        Some(target_unit) => match (base_unit, target_unit) {
            (UnitTag::Volume(_), UnitTag::Volume(v)) => Conversion::Converted {
                quantity: base_quantity / v.tablespoons(),
                unit: target_unit,
            },
            (UnitTag::Weight(_), UnitTag::Weight(w)) => Conversion::Converted {
                quantity: base_quantity / w.ounces(),
                unit: target_unit,
            },
            (UnitTag::Count(a), UnitTag::Count(b)) if a == b => Conversion::Converted {
                quantity: base_quantity,
                unit: target_unit,
            },
            _ => {
                debug!(
                    "rejecting conversion from {} to {}",
                    base_unit.display_name(),
                    target_unit.display_name()
                );
                Conversion::Incompatible {
                    quantity: base_quantity,
                    unit: base_unit,
                }
            }
        },
    }
}

/// Convert a quantity directly between two units of the same family
pub fn convert(quantity: Decimal, from: UnitTag, to: UnitTag) -> Conversion {
    let (base_quantity, base_unit) = to_base(quantity, from);
    from_base(base_quantity, base_unit, Some(to))
}

fn display_scale(base_quantity: Decimal, base_unit: UnitTag) -> Conversion {
    match base_unit {
        UnitTag::Volume(_) if base_quantity >= VOLUME_DISPLAY_THRESHOLD_TBSP => {
            Conversion::Converted {
                quantity: base_quantity / VolumeUnit::Cup.tablespoons(),
                unit: UnitTag::Volume(VolumeUnit::Cup),
            }
        }
        UnitTag::Weight(_) if base_quantity >= WEIGHT_DISPLAY_THRESHOLD_OZ => {
            Conversion::Converted {
                quantity: base_quantity / WeightUnit::Pound.ounces(),
                unit: UnitTag::Weight(WeightUnit::Pound),
            }
        }
        _ => Conversion::Converted {
            quantity: base_quantity,
            unit: base_unit,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient_model::CountUnit;

    #[test]
    fn test_volume_to_base() {
        let (qty, unit) = to_base(dec!(2), UnitTag::Volume(VolumeUnit::Cup));
        assert_eq!(qty, dec!(32));
        assert_eq!(unit, UnitTag::Volume(VolumeUnit::Tablespoon));

        let (qty, _) = to_base(dec!(3), UnitTag::Volume(VolumeUnit::Teaspoon));
        assert_eq!(qty, dec!(0.9999999999999999));
    }

    #[test]
    fn test_weight_to_base() {
        let (qty, unit) = to_base(dec!(2), UnitTag::Weight(WeightUnit::Pound));
        assert_eq!(qty, dec!(32));
        assert_eq!(unit, UnitTag::Weight(WeightUnit::Ounce));
    }

    #[test]
    fn test_count_passes_through() {
        let (qty, unit) = to_base(dec!(3), UnitTag::Count(CountUnit::Clove));
        assert_eq!(qty, dec!(3));
        assert_eq!(unit, UnitTag::Count(CountUnit::Clove));
    }

    #[test]
    fn test_display_scaling_volume() {
        // 40 tbsp >= 16 -> cups
        let c = from_base(dec!(40), UnitTag::Volume(VolumeUnit::Tablespoon), None);
        assert_eq!(
            c,
            Conversion::Converted {
                quantity: dec!(2.5),
                unit: UnitTag::Volume(VolumeUnit::Cup)
            }
        );
        // 8 tbsp stays in the base unit
        let c = from_base(dec!(8), UnitTag::Volume(VolumeUnit::Tablespoon), None);
        assert_eq!(
            c,
            Conversion::Converted {
                quantity: dec!(8),
                unit: UnitTag::Volume(VolumeUnit::Tablespoon)
            }
        );
    }

    #[test]
    fn test_display_scaling_weight() {
        let c = from_base(dec!(24), UnitTag::Weight(WeightUnit::Ounce), None);
        assert_eq!(
            c,
            Conversion::Converted {
                quantity: dec!(1.5),
                unit: UnitTag::Weight(WeightUnit::Pound)
            }
        );
    }

    #[test]
    fn test_round_trip_within_family() {
        // to_base(2, cup) == (32, tbsp); from_base(32, tbsp) == (2, cups)
        let (base, base_unit) = to_base(dec!(2), UnitTag::Volume(VolumeUnit::Cup));
        let back = from_base(base, base_unit, Some(UnitTag::Volume(VolumeUnit::Cup)));
        assert_eq!(
            back,
            Conversion::Converted {
                quantity: dec!(2),
                unit: UnitTag::Volume(VolumeUnit::Cup)
            }
        );
    }

    #[test]
    fn test_teaspoon_round_trip() {
        let (base, base_unit) = to_base(dec!(3), UnitTag::Volume(VolumeUnit::Teaspoon));
        let back = from_base(base, base_unit, Some(UnitTag::Volume(VolumeUnit::Teaspoon)));
        let (qty, _) = back.into_parts();
        assert_eq!(qty, dec!(3));
    }

    #[test]
    fn test_cross_family_rejected() {
        let c = from_base(
            dec!(32),
            UnitTag::Volume(VolumeUnit::Tablespoon),
            Some(UnitTag::Weight(WeightUnit::Ounce)),
        );
        assert_eq!(
            c,
            Conversion::Incompatible {
                quantity: dec!(32),
                unit: UnitTag::Volume(VolumeUnit::Tablespoon)
            }
        );
        assert!(!c.is_compatible());
    }

    #[test]
    fn test_count_label_mismatch_rejected() {
        let c = convert(
            dec!(2),
            UnitTag::Count(CountUnit::Can),
            UnitTag::Count(CountUnit::Clove),
        );
        assert!(!c.is_compatible());
    }

    #[test]
    fn test_direct_convert() {
        let c = convert(
            dec!(1),
            UnitTag::Volume(VolumeUnit::Pint),
            UnitTag::Volume(VolumeUnit::Cup),
        );
        assert_eq!(
            c,
            Conversion::Converted {
                quantity: dec!(2),
                unit: UnitTag::Volume(VolumeUnit::Cup)
            }
        );
    }

    #[test]
    fn test_base_unit_of() {
        assert_eq!(
            base_unit_of(UnitTag::Volume(VolumeUnit::Gallon)),
            UnitTag::Volume(VolumeUnit::Tablespoon)
        );
        assert_eq!(
            base_unit_of(UnitTag::Weight(WeightUnit::Kilogram)),
            UnitTag::Weight(WeightUnit::Ounce)
        );
        assert_eq!(
            base_unit_of(UnitTag::Count(CountUnit::Bunch)),
            UnitTag::Count(CountUnit::Bunch)
        );
    }
}
