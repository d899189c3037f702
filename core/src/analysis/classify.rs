use serde::{Deserialize, Serialize};

/// Strict upper bound for the "micro" subset that gets its own report set
/// and JSON export. Distinct from the certification bounds below, which
/// are inclusive.
pub const MICRO_IMPULSE_CEILING_NS: f64 = 640.0;

const LOW_POWER_MAX_NS: f64 = 160.0;
const LEVEL1_MAX_NS: f64 = 640.0;
const LEVEL2_MAX_NS: f64 = 5120.0;

/// NAR certification class by total impulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpulseClass {
    LowPower,
    Level1,
    Level2,
    Level3,
}

impl ImpulseClass {
    pub fn of(tot_impulse_ns: f64) -> Self {
        if tot_impulse_ns <= LOW_POWER_MAX_NS {
            ImpulseClass::LowPower
        } else if tot_impulse_ns <= LEVEL1_MAX_NS {
            ImpulseClass::Level1
        } else if tot_impulse_ns <= LEVEL2_MAX_NS {
            ImpulseClass::Level2
        } else {
            ImpulseClass::Level3
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImpulseClass::LowPower => "Low Power (A-G)",
            ImpulseClass::Level1 => "Level 1 (H-I)",
            ImpulseClass::Level2 => "Level 2 (J-L)",
            ImpulseClass::Level3 => "Level 3 (M-O)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_boundaries_are_inclusive_upper_bounds() {
        assert_eq!(ImpulseClass::of(160.0), ImpulseClass::LowPower);
        assert_eq!(ImpulseClass::of(160.001), ImpulseClass::Level1);
        assert_eq!(ImpulseClass::of(640.0), ImpulseClass::Level1);
        assert_eq!(ImpulseClass::of(640.001), ImpulseClass::Level2);
        assert_eq!(ImpulseClass::of(5120.0), ImpulseClass::Level2);
        assert_eq!(ImpulseClass::of(5120.001), ImpulseClass::Level3);
    }

    #[test]
    fn labels_carry_letter_ranges() {
        assert_eq!(ImpulseClass::of(10.0).label(), "Low Power (A-G)");
        assert_eq!(ImpulseClass::of(900.0).label(), "Level 2 (J-L)");
    }
}
