//! Component set selection.

use serde::{Deserialize, Serialize};

use super::CostFlags;

/// Selects which cost components a calculation produces.
///
/// The variants grow in detail:
///
/// | Variant    | Statutory lines              | Caps | Flags honoured | Add-ons                          |
/// |------------|------------------------------|------|----------------|----------------------------------|
/// | `Minimal`  | combined CPP, EI             | no   | no             | health, bonuses, training & PPE  |
/// | `Split`    | employer/employee CPP and EI | no   | no             | health                           |
/// | `Capped`   | employer/employee CPP and EI | yes  | yes            | health                           |
/// | `Extended` | employer/employee CPP and EI | yes  | yes            | health, cell phone, fuel         |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostVariant {
    /// Combined CPP/EI lines plus bonuses and training.
    Minimal,
    /// CPP and EI split into employer and employee lines.
    Split,
    /// Split lines with annual maximums and configurable flags.
    Capped,
    /// Capped lines plus cell phone and fuel allowances.
    #[default]
    Extended,
}

impl CostVariant {
    /// Returns true if CPP and EI are reported as separate employer and
    /// employee lines.
    pub fn splits_contributions(self) -> bool {
        !matches!(self, CostVariant::Minimal)
    }

    /// Returns true if the caller's flags are honoured.
    pub fn honours_flags(self) -> bool {
        matches!(self, CostVariant::Capped | CostVariant::Extended)
    }

    /// Returns true if bonuses and training/PPE lines are reported.
    pub fn includes_bonus_lines(self) -> bool {
        matches!(self, CostVariant::Minimal)
    }

    /// Returns true if the cell phone and fuel lines are reported.
    pub fn includes_travel_allowances(self) -> bool {
        matches!(self, CostVariant::Extended)
    }

    /// Resolves the flags that actually apply under this variant.
    ///
    /// Variants that predate the flags always pay the overtime premium,
    /// include vacation, charge WSIB on overtime and never apply caps.
    ///
    /// ```
    /// use labour_cost_engine::models::{CostFlags, CostVariant};
    ///
    /// let requested = CostFlags { apply_overtime_premium: false, ..CostFlags::default() };
    /// let flags = CostVariant::Split.effective_flags(requested);
    /// assert!(flags.apply_overtime_premium);
    /// assert!(!flags.apply_caps);
    /// ```
    pub fn effective_flags(self, requested: CostFlags) -> CostFlags {
        if self.honours_flags() {
            requested
        } else {
            CostFlags {
                apply_caps: false,
                ..CostFlags::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_is_extended() {
        assert_eq!(CostVariant::default(), CostVariant::Extended);
    }

    #[test]
    fn test_variant_serialization() {
        assert_eq!(
            serde_json::to_string(&CostVariant::Capped).unwrap(),
            "\"capped\""
        );
        let variant: CostVariant = serde_json::from_str("\"minimal\"").unwrap();
        assert_eq!(variant, CostVariant::Minimal);
    }

    #[test]
    fn test_flag_honouring_variants_pass_flags_through() {
        let requested = CostFlags {
            apply_caps: false,
            apply_overtime_premium: false,
            include_vacation: false,
            wsib_applies_to_overtime: false,
        };
        assert_eq!(CostVariant::Capped.effective_flags(requested), requested);
        assert_eq!(CostVariant::Extended.effective_flags(requested), requested);
    }

    #[test]
    fn test_early_variants_ignore_flags_and_caps() {
        let requested = CostFlags {
            apply_caps: true,
            apply_overtime_premium: false,
            include_vacation: false,
            wsib_applies_to_overtime: false,
        };
        for variant in [CostVariant::Minimal, CostVariant::Split] {
            let flags = variant.effective_flags(requested);
            assert!(!flags.apply_caps);
            assert!(flags.apply_overtime_premium);
            assert!(flags.include_vacation);
            assert!(flags.wsib_applies_to_overtime);
        }
    }

    #[test]
    fn test_component_selection_per_variant() {
        assert!(!CostVariant::Minimal.splits_contributions());
        assert!(CostVariant::Split.splits_contributions());
        assert!(CostVariant::Minimal.includes_bonus_lines());
        assert!(!CostVariant::Capped.includes_bonus_lines());
        assert!(CostVariant::Extended.includes_travel_allowances());
        assert!(!CostVariant::Capped.includes_travel_allowances());
    }
}
