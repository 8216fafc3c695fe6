//! Cost breakdown models.
//!
//! This module contains the [`CostBreakdown`] produced by the cost engine and
//! the structures it is made of: named [`CostComponent`] lines, the
//! [`CostSide`] each line is charged to, and [`CapWarning`] notices.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CostVariant;

/// Who bears a cost component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSide {
    /// Paid by the employer.
    Employer,
    /// Withheld from the employee.
    Employee,
}

/// The named cost components the engine can produce.
///
/// # Example
///
/// ```
/// use labour_cost_engine::models::ComponentKind;
///
/// assert_eq!(ComponentKind::TrainingPpe.label(), "Training & PPE");
/// assert_eq!(format!("{}", ComponentKind::CppEmployer), "CPP (Employer)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// The blended hourly wage.
    BaseWage,
    /// Vacation pay.
    VacationPay,
    /// Combined CPP line (minimal variant).
    Cpp,
    /// Combined EI line (minimal variant).
    Ei,
    /// CPP paid by the employer.
    CppEmployer,
    /// CPP withheld from the employee.
    CppEmployee,
    /// EI paid by the employer.
    EiEmployer,
    /// EI withheld from the employee.
    EiEmployee,
    /// WSIB premium.
    Wsib,
    /// Health benefits.
    HealthBenefits,
    /// Bonuses and allowances.
    Bonuses,
    /// Training and protective equipment.
    TrainingPpe,
    /// Cell phone allowance.
    CellPhone,
    /// Fuel allowance.
    FuelAllowance,
}

impl ComponentKind {
    /// Returns the display label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::BaseWage => "Base Wage",
            ComponentKind::VacationPay => "Vacation Pay",
            ComponentKind::Cpp => "CPP",
            ComponentKind::Ei => "EI",
            ComponentKind::CppEmployer => "CPP (Employer)",
            ComponentKind::CppEmployee => "CPP (Employee)",
            ComponentKind::EiEmployer => "EI (Employer)",
            ComponentKind::EiEmployee => "EI (Employee)",
            ComponentKind::Wsib => "WSIB",
            ComponentKind::HealthBenefits => "Health Benefits",
            ComponentKind::Bonuses => "Bonuses",
            ComponentKind::TrainingPpe => "Training & PPE",
            ComponentKind::CellPhone => "Cell Phone",
            ComponentKind::FuelAllowance => "Fuel Allowance",
        }
    }

    /// Returns the side that bears this component.
    pub fn side(self) -> CostSide {
        match self {
            ComponentKind::CppEmployee | ComponentKind::EiEmployee => CostSide::Employee,
            _ => CostSide::Employer,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single named line in a cost breakdown, in dollars per hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostComponent {
    /// Which component this is.
    pub kind: ComponentKind,
    /// Display label for the component.
    pub label: String,
    /// Who bears the cost.
    pub side: CostSide,
    /// Hourly amount.
    pub hourly: Decimal,
}

impl CostComponent {
    /// Creates a component, taking the label and side from its kind.
    pub fn new(kind: ComponentKind, hourly: Decimal) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            side: kind.side(),
            hourly,
        }
    }
}

/// The statutory amounts subject to an annual maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CappedContribution {
    /// Employer CPP.
    CppEmployer,
    /// Employee CPP.
    CppEmployee,
    /// Employer EI.
    EiEmployer,
    /// Employee EI.
    EiEmployee,
}

impl CappedContribution {
    /// Returns the display name of the contribution.
    pub fn label(self) -> &'static str {
        match self {
            CappedContribution::CppEmployer => "CPP employer",
            CappedContribution::CppEmployee => "CPP employee",
            CappedContribution::EiEmployer => "EI employer",
            CappedContribution::EiEmployee => "EI employee",
        }
    }
}

/// Notice that an annual maximum reduced a contribution.
///
/// Warnings are informational: the calculation always completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapWarning {
    /// The contribution that was clamped.
    pub contribution: CappedContribution,
    /// The annual amount before the cap.
    pub uncapped_annual: Decimal,
    /// The annual maximum that was applied.
    pub cap: Decimal,
    /// Human-readable notice, e.g. "CPP employer cap reached".
    pub message: String,
}

impl CapWarning {
    /// Creates a warning for the given contribution.
    pub fn new(contribution: CappedContribution, uncapped_annual: Decimal, cap: Decimal) -> Self {
        Self {
            contribution,
            uncapped_annual,
            cap,
            message: format!("{} cap reached", contribution.label()),
        }
    }
}

/// The complete result of a cost calculation.
///
/// Component lines appear in a fixed order determined by the variant.
/// The employer and employee hourly totals are the sums of the lines on
/// their side; the annual totals are the hourly totals multiplied by
/// `annual_hours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// The component set this breakdown was produced with.
    pub variant: CostVariant,
    /// The blended hourly wage used as the base for percentages.
    pub blended_rate: Decimal,
    /// Weekly hours including overtime.
    pub total_hours: Decimal,
    /// Annual hours (weekly total × 52).
    pub annual_hours: Decimal,
    /// Named cost lines in output order.
    pub components: Vec<CostComponent>,
    /// Sum of employer-side lines, per hour.
    pub employer_hourly_total: Decimal,
    /// Sum of employee-side lines, per hour.
    pub employee_hourly_total: Decimal,
    /// Employer cost per year.
    pub annual_employer_total: Decimal,
    /// Employee contributions per year.
    pub annual_employee_total: Decimal,
    /// Annual maximums that were reached.
    pub warnings: Vec<CapWarning>,
}

impl CostBreakdown {
    /// Returns the hourly amount of a component, if present.
    pub fn component(&self, kind: ComponentKind) -> Option<Decimal> {
        self.components
            .iter()
            .find(|c| c.kind == kind)
            .map(|c| c.hourly)
    }

    /// Returns the components charged to the given side.
    pub fn components_for(&self, side: CostSide) -> impl Iterator<Item = &CostComponent> {
        self.components.iter().filter(move |c| c.side == side)
    }

    /// Returns the component kinds in output order.
    pub fn keys(&self) -> Vec<ComponentKind> {
        self.components.iter().map(|c| c.kind).collect()
    }
}
