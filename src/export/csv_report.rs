//! CSV cost report.
//!
//! ## Layout
//!
//! The report is a two-column table. Values are dollars rounded half-up to
//! cents.
//!
//! ```csv
//! Cost Component,$/hr
//! Base Wage,20.00
//! Vacation Pay,0.80
//! ...
//! Employer Total ($/hr),22.71
//! Employee Total ($/hr),1.52
//! Annual Employer Total ($),47235.14
//! Annual Employee Total ($),3157.44
//! ```
//!
//! Each cap warning adds a `Warning,<message>` row. When assumptions are
//! requested a second table follows:
//!
//! ```csv
//! Assumption,Value
//! Apply Caps,Yes
//! ...
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{ContributionRates, CostBreakdown, CostFlags, CostVariant};

/// The settings a breakdown was calculated with, listed under the
/// component table when requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportAssumptions {
    /// The flags in effect for the calculation.
    pub flags: CostFlags,
    /// The rate set used.
    pub rates: ContributionRates,
}

impl ReportAssumptions {
    /// Records the flags actually applied under `variant`.
    pub fn new(variant: CostVariant, requested: CostFlags, rates: ContributionRates) -> Self {
        Self {
            flags: variant.effective_flags(requested),
            rates,
        }
    }
}

/// Formats a dollar amount rounded half-up to two decimal places.
///
/// ```
/// use labour_cost_engine::export::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(20, 0)), "20.00");
/// assert_eq!(format_money(Decimal::new(4592, 4)), "0.46");
/// assert_eq!(format_money(Decimal::new(2285, 3)), "2.29");
/// ```
pub fn format_money(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Returns the conventional download file name for an employee's report.
///
/// Characters other than ASCII letters, digits, `-`, `_`, `.` and space are
/// replaced with `_`, so the name is always a valid quoted
/// `Content-Disposition` filename.
///
/// ```
/// use labour_cost_engine::export::report_file_name;
///
/// assert_eq!(report_file_name("Alice Smith"), "Alice Smith_hourly_cost.csv");
/// assert_eq!(report_file_name("a\"b\nc"), "a_b_c_hourly_cost.csv");
/// ```
pub fn report_file_name(employee_name: &str) -> String {
    let safe: String = employee_name
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | ' ' => c,
            _ => '_',
        })
        .collect();
    format!("{}_hourly_cost.csv", safe)
}

/// Renders a breakdown as CSV text.
///
/// # Errors
///
/// Returns [`EngineError::Export`] if the CSV writer fails.
pub fn write_breakdown_csv(
    breakdown: &CostBreakdown,
    assumptions: Option<&ReportAssumptions>,
) -> EngineResult<String> {
    let export_error = |e: csv::Error| EngineError::Export {
        message: e.to_string(),
    };

    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    writer
        .write_record(["Cost Component", "$/hr"])
        .map_err(export_error)?;
    for component in &breakdown.components {
        let hourly = format_money(component.hourly);
        writer
            .write_record([component.label.as_str(), hourly.as_str()])
            .map_err(export_error)?;
    }

    let summary = [
        ("Employer Total ($/hr)", breakdown.employer_hourly_total),
        ("Employee Total ($/hr)", breakdown.employee_hourly_total),
        ("Annual Employer Total ($)", breakdown.annual_employer_total),
        ("Annual Employee Total ($)", breakdown.annual_employee_total),
    ];
    for (label, value) in summary {
        let amount = format_money(value);
        writer
            .write_record([label, amount.as_str()])
            .map_err(export_error)?;
    }

    for warning in &breakdown.warnings {
        writer
            .write_record(["Warning", warning.message.as_str()])
            .map_err(export_error)?;
    }

    if let Some(assumptions) = assumptions {
        let flags = &assumptions.flags;
        let rates = &assumptions.rates;
        let rows = [
            ("Apply Caps", yes_no(flags.apply_caps).to_string()),
            (
                "Apply Overtime Premium",
                yes_no(flags.apply_overtime_premium).to_string(),
            ),
            ("Include Vacation", yes_no(flags.include_vacation).to_string()),
            (
                "WSIB Applies To Overtime",
                yes_no(flags.wsib_applies_to_overtime).to_string(),
            ),
            ("Rate Year", rates.year.to_string()),
            ("CPP Employer Rate (%)", rates.cpp_employer_pct.to_string()),
            ("CPP Employee Rate (%)", rates.cpp_employee_pct.to_string()),
            ("EI Employer Rate (%)", rates.ei_employer_pct.to_string()),
            ("EI Employee Rate (%)", rates.ei_employee_pct.to_string()),
            ("CPP Annual Maximum ($)", format_money(rates.cpp_max_annual)),
            (
                "EI Employer Annual Maximum ($)",
                format_money(rates.ei_max_employer_annual),
            ),
            (
                "EI Employee Annual Maximum ($)",
                format_money(rates.ei_max_employee_annual),
            ),
        ];

        writer
            .write_record(["Assumption", "Value"])
            .map_err(export_error)?;
        for (label, value) in rows {
            writer
                .write_record([label, value.as_str()])
                .map_err(export_error)?;
        }
    }

    let bytes = writer.into_inner().map_err(|e| EngineError::Export {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| EngineError::Export {
        message: e.to_string(),
    })
}
