//! Property-based tests for cost engine invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use labour_cost_engine::calculation::{
    CostEngine, annual_hours, compute_blended_hourly_rate, raw_annual_contributions,
};
use labour_cost_engine::models::{
    CompensationInput, ComponentKind, ContributionRates, CostBreakdown, CostSide, CostVariant,
};

fn variant_strategy() -> impl Strategy<Value = CostVariant> {
    prop_oneof![
        Just(CostVariant::Minimal),
        Just(CostVariant::Split),
        Just(CostVariant::Capped),
        Just(CostVariant::Extended),
    ]
}

/// Amounts in whole cents.
fn money(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_cents).prop_map(|cents| Decimal::new(cents, 2))
}

/// Hours in tenths.
fn hours(max_tenths: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_tenths).prop_map(|tenths| Decimal::new(tenths, 1))
}

prop_compose! {
    fn input_strategy()(
        base_wage in money(20_000),
        weekly_hours in hours(800),
        overtime_hours in hours(300),
        health_benefits in money(500),
        cell_phone in proptest::option::of(money(20_000)),
        fuel in proptest::option::of(money(20_000)),
        flags in any::<(bool, bool, bool, bool)>(),
    ) -> CompensationInput {
        let mut input = CompensationInput::new("prop", base_wage, weekly_hours);
        input.overtime_hours = overtime_hours;
        input.health_benefits = health_benefits;
        input.cell_phone_monthly = cell_phone;
        input.fuel_weekly = fuel;
        input.flags.apply_caps = flags.0;
        input.flags.apply_overtime_premium = flags.1;
        input.flags.include_vacation = flags.2;
        input.flags.wsib_applies_to_overtime = flags.3;
        input
    }
}

fn calculate(input: &CompensationInput, variant: CostVariant) -> CostBreakdown {
    CostEngine::new(ContributionRates::default())
        .with_variant(variant)
        .calculate(input)
}

fn side_sum(breakdown: &CostBreakdown, side: CostSide) -> Decimal {
    breakdown
        .components
        .iter()
        .filter(|c| c.side == side)
        .fold(Decimal::ZERO, |acc, c| acc + c.hourly)
}

const STATUTORY: [ComponentKind; 4] = [
    ComponentKind::CppEmployer,
    ComponentKind::CppEmployee,
    ComponentKind::EiEmployer,
    ComponentKind::EiEmployee,
];

proptest! {
    #[test]
    fn prop_zero_hours_returns_base_wage(
        base_wage in money(20_000),
        variant in variant_strategy(),
    ) {
        let input = CompensationInput::new("prop", base_wage, Decimal::ZERO);
        let breakdown = calculate(&input, variant);

        prop_assert_eq!(breakdown.blended_rate, base_wage);
        prop_assert!(breakdown.warnings.is_empty());
        for kind in STATUTORY.iter().chain(&[ComponentKind::Cpp, ComponentKind::Ei]) {
            if let Some(hourly) = breakdown.component(*kind) {
                prop_assert_eq!(hourly, Decimal::ZERO);
            }
        }
    }

    #[test]
    fn prop_totals_are_side_sums(input in input_strategy(), variant in variant_strategy()) {
        let breakdown = calculate(&input, variant);

        prop_assert_eq!(breakdown.employer_hourly_total, side_sum(&breakdown, CostSide::Employer));
        prop_assert_eq!(breakdown.employee_hourly_total, side_sum(&breakdown, CostSide::Employee));
    }

    #[test]
    fn prop_annual_totals_scale_hourly(input in input_strategy(), variant in variant_strategy()) {
        let breakdown = calculate(&input, variant);

        prop_assert_eq!(
            breakdown.annual_employer_total,
            breakdown.employer_hourly_total * breakdown.annual_hours
        );
        prop_assert_eq!(
            breakdown.annual_employee_total,
            breakdown.employee_hourly_total * breakdown.annual_hours
        );
    }

    #[test]
    fn prop_calculation_is_idempotent(input in input_strategy(), variant in variant_strategy()) {
        prop_assert_eq!(calculate(&input, variant), calculate(&input, variant));
    }

    #[test]
    fn prop_components_are_non_negative(input in input_strategy(), variant in variant_strategy()) {
        let breakdown = calculate(&input, variant);

        for component in &breakdown.components {
            prop_assert!(component.hourly >= Decimal::ZERO, "{} is negative", component.label);
        }
    }

    #[test]
    fn prop_caps_never_increase_contributions(input in input_strategy()) {
        let mut capped_input = input.clone();
        capped_input.flags.apply_caps = true;
        let mut uncapped_input = input;
        uncapped_input.flags.apply_caps = false;

        let capped = calculate(&capped_input, CostVariant::Capped);
        let uncapped = calculate(&uncapped_input, CostVariant::Capped);

        for kind in STATUTORY {
            prop_assert!(capped.component(kind) <= uncapped.component(kind));
        }
        prop_assert!(uncapped.warnings.is_empty());
    }

    #[test]
    fn prop_capped_contributions_stay_within_maximums(input in input_strategy()) {
        let mut input = input;
        input.flags.apply_caps = true;
        let rates = ContributionRates::default();
        let breakdown = calculate(&input, CostVariant::Extended);

        prop_assume!(breakdown.annual_hours > Decimal::ZERO);
        let limit = |cap: Decimal| cap / breakdown.annual_hours;

        let bounds = [
            (ComponentKind::CppEmployer, rates.cpp_max_annual),
            (ComponentKind::CppEmployee, rates.cpp_max_annual),
            (ComponentKind::EiEmployer, rates.ei_max_employer_annual),
            (ComponentKind::EiEmployee, rates.ei_max_employee_annual),
        ];
        for (kind, cap) in bounds {
            let hourly = breakdown.component(kind).unwrap_or_default();
            prop_assert!(hourly <= limit(cap), "{} above its maximum", kind);
        }
        prop_assert!(breakdown.warnings.len() <= 4);
    }

    #[test]
    fn prop_premium_never_lowers_blended_rate(input in input_strategy()) {
        let mut with_premium = input.clone();
        with_premium.flags.apply_overtime_premium = true;
        let mut without_premium = input;
        without_premium.flags.apply_overtime_premium = false;

        let high = calculate(&with_premium, CostVariant::Extended);
        let low = calculate(&without_premium, CostVariant::Extended);

        prop_assert!(high.blended_rate >= low.blended_rate);
        prop_assert_eq!(low.blended_rate, without_premium.base_wage);
    }

    #[test]
    fn prop_raw_contributions_grow_with_weekly_hours(
        input in input_strategy(),
        extra in hours(200),
    ) {
        let rates = ContributionRates::default();
        let raw_for = |input: &CompensationInput| {
            let earnings = compute_blended_hourly_rate(input) * annual_hours(input.total_hours());
            raw_annual_contributions(earnings, &rates)
        };

        let mut longer = input.clone();
        longer.weekly_hours += extra;

        let before = raw_for(&input);
        let after = raw_for(&longer);
        prop_assert!(after.cpp_employer >= before.cpp_employer);
        prop_assert!(after.cpp_employee >= before.cpp_employee);
        prop_assert!(after.ei_employer >= before.ei_employer);
        prop_assert!(after.ei_employee >= before.ei_employee);
    }
}
