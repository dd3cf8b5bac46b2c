//! The payroll calculation engine.
//!
//! This module assembles the full calculation: item classification,
//! taxable income, progressive tax apportionment, statutory
//! contributions, and the gross/net figures, returned as a single
//! [`PayrollResult`] with its itemized breakdown.

use rust_decimal::Decimal;

use crate::models::{
    EmployeeCompensation, PayrollBreakdown, PayrollResult, StatutoryParameters, StatutoryTotals,
};

use super::compensation_items::classify_items;
use super::health_levy::health_contribution;
use super::income_tax::apportion_tax;
use super::pension::pension_contribution;

/// Calculates one employee's payroll for one period.
///
/// Pure and deterministic: no I/O, no shared state, and no failure paths
/// for well-formed input. Malformed statutory parameters are a caller
/// concern: they must be rejected by the configuration loader before a
/// calculation is attempted.
///
/// The calculation proceeds as:
///
/// 1. realize and classify compensation items against the basic salary;
/// 2. taxable income = basic salary + taxable additions, floored at zero
///    (deductions never reduce taxable income, a documented policy of
///    this model, not an omission);
/// 3. apportion taxable income across the tax bands in `order` sequence;
/// 4. pension contribution on the ceiling-capped basic salary;
/// 5. health levy on the basic salary, capped as an absolute amount;
/// 6. gross pay = basic salary + all additions;
/// 7. net pay = gross pay − income tax − pension − health levy −
///    deductions.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate;
/// use payroll_engine::models::{
///     CalculationMode, CompensationItem, EmployeeCompensation, StatutoryParameters, TaxBand,
/// };
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let params = StatutoryParameters {
///     tax_bands: vec![
///         TaxBand {
///             order: 1,
///             chargeable_amount: Some(Decimal::from(4000)),
///             rate: Decimal::ZERO,
///         },
///         TaxBand {
///             order: 2,
///             chargeable_amount: Some(Decimal::from(4000)),
///             rate: Decimal::from_str("0.25").unwrap(),
///         },
///         TaxBand {
///             order: 3,
///             chargeable_amount: None,
///             rate: Decimal::from_str("0.375").unwrap(),
///         },
///     ],
///     pension_rate: Decimal::from_str("0.05").unwrap(),
///     pension_ceiling: Decimal::from(20_000),
///     health_rate: Decimal::from_str("0.01").unwrap(),
///     health_max_contribution: Decimal::from(1000),
/// };
///
/// let employee = EmployeeCompensation {
///     employee_id: "emp_001".to_string(),
///     basic_salary: Decimal::from(10_000),
///     items: vec![CompensationItem::addition(
///         "Housing Allowance",
///         CalculationMode::Fixed(Decimal::from(2000)),
///         true,
///     )],
/// };
///
/// let result = calculate(&employee, &params);
/// assert_eq!(result.taxable_income, Decimal::from(12_000));
/// assert_eq!(result.breakdown.statutory.income_tax, Decimal::from(2500));
/// ```
pub fn calculate(
    employee: &EmployeeCompensation,
    params: &StatutoryParameters,
) -> PayrollResult {
    let basic_salary = employee.basic_salary;

    let classified = classify_items(basic_salary, &employee.items);

    // Deductions are intentionally absent here.
    let taxable_income = (basic_salary + classified.taxable_additions).max(Decimal::ZERO);

    let apportionment = apportion_tax(taxable_income, &params.tax_bands);

    let pension = pension_contribution(basic_salary, params.pension_rate, params.pension_ceiling);
    let health = health_contribution(
        basic_salary,
        params.health_rate,
        params.health_max_contribution,
    );

    let gross_pay =
        basic_salary + classified.taxable_additions + classified.non_taxable_additions;
    let net_pay =
        gross_pay - apportionment.total_tax - pension - health - classified.total_deductions;

    PayrollResult {
        basic_salary,
        gross_pay,
        taxable_income,
        net_pay,
        breakdown: PayrollBreakdown {
            additions: classified.additions,
            deductions: classified.deductions,
            statutory: StatutoryTotals {
                income_tax: apportionment.total_tax,
                pension_contribution: pension,
                health_contribution: health,
            },
            tax_ledger: apportionment.lines,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalculationMode, CompensationItem, TaxBand};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn standard_parameters() -> StatutoryParameters {
        StatutoryParameters {
            tax_bands: vec![
                TaxBand {
                    order: 1,
                    chargeable_amount: Some(dec("4000")),
                    rate: dec("0"),
                },
                TaxBand {
                    order: 2,
                    chargeable_amount: Some(dec("4000")),
                    rate: dec("0.25"),
                },
                TaxBand {
                    order: 3,
                    chargeable_amount: None,
                    rate: dec("0.375"),
                },
            ],
            pension_rate: dec("0.05"),
            pension_ceiling: dec("20000"),
            health_rate: dec("0.01"),
            health_max_contribution: dec("1000"),
        }
    }

    fn employee(basic: &str, items: Vec<CompensationItem>) -> EmployeeCompensation {
        EmployeeCompensation {
            employee_id: "emp_001".to_string(),
            basic_salary: dec(basic),
            items,
        }
    }

    /// The full worked scenario: one taxable and one non-taxable
    /// addition, one deduction, three bands, both contributions live.
    #[test]
    fn test_full_scenario() {
        let employee = employee(
            "10000",
            vec![
                CompensationItem::addition(
                    "Housing Allowance",
                    CalculationMode::Fixed(dec("2000")),
                    true,
                ),
                CompensationItem::addition(
                    "Transport Subsidy",
                    CalculationMode::Fixed(dec("500")),
                    false,
                ),
                CompensationItem::deduction("Staff Loan", CalculationMode::Fixed(dec("300"))),
            ],
        );

        let result = calculate(&employee, &standard_parameters());

        assert_eq!(result.basic_salary, dec("10000"));
        assert_eq!(result.taxable_income, dec("12000"));
        assert_eq!(result.gross_pay, dec("12500"));

        let statutory = &result.breakdown.statutory;
        assert_eq!(statutory.income_tax, dec("2500"));
        assert_eq!(statutory.pension_contribution, dec("500"));
        assert_eq!(statutory.health_contribution, dec("100"));

        assert_eq!(result.net_pay, dec("9100"));

        assert_eq!(result.breakdown.tax_ledger[0].tax_due, dec("0"));
        assert_eq!(result.breakdown.tax_ledger[1].tax_due, dec("1000"));
        assert_eq!(result.breakdown.tax_ledger[2].tax_due, dec("1500"));
    }

    #[test]
    fn test_no_items_gross_equals_basic() {
        let result = calculate(&employee("10000", vec![]), &standard_parameters());

        assert_eq!(result.gross_pay, dec("10000"));
        assert_eq!(result.taxable_income, dec("10000"));
        assert!(result.breakdown.additions.is_empty());
        assert!(result.breakdown.deductions.is_empty());
    }

    #[test]
    fn test_non_taxable_addition_raises_gross_not_taxable_income() {
        let result = calculate(
            &employee(
                "10000",
                vec![CompensationItem::addition(
                    "Transport Subsidy",
                    CalculationMode::Fixed(dec("500")),
                    false,
                )],
            ),
            &standard_parameters(),
        );

        assert_eq!(result.gross_pay, dec("10500"));
        assert_eq!(result.taxable_income, dec("10000"));
    }

    #[test]
    fn test_deductions_do_not_reduce_taxable_income() {
        let with_deduction = calculate(
            &employee(
                "10000",
                vec![CompensationItem::deduction(
                    "Staff Loan",
                    CalculationMode::Fixed(dec("3000")),
                )],
            ),
            &standard_parameters(),
        );
        let without = calculate(&employee("10000", vec![]), &standard_parameters());

        assert_eq!(with_deduction.taxable_income, without.taxable_income);
        assert_eq!(
            with_deduction.breakdown.statutory.income_tax,
            without.breakdown.statutory.income_tax
        );
        assert_eq!(with_deduction.net_pay, without.net_pay - dec("3000"));
    }

    #[test]
    fn test_zero_basic_salary() {
        let result = calculate(&employee("0", vec![]), &standard_parameters());

        assert_eq!(result.gross_pay, Decimal::ZERO);
        assert_eq!(result.taxable_income, Decimal::ZERO);
        assert_eq!(result.breakdown.statutory.income_tax, Decimal::ZERO);
        assert_eq!(result.breakdown.statutory.pension_contribution, Decimal::ZERO);
        assert_eq!(result.breakdown.statutory.health_contribution, Decimal::ZERO);
        assert_eq!(result.net_pay, Decimal::ZERO);
    }

    #[test]
    fn test_negative_taxable_income_floored_before_apportionment() {
        // A negative basic salary (bad upstream data) floors the tax base
        // at zero; the pension contribution still flows through uncapped
        // to keep historical outputs reproducible.
        let result = calculate(&employee("-5000", vec![]), &standard_parameters());

        assert_eq!(result.taxable_income, Decimal::ZERO);
        assert_eq!(result.breakdown.statutory.income_tax, Decimal::ZERO);
        assert_eq!(result.breakdown.statutory.pension_contribution, dec("-250"));
    }

    #[test]
    fn test_both_contribution_caps_clamp_independently() {
        let result = calculate(&employee("500000", vec![]), &standard_parameters());

        let statutory = &result.breakdown.statutory;
        assert_eq!(statutory.pension_contribution, dec("1000")); // 20000 * 0.05
        assert_eq!(statutory.health_contribution, dec("1000")); // absolute cap
    }

    #[test]
    fn test_percentage_items_resolve_against_basic() {
        let result = calculate(
            &employee(
                "10000",
                vec![CompensationItem::addition(
                    "Housing Allowance",
                    CalculationMode::Percentage(dec("20")),
                    true,
                )],
            ),
            &standard_parameters(),
        );

        assert_eq!(result.taxable_income, dec("12000"));
        assert_eq!(result.breakdown.additions[0].amount, dec("2000"));
    }

    #[test]
    fn test_gross_net_identity() {
        let result = calculate(
            &employee(
                "17350",
                vec![
                    CompensationItem::addition(
                        "Housing Allowance",
                        CalculationMode::Percentage(dec("15")),
                        true,
                    ),
                    CompensationItem::addition(
                        "Meal Subsidy",
                        CalculationMode::Fixed(dec("420")),
                        false,
                    ),
                    CompensationItem::deduction(
                        "Welfare Fund",
                        CalculationMode::Percentage(dec("2")),
                    ),
                ],
            ),
            &standard_parameters(),
        );

        let statutory = &result.breakdown.statutory;
        assert_eq!(
            result.net_pay,
            result.gross_pay
                - statutory.income_tax
                - statutory.pension_contribution
                - statutory.health_contribution
                - result.total_deductions()
        );
    }

    #[test]
    fn test_ledger_total_matches_income_tax() {
        let result = calculate(&employee("23456.78", vec![]), &standard_parameters());
        assert_eq!(
            result.ledger_tax_total(),
            result.breakdown.statutory.income_tax
        );
    }

    #[test]
    fn test_result_is_deterministic() {
        let employee = employee(
            "10000",
            vec![CompensationItem::addition(
                "Housing Allowance",
                CalculationMode::Fixed(dec("2000")),
                true,
            )],
        );
        let params = standard_parameters();

        assert_eq!(calculate(&employee, &params), calculate(&employee, &params));
    }
}
