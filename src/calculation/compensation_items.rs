//! Compensation item classification.
//!
//! This module resolves an employee's recurring compensation items into
//! realized currency amounts and routes them into addition and deduction
//! lists, accumulating the totals the rest of the engine works from.

use rust_decimal::Decimal;

use crate::models::{CompensationItem, CompensationKind, RealizedAddition, RealizedDeduction};

/// The result of classifying compensation items.
///
/// Realized entries keep the input item order so the payslip breakdown
/// displays items as they were configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedItems {
    /// Realized additions, in input order.
    pub additions: Vec<RealizedAddition>,
    /// Realized deductions, in input order.
    pub deductions: Vec<RealizedDeduction>,
    /// Sum of addition amounts with `taxable = true`.
    pub taxable_additions: Decimal,
    /// Sum of addition amounts with `taxable = false`.
    pub non_taxable_additions: Decimal,
    /// Sum of all deduction amounts.
    pub total_deductions: Decimal,
}

/// Classifies compensation items against a basic salary.
///
/// Each item's currency amount is realized through its calculation mode
/// (fixed amounts pass through, percentages resolve against the basic
/// salary) and routed by kind. Taxable and non-taxable addition totals
/// accumulate separately; deductions accumulate into a single total and
/// never touch taxable income.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::classify_items;
/// use payroll_engine::models::{CalculationMode, CompensationItem};
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     CompensationItem::addition(
///         "Housing Allowance",
///         CalculationMode::Fixed(Decimal::from(2000)),
///         true,
///     ),
///     CompensationItem::deduction(
///         "Staff Loan",
///         CalculationMode::Fixed(Decimal::from(300)),
///     ),
/// ];
///
/// let classified = classify_items(Decimal::from(10_000), &items);
/// assert_eq!(classified.taxable_additions, Decimal::from(2000));
/// assert_eq!(classified.total_deductions, Decimal::from(300));
/// ```
pub fn classify_items(basic_salary: Decimal, items: &[CompensationItem]) -> ClassifiedItems {
    let mut additions = Vec::new();
    let mut deductions = Vec::new();
    let mut taxable_additions = Decimal::ZERO;
    let mut non_taxable_additions = Decimal::ZERO;
    let mut total_deductions = Decimal::ZERO;

    for item in items {
        match &item.kind {
            CompensationKind::Addition { mode, taxable } => {
                let amount = mode.realize(basic_salary);
                if *taxable {
                    taxable_additions += amount;
                } else {
                    non_taxable_additions += amount;
                }
                additions.push(RealizedAddition {
                    name: item.name.clone(),
                    amount,
                    taxable: *taxable,
                });
            }
            CompensationKind::Deduction { mode } => {
                let amount = mode.realize(basic_salary);
                total_deductions += amount;
                deductions.push(RealizedDeduction {
                    name: item.name.clone(),
                    amount,
                });
            }
        }
    }

    ClassifiedItems {
        additions,
        deductions,
        taxable_additions,
        non_taxable_additions,
        total_deductions,
    }
}
