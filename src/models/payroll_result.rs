//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its associated
//! structures that capture all outputs from a payroll calculation: the
//! headline figures, realized additions and deductions, statutory
//! contribution totals, and the itemized tax-band ledger consumed by
//! payslip rendering and statutory reports.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A realized recurring addition, with its currency amount resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealizedAddition {
    /// Display name of the addition.
    pub name: String,
    /// The resolved currency amount.
    pub amount: Decimal,
    /// Whether the addition counted toward taxable income.
    pub taxable: bool,
}

/// A realized recurring deduction, with its currency amount resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealizedDeduction {
    /// Display name of the deduction.
    pub name: String,
    /// The resolved currency amount.
    pub amount: Decimal,
}

/// Statutory contribution totals for one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryTotals {
    /// Total progressive income tax due.
    pub income_tax: Decimal,
    /// Pension contribution on the (ceiling-capped) basic salary.
    pub pension_contribution: Decimal,
    /// Health-levy contribution, capped at the statutory maximum.
    pub health_contribution: Decimal,
}

/// One row of the itemized tax-band ledger.
///
/// The ledger carries one row per band in evaluation order, including
/// zero-tax rows for bands above the employee's income, so a payslip can
/// show the full schedule. The description strings are cosmetic audit
/// trail and carry no computational weight.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxBandLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = TaxBandLine {
///     description: "Next 4000.01 to 8000".to_string(),
///     chargeable_amount: Decimal::from_str("4000").unwrap(),
///     rate: Decimal::from_str("0.25").unwrap(),
///     tax_due: Decimal::from_str("1000").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBandLine {
    /// Human-readable range label (e.g. "First 4000").
    pub description: String,
    /// The chargeable income consumed by this band.
    pub chargeable_amount: Decimal,
    /// The band's fractional tax rate.
    pub rate: Decimal,
    /// Tax due in this band.
    pub tax_due: Decimal,
}

/// The itemized breakdown of a payroll calculation.
///
/// This is load-bearing output, not optional telemetry: payslip rendering
/// and statutory report exports consume it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Realized additions, in input item order.
    pub additions: Vec<RealizedAddition>,
    /// Realized deductions, in input item order.
    pub deductions: Vec<RealizedDeduction>,
    /// Statutory contribution totals.
    pub statutory: StatutoryTotals,
    /// The per-band tax ledger, in band evaluation order.
    pub tax_ledger: Vec<TaxBandLine>,
}

/// The complete result of a payroll calculation for one employee and one
/// period.
///
/// Constructed fresh on every invocation and immutable once returned; any
/// input change requires a new calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollBreakdown, PayrollResult, StatutoryTotals};
/// use rust_decimal::Decimal;
///
/// let result = PayrollResult {
///     basic_salary: Decimal::from(10_000),
///     gross_pay: Decimal::from(10_000),
///     taxable_income: Decimal::from(10_000),
///     net_pay: Decimal::from(10_000),
///     breakdown: PayrollBreakdown {
///         additions: vec![],
///         deductions: vec![],
///         statutory: StatutoryTotals {
///             income_tax: Decimal::ZERO,
///             pension_contribution: Decimal::ZERO,
///             health_contribution: Decimal::ZERO,
///         },
///         tax_ledger: vec![],
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The basic salary the calculation started from.
    pub basic_salary: Decimal,
    /// Basic salary plus all additions, taxable or not.
    pub gross_pay: Decimal,
    /// Basic salary plus taxable additions, floored at zero.
    pub taxable_income: Decimal,
    /// Gross pay minus statutory contributions and deductions.
    pub net_pay: Decimal,
    /// The itemized breakdown backing this result.
    pub breakdown: PayrollBreakdown,
}

impl PayrollResult {
    /// Sum of all realized deduction amounts.
    pub fn total_deductions(&self) -> Decimal {
        self.breakdown.deductions.iter().map(|d| d.amount).sum()
    }

    /// Sum of the per-band tax ledger's `tax_due` column.
    ///
    /// Always equals `breakdown.statutory.income_tax` for results
    /// produced by the engine.
    pub fn ledger_tax_total(&self) -> Decimal {
        self.breakdown.tax_ledger.iter().map(|l| l.tax_due).sum()
    }
}
