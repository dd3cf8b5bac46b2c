//! Pension contribution calculation.
//!
//! The pension contribution is based on basic salary only, never on
//! gross pay or taxable income, with the contribution base capped at the
//! statutory ceiling.

use rust_decimal::Decimal;

/// Calculates the pension contribution for a basic salary.
///
/// The contribution is `min(basic_salary, ceiling) * rate`. No zero-clamp
/// is applied to the salary before capping; a negative basic salary from
/// bad upstream data flows through unchanged so stored payroll history
/// stays reproducible.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::pension_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = Decimal::from_str("0.05").unwrap();
/// let ceiling = Decimal::from(20_000);
///
/// // Below the ceiling the full salary contributes.
/// assert_eq!(
///     pension_contribution(Decimal::from(10_000), rate, ceiling),
///     Decimal::from(500),
/// );
///
/// // Above the ceiling the base is capped.
/// assert_eq!(
///     pension_contribution(Decimal::from(50_000), rate, ceiling),
///     Decimal::from(1000),
/// );
/// ```
pub fn pension_contribution(basic_salary: Decimal, rate: Decimal, ceiling: Decimal) -> Decimal {
    basic_salary.min(ceiling) * rate
}
