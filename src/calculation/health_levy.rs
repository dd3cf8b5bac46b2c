//! Health-levy contribution calculation.
//!
//! The health levy is based on basic salary only and is capped as an
//! absolute currency amount rather than by capping the salary base. It is
//! not tax-deductible and never affects taxable income.

use rust_decimal::Decimal;

/// Calculates the health-levy contribution for a basic salary.
///
/// The contribution is `min(basic_salary * rate, max_contribution)`:
/// the cap applies to the computed contribution, unlike the pension
/// ceiling which caps the salary base.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::health_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = Decimal::from_str("0.01").unwrap();
/// let cap = Decimal::from(1000);
///
/// assert_eq!(
///     health_contribution(Decimal::from(10_000), rate, cap),
///     Decimal::from(100),
/// );
/// assert_eq!(
///     health_contribution(Decimal::from(500_000), rate, cap),
///     Decimal::from(1000),
/// );
/// ```
pub fn health_contribution(
    basic_salary: Decimal,
    rate: Decimal,
    max_contribution: Decimal,
) -> Decimal {
    (basic_salary * rate).min(max_contribution)
}
