//! Calculation logic for the payroll engine.
//!
//! This module contains the calculation functions for determining pay:
//! compensation item classification, progressive income-tax apportionment
//! across statutory bands, pension and health-levy contributions, the
//! assembled per-employee calculation, and business-day counting for
//! leave valuation.

mod business_days;
mod compensation_items;
mod engine;
mod health_levy;
mod income_tax;
mod pension;

pub use business_days::{count_business_days, count_business_days_str, is_business_day};
pub use compensation_items::{ClassifiedItems, classify_items};
pub use engine::calculate;
pub use health_levy::health_contribution;
pub use income_tax::{TaxApportionment, apportion_tax};
pub use pension::pension_contribution;
