//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation;
mod holiday;
mod payroll_result;
mod statutory;

pub use compensation::{
    CalculationMode, CompensationItem, CompensationKind, EmployeeCompensation,
};
pub use holiday::{Holiday, HolidayCalendar};
pub use payroll_result::{
    PayrollBreakdown, PayrollResult, RealizedAddition, RealizedDeduction, StatutoryTotals,
    TaxBandLine,
};
pub use statutory::{StatutoryParameters, TaxBand};
