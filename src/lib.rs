//! Payroll Calculation Engine
//!
//! This crate provides functionality for calculating employee payroll
//! against a jurisdiction's statutory parameters: progressive income-tax
//! apportionment across ordered bands, pension and health-levy
//! contributions, gross/net assembly with an itemized payslip breakdown,
//! and business-day counting for leave valuation.

#![warn(missing_docs)]

pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
