//! Configuration loading for the payroll engine.
//!
//! This module provides functionality for loading and validating a
//! jurisdiction's statutory parameters and holiday calendar from YAML
//! configuration files.

mod loader;
mod types;

pub use loader::{ConfigLoader, validate_tax_bands};
pub use types::{
    HealthLevySection, HolidaysFile, JurisdictionMetadata, PensionSection, StatutoryFile,
};
