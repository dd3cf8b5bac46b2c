//! Configuration file types.
//!
//! This module contains the strongly-typed structures that are
//! deserialized from the YAML configuration files of a jurisdiction
//! directory. They mirror the file layout; validated domain values are
//! assembled by the loader.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Holiday, TaxBand};

/// Metadata about the jurisdiction a configuration describes.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// A short identifying code (e.g., "default").
    pub code: String,
    /// The human-readable jurisdiction name.
    pub name: String,
    /// The version or effective date of these parameters.
    pub version: String,
}

/// The pension section of `statutory.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PensionSection {
    /// Fractional contribution rate applied to basic salary.
    pub rate: Decimal,
    /// Maximum basic-salary base subject to contribution.
    pub ceiling: Decimal,
}

/// The health-levy section of `statutory.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthLevySection {
    /// Fractional levy rate applied to basic salary.
    pub rate: Decimal,
    /// Maximum absolute contribution, regardless of salary.
    pub max_contribution: Decimal,
}

/// The `statutory.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryFile {
    /// Jurisdiction metadata.
    pub jurisdiction: JurisdictionMetadata,
    /// The progressive tax band schedule.
    pub tax_bands: Vec<TaxBand>,
    /// Pension contribution rules.
    pub pension: PensionSection,
    /// Health-levy contribution rules.
    pub health_levy: HealthLevySection,
}

/// The `holidays.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// The jurisdiction's public holidays.
    pub holidays: Vec<Holiday>,
}
