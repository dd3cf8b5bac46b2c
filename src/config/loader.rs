//! Configuration loading and validation.
//!
//! This module provides the [`ConfigLoader`] type for loading a
//! jurisdiction's statutory parameters and holiday calendar from YAML
//! files. All structural validation of the tax band schedule happens
//! here, before a [`StatutoryParameters`] value can reach the engine;
//! the calculation itself performs no defensive checks.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, StatutoryParameters, TaxBand};

use super::types::{HolidaysFile, JurisdictionMetadata, StatutoryFile};

/// Loads and provides access to a jurisdiction's configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── statutory.yaml   # Tax bands, pension and health-levy rules
/// └── holidays.yaml    # Public-holiday calendar
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Jurisdiction: {}", loader.jurisdiction().name);
/// println!("Bands: {}", loader.parameters().tax_bands.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: JurisdictionMetadata,
    parameters: StatutoryParameters,
    calendar: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The tax band schedule violates a structural invariant
    /// - A statutory rate or cap is outside its permitted range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statutory_path = path.join("statutory.yaml");
        let statutory = Self::load_yaml::<StatutoryFile>(&statutory_path)?;

        let holidays_path = path.join("holidays.yaml");
        let holidays = Self::load_yaml::<HolidaysFile>(&holidays_path)?;

        validate_tax_bands(&statutory.tax_bands)?;
        validate_fraction("pension.rate", statutory.pension.rate)?;
        validate_non_negative("pension.ceiling", statutory.pension.ceiling)?;
        validate_fraction("health_levy.rate", statutory.health_levy.rate)?;
        validate_non_negative(
            "health_levy.max_contribution",
            statutory.health_levy.max_contribution,
        )?;

        info!(
            jurisdiction = %statutory.jurisdiction.code,
            version = %statutory.jurisdiction.version,
            bands = statutory.tax_bands.len(),
            holidays = holidays.holidays.len(),
            "loaded statutory configuration"
        );

        Ok(Self {
            metadata: statutory.jurisdiction,
            parameters: StatutoryParameters {
                tax_bands: statutory.tax_bands,
                pension_rate: statutory.pension.rate,
                pension_ceiling: statutory.pension.ceiling,
                health_rate: statutory.health_levy.rate,
                health_max_contribution: statutory.health_levy.max_contribution,
            },
            calendar: HolidayCalendar {
                holidays: holidays.holidays,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the validated statutory parameters.
    pub fn parameters(&self) -> &StatutoryParameters {
        &self.parameters
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}

/// Validates the structural invariants of a tax band schedule.
///
/// A valid schedule is non-empty, its `order` values run contiguously
/// from 1 with no duplicates, every rate lies in `[0, 1]`, every finite
/// width is strictly positive, and exactly one band is unbounded, the
/// one with the highest `order`. Nothing is silently repaired; the
/// schedule is rejected as stored.
///
/// Exposed so callers sourcing bands from elsewhere (e.g., a database)
/// can apply the same gate before invoking the engine.
pub fn validate_tax_bands(bands: &[TaxBand]) -> EngineResult<()> {
    if bands.is_empty() {
        return Err(EngineError::InvalidTaxBands {
            message: "schedule is empty".to_string(),
        });
    }

    let mut orders: Vec<u32> = bands.iter().map(|b| b.order).collect();
    orders.sort_unstable();
    for (index, order) in orders.iter().enumerate() {
        let expected = (index + 1) as u32;
        if *order != expected {
            return Err(EngineError::InvalidTaxBands {
                message: format!(
                    "orders must run contiguously from 1; expected {expected}, found {order}"
                ),
            });
        }
    }

    for band in bands {
        if band.rate < Decimal::ZERO || band.rate > Decimal::ONE {
            return Err(EngineError::InvalidTaxBands {
                message: format!("band {}: rate must be between 0 and 1", band.order),
            });
        }
        if let Some(width) = band.chargeable_amount {
            if width <= Decimal::ZERO {
                return Err(EngineError::InvalidTaxBands {
                    message: format!(
                        "band {}: chargeable amount must be positive",
                        band.order
                    ),
                });
            }
        }
    }

    let unbounded: Vec<&TaxBand> = bands.iter().filter(|b| b.is_unbounded()).collect();
    match unbounded.as_slice() {
        [] => Err(EngineError::InvalidTaxBands {
            message: "no unbounded top band".to_string(),
        }),
        [band] => {
            let highest = bands.iter().map(|b| b.order).max().unwrap_or(0);
            if band.order != highest {
                return Err(EngineError::InvalidTaxBands {
                    message: format!(
                        "unbounded band must carry the highest order; found order {}",
                        band.order
                    ),
                });
            }
            Ok(())
        }
        _ => Err(EngineError::InvalidTaxBands {
            message: "more than one unbounded band".to_string(),
        }),
    }
}

fn validate_fraction(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(EngineError::InvalidStatutoryValue {
            field: field.to_string(),
            message: "must be between 0 and 1".to_string(),
        });
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidStatutoryValue {
            field: field.to_string(),
            message: "must not be negative".to_string(),
        });
    }
    Ok(())
}
