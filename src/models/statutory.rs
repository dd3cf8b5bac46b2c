//! Statutory parameter models.
//!
//! This module defines the [`TaxBand`] and [`StatutoryParameters`] types
//! that describe a jurisdiction's progressive income-tax schedule and
//! contribution rules. These are supplied once per calculation and are
//! validated at configuration-load time, not inside the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of a progressive income-tax schedule.
///
/// Bands are consumed strictly in `order` sequence during tax
/// apportionment; the schedule is never re-sorted by amount. Exactly one
/// band carries no `chargeable_amount` (the unbounded top band) and it
/// must have the highest `order`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxBand;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let band = TaxBand {
///     order: 2,
///     chargeable_amount: Some(Decimal::from_str("4000").unwrap()),
///     rate: Decimal::from_str("0.25").unwrap(),
/// };
/// assert!(!band.is_unbounded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    /// 1-based position in the evaluation sequence.
    pub order: u32,
    /// Width of this band in currency units. `None` marks the unbounded
    /// top band.
    #[serde(default)]
    pub chargeable_amount: Option<Decimal>,
    /// Fractional tax rate applied to income falling inside this band
    /// (0 ≤ rate ≤ 1).
    pub rate: Decimal,
}

impl TaxBand {
    /// Returns true if this is the unbounded top band.
    pub fn is_unbounded(&self) -> bool {
        self.chargeable_amount.is_none()
    }
}

/// Jurisdiction-wide statutory constants, provided once per calculation.
///
/// Holds the progressive tax schedule together with the pension and
/// health-scheme contribution rules. Both contribution bases are the
/// basic salary, never gross pay or taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryParameters {
    /// The progressive tax band schedule.
    pub tax_bands: Vec<TaxBand>,
    /// Fractional pension contribution rate applied to basic salary.
    pub pension_rate: Decimal,
    /// Maximum basic-salary base subject to pension contribution.
    pub pension_ceiling: Decimal,
    /// Fractional health-levy rate applied to basic salary.
    pub health_rate: Decimal,
    /// Maximum absolute health-levy contribution, regardless of salary.
    pub health_max_contribution: Decimal,
}

impl StatutoryParameters {
    /// Returns the tax bands sorted by ascending `order`.
    ///
    /// The sort key is the `order` field only. A schedule whose
    /// unbounded band carries a non-final `order` is walked at that
    /// position, reproducing the stored configuration as-is.
    pub fn bands_in_order(&self) -> Vec<&TaxBand> {
        let mut bands: Vec<&TaxBand> = self.tax_bands.iter().collect();
        bands.sort_by_key(|b| b.order);
        bands
    }
}
