//! Progressive income-tax apportionment.
//!
//! This module walks a jurisdiction's tax band schedule strictly in
//! ascending `order`, attributing every currency unit of taxable income
//! to exactly one band and producing the itemized per-band ledger that
//! backs payslips and statutory returns.

use rust_decimal::Decimal;

use crate::models::{TaxBand, TaxBandLine};

/// One currency minor unit, used when labeling the lower edge of a band
/// range (the band after "First 4000" starts at 4000.01).
fn minor_unit() -> Decimal {
    Decimal::new(1, 2)
}

/// The result of apportioning taxable income across a band schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxApportionment {
    /// One ledger row per band, in evaluation order.
    pub lines: Vec<TaxBandLine>,
    /// Total tax due across all bands.
    pub total_tax: Decimal,
}

/// Apportions taxable income across a progressive band schedule.
///
/// Bands are walked strictly in ascending `order`, never re-sorted by
/// amount. Each band consumes `min(income remaining, band width)`, or all
/// remaining income for the unbounded band, and accrues tax at the band's
/// flat rate. Bands above the exhausted income still produce a zero-tax
/// ledger row so the output reports the full schedule, and the cumulative
/// lower bound keeps advancing by each finite band's width so range
/// labels stay correct.
///
/// Income at or below zero produces a ledger of all-zero rows and zero
/// total tax.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::apportion_tax;
/// use payroll_engine::models::TaxBand;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let bands = vec![
///     TaxBand {
///         order: 1,
///         chargeable_amount: Some(Decimal::from(4000)),
///         rate: Decimal::ZERO,
///     },
///     TaxBand {
///         order: 2,
///         chargeable_amount: Some(Decimal::from(4000)),
///         rate: Decimal::from_str("0.25").unwrap(),
///     },
///     TaxBand {
///         order: 3,
///         chargeable_amount: None,
///         rate: Decimal::from_str("0.375").unwrap(),
///     },
/// ];
///
/// let apportionment = apportion_tax(Decimal::from(12_000), &bands);
/// assert_eq!(apportionment.total_tax, Decimal::from(2500));
/// assert_eq!(apportionment.lines[0].description, "First 4000");
/// assert_eq!(apportionment.lines[1].description, "Next 4000.01 to 8000");
/// assert_eq!(apportionment.lines[2].description, "8000.01 and above");
/// ```
pub fn apportion_tax(taxable_income: Decimal, bands: &[TaxBand]) -> TaxApportionment {
    let mut ordered: Vec<&TaxBand> = bands.iter().collect();
    ordered.sort_by_key(|b| b.order);

    let mut lines = Vec::with_capacity(ordered.len());
    let mut income_remaining = taxable_income;
    let mut lower_bound = Decimal::ZERO;
    let mut total_tax = Decimal::ZERO;

    for (index, band) in ordered.into_iter().enumerate() {
        let description = band_description(band, lower_bound, index == 0);

        let amount_in_band = if income_remaining <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            match band.chargeable_amount {
                Some(width) => income_remaining.min(width),
                None => income_remaining,
            }
        };

        let tax_due = amount_in_band * band.rate;
        total_tax += tax_due;
        income_remaining -= amount_in_band;

        lines.push(TaxBandLine {
            description,
            chargeable_amount: amount_in_band,
            rate: band.rate,
            tax_due,
        });

        if let Some(width) = band.chargeable_amount {
            lower_bound += width;
        }
    }

    TaxApportionment { lines, total_tax }
}

/// Builds the range label for a band given the cumulative lower bound of
/// the schedule walked so far.
fn band_description(band: &TaxBand, lower_bound: Decimal, is_first: bool) -> String {
    match band.chargeable_amount {
        Some(width) if is_first => format!("First {}", width.normalize()),
        Some(width) => format!(
            "Next {} to {}",
            (lower_bound + minor_unit()).normalize(),
            (lower_bound + width).normalize()
        ),
        None => format!("{} and above", (lower_bound + minor_unit()).normalize()),
    }
}
