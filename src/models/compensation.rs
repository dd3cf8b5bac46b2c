//! Employee compensation models.
//!
//! This module defines the [`EmployeeCompensation`] calculation input and
//! its recurring [`CompensationItem`] entries. An item's calculation mode
//! is a tagged variant, so a percentage item cannot exist without its
//! percentage value, and taxability is a required field on the addition
//! variant only, since deductions never affect taxable income in this
//! model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a compensation item's currency amount is derived.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CalculationMode;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let basic = Decimal::from_str("10000").unwrap();
/// let fixed = CalculationMode::Fixed(Decimal::from_str("2000").unwrap());
/// let pct = CalculationMode::Percentage(Decimal::from_str("10").unwrap());
///
/// assert_eq!(fixed.realize(basic), Decimal::from_str("2000").unwrap());
/// assert_eq!(pct.realize(basic), Decimal::from_str("1000").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// An absolute currency amount.
    Fixed(Decimal),
    /// Percentage points of basic salary.
    Percentage(Decimal),
}

impl CalculationMode {
    /// Computes the realized currency amount against a basic salary.
    ///
    /// Fixed items return their value unchanged; percentage items return
    /// `basic_salary * value / 100`.
    pub fn realize(&self, basic_salary: Decimal) -> Decimal {
        match self {
            CalculationMode::Fixed(amount) => *amount,
            CalculationMode::Percentage(points) => basic_salary * *points / Decimal::ONE_HUNDRED,
        }
    }
}

/// Whether a compensation item adds to or deducts from pay.
///
/// Taxability lives on the addition variant only: deductions are taken
/// from net pay and never reduce taxable income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompensationKind {
    /// A recurring addition to pay (allowance, bonus, subsidy).
    Addition {
        /// How the addition amount is derived.
        mode: CalculationMode,
        /// Whether the addition counts toward taxable income.
        taxable: bool,
    },
    /// A recurring deduction from net pay (loan repayment, union dues).
    Deduction {
        /// How the deduction amount is derived.
        mode: CalculationMode,
    },
}

/// One recurring addition or deduction attached to an employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CalculationMode, CompensationItem};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let housing = CompensationItem::addition(
///     "Housing Allowance",
///     CalculationMode::Fixed(Decimal::from_str("2000").unwrap()),
///     true,
/// );
/// assert!(housing.is_addition());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationItem {
    /// Display name carried into the payslip breakdown.
    pub name: String,
    /// Addition or deduction, with its calculation mode.
    #[serde(flatten)]
    pub kind: CompensationKind,
}

impl CompensationItem {
    /// Creates a recurring addition.
    pub fn addition(name: impl Into<String>, mode: CalculationMode, taxable: bool) -> Self {
        Self {
            name: name.into(),
            kind: CompensationKind::Addition { mode, taxable },
        }
    }

    /// Creates a recurring deduction.
    pub fn deduction(name: impl Into<String>, mode: CalculationMode) -> Self {
        Self {
            name: name.into(),
            kind: CompensationKind::Deduction { mode },
        }
    }

    /// Returns true if this item is an addition.
    pub fn is_addition(&self) -> bool {
        matches!(self.kind, CompensationKind::Addition { .. })
    }
}

/// Calculation input for one employee.
///
/// Item order does not affect any total, only the display order of the
/// resulting breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCompensation {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// Monthly basic salary in currency units.
    pub basic_salary: Decimal,
    /// Recurring additions and deductions.
    #[serde(default)]
    pub items: Vec<CompensationItem>,
}
