//! Parallel batch calculation.
//!
//! A payroll run is an embarrassingly parallel batch: each employee's
//! calculation is pure and independent, so a run maps the collection
//! through the engine on the `rayon` thread pool purely as a throughput
//! optimization. Correctness does not depend on ordering or on any
//! synchronization primitive.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calculation::calculate;
use crate::models::{EmployeeCompensation, PayrollResult, StatutoryParameters};

/// One employee's calculation outcome within a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayrollResult {
    /// The employee the result was computed for.
    pub employee_id: String,
    /// The calculation result.
    pub result: PayrollResult,
}

/// Calculates payroll for a collection of employees in parallel.
///
/// Results are returned in input order regardless of which worker thread
/// computed them. Each element pairs the employee identifier with its
/// [`PayrollResult`]; identity otherwise stays outside the result, which
/// is keyed by its position in the batch.
///
/// # Example
///
/// ```
/// use payroll_engine::batch::run_payroll;
/// use payroll_engine::models::{EmployeeCompensation, StatutoryParameters, TaxBand};
/// use rust_decimal::Decimal;
///
/// let params = StatutoryParameters {
///     tax_bands: vec![TaxBand {
///         order: 1,
///         chargeable_amount: None,
///         rate: Decimal::ZERO,
///     }],
///     pension_rate: Decimal::ZERO,
///     pension_ceiling: Decimal::ZERO,
///     health_rate: Decimal::ZERO,
///     health_max_contribution: Decimal::ZERO,
/// };
///
/// let employees = vec![EmployeeCompensation {
///     employee_id: "emp_001".to_string(),
///     basic_salary: Decimal::from(10_000),
///     items: vec![],
/// }];
///
/// let results = run_payroll(&employees, &params);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].employee_id, "emp_001");
/// ```
pub fn run_payroll(
    employees: &[EmployeeCompensation],
    params: &StatutoryParameters,
) -> Vec<EmployeePayrollResult> {
    let run_id = Uuid::new_v4();
    info!(run_id = %run_id, employees = employees.len(), "starting payroll run");

    let results: Vec<EmployeePayrollResult> = employees
        .par_iter()
        .map(|employee| EmployeePayrollResult {
            employee_id: employee.employee_id.clone(),
            result: calculate(employee, params),
        })
        .collect();

    info!(run_id = %run_id, results = results.len(), "payroll run complete");
    results
}
