//! Performance benchmarks for the payroll calculation engine.
//!
//! This benchmark suite tracks the cost of a single calculation and of
//! parallel batch runs at payroll-run scale.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use payroll_engine::batch::run_payroll;
use payroll_engine::calculation::calculate;
use payroll_engine::models::{
    CalculationMode, CompensationItem, EmployeeCompensation, StatutoryParameters, TaxBand,
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn standard_parameters() -> StatutoryParameters {
    StatutoryParameters {
        tax_bands: vec![
            TaxBand {
                order: 1,
                chargeable_amount: Some(dec("4000")),
                rate: dec("0"),
            },
            TaxBand {
                order: 2,
                chargeable_amount: Some(dec("4000")),
                rate: dec("0.25"),
            },
            TaxBand {
                order: 3,
                chargeable_amount: None,
                rate: dec("0.375"),
            },
        ],
        pension_rate: dec("0.05"),
        pension_ceiling: dec("20000"),
        health_rate: dec("0.01"),
        health_max_contribution: dec("1000"),
    }
}

/// Creates an employee with a representative mix of items.
fn sample_employee(index: usize) -> EmployeeCompensation {
    EmployeeCompensation {
        employee_id: format!("emp_{index:05}"),
        basic_salary: Decimal::from(5_000 + (index % 50) * 500),
        items: vec![
            CompensationItem::addition(
                "Housing Allowance",
                CalculationMode::Percentage(dec("15")),
                true,
            ),
            CompensationItem::addition(
                "Transport Subsidy",
                CalculationMode::Fixed(dec("500")),
                false,
            ),
            CompensationItem::deduction("Staff Loan", CalculationMode::Fixed(dec("300"))),
        ],
    }
}

/// Benchmark: a single employee calculation.
fn bench_single_calculation(c: &mut Criterion) {
    let params = standard_parameters();
    let employee = sample_employee(0);

    c.bench_function("single_calculation", |b| {
        b.iter(|| black_box(calculate(black_box(&employee), black_box(&params))))
    });
}

/// Benchmark: parallel batch runs at increasing scale.
fn bench_payroll_run(c: &mut Criterion) {
    let params = standard_parameters();
    let mut group = c.benchmark_group("payroll_run");

    for size in [100usize, 1000] {
        let employees: Vec<EmployeeCompensation> = (0..size).map(sample_employee).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &employees,
            |b, employees| b.iter(|| black_box(run_payroll(employees, &params))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_calculation, bench_payroll_run);
criterion_main!(benches);
