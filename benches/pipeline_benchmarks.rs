//! Performance benchmarks for PayCompute.
//!
//! This benchmark suite covers the stages of a payroll run:
//! - Extraction over a 1000-row sheet
//! - Upload CSV generation
//! - The full pipeline, checks included, for 100 and 1000 rows
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use paycompute::config::Settings;
use paycompute::models::{PayPeriod, RawTable, WageMapping};
use paycompute::processing::{
    PayrollProcessor, PayrollRequest, extract_deductions, generate_csv, rotate_pay_dates,
};

const CODES: [(&str, &str); 10] = [
    ("A1", "Housing"),
    ("A2", "Transport"),
    ("A3", "Mobile Allowance"),
    ("B1", "Housing"),
    ("B2", "Overtime"),
    ("B3", "Night Shift"),
    ("C1", "Bonus"),
    ("C2", "Loan Recovery"),
    ("C3", "Advance"),
    ("C4", "Fines"),
];

/// Builds a sheet with `rows` employees and ten mapped columns, with a mix
/// of blanks and zeros.
fn create_table(rows: usize) -> RawTable {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(rows + 2);

    let mut header = vec!["Staff ID".to_string(), "Name".to_string()];
    header.extend(CODES.iter().map(|(code, _)| code.to_string()));
    grid.push(header);
    grid.push(vec![String::new(); CODES.len() + 2]);

    for i in 0..rows {
        let mut row = vec![format!("E{:05}", i), format!("Employee {}", i)];
        for (j, _) in CODES.iter().enumerate() {
            let value = match (i + j) % 4 {
                0 => String::new(),
                1 => "0".to_string(),
                _ => format!("{}.{:02}", 100 + (i * 7 + j * 13) % 900, (i + j) % 100),
            };
            row.push(value);
        }
        grid.push(row);
    }

    RawTable::from_text_rows(grid)
}

fn create_mapping() -> WageMapping {
    WageMapping::from_pairs(CODES)
}

/// Benchmark: Extraction over 1000 rows.
fn bench_extract_1000(c: &mut Criterion) {
    let table = create_table(1000);
    let mapping = create_mapping();

    c.bench_function("extract_1000_rows", |b| {
        b.iter(|| black_box(extract_deductions(black_box(&table), black_box(&mapping))))
    });
}

/// Benchmark: CSV generation for the records of 1000 rows.
fn bench_generate_csv_1000(c: &mut Criterion) {
    let table = create_table(1000);
    let mapping = create_mapping();
    let period = PayPeriod::new(9, 2024, &Settings::default()).expect("valid period");
    let extraction = extract_deductions(&table, &mapping).expect("mapped columns");
    let records = rotate_pay_dates(extraction.records, &period);

    c.bench_function("generate_csv_1000_rows", |b| {
        b.iter(|| black_box(generate_csv(black_box(&records), "AED")))
    });
}

/// Benchmark: Full pipeline at different sheet sizes.
fn bench_pipeline(c: &mut Criterion) {
    let settings = Settings::default();
    let period = PayPeriod::new(9, 2024, &settings).expect("valid period");
    let processor = PayrollProcessor::new(settings);
    let mapping = create_mapping();

    let mut group = c.benchmark_group("pipeline");
    for rows in [100usize, 1000] {
        let table = create_table(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| {
                black_box(processor.process(&PayrollRequest {
                    table,
                    mapping: &mapping,
                    period,
                    output_name: "bench",
                }))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_extract_1000,
    bench_generate_csv_1000,
    bench_pipeline
);
criterion_main!(benches);
