use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use facturen::core::*;
use facturen::delivery;
use facturen::document;

fn build_building(ledger_count: usize, lines_per_ledger: usize) -> BuildingInvoice {
    let keys = ["Algemeen", "Lift", "Garage"];
    BuildingInvoice {
        name: Some("VvE Benchmarkstraat".into()),
        company_number: Some("0123.456.789".into()),
        address_line_1: Some("Benchmarkstraat 1".into()),
        address_line_2: Some("1000 Brussel".into()),
        date_start: Some("01-01-2024".into()),
        date_end: Some("31-12-2024".into()),
        export_date: Some("15-01-2025".into()),
        sum_total_amount: Some(dec!(123456.78)),
        sum_vat_amount: Some(dec!(21424.89)),
        language: Language::Nl,
        ledgers: (0..ledger_count)
            .map(|l| Ledger {
                code: Some(format!("{}", 6000 + l)),
                name: Some(format!("Kostenpost {l}")),
                total: Some(dec!(1200.50)),
                total_vat: Some(dec!(200.13)),
                cost_allocations: (0..lines_per_ledger)
                    .map(|i| Allocation {
                        invoice_date: Some("2024-06-15".into()),
                        invoice_number: Some(format!("F-{l}-{i}")),
                        supplier_name: Some("Acme Onderhoud BV".into()),
                        description: Some(format!("Onderhoud week {i}")),
                        distribution_key_name: (i % 4 != 0).then(|| keys[i % 3].to_string()),
                        vat_amount: Some(dec!(10.5)),
                        total: Some(dec!(60.25)),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn bench_assemble(c: &mut Criterion) {
    let small = build_building(5, 10);
    c.bench_function("assemble_5_ledgers_50_lines", |b| {
        b.iter(|| black_box(document::assemble(black_box(&small))));
    });

    let large = build_building(50, 100);
    c.bench_function("assemble_50_ledgers_5000_lines", |b| {
        b.iter(|| black_box(document::assemble(black_box(&large))));
    });
}

fn bench_generate(c: &mut Criterion) {
    let building = build_building(5, 10);
    c.bench_function("generate_html_5_ledgers", |b| {
        b.iter(|| black_box(delivery::generate(black_box(&building))));
    });
}

fn bench_parse_request(c: &mut Criterion) {
    let body = serde_json::to_string(&delivery::GenerateInvoiceRequest {
        building: build_building(5, 10),
    })
    .unwrap();
    c.bench_function("parse_request_5_ledgers", |b| {
        b.iter(|| black_box(delivery::parse_request(black_box(&body))));
    });
}

criterion_group!(benches, bench_assemble, bench_generate, bench_parse_request);
criterion_main!(benches);
