use criterion::{Criterion, criterion_group, criterion_main};
use flightstick_hid_common::{BitField, ReportBuilder, ReportParser, parse_hex_bytes};

fn benchmark_bit_fields(c: &mut Criterion) {
    let data = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    let aligned = BitField::new(3, 0, 8);
    let unaligned = BitField::at_bit(10, 10);

    c.bench_function("BitField extract aligned u8", |b| {
        b.iter(|| std::hint::black_box(aligned.extract(std::hint::black_box(&data))));
    });

    c.bench_function("BitField extract unaligned 10-bit", |b| {
        b.iter(|| std::hint::black_box(unaligned.extract(std::hint::black_box(&data))));
    });

    c.bench_function("ReportParser read_field", |b| {
        let parser = ReportParser::from_slice(&data);
        b.iter(|| std::hint::black_box(parser.read_field(&unaligned).ok()));
    });
}

fn benchmark_report_builder(c: &mut Criterion) {
    c.bench_function("ReportBuilder write_field", |b| {
        b.iter(|| {
            let mut builder = ReportBuilder::new(7);
            for i in 0..4u32 {
                builder.write_field(&BitField::at_bit(10 * i as usize, 10), std::hint::black_box(i));
            }
            std::hint::black_box(builder.into_inner());
        });
    });
}

fn benchmark_hex(c: &mut Criterion) {
    c.bench_function("parse_hex_bytes capture line", |b| {
        b.iter(|| {
            std::hint::black_box(parse_hex_bytes(std::hint::black_box(
                "0xFF 0x01 0x80 0x80 0x00 0xFF 0x00",
            )))
        });
    });
}

criterion_group!(
    benches,
    benchmark_bit_fields,
    benchmark_report_builder,
    benchmark_hex
);
criterion_main!(benches);
