//! Benchmarks for the recast conversion pipeline.
//!
//! Run with: cargo bench -p recast-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use recast_core::config::{EncodeConfig, ScanConfig};
use recast_core::format::FORMATS;
use recast_core::pipeline::{probe, DirectoryScanner};
use recast_core::Format;
use std::fs::File;
use std::io::BufWriter;

fn sample_image() -> DynamicImage {
    let img = RgbImage::from_fn(640, 480, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 64]));
    DynamicImage::ImageRgb8(img)
}

fn benchmark_encode(c: &mut Criterion) {
    let img = sample_image();
    let config = EncodeConfig::default();

    for spec in &FORMATS {
        c.bench_function(&format!("encode_{}", spec.token), |b| {
            b.iter(|| {
                let mut bytes = Vec::new();
                let _ = spec.format.encode(black_box(&img), &mut bytes, &config);
            })
        });
    }
}

fn benchmark_probe(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.jpg");
    let mut writer = BufWriter::new(File::create(&path).unwrap());
    Format::Png
        .encode(&sample_image(), &mut writer, &EncodeConfig::default())
        .unwrap();
    drop(writer);

    c.bench_function("probe_png", |b| {
        b.iter(|| {
            let _ = probe(black_box(&path));
        })
    });
}

fn benchmark_scan(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let small = DynamicImage::new_rgb8(64, 64);
    for i in 0..20 {
        let format = if i % 2 == 0 { Format::Gif } else { Format::Png };
        let path = dir.path().join(format!("img_{i:02}.{}", format.extension()));
        let mut writer = BufWriter::new(File::create(&path).unwrap());
        format
            .encode(&small, &mut writer, &EncodeConfig::default())
            .unwrap();
    }
    let scanner = DirectoryScanner::new(ScanConfig::default());

    c.bench_function("scan_20_files", |b| {
        b.iter(|| {
            let _ = scanner.scan(black_box(dir.path()), Format::Gif);
        })
    });
}

criterion_group!(benches, benchmark_encode, benchmark_probe, benchmark_scan);
criterion_main!(benches);
