//! Criterion microbenches for VOC parsing and the cache codec.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use std::path::Path;

use vocload::voc::cache::{from_cache_str, to_cache_string};
use vocload::voc::{from_voc_xml_str, LabelFilter};

const VOC_FIXTURE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<annotation>
  <folder>JPEGImages</folder>
  <filename>000001.jpg</filename>
  <size><width>353</width><height>500</height><depth>3</depth></size>
  <object>
    <name>dog</name>
    <pose>Left</pose>
    <truncated>1</truncated>
    <difficult>0</difficult>
    <bndbox><xmin>48</xmin><ymin>240</ymin><xmax>195</xmax><ymax>371</ymax></bndbox>
  </object>
  <object>
    <name>person</name>
    <pose>Left</pose>
    <truncated>1</truncated>
    <difficult>0</difficult>
    <bndbox><xmin>8</xmin><ymin>12</ymin><xmax>352</xmax><ymax>498</ymax></bndbox>
  </object>
</annotation>
"#;

/// Benchmark VOC XML parsing from string.
fn bench_voc_parse_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("voc_parse");
    group.throughput(Throughput::Bytes(VOC_FIXTURE.len() as u64));
    let images = Path::new("JPEGImages");
    let labels = LabelFilter::all();

    group.bench_function("from_voc_xml_str", |b| {
        b.iter(|| {
            let parsed = from_voc_xml_str(black_box(VOC_FIXTURE), images, &labels).unwrap();
            black_box(parsed)
        })
    });

    group.finish();
}

/// Benchmark cache encode and decode of a parsed dataset.
fn bench_cache_codec(c: &mut Criterion) {
    let mut dataset =
        from_voc_xml_str(VOC_FIXTURE, Path::new("JPEGImages"), &LabelFilter::all()).unwrap();
    for _ in 0..9 {
        let copy = dataset.clone();
        dataset.extend(copy);
    }
    let json = to_cache_string(&dataset).unwrap();

    let mut group = c.benchmark_group("cache_codec");
    group.throughput(Throughput::Bytes(json.len() as u64));

    group.bench_function("to_cache_string", |b| {
        b.iter(|| black_box(to_cache_string(black_box(&dataset)).unwrap()))
    });
    group.bench_function("from_cache_str", |b| {
        b.iter(|| black_box(from_cache_str(black_box(&json)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_voc_parse_str, bench_cache_codec);
criterion_main!(benches);
