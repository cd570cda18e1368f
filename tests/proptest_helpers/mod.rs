#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use vocload::voc::{ImageInstance, ObjectAnnotation, VocDataset};

pub const LABELS: &[&str] = &["cat", "dog", "person", "car", "traffic light"];

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_label() -> impl Strategy<Value = String> {
    proptest::sample::select(LABELS).prop_map(str::to_string)
}

pub fn arb_object() -> impl Strategy<Value = ObjectAnnotation> {
    (
        arb_label(),
        -100i64..5000,
        -100i64..5000,
        -100i64..5000,
        -100i64..5000,
    )
        .prop_map(|(name, xmin, ymin, xmax, ymax)| {
            ObjectAnnotation::new(name, xmin, ymin, xmax, ymax)
        })
}

/// Instances with at least one object, named `img_<idx>.jpg`.
pub fn arb_instances(
    max_instances: usize,
    max_objects: usize,
) -> impl Strategy<Value = Vec<ImageInstance>> {
    proptest::collection::vec(
        (
            1u32..4096,
            1u32..4096,
            proptest::collection::vec(arb_object(), 1..=max_objects),
        ),
        0..=max_instances,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(idx, (width, height, objects))| ImageInstance {
                filename: format!("img_{idx:04}.jpg").into(),
                width,
                height,
                objects,
            })
            .collect()
    })
}

pub fn arb_dataset(max_instances: usize, max_objects: usize) -> impl Strategy<Value = VocDataset> {
    arb_instances(max_instances, max_objects).prop_map(VocDataset::from_instances)
}

/// Render an instance as a VOC document, using only the file name part of
/// its `filename`.
pub fn instance_to_xml(instance: &ImageInstance) -> String {
    let mut xml = String::from("<annotation>\n");
    let name = instance
        .filename
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    xml.push_str(&format!("  <filename>{name}</filename>\n"));
    xml.push_str(&format!(
        "  <size><width>{}</width><height>{}</height></size>\n",
        instance.width, instance.height
    ));
    for object in &instance.objects {
        xml.push_str(&format!(
            "  <object><name>{}</name><bndbox><xmin>{}</xmin><ymin>{}</ymin><xmax>{}</xmax><ymax>{}</ymax></bndbox></object>\n",
            object.name, object.xmin, object.ymin, object.xmax, object.ymax
        ));
    }
    xml.push_str("</annotation>\n");
    xml
}
