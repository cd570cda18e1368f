#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Render a single-image VOC document with `(name, xmin, ymin, xmax, ymax)` objects.
pub fn voc_xml(
    filename: &str,
    width: u32,
    height: u32,
    objects: &[(&str, i64, i64, i64, i64)],
) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n{}",
        annotation_block(filename, width, height, objects)
    )
}

/// Render one `<annotation>` element.
pub fn annotation_block(
    filename: &str,
    width: u32,
    height: u32,
    objects: &[(&str, i64, i64, i64, i64)],
) -> String {
    let mut xml = String::new();
    xml.push_str("<annotation>\n");
    xml.push_str("  <folder>JPEGImages</folder>\n");
    xml.push_str(&format!("  <filename>{filename}</filename>\n"));
    xml.push_str("  <size>\n");
    xml.push_str(&format!("    <width>{width}</width>\n"));
    xml.push_str(&format!("    <height>{height}</height>\n"));
    xml.push_str("    <depth>3</depth>\n");
    xml.push_str("  </size>\n");
    for (name, xmin, ymin, xmax, ymax) in objects {
        xml.push_str("  <object>\n");
        xml.push_str(&format!("    <name>{name}</name>\n"));
        xml.push_str("    <bndbox>\n");
        xml.push_str(&format!("      <xmin>{xmin}</xmin>\n"));
        xml.push_str(&format!("      <ymin>{ymin}</ymin>\n"));
        xml.push_str(&format!("      <xmax>{xmax}</xmax>\n"));
        xml.push_str(&format!("      <ymax>{ymax}</ymax>\n"));
        xml.push_str("    </bndbox>\n");
        xml.push_str("  </object>\n");
    }
    xml.push_str("</annotation>\n");
    xml
}

pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, contents).expect("write file");
}
