//! Pascal VOC XML reader.
//!
//! A VOC file normally has a single `<annotation>` root. Some tools bundle
//! several images into one file by wrapping sibling `<annotation>` blocks in
//! an arbitrary root element; both shapes are accepted and each block yields
//! one [`ImageInstance`].

use std::fs;
use std::path::Path;

use roxmltree::Node;

use super::labels::LabelFilter;
use super::model::{ImageInstance, ObjectAnnotation, VocDataset};
use crate::error::VocLoadError;

const ANNOTATION_TAG: &str = "annotation";

/// Parse one VOC annotation file.
///
/// Every recorded filename is `image_dir` joined with the block's
/// `<filename>`. Objects whose label is not allowed by `labels` are dropped,
/// then instances left without objects are dropped.
///
/// Only UTF-8 documents are accepted. Files in other encodings, such as
/// exports declaring `encoding="ISO-8859-1"` with non-ASCII content, are
/// rejected as parse errors rather than transcoded.
///
/// # Errors
/// Fails for the whole file on unreadable input, non-UTF-8 content,
/// malformed XML, or a missing or non-numeric required field. No partial
/// result is returned.
pub fn parse_annotation_file(
    path: &Path,
    image_dir: &Path,
    labels: &LabelFilter,
) -> Result<VocDataset, VocLoadError> {
    let bytes = fs::read(path).map_err(VocLoadError::Io)?;
    let xml = decode_utf8(&bytes, path)?;
    parse_voc_xml_str(xml, path, image_dir, labels)
}

/// Parse VOC XML from a UTF-8 string.
///
/// Useful for testing and fuzzing without file I/O.
pub fn from_voc_xml_str(
    xml: &str,
    image_dir: &Path,
    labels: &LabelFilter,
) -> Result<VocDataset, VocLoadError> {
    parse_voc_xml_str(xml, Path::new("<memory>"), image_dir, labels)
}

/// Parse VOC XML from bytes.
///
/// The input must be valid UTF-8. Filenames are kept relative and all
/// labels are retained.
pub fn from_voc_xml_slice(bytes: &[u8]) -> Result<VocDataset, VocLoadError> {
    let path = Path::new("<memory>");
    let xml = decode_utf8(bytes, path)?;
    parse_voc_xml_str(xml, path, Path::new(""), &LabelFilter::all())
}

fn decode_utf8<'a>(bytes: &'a [u8], path: &Path) -> Result<&'a str, VocLoadError> {
    std::str::from_utf8(bytes).map_err(|source| VocLoadError::XmlParse {
        path: path.to_path_buf(),
        message: format!("input is not valid UTF-8: {source}"),
    })
}

fn parse_voc_xml_str(
    xml: &str,
    path: &Path,
    image_dir: &Path,
    labels: &LabelFilter,
) -> Result<VocDataset, VocLoadError> {
    let document = roxmltree::Document::parse(xml).map_err(|source| VocLoadError::XmlParse {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;

    let root = document.root_element();
    let blocks: Vec<Node<'_, '_>> = if is_element_named(root, ANNOTATION_TAG) {
        vec![root]
    } else {
        root.children()
            .filter(|node| is_element_named(*node, ANNOTATION_TAG))
            .collect()
    };

    let mut instances = Vec::with_capacity(blocks.len());
    for block in blocks {
        let mut instance = parse_annotation_block(block, path, image_dir)?;
        instance.objects.retain(|object| labels.allows(&object.name));
        if !instance.objects.is_empty() {
            instances.push(instance);
        }
    }

    Ok(VocDataset::from_instances(instances))
}

fn parse_annotation_block(
    annotation: Node<'_, '_>,
    path: &Path,
    image_dir: &Path,
) -> Result<ImageInstance, VocLoadError> {
    let filename = required_child_text(annotation, "filename", path, "<annotation>")?;

    let size = required_child_element(annotation, "size", path, "<annotation>")?;
    let width = parse_required_u32(size, "width", path, "<size>")?;
    let height = parse_required_u32(size, "height", path, "<size>")?;

    let mut instance = ImageInstance::new(image_dir.join(filename), width, height);

    for object in annotation
        .children()
        .filter(|node| is_element_named(*node, "object"))
    {
        let name = required_child_text(object, "name", path, "<object>")?;
        let bndbox = required_child_element(object, "bndbox", path, "<object>")?;

        let xmin = parse_required_i64(bndbox, "xmin", path, "<bndbox>")?;
        let xmax = parse_required_i64(bndbox, "xmax", path, "<bndbox>")?;
        let ymin = parse_required_i64(bndbox, "ymin", path, "<bndbox>")?;
        let ymax = parse_required_i64(bndbox, "ymax", path, "<bndbox>")?;

        instance.objects.push(ObjectAnnotation {
            name,
            xmin,
            xmax,
            ymin,
            ymax,
        });
    }

    Ok(instance)
}

fn required_child_element<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<Node<'a, 'input>, VocLoadError> {
    child_element(node, tag).ok_or_else(|| VocLoadError::XmlParse {
        path: path.to_path_buf(),
        message: format!("missing <{tag}> in {context}"),
    })
}

fn required_child_text(
    node: Node<'_, '_>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<String, VocLoadError> {
    optional_child_text(node, tag).ok_or_else(|| VocLoadError::XmlParse {
        path: path.to_path_buf(),
        message: format!("missing <{tag}> in {context}"),
    })
}

fn parse_required_u32(
    node: Node<'_, '_>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<u32, VocLoadError> {
    let raw = required_child_text(node, tag, path, context)?;
    raw.parse::<u32>().map_err(|_| VocLoadError::XmlParse {
        path: path.to_path_buf(),
        message: format!("invalid <{tag}> value '{raw}' in {context}; expected u32"),
    })
}

fn parse_required_i64(
    node: Node<'_, '_>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<i64, VocLoadError> {
    let raw = required_child_text(node, tag, path, context)?;
    raw.parse::<i64>().map_err(|_| VocLoadError::XmlParse {
        path: path.to_path_buf(),
        message: format!("invalid <{tag}> value '{raw}' in {context}; expected integer"),
    })
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| is_element_named(*child, tag))
}

fn optional_child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    child_element(node, tag)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}

fn is_element_named(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && node.tag_name().name() == tag
}
