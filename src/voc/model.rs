//! Parsed annotation records.
//!
//! These are plain data types: a reader fills them in from VOC XML and the
//! cache stores them as-is. Nothing here validates box geometry, so a box
//! with `xmin > xmax` is carried through exactly as the source file had it.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::labels::LabelCounts;

/// One labelled bounding box from an `<object>` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectAnnotation {
    /// Label name from `<name>`.
    pub name: String,
    pub xmin: i64,
    pub xmax: i64,
    pub ymin: i64,
    pub ymax: i64,
}

impl ObjectAnnotation {
    /// Create an object annotation from a label and its box corners.
    ///
    /// Arguments follow corner order `(xmin, ymin, xmax, ymax)`, top-left
    /// then bottom-right, which differs from the field order.
    pub fn new(name: impl Into<String>, xmin: i64, ymin: i64, xmax: i64, ymax: i64) -> Self {
        Self {
            name: name.into(),
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }
}

/// One image and the boxes retained for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInstance {
    /// Image directory joined with the `<filename>` field.
    pub filename: PathBuf,

    /// Image width in pixels, from `<size><width>`.
    pub width: u32,

    /// Image height in pixels, from `<size><height>`.
    pub height: u32,

    /// Boxes in document order, after label filtering.
    pub objects: Vec<ObjectAnnotation>,
}

impl ImageInstance {
    /// Create an instance with no objects yet.
    pub fn new(filename: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            filename: filename.into(),
            width,
            height,
            objects: Vec::new(),
        }
    }

    /// Builder-style helper to append an object.
    pub fn with_object(mut self, object: ObjectAnnotation) -> Self {
        self.objects.push(object);
        self
    }
}

/// The merged result of parsing one file or a whole directory.
///
/// This is also the cache record: the cache file holds exactly one
/// serialized `VocDataset`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocDataset {
    /// All retained instances, in file order then document order.
    #[serde(rename = "all_instances")]
    pub instances: Vec<ImageInstance>,

    /// Occurrences of each label across `instances`.
    pub label_counts: LabelCounts,
}

impl VocDataset {
    /// Build a dataset from instances, tallying their labels.
    pub fn from_instances(instances: Vec<ImageInstance>) -> Self {
        let mut label_counts = LabelCounts::new();
        for object in instances.iter().flat_map(|inst| &inst.objects) {
            label_counts.increment(&object.name);
        }

        Self {
            instances,
            label_counts,
        }
    }

    /// Append another dataset's instances and add its label counts.
    pub fn extend(&mut self, other: VocDataset) {
        self.instances.extend(other.instances);
        self.label_counts.merge(&other.label_counts);
    }

    /// Total number of retained objects across all instances.
    pub fn object_count(&self) -> usize {
        self.instances.iter().map(|inst| inst.objects.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
