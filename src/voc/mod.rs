//! Pascal VOC annotation loading.
//!
//! The layers, leaves first:
//!
//! 1. [`io_voc_xml`] turns one XML document into [`ImageInstance`]s and
//!    their [`LabelCounts`].
//! 2. [`dir`] walks an annotation directory, merges per-file results and
//!    skips files that fail to parse.
//! 3. [`cache`] persists a merged [`VocDataset`] so later runs can skip
//!    parsing altogether.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use vocload::voc::{from_voc_xml_str, LabelFilter};
//!
//! let xml = r#"<annotation>
//!   <filename>001.jpg</filename>
//!   <size><width>640</width><height>480</height></size>
//!   <object>
//!     <name>cat</name>
//!     <bndbox><xmin>1</xmin><ymin>2</ymin><xmax>30</xmax><ymax>40</ymax></bndbox>
//!   </object>
//! </annotation>"#;
//!
//! let parsed = from_voc_xml_str(xml, Path::new("JPEGImages"), &LabelFilter::all()).unwrap();
//! assert_eq!(parsed.instances.len(), 1);
//! assert_eq!(parsed.label_counts.get("cat"), Some(1));
//! ```

pub mod cache;
pub mod dir;
pub mod io_voc_xml;
mod labels;
mod model;

pub use dir::{parse_annotation_directory, scan_annotation_dir, DirectoryScan, SkippedFile};
pub use io_voc_xml::{from_voc_xml_slice, from_voc_xml_str, parse_annotation_file};
pub use labels::{LabelCounts, LabelFilter};
pub use model::{ImageInstance, ObjectAnnotation, VocDataset};
