//! Dataset summary and label histogram.
//!
//! A [`DatasetReport`] can be rendered as text (Display) or serialized as
//! JSON for programmatic use.

use serde::Serialize;
use std::fmt;

use crate::voc::VocDataset;

/// Default number of labels shown in the histogram.
pub const DEFAULT_TOP_LABELS: usize = 10;

const BAR_WIDTH: usize = 20;

/// Summary counts and label distribution for a parsed dataset.
#[derive(Clone, Debug, Serialize)]
pub struct DatasetReport {
    /// Number of retained image instances.
    pub instances: usize,
    /// Number of retained objects.
    pub objects: usize,
    /// Number of distinct labels.
    pub distinct_labels: usize,
    /// How many top labels are listed in `labels`.
    pub top_n: usize,
    /// Top labels sorted by count descending, then name.
    pub labels: Vec<LabelCount>,
    /// Objects belonging to labels beyond the top `top_n`.
    pub other_count: usize,
}

/// A single label histogram entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

impl DatasetReport {
    pub fn from_dataset(dataset: &VocDataset, top_n: usize) -> Self {
        let mut sorted: Vec<(&String, usize)> = dataset
            .label_counts
            .iter()
            .map(|(label, count)| (label, *count))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let distinct_labels = sorted.len();
        let other_count = sorted.iter().skip(top_n).map(|(_, count)| count).sum();
        let labels = sorted
            .into_iter()
            .take(top_n)
            .map(|(label, count)| LabelCount {
                label: label.clone(),
                count,
            })
            .collect();

        Self {
            instances: dataset.instances.len(),
            objects: dataset.label_counts.total(),
            distinct_labels,
            top_n,
            labels,
            other_count,
        }
    }
}

impl fmt::Display for DatasetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "┌─ Summary ─────────────────────────────────────────────────┐"
        )?;
        writeln!(
            f,
            "│   Instances:     {:>8}                                 │",
            format_number(self.instances)
        )?;
        writeln!(
            f,
            "│   Objects:       {:>8}                                 │",
            format_number(self.objects)
        )?;
        writeln!(
            f,
            "│   Labels:        {:>8}                                 │",
            format_number(self.distinct_labels)
        )?;
        writeln!(
            f,
            "└───────────────────────────────────────────────────────────┘"
        )?;
        writeln!(f)?;
        self.fmt_labels(f)
    }
}

impl DatasetReport {
    fn fmt_labels(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = if self.distinct_labels > self.top_n {
            format!("Labels (top {} of {})", self.top_n, self.distinct_labels)
        } else {
            format!("Labels ({})", self.distinct_labels)
        };

        writeln!(
            f,
            "┌─ {} {}┐",
            header,
            "─".repeat(57usize.saturating_sub(header.len()))
        )?;

        if self.labels.is_empty() {
            writeln!(
                f,
                "│   No annotations found.                                   │"
            )?;
        } else {
            let max_count = self.labels.iter().map(|e| e.count).max().unwrap_or(1);

            for entry in &self.labels {
                self.fmt_row(f, &truncate_label(&entry.label, 16), entry.count, max_count)?;
            }

            if self.other_count > 0 {
                self.fmt_row(f, "(other)", self.other_count, max_count)?;
            }
        }

        writeln!(
            f,
            "└───────────────────────────────────────────────────────────┘"
        )
    }

    fn fmt_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        count: usize,
        max_count: usize,
    ) -> fmt::Result {
        let pct = if self.objects > 0 {
            (count as f64 / self.objects as f64) * 100.0
        } else {
            0.0
        };

        writeln!(
            f,
            "│   {:<16} {:>7} {:>5.1}%  {}│",
            label,
            format_number(count),
            pct,
            pad_bar(&render_bar(count, max_count, BAR_WIDTH), BAR_WIDTH)
        )
    }
}

/// Format a number with thousands separators.
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Render a horizontal bar using Unicode block characters.
fn render_bar(count: usize, max_count: usize, width: usize) -> String {
    if max_count == 0 || width == 0 {
        return String::new();
    }

    let filled = ((count * width) / max_count).min(width);
    "█".repeat(filled) + &"░".repeat(width - filled)
}

/// Pad a bar string to ensure consistent column alignment.
fn pad_bar(bar: &str, width: usize) -> String {
    let visual_len = bar.chars().count();
    let padding = (width + 2).saturating_sub(visual_len);
    format!("{}{}", bar, " ".repeat(padding))
}

/// Truncate a label to fit in the display column.
fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        label.to_string()
    } else {
        let head: String = label.chars().take(max_len - 1).collect();
        format!("{head}…")
    }
}
