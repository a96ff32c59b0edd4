use std::fmt;

use crate::config::{BreakpointConfig, BreakpointTable, DEFAULT_BUCKET};
use crate::foundation::error::{GridError, GridResult};

/// Identity of a matched breakpoint bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BucketLabel {
    /// A numeric threshold bucket; applies to widths strictly below it.
    Threshold(u32),
    /// The baseline bucket; applies when no threshold exceeds the width.
    Default,
}

impl fmt::Display for BucketLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketLabel::Threshold(w) => write!(f, "{w}"),
            BucketLabel::Default => f.write_str(DEFAULT_BUCKET),
        }
    }
}

/// Often-used values derived once from a [`BreakpointConfig`].
///
/// Immutable after construction; rebuilding the index is the only way to
/// pick up configuration changes.
#[derive(Clone, Debug)]
pub struct BreakpointIndex {
    labels: Vec<String>,
    thresholds: Vec<u32>, // descending
    is_active: bool,
}

impl BreakpointIndex {
    /// Derive the index from a configuration. Never fails: malformed
    /// configuration (for example a missing `"default"` bucket) surfaces
    /// later, at resolution time.
    pub fn build(config: &BreakpointConfig) -> Self {
        match config {
            BreakpointConfig::Buckets(buckets) => {
                // Any one bucket yields the label set; the uniform-label-set
                // invariant makes the choice order-independent.
                let labels = buckets
                    .values()
                    .next()
                    .map(|t| t.columns.keys().cloned().collect())
                    .unwrap_or_default();
                Self {
                    labels,
                    thresholds: sorted_thresholds(buckets.keys()),
                    is_active: true,
                }
            }
            BreakpointConfig::Labels(labels) => Self {
                labels: labels.clone(),
                thresholds: sorted_thresholds(labels.iter()),
                is_active: false,
            },
        }
    }

    /// Recognized column-type labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Configured thresholds, sorted descending.
    pub fn thresholds(&self) -> &[u32] {
        &self.thresholds
    }

    /// Whether column sizing is enabled (object-keyed configuration).
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// The bucket governing `width`: the smallest threshold strictly
    /// greater than `width`, or [`BucketLabel::Default`] when none is.
    ///
    /// Scans the descending threshold list, overwriting the candidate with
    /// every threshold still above `width` and stopping at the first one
    /// at or below it; the last overwrite is the smallest match.
    pub fn label_for_width(&self, width: f64) -> BucketLabel {
        let mut candidate = None;
        for &threshold in &self.thresholds {
            if width < f64::from(threshold) {
                candidate = Some(threshold);
            } else {
                break;
            }
        }
        candidate.map_or(BucketLabel::Default, BucketLabel::Threshold)
    }
}

fn sorted_thresholds<'k>(keys: impl Iterator<Item = &'k String>) -> Vec<u32> {
    let mut thresholds: Vec<u32> = keys.filter_map(|k| k.parse().ok()).collect();
    thresholds.sort_unstable_by(|a, b| b.cmp(a));
    thresholds
}

/// A matched bucket: its table plus the label written onto containers.
#[derive(Clone, Copy, Debug)]
pub struct Resolved<'c> {
    /// Column sizing table of the matched bucket.
    pub table: &'c BreakpointTable,
    /// Bucket identity, as tagged on containers.
    pub label: BucketLabel,
}

/// Resolve the bucket table governing `width`.
///
/// Pure and idempotent: identical width always yields the identical bucket.
/// Fails on passive configurations (no tables to resolve into) and when the
/// matched bucket is absent, which for in-range widths means the
/// configuration has no `"default"` bucket.
pub fn resolve<'c>(
    config: &'c BreakpointConfig,
    index: &BreakpointIndex,
    width: f64,
) -> GridResult<Resolved<'c>> {
    let BreakpointConfig::Buckets(buckets) = config else {
        return Err(GridError::config(
            "passive configuration has no bucket tables to resolve",
        ));
    };
    let label = index.label_for_width(width);
    let table = buckets.get(&label.to_string()).ok_or_else(|| {
        GridError::config(format!("no {:?} bucket in configuration", label.to_string()))
    })?;
    Ok(Resolved { table, label })
}
