use std::collections::BTreeMap;

use crate::foundation::error::{GridError, GridResult};

/// Marker class identifying a layout container.
pub const CONTAINER_CLASS: &str = "cont";

/// Marker class identifying the grid root element.
pub const GRID_CLASS: &str = "grid";

/// Attribute written onto containers with the matched breakpoint label.
pub const BREAKPOINT_ATTR: &str = "breakpoint";

/// Bucket key for the baseline table used when no threshold matches.
pub const DEFAULT_BUCKET: &str = "default";

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One bucket of column sizing: column-type label to width percentage,
/// plus an optional inter-column gutter.
pub struct BreakpointTable {
    /// Gutter between columns, `"N%"` or `"Npx"` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gutter: Option<Gutter>,
    /// Column-type label to width percentage of the wrapper.
    #[serde(flatten)]
    pub columns: BTreeMap<String, f64>,
}

impl BreakpointTable {
    /// Width percentage for `label`, or `None` when this bucket does not
    /// define the label (a label-set invariant violation in the config).
    pub fn width_percent(&self, label: &str) -> Option<f64> {
        self.columns.get(label).copied()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Raw gutter specification string, either `"N%"` or `"Npx"`.
pub struct Gutter(
    /// The raw specification text.
    pub String,
);

impl Gutter {
    /// Per-side inset as a percentage of the wrapper width.
    ///
    /// The configured value is the full inter-column gap; each side takes
    /// half of it. Pixel gutters are converted against `wrapper_width`
    /// (already device-pixel-ratio normalized).
    pub fn per_side_percent(&self, wrapper_width: f64) -> GridResult<f64> {
        let raw = self.0.trim();
        if let Some(num) = raw.strip_suffix('%') {
            let n = parse_gutter_number(num, raw)?;
            Ok(n / 2.0)
        } else if let Some(num) = raw.strip_suffix("px") {
            let n = parse_gutter_number(num, raw)?;
            if wrapper_width <= 0.0 {
                // A wrapper that measures as zero cannot carry pixel insets.
                return Ok(0.0);
            }
            Ok(n / 2.0 / wrapper_width * 100.0)
        } else {
            Err(GridError::config(format!(
                "unknown gutter format {raw:?} (expected \"N%\" or \"Npx\")"
            )))
        }
    }
}

fn parse_gutter_number(num: &str, raw: &str) -> GridResult<f64> {
    num.trim()
        .parse::<f64>()
        .map_err(|_| GridError::config(format!("gutter value {raw:?} is not numeric")))
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// User-supplied breakpoint configuration.
///
/// Two shapes are accepted, mirroring the two grid modes:
///
/// - an object of bucket tables keyed by threshold width (decimal string)
///   or `"default"` — the *active* mode, with full column sizing;
/// - a flat array of column-type labels — the *passive* mode, where
///   containers are tagged with their breakpoint but no column geometry
///   is ever written.
pub enum BreakpointConfig {
    /// Active grid: bucket tables keyed by threshold width or `"default"`.
    Buckets(BTreeMap<String, BreakpointTable>),
    /// Passive grid: column-type labels only.
    Labels(Vec<String>),
}

impl Default for BreakpointConfig {
    /// The built-in quarter grid: `col-1-4` .. `col-4-4` with thresholds
    /// at 600 and 400.
    fn default() -> Self {
        let default = table(&[
            ("col-4-4", 100.0),
            ("col-3-4", 75.0),
            ("col-2-4", 50.0),
            ("col-1-4", 25.0),
        ]);
        let at_600 = table(&[
            ("col-4-4", 100.0),
            ("col-3-4", 100.0),
            ("col-2-4", 50.0),
            ("col-1-4", 50.0),
        ]);
        let at_400 = table(&[
            ("col-4-4", 100.0),
            ("col-3-4", 100.0),
            ("col-2-4", 100.0),
            ("col-1-4", 100.0),
        ]);

        let mut buckets = BTreeMap::new();
        buckets.insert(DEFAULT_BUCKET.to_string(), default);
        buckets.insert("600".to_string(), at_600);
        buckets.insert("400".to_string(), at_400);
        BreakpointConfig::Buckets(buckets)
    }
}

fn table(entries: &[(&str, f64)]) -> BreakpointTable {
    BreakpointTable {
        gutter: None,
        columns: entries
            .iter()
            .map(|(label, pct)| (label.to_string(), *pct))
            .collect(),
    }
}

impl BreakpointConfig {
    /// Parse a configuration from its JSON representation.
    pub fn from_json_str(json: &str) -> GridResult<Self> {
        serde_json::from_str(json).map_err(|e| GridError::serde(e.to_string()))
    }

    /// Validate the configuration up front.
    ///
    /// The engine tolerates lazily-surfaced misconfiguration (missing
    /// buckets or labels are reported at resolution time); this check lets
    /// callers fail fast instead. Checks, in active mode:
    ///
    /// - a `"default"` bucket exists;
    /// - every bucket key is `"default"` or a decimal threshold;
    /// - every bucket defines the same column-label set;
    /// - every width percentage lies in `(0, 100]`;
    /// - every gutter string parses.
    pub fn validate(&self) -> GridResult<()> {
        let BreakpointConfig::Buckets(buckets) = self else {
            return Ok(());
        };

        let default = buckets.get(DEFAULT_BUCKET).ok_or_else(|| {
            GridError::config(format!("no {DEFAULT_BUCKET:?} bucket in configuration"))
        })?;
        let labels: Vec<&String> = default.columns.keys().collect();

        for (key, bucket) in buckets {
            if key != DEFAULT_BUCKET && key.parse::<u32>().is_err() {
                return Err(GridError::config(format!(
                    "bucket key {key:?} is neither {DEFAULT_BUCKET:?} nor a threshold width"
                )));
            }
            let bucket_labels: Vec<&String> = bucket.columns.keys().collect();
            if bucket_labels != labels {
                return Err(GridError::config(format!(
                    "bucket {key:?} defines a different column-label set than {DEFAULT_BUCKET:?}"
                )));
            }
            for (label, pct) in &bucket.columns {
                if !(*pct > 0.0 && *pct <= 100.0) {
                    return Err(GridError::config(format!(
                        "column {label:?} in bucket {key:?} has width {pct} outside (0, 100]"
                    )));
                }
            }
            if let Some(gutter) = &bucket.gutter {
                gutter.per_side_percent(100.0)?;
            }
        }
        Ok(())
    }
}
