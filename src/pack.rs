//! Row packer and sizer.
//!
//! Pure geometry: columns with resolved width percentages go in, row plans
//! with per-column widths and margins come out. Rows are discovered by
//! percentage accumulation — columns accumulate into a row until their
//! resolved widths sum to exactly 100, and the trailing remainder forms
//! its own row. (Grouping by rendered top edge would find the same rows;
//! the accumulation strategy is the canonical one here.)
//!
//! All values are percentages of the wrapper width. The gutter argument is
//! the per-side inset already derived via
//! [`crate::config::Gutter::per_side_percent`].

/// Allowance added to equalized row heights against subpixel wrapping.
/// Tunable, not contractual.
pub const HEIGHT_FUDGE_PX: f64 = 1.0;

const ROW_FULL_PERCENT: f64 = 100.0;
const ROW_EPSILON: f64 = 1e-6;

/// A column staged for packing, with its bucket-resolved width percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizedColumn<E> {
    /// The column element.
    pub element: E,
    /// Resolved width as a percentage of the wrapper.
    pub percent: f64,
}

/// Computed inline geometry for one column. Width and margins are
/// percentages of the wrapper width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnGeometry<E> {
    /// The column element.
    pub element: E,
    /// `width`
    pub width: f64,
    /// `margin-left`
    pub margin_left: f64,
    /// `margin-right`
    pub margin_right: f64,
    /// `margin-top`
    pub margin_top: f64,
    /// `margin-bottom`
    pub margin_bottom: f64,
}

/// One packed row of column geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct RowPlan<E> {
    /// Columns of the row, in document order.
    pub columns: Vec<ColumnGeometry<E>>,
}

/// Partition columns into rows by accumulating resolved percentages.
///
/// A row closes when its sum reaches exactly 100 (within float epsilon) or
/// when the column list is exhausted; a partially filled trailing row is
/// still a row. Percentages that never sum to 100 keep accumulating until
/// exhaustion — validating such tables up front is
/// [`crate::BreakpointConfig::validate`]'s job, not the packer's.
pub fn partition_rows<E: Copy>(columns: &[SizedColumn<E>]) -> Vec<Vec<SizedColumn<E>>> {
    let mut rows = Vec::new();
    let mut current = Vec::new();
    let mut sum = 0.0;

    for &column in columns {
        current.push(column);
        sum += column.percent;
        if (sum - ROW_FULL_PERCENT).abs() < ROW_EPSILON {
            rows.push(std::mem::take(&mut current));
            sum = 0.0;
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Pack columns into rows and compute per-column width and margins.
///
/// `gutter` is the per-side inset percentage. Within a row, each column
/// keeps the invariant `width + margin_left + margin_right == percent`, so
/// a full row still sums to 100:
///
/// - a row's outer edges get a double inset (first column left, last
///   column right);
/// - shared inner edges get a single inset each;
/// - a single-column row is both edges, losing `4 * gutter`.
///
/// Vertically, the first row gets a double top inset, later rows a single
/// one; every row gets a single bottom inset.
pub fn plan_rows<E: Copy>(columns: &[SizedColumn<E>], gutter: f64) -> Vec<RowPlan<E>> {
    partition_rows(columns)
        .into_iter()
        .enumerate()
        .map(|(row_index, row)| {
            let margin_top = if row_index == 0 { 2.0 * gutter } else { gutter };
            let margin_bottom = gutter;
            let last = row.len() - 1;

            let columns = row
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let (inset, margin_left, margin_right) = match (i == 0, i == last) {
                        (true, true) => (4.0, 2.0, 2.0),
                        (true, false) => (3.0, 2.0, 1.0),
                        (false, true) => (3.0, 1.0, 2.0),
                        (false, false) => (2.0, 1.0, 1.0),
                    };
                    ColumnGeometry {
                        element: col.element,
                        width: col.percent - inset * gutter,
                        margin_left: margin_left * gutter,
                        margin_right: margin_right * gutter,
                        margin_top,
                        margin_bottom,
                    }
                })
                .collect();

            RowPlan { columns }
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/pack.rs"]
mod tests;
