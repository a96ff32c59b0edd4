use super::*;

fn sized(percents: &[f64]) -> Vec<SizedColumn<u32>> {
    percents
        .iter()
        .enumerate()
        .map(|(i, &percent)| SizedColumn {
            element: i as u32,
            percent,
        })
        .collect()
}

#[test]
fn full_row_stays_together() {
    let rows = partition_rows(&sized(&[25.0, 25.0, 50.0]));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 3);
}

#[test]
fn overfull_sequence_splits_at_exact_hundred() {
    let rows = partition_rows(&sized(&[50.0, 50.0, 50.0]));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 2);
    assert_eq!(rows[1].len(), 1);
}

#[test]
fn full_width_columns_each_get_their_own_row() {
    let rows = partition_rows(&sized(&[100.0, 100.0, 100.0]));
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.len() == 1));
}

#[test]
fn trailing_remainder_is_its_own_row() {
    let rows = partition_rows(&sized(&[50.0, 50.0, 25.0, 25.0]));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].len(), 2);

    let rows = partition_rows(&sized(&[25.0, 25.0]));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 2);
}

#[test]
fn percentages_that_never_hit_hundred_accumulate_until_exhaustion() {
    // Misconfigured table: 40 + 40 skips past 100 at the third column.
    let rows = partition_rows(&sized(&[40.0, 40.0, 40.0]));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 3);
}

#[test]
fn empty_column_list_packs_no_rows() {
    assert!(partition_rows(&sized(&[])).is_empty());
    assert!(plan_rows(&sized(&[]), 2.0).is_empty());
}

#[test]
fn single_column_row_is_both_edges() {
    let rows = plan_rows(&sized(&[100.0]), 2.0);
    let col = &rows[0].columns[0];
    assert_eq!(col.width, 92.0); // 100 - 4 * gutter
    assert_eq!(col.margin_left, 4.0);
    assert_eq!(col.margin_right, 4.0);
}

#[test]
fn edge_columns_take_double_insets_inner_edges_single() {
    let rows = plan_rows(&sized(&[25.0, 25.0, 25.0, 25.0]), 1.0);
    let cols = &rows[0].columns;
    assert_eq!(cols.len(), 4);

    assert_eq!(cols[0].margin_left, 2.0);
    assert_eq!(cols[0].margin_right, 1.0);
    assert_eq!(cols[0].width, 22.0);

    assert_eq!(cols[1].margin_left, 1.0);
    assert_eq!(cols[1].margin_right, 1.0);
    assert_eq!(cols[1].width, 23.0);

    assert_eq!(cols[3].margin_left, 1.0);
    assert_eq!(cols[3].margin_right, 2.0);
    assert_eq!(cols[3].width, 22.0);
}

#[test]
fn row_width_plus_margins_sums_to_hundred() {
    for gutter in [0.0, 0.5, 1.0, 2.5] {
        let rows = plan_rows(&sized(&[25.0, 25.0, 25.0, 25.0]), gutter);
        let total: f64 = rows[0]
            .columns
            .iter()
            .map(|c| c.width + c.margin_left + c.margin_right)
            .sum();
        assert!((total - 100.0).abs() < 1e-9, "gutter {gutter}: {total}");
    }
}

#[test]
fn first_row_gets_double_top_inset() {
    let rows = plan_rows(&sized(&[50.0, 50.0, 50.0, 50.0]), 1.5);
    assert_eq!(rows.len(), 2);
    for col in &rows[0].columns {
        assert_eq!(col.margin_top, 3.0);
        assert_eq!(col.margin_bottom, 1.5);
    }
    for col in &rows[1].columns {
        assert_eq!(col.margin_top, 1.5);
        assert_eq!(col.margin_bottom, 1.5);
    }
}

#[test]
fn zero_gutter_leaves_resolved_widths_untouched() {
    let rows = plan_rows(&sized(&[75.0, 25.0]), 0.0);
    let cols = &rows[0].columns;
    assert_eq!(cols[0].width, 75.0);
    assert_eq!(cols[1].width, 25.0);
    assert!(cols.iter().all(|c| c.margin_left == 0.0 && c.margin_right == 0.0));
}

#[test]
fn plan_keeps_element_association_and_order() {
    let rows = plan_rows(&sized(&[50.0, 50.0, 100.0]), 1.0);
    assert_eq!(rows[0].columns[0].element, 0);
    assert_eq!(rows[0].columns[1].element, 1);
    assert_eq!(rows[1].columns[0].element, 2);
}
