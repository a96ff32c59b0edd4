//! The grid orchestrator.

use std::cell::RefCell;
use std::rc::Rc;

use crate::breakpoint::{self, BreakpointIndex};
use crate::config::{BREAKPOINT_ATTR, BreakpointConfig};
use crate::discover::{self, DiscoverySnapshot};
use crate::foundation::error::{GridError, GridResult};
use crate::measure;
use crate::pack::{self, HEIGHT_FUDGE_PX, SizedColumn};
use crate::resize::{ResizeBus, Subscription};
use crate::surface::{RenderSurface, StyleProperty, StyleValue};

/// Responsive grid engine over one registered subtree.
///
/// Construction derives the breakpoint index, discovers containers and
/// columns, and runs one eager recompute. Afterwards the host calls
/// [`recompute`] on every viewport resize (directly, or through a
/// [`ResizeBus`] subscription) and [`register`] after structural tree
/// changes.
///
/// [`recompute`]: GridSystem::recompute
/// [`register`]: GridSystem::register
#[derive(Debug)]
pub struct GridSystem<S: RenderSurface> {
    config: BreakpointConfig,
    index: BreakpointIndex,
    root: S::Element,
    snapshot: DiscoverySnapshot<S::Element>,
}

impl<S: RenderSurface> GridSystem<S> {
    /// Build a grid over `root` (the whole document when `None`) with
    /// `config` (the built-in quarter grid when `None`), then discover and
    /// eagerly recompute once.
    pub fn new(
        surface: &mut S,
        config: Option<BreakpointConfig>,
        root: Option<S::Element>,
    ) -> GridResult<Self> {
        let config = config.unwrap_or_default();
        let index = BreakpointIndex::build(&config);
        let root = root.unwrap_or_else(|| surface.document_root());
        let mut system = Self {
            config,
            index,
            root,
            snapshot: DiscoverySnapshot::empty(),
        };
        system.register(surface, None)?;
        system.recompute(surface)?;
        Ok(system)
    }

    /// Re-run discovery, optionally retargeting a new subtree root.
    ///
    /// Must be called after the host mutates tree structure; the snapshot
    /// taken here is reused verbatim across recomputes until then.
    pub fn register(&mut self, surface: &S, root: Option<S::Element>) -> GridResult<()> {
        if let Some(root) = root {
            self.root = root;
        }
        if !surface.is_element(self.root) {
            return Err(GridError::measurement(format!(
                "registration root {:?} is not a renderable element",
                self.root
            )));
        }
        self.snapshot = discover::discover(surface, self.root, &self.index);
        Ok(())
    }

    /// The current discovery snapshot.
    pub fn snapshot(&self) -> &DiscoverySnapshot<S::Element> {
        &self.snapshot
    }

    /// The derived breakpoint index.
    pub fn index(&self) -> &BreakpointIndex {
        &self.index
    }

    /// The full recompute pass, run on every resize notification.
    ///
    /// Tags every container with its matched breakpoint, then (active mode
    /// only) re-derives row grouping and column geometry and writes widths,
    /// margins and equalized heights back. Idempotent for an unchanged
    /// tree. A failure mid-pass leaves already-tagged containers tagged;
    /// there is no rollback.
    #[tracing::instrument(skip(self, surface))]
    pub fn recompute(&self, surface: &mut S) -> GridResult<()> {
        for &container in &self.snapshot.containers {
            let target = surface.parent(container).unwrap_or(container);
            let width = measure::width_of(surface, target)?;
            let label = self.index.label_for_width(width);
            surface.set_attribute(container, BREAKPOINT_ATTR, &label.to_string());
        }

        if !self.index.is_active() {
            return Ok(());
        }
        let Some(wrapper) = self.snapshot.grid_root else {
            return Ok(());
        };
        if self.snapshot.columns.is_empty() {
            return Ok(());
        }

        // The wrapper-level bucket supplies the gutter; the wrapper's own
        // width scales pixel gutters into percentages.
        let wrapper_target = surface.parent(wrapper).unwrap_or(wrapper);
        let wrapper_bucket =
            breakpoint::resolve(&self.config, &self.index, measure::width_of(surface, wrapper_target)?)?;
        let wrapper_width = measure::width_of(surface, wrapper)?;
        let gutter = match &wrapper_bucket.table.gutter {
            Some(gutter) => gutter.per_side_percent(wrapper_width)?,
            None => 0.0,
        };

        let mut sized = Vec::with_capacity(self.snapshot.columns.len());
        for column in &self.snapshot.columns {
            let parent = surface.parent(column.element).unwrap_or(column.element);
            let width = measure::width_of(surface, parent)?;
            let bucket = breakpoint::resolve(&self.config, &self.index, width)?;
            match bucket.table.width_percent(&column.label) {
                Some(percent) => sized.push(SizedColumn {
                    element: column.element,
                    percent,
                }),
                None => tracing::warn!(
                    label = %column.label,
                    bucket = %bucket.label,
                    "column label missing from bucket; leaving column geometry untouched"
                ),
            }
        }

        let rows = pack::plan_rows(&sized, gutter);
        for row in &rows {
            for col in &row.columns {
                surface.set_style(col.element, StyleProperty::Width, StyleValue::Percent(col.width));
                surface.set_style(
                    col.element,
                    StyleProperty::MarginLeft,
                    StyleValue::Percent(col.margin_left),
                );
                surface.set_style(
                    col.element,
                    StyleProperty::MarginRight,
                    StyleValue::Percent(col.margin_right),
                );
                surface.set_style(
                    col.element,
                    StyleProperty::MarginTop,
                    StyleValue::Percent(col.margin_top),
                );
                surface.set_style(
                    col.element,
                    StyleProperty::MarginBottom,
                    StyleValue::Percent(col.margin_bottom),
                );
            }
        }

        // Heights must come back to automatic sizing before measuring, so
        // a row that got shorter can actually shrink.
        for row in &rows {
            for col in &row.columns {
                surface.set_style(col.element, StyleProperty::Height, StyleValue::Auto);
            }
        }
        for row in &rows {
            let tallest = row
                .columns
                .iter()
                .map(|col| surface.rendered_height(col.element))
                .fold(0.0, f64::max);
            let height = tallest + HEIGHT_FUDGE_PX;
            for col in &row.columns {
                surface.set_style(col.element, StyleProperty::Height, StyleValue::Px(height));
            }
        }

        Ok(())
    }
}

impl<S: RenderSurface + 'static> GridSystem<S> {
    /// Subscribe the grid's recompute to a resize bus.
    ///
    /// Dropping the returned [`Subscription`] detaches it; the grid holds
    /// no global state. Recompute failures during delivery are logged and
    /// do not unsubscribe.
    pub fn attach(grid: Rc<RefCell<Self>>, bus: &ResizeBus<S>) -> Subscription<S> {
        bus.subscribe(move |surface| {
            if let Err(err) = grid.borrow().recompute(surface) {
                tracing::warn!(%err, "grid recompute failed");
            }
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/system.rs"]
mod tests;
