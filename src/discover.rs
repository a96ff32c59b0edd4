//! Container and column discovery.
//!
//! Discovery walks a subtree once and returns an explicit snapshot value.
//! The snapshot goes stale when the host mutates the tree; re-running
//! discovery (via [`crate::GridSystem::register`]) is the caller's
//! responsibility after structural changes, never automatic.

use crate::breakpoint::BreakpointIndex;
use crate::config::{CONTAINER_CLASS, GRID_CLASS};
use crate::surface::RenderSurface;

/// A grid column: an element plus the column-type label it was matched by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column<E> {
    /// The column element.
    pub element: E,
    /// First label from the element's class list that the index recognizes.
    pub label: String,
}

/// Result of one discovery pass over a subtree.
#[derive(Clone, Debug)]
pub struct DiscoverySnapshot<E> {
    /// Elements tagged with the breakpoint marker attribute on recompute,
    /// in document order. In active mode the grid root is included.
    pub containers: Vec<E>,
    /// The grid wrapper whose direct children are sized as columns.
    /// `None` in passive mode or when the subtree has no grid element.
    pub grid_root: Option<E>,
    /// Top-level columns of the grid, in document order. Empty in passive
    /// mode.
    pub columns: Vec<Column<E>>,
}

impl<E> DiscoverySnapshot<E> {
    /// A snapshot with nothing discovered.
    pub fn empty() -> Self {
        Self {
            containers: Vec::new(),
            grid_root: None,
            columns: Vec::new(),
        }
    }
}

/// Walk the subtree under `root` and locate containers and grid columns.
///
/// Containers are all descendants carrying the container marker class. In
/// active mode the first element carrying the grid marker class (`root`
/// itself qualifies) becomes the grid root; it is appended to the container
/// list so it receives breakpoint tagging too, and its direct children
/// whose class list intersects the index labels become the columns. A
/// column's label is the first match in the element's own class-list order.
/// Children of a nested grid one level down are left to that grid.
pub fn discover<S: RenderSurface>(
    surface: &S,
    root: S::Element,
    index: &BreakpointIndex,
) -> DiscoverySnapshot<S::Element> {
    let descendants = surface.descendants(root);

    let mut containers: Vec<S::Element> = descendants
        .iter()
        .copied()
        .filter(|&el| surface.has_class(el, CONTAINER_CLASS))
        .collect();

    if !index.is_active() {
        return DiscoverySnapshot {
            containers,
            grid_root: None,
            columns: Vec::new(),
        };
    }

    let grid_root = if surface.has_class(root, GRID_CLASS) {
        Some(root)
    } else {
        descendants
            .iter()
            .copied()
            .find(|&el| surface.has_class(el, GRID_CLASS))
    };

    let mut columns = Vec::new();
    if let Some(grid) = grid_root {
        containers.push(grid);
        for el in surface.descendants(grid) {
            // Direct children only; a nested grid keeps its own columns.
            if surface.parent(el) != Some(grid) {
                continue;
            }
            let label = surface
                .classes(el)
                .into_iter()
                .find(|c| index.labels().contains(c));
            if let Some(label) = label {
                columns.push(Column { element: el, label });
            }
        }
    }

    DiscoverySnapshot {
        containers,
        grid_root,
        columns,
    }
}

#[cfg(test)]
#[path = "../tests/unit/discover.rs"]
mod tests;
