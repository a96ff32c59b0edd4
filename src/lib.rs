//! Quadgrid is a responsive quarter-grid layout engine.
//!
//! Given a breakpoint configuration and a host-provided element tree, the
//! engine decides which width bucket governs each `cont`-tagged container,
//! groups the columns of a `grid`-tagged wrapper into rows, and writes the
//! resulting widths, gutter margins and equalized heights back as inline
//! styles.
//!
//! # Pipeline overview
//!
//! 1. **Index**: `BreakpointConfig -> BreakpointIndex` (once, at build)
//! 2. **Discover**: subtree root `-> DiscoverySnapshot` (at registration)
//! 3. **Recompute** (every resize): measure -> resolve bucket -> pack rows
//!    -> write attributes and styles
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded and synchronous**: every recompute runs to
//!   completion on the notifying thread; there is no coalescing and no
//!   background work.
//! - **No tree ownership**: elements, box metrics and style application
//!   live behind the [`RenderSurface`] trait; the engine owns only its
//!   derived index and discovery snapshot.
//! - **Explicit lifecycles**: resize delivery goes through a
//!   [`ResizeBus`] subscription with an RAII disposer, and discovery
//!   snapshots are refreshed only by an explicit [`GridSystem::register`]
//!   call.
//!
//! # Getting started
//!
//! Implement [`RenderSurface`] for the host tree (or use
//! [`MemorySurface`]), then build a [`GridSystem`] and hand it resize
//! notifications. See `demos/responsive_page.rs` for a worked example.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod breakpoint;
mod config;
mod discover;
mod foundation;
mod measure;
mod pack;
mod resize;
mod surface;
mod system;

pub use breakpoint::{BreakpointIndex, BucketLabel, Resolved, resolve};
pub use config::{
    BREAKPOINT_ATTR, BreakpointConfig, BreakpointTable, CONTAINER_CLASS, DEFAULT_BUCKET,
    GRID_CLASS, Gutter,
};
pub use discover::{Column, DiscoverySnapshot, discover};
pub use foundation::error::{GridError, GridResult};
pub use measure::{viewport_width, width_of};
pub use pack::{
    ColumnGeometry, HEIGHT_FUDGE_PX, RowPlan, SizedColumn, partition_rows, plan_rows,
};
pub use resize::{ResizeBus, Subscription};
pub use surface::memory::{MemorySurface, NodeId};
pub use surface::{RenderSurface, StyleProperty, StyleValue};
pub use system::GridSystem;
