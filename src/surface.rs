//! The rendering-surface seam.
//!
//! The engine never owns an element tree; it reads box metrics and writes
//! attributes/inline styles through [`RenderSurface`], implemented by the
//! host (a real document tree, or [`memory::MemorySurface`] for headless
//! hosts and tests).

use std::fmt::Debug;

pub mod memory;

/// Inline style properties the engine writes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProperty {
    /// `width`
    Width,
    /// `margin-left`
    MarginLeft,
    /// `margin-right`
    MarginRight,
    /// `margin-top`
    MarginTop,
    /// `margin-bottom`
    MarginBottom,
    /// `height`
    Height,
}

/// Inline style values the engine writes back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue {
    /// Percentage of the parent box.
    Percent(f64),
    /// Device-independent pixels.
    Px(f64),
    /// Clear the property back to automatic sizing.
    Auto,
}

/// Host-provided element tree with box metrics and style write-back.
///
/// Elements are cheap copyable identifiers whose validity is owned by the
/// host; a detached or recycled identifier makes [`is_element`] return
/// `false` and measurements of it fail.
///
/// [`is_element`]: RenderSurface::is_element
pub trait RenderSurface {
    /// Element identifier.
    type Element: Copy + Eq + Debug;

    /// Root element of the document.
    fn document_root(&self) -> Self::Element;

    /// Whether `el` currently identifies a renderable element.
    fn is_element(&self, el: Self::Element) -> bool;

    /// Parent element, if any.
    fn parent(&self, el: Self::Element) -> Option<Self::Element>;

    /// All descendants of `root` in document order, excluding `root` itself.
    fn descendants(&self, root: Self::Element) -> Vec<Self::Element>;

    /// Class list of `el` in source order.
    fn classes(&self, el: Self::Element) -> Vec<String>;

    /// CSS `clientWidth` equivalent, in physical pixels.
    fn client_width(&self, el: Self::Element) -> f64;

    /// CSS `offsetWidth` equivalent, in physical pixels.
    fn offset_width(&self, el: Self::Element) -> f64;

    /// Rendered height of `el` under its current inline styles, in
    /// device-independent pixels.
    fn rendered_height(&self, el: Self::Element) -> f64;

    /// Device pixel ratio used to normalize physical widths.
    fn device_pixel_ratio(&self) -> f64;

    /// Advertised available screen width, if the host knows it.
    fn avail_width(&self) -> Option<f64>;

    /// Client width of the document root, in physical pixels.
    fn document_client_width(&self) -> f64;

    /// Inner width of the hosting window, in physical pixels.
    fn window_inner_width(&self) -> f64;

    /// Set an attribute on `el`. Unknown elements are ignored.
    fn set_attribute(&mut self, el: Self::Element, name: &str, value: &str);

    /// Set an inline style property on `el`. Unknown elements are ignored.
    fn set_style(&mut self, el: Self::Element, prop: StyleProperty, value: StyleValue);

    /// Whether the class list of `el` contains `name`.
    fn has_class(&self, el: Self::Element, name: &str) -> bool {
        self.classes(el).iter().any(|c| c == name)
    }
}
