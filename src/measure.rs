//! Measurement adapter over the rendering surface.
//!
//! Widths come back in device-independent pixels: the larger of the
//! client/offset measurements divided by the device pixel ratio.

use crate::foundation::error::{GridError, GridResult};
use crate::surface::RenderSurface;

/// Rendered width of `el` in device-independent pixels.
///
/// Fails when `el` is not (or no longer) a renderable element, aborting
/// the recompute pass that asked.
pub fn width_of<S: RenderSurface>(surface: &S, el: S::Element) -> GridResult<f64> {
    if !surface.is_element(el) {
        return Err(GridError::measurement(format!(
            "{el:?} is not a renderable element"
        )));
    }
    let width = surface.client_width(el).max(surface.offset_width(el));
    Ok(width / surface.device_pixel_ratio())
}

/// Usable screen width in device-independent pixels.
///
/// Prefers the host's advertised available width; otherwise takes the
/// larger of the document client width and the window inner width,
/// normalized by the device pixel ratio.
pub fn viewport_width<S: RenderSurface>(surface: &S) -> f64 {
    if let Some(avail) = surface.avail_width() {
        return avail;
    }
    let width = surface
        .document_client_width()
        .max(surface.window_inner_width());
    width / surface.device_pixel_ratio()
}
