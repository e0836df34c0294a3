mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_renderer::{SvgRenderStats, SvgRenderer};

use crate::error::RadarResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from stats extraction and scale selection.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> RadarResult<()>;

    /// Releases whatever the previous `render` left on the surface.
    fn clear(&mut self) -> RadarResult<()> {
        Ok(())
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
