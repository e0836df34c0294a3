use crate::error::RadarResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry, and it
/// tracks whether a drawing is currently bound to the surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_polygon_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub render_count: usize,
    pub clear_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    /// `true` while the last drawn frame has not been cleared.
    #[must_use]
    pub fn has_live_drawing(&self) -> bool {
        self.last_frame.is_some()
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RadarResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_polygon_count = frame.polygons.len();
        self.last_circle_count = frame.circles.len();
        self.last_text_count = frame.texts.len();
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn clear(&mut self) -> RadarResult<()> {
        self.clear_count += 1;
        self.last_frame = None;
        Ok(())
    }
}
