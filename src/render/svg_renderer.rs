use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{RadarError, RadarResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub polygons_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renders frames into a standalone SVG document held in memory.
///
/// The document carries explicit `width`/`height` attributes matching the
/// frame viewport, so embedding pages cannot stretch it.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    background: Option<Color>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints a full-size background rectangle before the frame content.
    pub fn set_background(&mut self, color: Color) -> RadarResult<()> {
        color.validate()?;
        self.background = (!color.is_transparent()).then_some(color);
        Ok(())
    }

    /// Last rendered document; empty after `clear`.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> RadarResult<()> {
        let path = path.as_ref();
        if self.document.is_empty() {
            return Err(RadarError::InvalidData(
                "nothing rendered yet; refusing to write an empty svg".to_owned(),
            ));
        }
        fs::write(path, &self.document).map_err(|err| {
            RadarError::InvalidData(format!("failed to write svg to {}: {err}", path.display()))
        })
    }

    fn compose(&self, frame: &RenderFrame) -> Result<(String, SvgRenderStats), std::fmt::Error> {
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut out = String::new();
        let mut stats = SvgRenderStats::default();

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        if let Some(background) = self.background {
            writeln!(
                out,
                r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
                background.to_css()
            )?;
        }

        for line in &frame.lines {
            writeln!(
                out,
                r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line.color.to_css(),
                line.stroke_width
            )?;
            stats.lines_drawn += 1;
        }

        for polygon in &frame.polygons {
            let mut points = String::new();
            for (index, point) in polygon.points.iter().enumerate() {
                if index > 0 {
                    points.push(' ');
                }
                write!(points, "{:.2},{:.2}", point.x, point.y)?;
            }
            let fill = polygon
                .fill_color
                .map_or_else(|| "none".to_owned(), Color::to_css);
            if polygon.stroke_width > 0.0 {
                writeln!(
                    out,
                    r#"  <polygon points="{points}" fill="{fill}" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
                    polygon.stroke_color.to_css(),
                    polygon.stroke_width
                )?;
            } else {
                writeln!(out, r#"  <polygon points="{points}" fill="{fill}"/>"#)?;
            }
            stats.polygons_drawn += 1;
        }

        for circle in &frame.circles {
            writeln!(
                out,
                r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                circle.cx,
                circle.cy,
                circle.radius,
                circle.fill_color.to_css(),
                circle.border_color.to_css(),
                circle.border_width
            )?;
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            writeln!(
                out,
                r#"  <text x="{:.2}" y="{:.2}" font-size="{}" font-weight="{}" fill="{}" text-anchor="{anchor}" dominant-baseline="middle">{}</text>"#,
                text.x,
                text.y,
                text.font_size_px,
                text.font_weight,
                text.color.to_css(),
                escape_text(&text.text)
            )?;
            stats.texts_drawn += 1;
        }

        out.push_str("</svg>\n");
        Ok((out, stats))
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RadarResult<()> {
        frame.validate()?;
        let (document, stats) = self
            .compose(frame)
            .map_err(|err| RadarError::InvalidData(format!("failed to compose svg: {err}")))?;
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }

    fn clear(&mut self) -> RadarResult<()> {
        self.document.clear();
        self.last_stats = SvgRenderStats::default();
        Ok(())
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
