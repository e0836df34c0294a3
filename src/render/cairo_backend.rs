use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, LineJoin};
use pango::FontDescription;

use crate::error::{RadarError, RadarResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub polygons_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo renderer drawing into an offscreen ARGB surface.
///
/// The surface size is fixed at construction; frames for another viewport
/// are rejected rather than scaled.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> RadarResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(RadarError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::transparent(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> RadarResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> RadarResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            RadarError::InvalidData(format!("failed to create {}: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| RadarError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn paint_clear(&self, context: &Context) -> RadarResult<()> {
        context.set_operator(cairo::Operator::Source);
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_operator(cairo::Operator::Over);
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> RadarResult<()> {
        frame.validate()?;
        let (width, height) = (self.surface.width(), self.surface.height());
        if i64::from(frame.viewport.width) != i64::from(width)
            || i64::from(frame.viewport.height) != i64::from(height)
        {
            return Err(RadarError::InvalidViewport {
                width: frame.viewport.width,
                height: frame.viewport.height,
            });
        }

        self.paint_clear(context)?;
        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        context.set_line_join(LineJoin::Round);
        for polygon in &frame.polygons {
            context.new_path();
            for (index, point) in polygon.points.iter().enumerate() {
                if index == 0 {
                    context.move_to(point.x, point.y);
                } else {
                    context.line_to(point.x, point.y);
                }
            }
            context.close_path();

            if let Some(fill) = polygon.fill_color {
                apply_color(context, fill);
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill polygon", err))?;
            }
            if polygon.stroke_width > 0.0 {
                apply_color(context, polygon.stroke_color);
                context.set_line_width(polygon.stroke_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke polygon", err))?;
            } else {
                context.new_path();
            }
            stats.polygons_drawn += 1;
        }

        for circle in &frame.circles {
            context.new_path();
            context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
            apply_color(context, circle.fill_color);
            if circle.border_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill marker", err))?;
                apply_color(context, circle.border_color);
                context.set_line_width(circle.border_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke marker border", err))?;
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill marker", err))?;
            }
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let weight = if text.font_weight >= 600 { " Bold" } else { "" };
            let font_description =
                FontDescription::from_string(&format!("Sans{weight} {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            context.move_to(x, text.y - f64::from(text_height) / 2.0);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RadarResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }

    fn clear(&mut self) -> RadarResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.paint_clear(&context)?;
        self.last_stats = CairoRenderStats::default();
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> RadarError {
    RadarError::InvalidData(format!("{prefix}: {err}"))
}
