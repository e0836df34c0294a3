use crate::core::PixelPoint;
use crate::error::{RadarError, RadarResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels plus a 0..=1 alpha, CSS `rgba()` style.
    #[must_use]
    pub const fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    /// CSS `rgba(r,g,b,a)` notation with 8-bit channels.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "rgba({},{},{},{})",
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
            trim_float(self.alpha)
        )
    }

    pub fn validate(self) -> RadarResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RadarError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn trim_float(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> RadarResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(RadarError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RadarError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Closed path through `points`, optionally filled.
///
/// Fewer than three vertices are legal and draw as a dot or segment, which is
/// how one- and two-axis charts degrade.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub points: Vec<PixelPoint>,
    pub fill_color: Option<Color>,
    pub stroke_color: Color,
    /// `0` draws no outline.
    pub stroke_width: f64,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn outline(points: Vec<PixelPoint>, stroke_width: f64, stroke_color: Color) -> Self {
        Self {
            points,
            fill_color: None,
            stroke_color,
            stroke_width,
        }
    }

    #[must_use]
    pub fn filled(
        points: Vec<PixelPoint>,
        fill_color: Color,
        stroke_width: f64,
        stroke_color: Color,
    ) -> Self {
        Self {
            points,
            fill_color: Some(fill_color),
            stroke_color,
            stroke_width,
        }
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.points.is_empty() {
            return Err(RadarError::InvalidData(
                "polygon must have at least one vertex".to_owned(),
            ));
        }
        if self.points.iter().any(|point| !point.is_finite()) {
            return Err(RadarError::InvalidData(
                "polygon vertices must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(RadarError::InvalidData(
                "polygon stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(fill) = self.fill_color {
            fill.validate()?;
        }
        self.stroke_color.validate()
    }
}

/// Filled circle, used for vertex markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(
        cx: f64,
        cy: f64,
        radius: f64,
        fill_color: Color,
        border_color: Color,
        border_width: f64,
    ) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill_color,
            border_color,
            border_width,
        }
    }

    pub fn validate(self) -> RadarResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(RadarError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(RadarError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(RadarError::InvalidData(
                "circle border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space. `y` is the vertical center.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub font_weight: u16,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            font_weight: 400,
            color,
            h_align,
        }
    }

    #[must_use]
    pub fn with_font_weight(mut self, font_weight: u16) -> Self {
        self.font_weight = font_weight;
        self
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.text.is_empty() {
            return Err(RadarError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(RadarError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(RadarError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
