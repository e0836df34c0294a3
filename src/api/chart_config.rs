use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{RadarError, RadarResult};

pub const DEFAULT_CANVAS_PX: u32 = 340;

/// Easing curve applied to the entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOutQuad,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve. Out-of-range input is clamped.
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        let t = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            1.0
        };
        match self {
            Self::Linear => t,
            Self::EaseOutQuad => t * (2.0 - t),
        }
    }
}

/// Entrance animation played on every (re)draw. `duration_ms == 0` disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub duration_ms: u32,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 700,
            easing: Easing::EaseOutQuad,
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            duration_ms: 0,
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.duration_ms > 0
    }

    /// Number of frames needed to play the animation at `frames_per_second`,
    /// counting the final frame. Always at least one.
    #[must_use]
    pub fn frame_count(self, frames_per_second: u32) -> usize {
        if !self.is_enabled() || frames_per_second == 0 {
            return 1;
        }
        let frames = (u64::from(self.duration_ms) * u64::from(frames_per_second)).div_ceil(1000);
        usize::try_from(frames.max(1)).unwrap_or(usize::MAX)
    }
}

/// Presentation setup for one radar surface.
///
/// This type is serializable so hosts can keep chart setup next to their own
/// configuration. The viewport is fixed by the caller and never resized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_layout_padding_px")]
    pub layout_padding_px: f64,
    #[serde(default = "default_point_label_padding_px")]
    pub point_label_padding_px: f64,
    #[serde(default = "default_point_label_font_size_px")]
    pub point_label_font_size_px: f64,
    #[serde(default = "default_point_label_font_weight")]
    pub point_label_font_weight: u16,
    /// Vertex marker radius; `0` disables markers.
    #[serde(default = "default_point_radius_px")]
    pub point_radius_px: f64,
    #[serde(default = "default_grid_ring_count")]
    pub grid_ring_count: u32,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Default for RadarChartConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_PX)
    }
}

impl RadarChartConfig {
    /// Creates a square chart of `size_px` with default presentation values.
    #[must_use]
    pub fn new(size_px: u32) -> Self {
        Self {
            viewport: Viewport::square(size_px),
            layout_padding_px: default_layout_padding_px(),
            point_label_padding_px: default_point_label_padding_px(),
            point_label_font_size_px: default_point_label_font_size_px(),
            point_label_font_weight: default_point_label_font_weight(),
            point_radius_px: default_point_radius_px(),
            grid_ring_count: default_grid_ring_count(),
            animation: AnimationConfig::default(),
        }
    }

    #[must_use]
    pub fn with_layout_padding_px(mut self, padding: f64) -> Self {
        self.layout_padding_px = padding;
        self
    }

    #[must_use]
    pub fn with_point_label_padding_px(mut self, padding: f64) -> Self {
        self.point_label_padding_px = padding;
        self
    }

    #[must_use]
    pub fn with_point_label_font_size_px(mut self, size: f64) -> Self {
        self.point_label_font_size_px = size;
        self
    }

    #[must_use]
    pub fn with_point_radius_px(mut self, radius: f64) -> Self {
        self.point_radius_px = radius;
        self
    }

    #[must_use]
    pub fn with_grid_ring_count(mut self, count: u32) -> Self {
        self.grid_ring_count = count;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn markers_enabled(self) -> bool {
        self.point_radius_px > 0.0
    }

    /// Space kept free between the viewport edge and the outermost grid ring:
    /// layout padding, label padding, and a band for the labels themselves.
    #[must_use]
    pub fn reserved_radial_px(self) -> f64 {
        self.layout_padding_px + self.point_label_padding_px + 2.0 * self.point_label_font_size_px
    }

    pub fn to_json_pretty(self) -> RadarResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| RadarError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    pub fn from_json_str(input: &str) -> RadarResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| RadarError::InvalidData(format!("failed to parse chart config: {e}")))
    }
}

fn default_layout_padding_px() -> f64 {
    6.0
}

fn default_point_label_padding_px() -> f64 {
    10.0
}

fn default_point_label_font_size_px() -> f64 {
    11.0
}

fn default_point_label_font_weight() -> u16 {
    600
}

fn default_point_radius_px() -> f64 {
    3.2
}

fn default_grid_ring_count() -> u32 {
    5
}
