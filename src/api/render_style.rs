use crate::render::Color;

/// Style contract for the radar frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarStyle {
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    /// Spokes from the center to each axis end.
    pub angle_line_color: Color,
    pub angle_line_width: f64,
    /// Translucent fill of the data polygon.
    pub area_fill_color: Color,
    pub area_border_color: Color,
    pub area_border_width: f64,
    pub point_fill_color: Color,
    pub point_border_color: Color,
    pub point_border_width: f64,
    pub point_label_color: Color,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            grid_line_color: Color::rgba8(255, 224, 197, 0.16),
            grid_line_width: 1.0,
            angle_line_color: Color::rgba8(255, 224, 197, 0.08),
            angle_line_width: 1.0,
            area_fill_color: Color::rgba8(255, 188, 141, 0.20),
            area_border_color: Color::rgba8(217, 138, 82, 0.72),
            area_border_width: 1.1,
            point_fill_color: Color::rgba8(217, 138, 82, 0.9),
            point_border_color: Color::rgba8(255, 255, 255, 0.0),
            point_border_width: 0.0,
            point_label_color: Color::rgba8(0x6b, 0x4f, 0x42, 1.0),
        }
    }
}
