use crate::error::{RadarError, RadarResult};

use super::{RadarChartConfig, RadarStyle};

pub(super) fn validate_chart_config(config: RadarChartConfig) -> RadarResult<RadarChartConfig> {
    let viewport = config.viewport;
    if !viewport.is_valid() || !viewport.is_square() {
        return Err(RadarError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    for (name, value) in [
        ("layout padding", config.layout_padding_px),
        ("point label padding", config.point_label_padding_px),
        ("point radius", config.point_radius_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(RadarError::InvalidData(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }

    if !config.point_label_font_size_px.is_finite() || config.point_label_font_size_px <= 0.0 {
        return Err(RadarError::InvalidData(
            "point label font size must be finite and > 0".to_owned(),
        ));
    }

    let half = f64::from(viewport.width) / 2.0;
    if config.reserved_radial_px() >= half {
        return Err(RadarError::InvalidData(format!(
            "padding and labels need {}px per side but the viewport only has {half}px",
            config.reserved_radial_px()
        )));
    }

    Ok(config)
}

pub(super) fn validate_radar_style(style: RadarStyle) -> RadarResult<RadarStyle> {
    for color in [
        style.grid_line_color,
        style.angle_line_color,
        style.area_fill_color,
        style.area_border_color,
        style.point_fill_color,
        style.point_border_color,
        style.point_label_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("grid line width", style.grid_line_width),
        ("angle line width", style.angle_line_width),
        ("area border width", style.area_border_width),
        ("point border width", style.point_border_width),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(RadarError::InvalidData(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }

    Ok(style)
}
