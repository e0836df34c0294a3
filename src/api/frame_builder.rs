use std::f64::consts::TAU;

use crate::core::{ChartScale, PixelPoint, RadialGeometry};
use crate::error::RadarResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::{RadarChartConfig, RadarStyle};

/// Vertex count used to draw grid rings as circles when the chart has too
/// few axes to form a polygon.
const ROUND_RING_SEGMENTS: usize = 48;

/// Horizontal band around the vertical axis where labels stay centered.
const CENTERED_LABEL_COS: f64 = 0.05;

/// Inputs for one frame; `values` must already be coerced to finite numbers.
pub(super) struct RadarFrameInput<'a> {
    pub config: RadarChartConfig,
    pub style: RadarStyle,
    pub labels: &'a [String],
    pub values: &'a [f64],
    pub scale: ChartScale,
    /// Eased animation progress in `[0, 1]`; `1` is the settled chart.
    pub progress: f64,
}

pub(super) fn build_radar_frame(input: &RadarFrameInput<'_>) -> RadarResult<RenderFrame> {
    let config = input.config;
    let style = input.style;
    let axis_count = input.labels.len();
    let geometry =
        RadialGeometry::fit(config.viewport, config.reserved_radial_px(), axis_count)?;
    let center = geometry.center();

    let mut frame = RenderFrame::new(config.viewport);

    if style.angle_line_width > 0.0 {
        for axis in 0..axis_count {
            let end = geometry.point_at_fraction(axis, 1.0);
            frame = frame.with_line(LinePrimitive::new(
                center.x,
                center.y,
                end.x,
                end.y,
                style.angle_line_width,
                style.angle_line_color,
            ));
        }
    }

    if style.grid_line_width > 0.0 {
        for ring in 1..=config.grid_ring_count {
            let fraction = f64::from(ring) / f64::from(config.grid_ring_count);
            frame = frame.with_polygon(PolygonPrimitive::outline(
                ring_vertices(geometry, fraction),
                style.grid_line_width,
                style.grid_line_color,
            ));
        }
    }

    if axis_count == 0 {
        return Ok(frame);
    }

    let progress = input.progress.clamp(0.0, 1.0);
    let vertices: Vec<PixelPoint> = input
        .values
        .iter()
        .enumerate()
        .map(|(axis, value)| {
            geometry.point_at_fraction(axis, input.scale.normalize(*value) * progress)
        })
        .collect();

    frame = frame.with_polygon(PolygonPrimitive::filled(
        vertices.clone(),
        style.area_fill_color,
        style.area_border_width,
        style.area_border_color,
    ));

    if config.markers_enabled() {
        for vertex in &vertices {
            frame = frame.with_circle(CirclePrimitive::new(
                vertex.x,
                vertex.y,
                config.point_radius_px,
                style.point_fill_color,
                style.point_border_color,
                style.point_border_width,
            ));
        }
    }

    let label_radius = geometry.outer_radius() + config.point_label_padding_px;
    for (axis, label) in input.labels.iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        frame = frame.with_text(point_label(
            geometry,
            axis,
            label_radius,
            label,
            config,
            style.point_label_color,
        ));
    }

    Ok(frame)
}

fn ring_vertices(geometry: RadialGeometry, fraction: f64) -> Vec<PixelPoint> {
    let axis_count = geometry.axis_count();
    if axis_count >= 3 {
        return (0..axis_count)
            .map(|axis| geometry.point_at_fraction(axis, fraction))
            .collect();
    }

    let center = geometry.center();
    let radius = geometry.outer_radius() * fraction;
    (0..ROUND_RING_SEGMENTS)
        .map(|segment| {
            let angle = TAU * segment as f64 / ROUND_RING_SEGMENTS as f64;
            PixelPoint::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

fn point_label(
    geometry: RadialGeometry,
    axis: usize,
    radius: f64,
    label: &str,
    config: RadarChartConfig,
    color: Color,
) -> TextPrimitive {
    let angle = geometry.axis_angle(axis);
    let anchor = geometry.point_at(axis, radius);
    let cos = angle.cos();
    let h_align = if cos > CENTERED_LABEL_COS {
        TextHAlign::Left
    } else if cos < -CENTERED_LABEL_COS {
        TextHAlign::Right
    } else {
        TextHAlign::Center
    };
    // push top/bottom labels clear of the outer ring
    let y = anchor.y + angle.sin() * config.point_label_font_size_px / 2.0;

    TextPrimitive::new(
        label,
        anchor.x,
        y,
        config.point_label_font_size_px,
        color,
        h_align,
    )
    .with_font_weight(config.point_label_font_weight)
}
