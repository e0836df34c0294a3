use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::types::{PixelPoint, Viewport};
use crate::error::{RadarError, RadarResult};

/// Polar layout of a radar chart: `axis_count` spokes around a shared center,
/// the first pointing straight up and the rest following clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGeometry {
    center: PixelPoint,
    outer_radius: f64,
    axis_count: usize,
}

impl RadialGeometry {
    /// Fits the chart inside `viewport`, leaving `reserved_px` on every side
    /// for padding and point labels.
    pub fn fit(viewport: Viewport, reserved_px: f64, axis_count: usize) -> RadarResult<Self> {
        if !viewport.is_valid() {
            return Err(RadarError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !reserved_px.is_finite() || reserved_px < 0.0 {
            return Err(RadarError::InvalidData(
                "reserved radial space must be finite and >= 0".to_owned(),
            ));
        }

        let half = f64::from(viewport.width.min(viewport.height)) / 2.0;
        let outer_radius = half - reserved_px;
        if outer_radius <= 0.0 {
            return Err(RadarError::InvalidData(format!(
                "viewport {}x{} leaves no room for the chart after {reserved_px}px of padding",
                viewport.width, viewport.height
            )));
        }

        Ok(Self {
            center: PixelPoint::new(
                f64::from(viewport.width) / 2.0,
                f64::from(viewport.height) / 2.0,
            ),
            outer_radius,
            axis_count,
        })
    }

    #[must_use]
    pub fn center(self) -> PixelPoint {
        self.center
    }

    #[must_use]
    pub fn outer_radius(self) -> f64 {
        self.outer_radius
    }

    #[must_use]
    pub fn axis_count(self) -> usize {
        self.axis_count
    }

    /// Screen angle of `axis` in radians.
    #[must_use]
    pub fn axis_angle(self, axis: usize) -> f64 {
        if self.axis_count == 0 {
            return -FRAC_PI_2;
        }
        -FRAC_PI_2 + TAU * axis as f64 / self.axis_count as f64
    }

    /// Pixel position `radius` pixels out along `axis`.
    #[must_use]
    pub fn point_at(self, axis: usize, radius: f64) -> PixelPoint {
        let angle = self.axis_angle(axis);
        PixelPoint::new(
            self.center.x + radius * angle.cos(),
            self.center.y + radius * angle.sin(),
        )
    }

    /// Pixel position of a normalized `[0, 1]` fraction along `axis`.
    #[must_use]
    pub fn point_at_fraction(self, axis: usize, fraction: f64) -> PixelPoint {
        self.point_at(axis, fraction * self.outer_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::RadialGeometry;
    use crate::core::Viewport;
    use approx::assert_relative_eq;

    #[test]
    fn first_axis_points_up_and_second_of_four_points_right() {
        let geometry = RadialGeometry::fit(Viewport::square(200), 20.0, 4).expect("geometry");
        assert_relative_eq!(geometry.outer_radius(), 80.0);

        let top = geometry.point_at_fraction(0, 1.0);
        assert_relative_eq!(top.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(top.y, 20.0, epsilon = 1e-9);

        let right = geometry.point_at_fraction(1, 0.5);
        assert_relative_eq!(right.x, 140.0, epsilon = 1e-9);
        assert_relative_eq!(right.y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn padding_larger_than_half_the_viewport_is_rejected() {
        assert!(RadialGeometry::fit(Viewport::square(40), 25.0, 3).is_err());
    }
}
