use tracing::{debug, trace, warn};

use crate::core::{ChartScale, StatSeries, coerce_finite};
use crate::error::RadarResult;
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::{RadarFrameInput, build_radar_frame};
use super::validation::{validate_chart_config, validate_radar_style};
use super::{RadarChartConfig, RadarStyle};

/// One drawn chart: the data it was built from, the scale chosen for it, and
/// its settled frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    id: u64,
    config: RadarChartConfig,
    style: RadarStyle,
    labels: Vec<String>,
    values: Vec<f64>,
    scale: ChartScale,
    frame: RenderFrame,
}

impl ChartInstance {
    fn build(
        id: u64,
        config: RadarChartConfig,
        style: RadarStyle,
        series: &StatSeries,
    ) -> RadarResult<Self> {
        let labels = series.labels();
        let values: Vec<f64> = series.values().into_iter().map(coerce_finite).collect();
        let scale = ChartScale::from_values(&values);
        let frame = build_radar_frame(&RadarFrameInput {
            config,
            style,
            labels: &labels,
            values: &values,
            scale,
            progress: 1.0,
        })?;

        Ok(Self {
            id,
            config,
            style,
            labels,
            values,
            scale,
            frame,
        })
    }

    /// Monotonic id assigned by the owning surface.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Values after coercion to finite numbers.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn scale(&self) -> ChartScale {
        self.scale
    }

    #[must_use]
    pub fn axis_max(&self) -> f64 {
        self.scale.axis_max()
    }

    /// Settled frame (animation complete).
    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    /// Frame at linear animation `progress` in `[0, 1]`, eased per config.
    pub fn frame_at(&self, progress: f64) -> RadarResult<RenderFrame> {
        let eased = self.config.animation.easing.apply(progress);
        build_radar_frame(&RadarFrameInput {
            config: self.config,
            style: self.style,
            labels: &self.labels,
            values: &self.values,
            scale: self.scale,
            progress: eased,
        })
    }
}

/// Owner of a drawing surface and of the single chart instance bound to it.
///
/// Every render destroys the current instance before creating the next one,
/// so at most one instance is ever live. Taking `&mut self` keeps cycles on
/// one surface from interleaving.
pub struct RadarSurface<R: Renderer> {
    renderer: R,
    config: RadarChartConfig,
    style: RadarStyle,
    current: Option<ChartInstance>,
    next_id: u64,
}

impl<R: Renderer> RadarSurface<R> {
    pub fn new(renderer: R, config: RadarChartConfig) -> RadarResult<Self> {
        let config = validate_chart_config(config)?;
        Ok(Self {
            renderer,
            config,
            style: RadarStyle::default(),
            current: None,
            next_id: 1,
        })
    }

    #[must_use]
    pub fn config(&self) -> RadarChartConfig {
        self.config
    }

    #[must_use]
    pub fn style(&self) -> RadarStyle {
        self.style
    }

    /// Applies to the next render; the live instance keeps its own style.
    pub fn set_style(&mut self, style: RadarStyle) -> RadarResult<()> {
        self.style = validate_radar_style(style)?;
        Ok(())
    }

    #[must_use]
    pub fn current(&self) -> Option<&ChartInstance> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn live_instance_count(&self) -> usize {
        usize::from(self.current.is_some())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Releases the live instance, if any. Backend failures are logged and
    /// ignored: the surface may hold nothing to release.
    pub fn destroy(&mut self) {
        let previous = self.current.take();
        if let Err(err) = self.renderer.clear() {
            warn!(error = %err, "ignoring failure while releasing previous chart");
        }
        if let Some(previous) = previous {
            debug!(instance = previous.id, "destroyed chart instance");
        }
    }

    /// Replaces the live chart with one built from `series`, drawn settled.
    pub fn render(&mut self, series: &StatSeries) -> RadarResult<&ChartInstance> {
        self.render_frames(series, 1)
    }

    /// Like `render`, but plays the entrance animation through the renderer
    /// at `frames_per_second` before settling.
    pub fn render_animated(
        &mut self,
        series: &StatSeries,
        frames_per_second: u32,
    ) -> RadarResult<&ChartInstance> {
        let frames = self.config.animation.frame_count(frames_per_second);
        self.render_frames(series, frames)
    }

    fn render_frames(&mut self, series: &StatSeries, frames: usize) -> RadarResult<&ChartInstance> {
        self.destroy();

        let id = self.next_id;
        self.next_id += 1;
        let instance = ChartInstance::build(id, self.config, self.style, series)?;

        if let Err(err) = self.draw(&instance, frames) {
            // never leave a half-played animation on the surface
            self.destroy();
            return Err(err);
        }

        debug!(
            instance = id,
            axes = instance.labels.len(),
            axis_max = instance.axis_max(),
            frames,
            "rendered radar chart"
        );
        Ok(self.current.insert(instance))
    }

    fn draw(&mut self, instance: &ChartInstance, frames: usize) -> RadarResult<()> {
        for step in 1..frames {
            let progress = step as f64 / frames as f64;
            let frame = instance.frame_at(progress)?;
            trace!(instance = instance.id, progress, "animation frame");
            self.renderer.render(&frame)?;
        }
        self.renderer.render(instance.frame())
    }
}
