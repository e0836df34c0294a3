use stat_radar::api::{AnimationConfig, RadarChartConfig, RadarSurface};
use stat_radar::core::{StatPoint, StatSeries, Viewport};
use stat_radar::error::{RadarError, RadarResult};
use stat_radar::render::{NullRenderer, RenderFrame, Renderer};

fn series(points: &[(&str, f64)]) -> StatSeries {
    points
        .iter()
        .map(|(label, value)| StatPoint::new(*label, *value))
        .collect()
}

#[test]
fn rerender_leaves_exactly_one_instance_styled_by_latest_series() {
    let mut surface =
        RadarSurface::new(NullRenderer::default(), RadarChartConfig::default()).expect("init");

    let first_id = surface
        .render(&series(&[("Strength", 7.0), ("Agility", 12.0), ("Wisdom", 3.0)]))
        .expect("first render")
        .id();
    let second = surface
        .render(&series(&[("Strength", 260.0), ("Agility", 40.0), ("Wisdom", 90.0)]))
        .expect("second render");
    let second_id = second.id();

    assert!(second_id > first_id);
    assert_eq!(second.axis_max(), 300.0);
    assert_eq!(surface.live_instance_count(), 1);
    assert_eq!(surface.current().map(|c| c.id()), Some(second_id));

    let renderer = surface.into_renderer();
    assert_eq!(renderer.render_count, 2);
    assert_eq!(renderer.clear_count, 2, "every render releases the slot first");
    assert!(renderer.has_live_drawing());
    let frame = renderer.last_frame.expect("frame kept");
    assert_eq!(frame.texts[0].text, "Strength");
}

#[test]
fn render_coerces_non_finite_values_to_zero() {
    let mut surface =
        RadarSurface::new(NullRenderer::default(), RadarChartConfig::default()).expect("init");
    let instance = surface
        .render(&series(&[("A", f64::NAN), ("B", f64::INFINITY), ("C", 11.0)]))
        .expect("render");
    assert_eq!(instance.values(), &[0.0, 0.0, 11.0]);
    assert_eq!(instance.axis_max(), 25.0);
}

#[test]
fn destroy_empties_the_surface() {
    let mut surface =
        RadarSurface::new(NullRenderer::default(), RadarChartConfig::default()).expect("init");
    surface
        .render(&series(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]))
        .expect("render");
    surface.destroy();

    assert_eq!(surface.live_instance_count(), 0);
    assert!(!surface.renderer().has_live_drawing());
}

#[derive(Debug, Default)]
struct FlakyClearRenderer {
    inner: NullRenderer,
    failed_clears: usize,
}

impl Renderer for FlakyClearRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RadarResult<()> {
        self.inner.render(frame)
    }

    fn clear(&mut self) -> RadarResult<()> {
        self.failed_clears += 1;
        Err(RadarError::InvalidData("surface already detached".to_owned()))
    }
}

#[test]
fn destroy_failures_are_swallowed() {
    let mut surface =
        RadarSurface::new(FlakyClearRenderer::default(), RadarChartConfig::default())
            .expect("init");
    surface
        .render(&series(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]))
        .expect("first render despite failing clear");
    surface
        .render(&series(&[("A", 4.0), ("B", 5.0), ("C", 6.0)]))
        .expect("second render despite failing clear");

    assert_eq!(surface.live_instance_count(), 1);
    let renderer = surface.into_renderer();
    assert_eq!(renderer.failed_clears, 2);
    assert_eq!(renderer.inner.render_count, 2);
}

#[derive(Debug, Default)]
struct RejectingRenderer {
    clears: usize,
}

impl Renderer for RejectingRenderer {
    fn render(&mut self, _frame: &RenderFrame) -> RadarResult<()> {
        Err(RadarError::InvalidData("backend lost".to_owned()))
    }

    fn clear(&mut self) -> RadarResult<()> {
        self.clears += 1;
        Ok(())
    }
}

#[test]
fn failed_draw_leaves_no_live_instance() {
    let mut surface =
        RadarSurface::new(RejectingRenderer::default(), RadarChartConfig::default())
            .expect("init");
    let err = surface
        .render(&series(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]))
        .expect_err("render must fail");
    assert!(matches!(err, RadarError::InvalidData(_)));
    assert!(surface.current().is_none());
    assert_eq!(surface.renderer().clears, 2, "released before and after the failed draw");
}

#[test]
fn animated_render_plays_frames_then_settles() {
    let config = RadarChartConfig::default().with_animation(AnimationConfig::default());
    let mut surface = RadarSurface::new(NullRenderer::default(), config).expect("init");
    let settled = surface
        .render_animated(&series(&[("A", 5.0), ("B", 8.0), ("C", 2.0)]), 60)
        .expect("animated render")
        .frame()
        .clone();

    let renderer = surface.into_renderer();
    // 700ms at 60fps
    assert_eq!(renderer.render_count, 42);
    assert_eq!(renderer.last_frame, Some(settled));
}

#[test]
fn disabled_animation_draws_once() {
    let config = RadarChartConfig::default().with_animation(AnimationConfig::disabled());
    let mut surface = RadarSurface::new(NullRenderer::default(), config).expect("init");
    surface
        .render_animated(&series(&[("A", 5.0), ("B", 8.0), ("C", 2.0)]), 60)
        .expect("render");
    assert_eq!(surface.renderer().render_count, 1);
}

#[test]
fn surface_rejects_non_square_or_empty_viewports() {
    let mut config = RadarChartConfig::default();
    config.viewport = Viewport::new(340, 200);
    let err = RadarSurface::new(NullRenderer::default(), config)
        .err()
        .expect("non-square must fail");
    assert!(matches!(err, RadarError::InvalidViewport { .. }));

    let err = RadarSurface::new(NullRenderer::default(), RadarChartConfig::new(0))
        .err()
        .expect("empty must fail");
    assert!(matches!(err, RadarError::InvalidViewport { .. }));
}
