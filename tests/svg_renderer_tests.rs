use stat_radar::RadarError;
use stat_radar::api::{RadarChartConfig, RadarSurface};
use stat_radar::core::{StatPoint, StatSeries};
use stat_radar::render::{Color, SvgRenderer};

fn stats() -> StatSeries {
    StatSeries::new(vec![
        StatPoint::new("Agility", 12.0),
        StatPoint::new("Strength & Might", 7.0),
        StatPoint::new("Wisdom", 20.0),
    ])
}

#[test]
fn svg_document_has_fixed_square_size() {
    let mut surface =
        RadarSurface::new(SvgRenderer::new(), RadarChartConfig::default()).expect("init");
    surface.render(&stats()).expect("render");
    let svg = surface.renderer().document();

    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"width="340" height="340" viewBox="0 0 340 340""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn svg_contains_every_primitive() {
    let mut surface =
        RadarSurface::new(SvgRenderer::new(), RadarChartConfig::default()).expect("init");
    surface.render(&stats()).expect("render");
    let renderer = surface.renderer();
    let stats = renderer.last_stats();
    let svg = renderer.document();

    assert_eq!(stats.lines_drawn, 3);
    assert_eq!(stats.polygons_drawn, 6);
    assert_eq!(stats.circles_drawn, 3);
    assert_eq!(stats.texts_drawn, 3);
    assert_eq!(svg.matches("<polygon ").count(), 6);
    assert_eq!(svg.matches("<circle ").count(), 3);
    assert!(svg.contains("Strength &amp; Might"));
    assert!(svg.contains(r#"fill="rgba(255,188,141,0.2)""#));
    assert!(svg.contains(r#"stroke="rgba(217,138,82,0.72)""#));
}

#[test]
fn rerender_replaces_the_document() {
    let mut surface =
        RadarSurface::new(SvgRenderer::new(), RadarChartConfig::default()).expect("init");
    surface.render(&stats()).expect("first render");
    surface
        .render(&StatSeries::new(vec![
            StatPoint::new("Luck", 1.0),
            StatPoint::new("Grit", 2.0),
            StatPoint::new("Focus", 3.0),
            StatPoint::new("Speed", 4.0),
        ]))
        .expect("second render");
    let svg = surface.renderer().document();

    assert_eq!(svg.matches("<svg ").count(), 1);
    assert!(!svg.contains("Agility"));
    assert!(svg.contains("Speed"));
}

#[test]
fn background_is_painted_when_opaque() {
    let mut renderer = SvgRenderer::new();
    renderer
        .set_background(Color::rgb(1.0, 1.0, 1.0))
        .expect("background");
    let mut surface = RadarSurface::new(renderer, RadarChartConfig::default()).expect("init");
    surface.render(&stats()).expect("render");
    assert!(surface.renderer().document().contains("<rect "));
}

#[test]
fn write_to_refuses_empty_documents_and_writes_rendered_ones() {
    let dir = std::env::temp_dir().join(format!("stat-radar-svg-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("radar.svg");

    let err = SvgRenderer::new().write_to(&path).expect_err("empty must fail");
    assert!(matches!(err, RadarError::InvalidData(_)));

    let mut surface =
        RadarSurface::new(SvgRenderer::new(), RadarChartConfig::default()).expect("init");
    surface.render(&stats()).expect("render");
    surface.renderer().write_to(&path).expect("write");
    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, surface.renderer().document());

    std::fs::remove_dir_all(&dir).expect("cleanup");
}
