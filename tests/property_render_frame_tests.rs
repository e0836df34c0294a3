use stat_radar::api::{RadarChartConfig, RadarSurface};
use stat_radar::core::{StatPoint, StatSeries};
use stat_radar::render::NullRenderer;
use proptest::prelude::*;

const CENTER: f64 = 170.0;
const OUTER_RADIUS: f64 = 132.0;

proptest! {
    #[test]
    fn radar_frame_is_deterministic_and_stays_inside_the_outer_ring(
        values in prop::collection::vec(-100.0f64..5000.0f64, 1..24)
    ) {
        let series: StatSeries = values
            .iter()
            .enumerate()
            .map(|(i, value)| StatPoint::new(format!("Stat {i:02}"), *value))
            .collect();

        let mut surface = RadarSurface::new(NullRenderer::default(), RadarChartConfig::default())
            .expect("surface init");
        let first = surface.render(&series).expect("first render").frame().clone();
        let second = surface.render(&series).expect("second render").frame().clone();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.lines.len(), values.len());
        prop_assert_eq!(first.circles.len(), values.len());
        prop_assert_eq!(first.texts.len(), values.len());

        let data = first.polygons.last().expect("data polygon");
        prop_assert_eq!(data.points.len(), values.len());
        for vertex in &data.points {
            let distance = (vertex.x - CENTER).hypot(vertex.y - CENTER);
            prop_assert!(distance <= OUTER_RADIUS + 1e-9);
        }
        prop_assert!(first.texts.iter().all(|text| text.x.is_finite() && text.y.is_finite()));
    }
}
