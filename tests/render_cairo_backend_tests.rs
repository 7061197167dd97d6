#![cfg(feature = "cairo-backend")]

use mobility_chart::ChartError;
use mobility_chart::api::{ChartConfig, ChartEngine};
use mobility_chart::loader::parse_csv_str;
use mobility_chart::render::CairoRenderer;

const CSV: &str = "\
geo_type,region,transportation_type,alternative_name,2020-01-01,2020-01-02,2020-01-03
country/region,Albania,driving,,110,120,
country/region,Argentina,driving,Argentine,90,95,100
";

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_paths_and_tooltip() {
    let rows = parse_csv_str(CSV).expect("csv");
    let renderer = CairoRenderer::new(960, 500).expect("renderer");
    let mut engine =
        ChartEngine::from_rows(renderer, ChartConfig::default(), &rows).expect("engine init");

    engine.render().expect("render");
    let idle = engine.renderer().last_stats();
    assert_eq!(idle.paths_drawn, 2);
    assert!(idle.lines_drawn > 1);
    assert!(!idle.tooltip_drawn);

    engine.pointer_move(480.0, 250.0).expect("move");
    engine.render().expect("render");
    assert!(engine.renderer().last_stats().tooltip_drawn);

    let mut png = Vec::new();
    engine.into_renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(b"\x89PNG"));
}
