use mobility_chart::api::{
    ChartConfig, ChartEngine, ChartStyle, SeriesStyle, draw_order, series_styles,
};
use mobility_chart::core::{Dataset, Viewport};
use mobility_chart::interaction::{HighlightState, HoverState};
use mobility_chart::loader::parse_csv_str;
use mobility_chart::render::{BlendMode, NullRenderer, Renderer, SvgRenderer};

const CSV: &str = "\
geo_type,region,transportation_type,alternative_name,2020-01-01,2020-01-02,2020-01-03
country/region,Albania,driving,,110,120,
country/region,Argentina,driving,Argentine,90,95,100
country/region,Aruba,driving,,100,101,102
";

fn engine<R: Renderer>(renderer: R) -> ChartEngine<R> {
    let rows = parse_csv_str(CSV).expect("csv");
    ChartEngine::from_rows(renderer, ChartConfig::default(), &rows).expect("engine init")
}

fn tracking(series: usize, index: usize) -> HoverState {
    HoverState::Tracking {
        highlight: Some(HighlightState { series, index }),
    }
}

#[test]
fn idle_styles_are_uniform_and_blended() {
    let style = ChartStyle::default();
    let styles = series_styles(3, HoverState::Idle, &style);
    assert!(styles.iter().all(|s| *s
        == SeriesStyle {
            color: style.series_color,
            stroke_width: style.series_stroke_width,
            blend_mode: BlendMode::Multiply,
        }));
    assert_eq!(draw_order(3, HoverState::Idle), vec![0, 1, 2]);
}

#[test]
fn tracking_mutes_everything_but_the_highlight() {
    let style = ChartStyle::default();
    let styles = series_styles(3, tracking(1, 0), &style);

    assert_eq!(styles[1].color, style.series_color);
    assert_eq!(styles[0].color, style.muted_series_color);
    assert_eq!(styles[2].color, style.muted_series_color);
    assert!(styles.iter().all(|s| s.blend_mode == BlendMode::Normal));
    assert_eq!(draw_order(3, tracking(1, 0)), vec![0, 2, 1]);
}

#[test]
fn tracking_without_highlight_mutes_every_series() {
    let style = ChartStyle::default();
    let hover = HoverState::Tracking { highlight: None };
    let styles = series_styles(2, hover, &style);
    assert!(styles.iter().all(|s| s.color == style.muted_series_color));
    assert_eq!(draw_order(2, hover), vec![0, 1]);
}

#[test]
fn idle_frame_has_axes_and_paths_but_no_tooltip() {
    let engine = engine(NullRenderer::default());
    let frame = engine.build_render_frame().expect("frame");

    assert_eq!(frame.viewport, Viewport::new(960, 500));
    assert_eq!(frame.paths.len(), 3);
    assert!(frame.tooltip.is_none());
    assert!(!frame.lines.is_empty());
    assert!(frame.texts.iter().any(|t| t.text == "Country"));
    assert_eq!(
        frame.paths.iter().map(|p| p.series_index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn highlighted_series_is_drawn_last_with_tooltip() {
    let mut engine = engine(NullRenderer::default());
    let x = 30.0;
    let y = engine.map_value_to_pixel(12.0).expect("y");
    let highlight = engine.pointer_move(x, y).expect("move").expect("highlight");
    assert_eq!(highlight, HighlightState { series: 0, index: 0 });

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.draw_position(0), Some(2));
    let top = frame.paths.last().expect("paths");
    assert_eq!(top.color, engine.config().style.series_color);
    assert_eq!(top.blend_mode, BlendMode::Normal);

    let tooltip = frame.tooltip.expect("tooltip");
    assert_eq!(tooltip.label.text, "Albania - 2020-01-01 - 10");
    assert!((tooltip.marker.cx - 30.0).abs() <= 1e-9);
    let expected_y = engine.map_value_to_pixel(10.0).expect("y");
    assert!((tooltip.marker.cy - expected_y).abs() <= 1e-9);
}

#[test]
fn leaving_restores_idle_frame() {
    let mut engine = engine(NullRenderer::default());
    engine.pointer_move(480.0, 250.0).expect("move");
    engine.pointer_leave();
    engine.render().expect("render");

    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.tooltip.is_none());
    assert!(frame.paths.iter().all(|p| p.blend_mode == BlendMode::Multiply));
    assert_eq!(engine.renderer().frames_rendered, 1);
    assert_eq!(engine.renderer().last_path_count, 3);
}

#[test]
fn empty_dataset_renders_axes_only() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartConfig::default(),
        Dataset::empty(),
    )
    .expect("engine init");
    engine.render().expect("render");

    assert_eq!(engine.value_scale().domain(), (0.0, 1.0));
    assert_eq!(engine.renderer().last_path_count, 0);
    assert!(engine.renderer().last_line_count > 0);
    assert!(!engine.renderer().last_tooltip_visible);
}

#[test]
fn svg_document_reflects_hover_state() {
    let mut engine = engine(SvgRenderer::new());
    engine.render().expect("render");
    let idle = engine.renderer().document().to_owned();

    assert!(idle.starts_with("<svg"));
    assert!(idle.contains(r#"viewBox="0 0 960 500""#));
    assert_eq!(idle.matches("<path ").count(), 3);
    assert_eq!(idle.matches("mix-blend-mode: multiply").count(), 3);
    assert!(idle.contains(r##"stroke="#4682b4""##));
    assert!(!idle.contains(r#"class="tooltip""#));
    assert!(idle.contains(r#"data-series="0" d="M30,"#));

    let y = engine.map_value_to_pixel(-5.0).expect("y");
    engine.pointer_move(480.0, y).expect("move");
    engine.render().expect("render");
    let hovered = engine.renderer().document();

    assert!(hovered.contains(r#"class="tooltip""#));
    assert!(hovered.contains("Argentina (Argentine) - 2020-01-02 - -5"));
    assert_eq!(hovered.matches(r##"stroke="#dddddd""##).count(), 2);
    assert!(!hovered.contains("mix-blend-mode"));
    let last_path = hovered.rfind("<path ").expect("path");
    assert!(hovered[last_path..].starts_with(r#"<path data-series="1""#));
}

#[test]
fn svg_escapes_label_text() {
    let csv = "geo_type,region,transportation_type,2020-01-01\ncountry/region,Bosnia & <Herzegovina>,driving,100\n";
    let rows = parse_csv_str(csv).expect("csv");
    let mut engine =
        ChartEngine::from_rows(SvgRenderer::new(), ChartConfig::default(), &rows).expect("engine");
    engine.pointer_move(480.0, 250.0).expect("move");
    engine.render().expect("render");

    let document = engine.renderer().document();
    assert!(document.contains("Bosnia &amp; &lt;Herzegovina&gt;"));
}

#[test]
fn svg_uses_configured_font_family() {
    let mut engine = engine(SvgRenderer::new().with_font_family("Helvetica"));
    engine.pointer_move(480.0, 250.0).expect("move");
    engine.render().expect("render");

    let document = engine.renderer().document();
    assert!(document.contains(r#"<g class="axis-labels" font-family="Helvetica""#));
    assert!(document.contains(r#"<g class="tooltip" font-family="Helvetica""#));
    assert!(!document.contains("sans-serif"));
}

#[test]
fn constant_huge_values_still_build_a_chart() {
    let csv = "geo_type,region,transportation_type,2020-01-01\ncountry/region,Albania,driving,9000000000000000000\n";
    let rows = parse_csv_str(csv).expect("csv");
    let mut engine = ChartEngine::from_rows(NullRenderer::default(), ChartConfig::default(), &rows)
        .expect("engine init");
    engine.render().expect("render");

    assert_eq!(engine.renderer().last_path_count, 1);
    let (low, high) = engine.value_scale().domain();
    assert!(low < high);
}
