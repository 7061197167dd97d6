use mobility_chart::api::{ChartConfig, HostContainer, mount};
use mobility_chart::core::Viewport;
use mobility_chart::render::SvgRenderer;
use mobility_chart::telemetry;

/// Usage: `render_mobility_svg <csv path or url> [out.svg] [pointer-x pointer-y]`
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = telemetry::init_default_tracing();

    let mut args = std::env::args().skip(1);
    let source = args
        .next()
        .ok_or("usage: render_mobility_svg <csv> [out.svg] [x y]")?;
    let output = args.next().unwrap_or_else(|| "mobility.svg".to_owned());
    let pointer = match (args.next(), args.next()) {
        (Some(x), Some(y)) => Some((x.parse::<f64>()?, y.parse::<f64>()?)),
        _ => None,
    };

    let container = HostContainer::new(source, Viewport::new(990, 530));
    let mut engine = mount(&container, ChartConfig::default(), SvgRenderer::new()).await?;

    if let Some((x, y)) = pointer {
        engine.pointer_enter();
        engine.pointer_move(x, y)?;
        if let Some(tooltip) = engine.tooltip()? {
            println!("tracking: {}", tooltip.label);
        }
        engine.render()?;
    }

    println!(
        "series={} time_points={} value_domain={:?}",
        engine.dataset().series().len(),
        engine.dataset().time_axis().len(),
        engine.value_scale().domain()
    );
    std::fs::write(&output, engine.renderer().document())?;
    println!("wrote {output}");

    Ok(())
}
