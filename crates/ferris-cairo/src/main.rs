use clap::Parser;
use ferris_cairo::{CairoTextMeasure, PixbufIcons, Scene, Theme, draw};
use ferris_wheel::config::{self, WheelConfig};
use ferris_wheel::geometry::degrees_to_radians;
use ferris_wheel::{FerrisWheel, GestureEvent, LayoutEngine, MenuItem, Point};
use std::path::{Path, PathBuf};

/// Largest step of a simulated drag, so no single move crosses half a turn.
const DRAG_STEP_DEGREES: f64 = 30.0;
const MARGIN: f64 = 16.0;

#[derive(Parser, Debug)]
#[command(name = "ferris-render", version, about, long_about = None)]
struct Cli {
    /// Config file to read instead of the default location
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// PNG file to write
    #[arg(short = 'o', long, default_value = "ferris.png")]
    output: PathBuf,

    /// Button label (repeatable); overrides the items in the config
    #[arg(short = 'l', long = "label")]
    labels: Vec<String>,

    /// Icon name or path (repeatable); overrides the items in the config
    #[arg(short = 'i', long = "icon")]
    icons: Vec<String>,

    /// Drag the wheel clockwise by this many degrees before rendering
    #[arg(short = 'r', long, default_value_t = 0.0, allow_negative_numbers = true)]
    rotate: f64,

    /// Write the default config file and print its path
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.init_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_or_default(),
    };
    let items = menu_items(&cli, &config)?;
    let diameter = config.diameter;

    let engine = LayoutEngine::new(CairoTextMeasure::new()?, PixbufIcons::default());
    let mut wheel = FerrisWheel::new(Scene::new(), engine, config);
    wheel.create_menu(&items)?;

    wheel.display_default();
    settle(&mut wheel);

    if cli.rotate != 0.0 {
        drag_by(&mut wheel, degrees_to_radians(cli.rotate));
    }

    render(&wheel, diameter, &cli.output)?;
    log::info!("Wrote {}", cli.output.display());
    Ok(())
}

fn menu_items(cli: &Cli, config: &WheelConfig) -> anyhow::Result<Vec<MenuItem>> {
    if cli.labels.is_empty() && cli.icons.is_empty() {
        return Ok(config.menu_items()?);
    }

    Ok(cli
        .labels
        .iter()
        .map(MenuItem::labelled)
        .chain(cli.icons.iter().map(MenuItem::iconic))
        .map(|item| item.with_action(|i| log::info!("Button {} tapped", i)))
        .collect())
}

fn settle(wheel: &mut FerrisWheel<Scene>) {
    for token in wheel.host_mut().settle() {
        wheel.finish_transition(token);
    }
    if let Some(key) = wheel.host_mut().settle_spin() {
        wheel.finish_spin(key);
    }
}

/// Feeds a drag around the rim that turns the wheel by `angle` radians.
fn drag_by(wheel: &mut FerrisWheel<Scene>, angle: f64) {
    let center = wheel.center();
    let radius = wheel.config().diameter / 2.0;
    let on_rim = |a: f64| Point::new(center.x + radius * a.cos(), center.y - radius * a.sin());

    let steps = (angle.abs() / degrees_to_radians(DRAG_STEP_DEGREES)).ceil().max(1.0) as usize;
    wheel.handle(GestureEvent::Began(on_rim(0.0)));
    for step in 1..=steps {
        // clockwise on screen lowers the touch angle
        let a = -angle * step as f64 / steps as f64;
        wheel.handle(GestureEvent::Moved(on_rim(a)));
    }
    wheel.handle(GestureEvent::Ended);
}

fn render(wheel: &FerrisWheel<Scene>, diameter: f64, output: &Path) -> anyhow::Result<()> {
    let side = (diameter + 2.0 * MARGIN).ceil() as i32;
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, side, side)?;
    let cr = cairo::Context::new(&surface)?;

    let center = Point::new(side as f64 / 2.0, side as f64 / 2.0);
    draw(
        &cr,
        wheel.host(),
        &Theme::default(),
        &PixbufIcons::default(),
        center,
        diameter,
    )?;
    drop(cr);

    let mut file = fs_err::File::create(output)?;
    surface.write_to_png(&mut file)?;
    Ok(())
}
