use clap::{Parser, ValueEnum};
use std::{io::Write, path::PathBuf, thread, time::Duration};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use voltage::{
    host::manual::{ManualScheduler, RecordingTarget, SharedContainer},
    BoltAnimator, BoltConfig, FrameOutcome, Orientation,
};

/// How often the simulated display refreshes.
const REFRESH_INTERVAL: Duration = Duration::from_micros(16_667);

/// The layers drawn for each bolt, bottom to top.
const LAYERS: [&str; 2] = ["glow", "core"];

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// The path data of each frame, one per line
    Path,

    /// A standalone SVG document per frame
    Svg,
}

/// Run an electricity bolt against a simulated 60Hz display and print every frame it draws.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Width of the container
    #[arg(long, default_value_t = 400.0)]
    width: f64,

    /// Height of the container
    #[arg(long, default_value_t = 100.0)]
    height: f64,

    /// A YAML file with the bolt's initial parameters
    #[arg(short, long, env = "VOLTAGE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured orientation (horizontal or vertical)
    #[arg(long)]
    orientation: Option<Orientation>,

    /// Override the configured number of branch points
    #[arg(long)]
    branch_points: Option<u32>,

    /// Override the configured spread, in percent of the cross axis
    #[arg(long)]
    spread: Option<f64>,

    /// Override the configured frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// How many frames to draw before exiting
    #[arg(short = 'n', long, default_value_t = 25)]
    frames: usize,

    /// What to print for every frame
    #[arg(long, value_enum, default_value_t = OutputFormat::Path)]
    format: OutputFormat,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<BoltConfig> {
        let mut config = match &self.config {
            Some(path) => BoltConfig::load(path)?,
            None => BoltConfig::default(),
        };
        if let Some(orientation) = self.orientation {
            config.orientation = orientation;
        }
        if let Some(branch_points) = self.branch_points {
            config.branch_points = branch_points;
        }
        if let Some(spread) = self.spread {
            config.spread_percent = spread;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        config.validate()?;
        Ok(config)
    }
}

fn render_svg(width: f64, height: f64, target: &RecordingTarget) -> String {
    let mut svg = format!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#);
    for (name, data) in LAYERS.iter().zip(target.layers()) {
        let data = data.unwrap_or_default();
        svg.push_str(&format!(r#"<path class="{name}" fill="none" d="{data}"/>"#));
    }
    svg.push_str("</svg>");
    svg
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let target = RecordingTarget::new(LAYERS.len());
    let scheduler = ManualScheduler::new();
    let mut animator = BoltAnimator::from_config(
        &config,
        Box::new(target.clone()),
        Box::new(SharedContainer::new(cli.width, cli.height)),
        Box::new(scheduler.clone()),
    );
    debug!(?config, "starting preview");

    let mut stdout = std::io::stdout().lock();
    let mut rendered = 0;
    animator.start();
    while rendered < cli.frames {
        thread::sleep(REFRESH_INTERVAL);
        if scheduler.take_pending().is_none() {
            break;
        }
        if animator.on_frame() != FrameOutcome::Rendered {
            continue;
        }
        rendered += 1;
        match cli.format {
            OutputFormat::Path => writeln!(stdout, "{}", target.layer(0).unwrap_or_default())?,
            OutputFormat::Svg => writeln!(stdout, "{}", render_svg(cli.width, cli.height, &target))?,
        }
    }
    animator.stop();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    run(Cli::parse())
}
