use anyhow::Result;
use clap::Parser;
use winit::dpi::LogicalSize;

use glint_engine::device::GlInit;
use glint_engine::logging::{init_logging, LoggingConfig};
use glint_engine::render::ShaderApp;
use glint_engine::shader::ShaderSources;
use glint_engine::window::{Runtime, RuntimeConfig};

const VERTEX_SHADER: &str = include_str!("../shaders/quad.vert");
const FRAGMENT_SHADER: &str = include_str!("../shaders/plasma.frag");

/// Fullscreen procedural shader demo.
#[derive(Parser, Debug)]
#[command(name = "glint-demo", version)]
struct Cli {
    /// Window title.
    #[arg(long, default_value = "glint")]
    title: String,

    /// Initial window width (logical pixels).
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Initial window height (logical pixels).
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Animation speed multiplier.
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// Present as fast as possible instead of waiting for vsync.
    #[arg(long)]
    no_vsync: bool,

    /// Log filter in `env_logger` syntax (overrides RUST_LOG).
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let config = RuntimeConfig {
        title: cli.title,
        initial_size: LogicalSize::new(cli.width, cli.height),
        ..RuntimeConfig::default()
    };
    let gl_init = GlInit {
        vsync: !cli.no_vsync,
        ..GlInit::default()
    };

    let app = ShaderApp::new(ShaderSources::new(VERTEX_SHADER, FRAGMENT_SHADER), cli.speed);

    Runtime::run(config, gl_init, app)
}
