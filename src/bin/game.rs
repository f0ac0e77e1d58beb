use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use framekit::app::input::{Key, RawEvent, ScriptedEvents};
use framekit::app::renderer::RecordingBackend;
use framekit::app::{Engine, FrameDriver, FrameStatus};
use framekit::demo::{KnightDemo, knight};
use framekit::{EngineConfig, build_info, health};

#[derive(Parser)]
#[command(name = "game", version, about = "Knight walking demo on the framekit frame loop")]
struct Cli {
    /// Configuration profile to load (defaults to APP_PROFILE, then "release")
    #[arg(long)]
    profile: Option<String>,

    /// Number of frames to run headlessly
    #[arg(long, default_value_t = 180)]
    frames: u64,

    /// Run the health checks and exit with their status
    #[arg(long)]
    health: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.health {
        let report = health::run_all_checks();
        health::print_report(&report);
        std::process::exit(report.exit_code());
    }

    let config = match &cli.profile {
        Some(profile) => EngineConfig::load(profile),
        None => EngineConfig::load_from_env(),
    }
    .context("failed to load configuration")?;

    info!(
        profile = %config.profile,
        version = %build_info::version_string(),
        revision = build_info::git_revision(),
        "Starting demo"
    );

    run_demo(config, cli.frames)
}

/// Walk the knight around a square on a headless backend
fn run_demo(config: EngineConfig, frames: u64) -> Result<()> {
    let assets = config.assets.root.clone();
    let window = (config.window.width * 4.0, config.window.height * 3.0);

    let backend = RecordingBackend::new()
        .with_window_size(window.0, window.1)
        .with_texture(assets.join(knight::KNIGHT_TEXTURE), 96, 32)
        .with_texture(assets.join(knight::BACKGROUND_TEXTURE), 128, 128);

    let mut engine = Engine::new(backend, config).context("failed to start engine")?;
    let demo = KnightDemo::new(&mut engine).context("failed to load demo assets")?;
    let mut driver =
        FrameDriver::new(engine, demo, ScriptedEvents::new()).with_fixed_time_step(1.0 / 60.0);

    let leg = (frames / 4).max(1);
    let route = [Key::Right, Key::Down, Key::Left, Key::Up];

    for frame in 0..frames {
        let events = driver.events_mut();
        let current = route[((frame / leg) % 4) as usize];
        if frame % leg == 0 {
            if frame > 0 {
                let previous = route[((frame / leg + 3) % 4) as usize];
                events.push(RawEvent::KeyUp(previous));
            }
            events.push(RawEvent::KeyDown {
                key: current,
                repeat: false,
            });
        }
        if frame + 1 == frames {
            events.push(RawEvent::Quit);
        }

        if driver.step().context("frame failed")? == FrameStatus::Quit {
            break;
        }
    }

    let backend = driver.engine().graphics().backend();
    info!(
        frames = driver.frames(),
        presents = backend.present_count(),
        draws = backend.draw_count(),
        knight = ?driver.game().position(),
        "Demo finished"
    );

    Ok(())
}
