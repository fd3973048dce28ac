use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rampart_app::game_loop::{run_session, LoopOptions};
use rampart_app::input::{ChannelInput, ScriptedInput};
use rampart_app::render::{JsonRenderer, NullRenderer, RenderMode, TextRenderer};
use rampart_app::settings;
use rampart_core::ports::{InputSource, Renderer};
use rampart_sim::engine::{SimConfig, SimulationEngine};

#[derive(Parser, Debug)]
#[command(name = "rampart")]
#[command(about = "Headless tower-defense simulation")]
struct Args {
    /// RNG seed; the same seed and intents replay the same session
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// JSON rules file; omitted fields keep their defaults
    #[arg(long)]
    rules: Option<PathBuf>,

    /// JSON intent script: [{ "tick": n, "intent": {...} }, ...]
    #[arg(long, conflicts_with = "stdin")]
    script: Option<PathBuf>,

    /// Read newline-delimited JSON intents from stdin
    #[arg(long)]
    stdin: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = RenderMode::Text)]
    render: RenderMode,

    /// Render every n-th tick
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,

    /// Pace the loop to the simulation tick rate
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let rules = settings::load_rules(args.rules.as_deref())?;
    let mut input: Box<dyn InputSource> = if args.stdin {
        let reader = io::BufReader::new(io::stdin());
        Box::new(ChannelInput::spawn_reader(reader).context("failed to start stdin reader")?)
    } else if let Some(path) = args.script.as_deref() {
        Box::new(settings::load_script(path)?)
    } else {
        Box::new(ScriptedInput::default())
    };

    let mut renderer: Box<dyn Renderer> = match args.render {
        RenderMode::Text => Box::new(TextRenderer::new(io::stdout().lock())),
        RenderMode::Json => Box::new(JsonRenderer::new(io::stdout().lock())),
        RenderMode::None => Box::new(NullRenderer),
    };

    let mut engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        rules,
        ..Default::default()
    })
    .context("invalid rules")?;
    let options = LoopOptions {
        max_ticks: args.max_ticks,
        render_every: args.every,
        realtime: args.realtime,
    };

    info!(seed = args.seed, ?options, "starting session");
    let report = run_session(&mut engine, input.as_mut(), renderer.as_mut(), &options)
        .context("failed to write frame")?;

    let summary = report.final_frame.summary;
    info!(
        ticks = report.ticks,
        stop = ?report.stop,
        terminal = ?report.final_frame.terminal,
        wave = summary.wave,
        score = summary.score,
        money = summary.money,
        lives = summary.lives,
        "session finished"
    );
    Ok(())
}
