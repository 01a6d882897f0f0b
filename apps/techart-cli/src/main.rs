use anyhow::Context;
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;
use techart_input::KeyCode;
use techart_locomotion::{CharacterBody, MotionConfig};
use techart_scene::{InputScript, Scene, SceneConfig, ScriptStep};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "techart-cli", about = "Drive the headless interaction and locomotion scene")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and default tunables
    Info,
    /// Run the scene for a number of frames and report what happened
    Simulate {
        /// Number of rendered frames
        #[arg(short, long, default_value = "120")]
        frames: u64,
        /// Seconds per rendered frame
        #[arg(long, default_value = "0.02")]
        dt: f32,
        /// Scene config JSON; defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Input script JSON; a short demo is used when omitted
        #[arg(short, long)]
        script: Option<PathBuf>,
        /// Dump the event log as JSON at the end
        #[arg(long)]
        events: bool,
    },
    /// Load and validate a scene config
    CheckConfig {
        path: PathBuf,
    },
    /// Print the default scene config as JSON
    DefaultConfig,
}

/// Walk forward, jump once, toggle the light, then stop.
fn demo_script() -> InputScript {
    InputScript::new(vec![
        ScriptStep::at(0).press(KeyCode::W),
        ScriptStep::at(20).press(KeyCode::Space),
        ScriptStep::at(21).release(KeyCode::Space),
        ScriptStep::at(30).press(KeyCode::F),
        ScriptStep::at(31).release(KeyCode::F),
        ScriptStep::at(90).release(KeyCode::W),
    ])
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            let m = MotionConfig::default();
            println!("techart-cli v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "motion: speed={} sprint={} crouch={} jump_force={} jump_duration={}s gravity={}",
                m.speed,
                m.sprint_speed(),
                m.crouch_speed(),
                m.jump_force,
                m.jump_duration,
                m.gravity
            );
            println!("fixed_timestep: {}s", SceneConfig::default().fixed_timestep);
        }
        Commands::Simulate {
            frames,
            dt,
            config,
            script,
            events,
        } => {
            anyhow::ensure!(dt.is_finite() && dt > 0.0, "dt must be positive, got {dt}");
            let config = match config {
                Some(path) => SceneConfig::load(&path)
                    .with_context(|| format!("loading scene config {}", path.display()))?,
                None => SceneConfig::default(),
            };
            let script = match script {
                Some(path) => InputScript::load(&path)
                    .with_context(|| format!("loading input script {}", path.display()))?,
                None => demo_script(),
            };

            let mut scene = Scene::new(config)?;
            tracing::info!(frames, dt, "simulation started");
            println!("Simulating {frames} frames at dt={dt}");
            for _ in 0..frames {
                script.apply(scene.frame_count(), scene.input_mut());
                scene.frame(dt);
                let p = scene.position();
                println!(
                    "frame={:>4} tick={:>4} pos=({:>7.3}, {:>7.3}, {:>7.3}) grounded={:<5} phase={}",
                    scene.frame_count(),
                    scene.tick(),
                    p.x,
                    p.y,
                    p.z,
                    scene.player().body().is_grounded(),
                    scene.phase()
                );
            }

            tracing::info!(
                ticks = scene.tick(),
                events = scene.events().len(),
                "simulation finished"
            );
            let mut summary: BTreeMap<&str, usize> = BTreeMap::new();
            for event in scene.events() {
                *summary.entry(event.kind()).or_default() += 1;
            }
            println!("Events:");
            for (kind, n) in &summary {
                println!("  {kind}: {n}");
            }
            println!(
                "light_on={} door_open={} hash={:#x}",
                scene.light_on(),
                scene.door().is_open(),
                scene.state_hash()
            );
            if events {
                println!("{}", serde_json::to_string_pretty(scene.events())?);
            }
        }
        Commands::CheckConfig { path } => {
            let config = SceneConfig::load(&path)
                .with_context(|| format!("checking {}", path.display()))?;
            tracing::debug!(spawn = ?config.spawn, light_on = config.light_on, "config parsed");
            println!(
                "OK: {} (fixed_timestep={}s, {} ceilings)",
                path.display(),
                config.fixed_timestep,
                config.level.ceilings.len()
            );
        }
        Commands::DefaultConfig => {
            println!("{}", SceneConfig::default().to_json()?);
        }
    }

    Ok(())
}
