mod args;

use anyhow::{anyhow, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sine_pulse::{
    clock::{AnimationClock, Frame},
    config::AnimationConfig,
    driver::AnimationDriver,
    pulse::PulseState,
    ui::WaveUI,
};

use crate::args::{Args, Command};

struct SinePulseApp {
    ui: WaveUI,
}

impl eframe::App for SinePulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui.update(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(error) = self.ui.shutdown() {
            tracing::warn!(%error, "failed to stop the animation driver");
        }
    }
}

fn run_window(config: AnimationConfig) -> anyhow::Result<()> {
    let driver = AnimationDriver::spawn(AnimationClock::new(config))?;
    let ui = WaveUI::new(driver, config);

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::Vec2::new(
            config.layout.width as f32 + 40.0,
            config.layout.height as f32 + 80.0,
        )),
        ..Default::default()
    };

    eframe::run_native(
        "Sine Pulse",
        options,
        Box::new(|_cc| Box::new(SinePulseApp { ui })),
    )
    .map_err(|e| anyhow!("{e}"))?;

    Ok(())
}

#[derive(Debug)]
struct SimulationSummary {
    wraps: usize,
    pulses: usize,
    last: Frame,
}

/// Drives the clock by hand, one tick period at a time.
fn simulate(config: AnimationConfig, ticks: usize) -> SimulationSummary {
    let mut clock = AnimationClock::new(config);
    let mut wraps = 0;
    let mut pulses = 0;
    let mut previous = clock.frame();

    for _ in 0..ticks {
        clock.advance(config.timing.tick_period());
        let frame = clock.frame();

        if frame.position < previous.position {
            wraps += 1;
            tracing::info!(elapsed = ?frame.elapsed, "point wrapped to the start");
        }
        if frame.pulse != previous.pulse {
            if frame.pulse == PulseState::Enlarged {
                pulses += 1;
            }
            tracing::info!(
                elapsed = ?frame.elapsed,
                position = frame.position,
                marker_radius = frame.marker_radius,
                "marker is now {:?}",
                frame.pulse,
            );
        }
        previous = frame;
    }

    clock.teardown();

    SimulationSummary {
        wraps,
        pulses,
        last: previous,
    }
}

fn dump_config(
    config: &AnimationConfig,
    output: Option<&std::path::Path>,
    format: &str,
) -> anyhow::Result<()> {
    let text = match format {
        "toml" => toml::to_string_pretty(config)?,
        "json" => serde_json::to_string_pretty(config)?,
        _ => bail!("Invalid format: {format}"),
    };
    if let Some(output) = output {
        std::fs::write(output, &text)?;
    } else {
        println!("{text}");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = AnimationConfig::default();

    match args.command.unwrap_or(Command::Window) {
        Command::Window => run_window(config)?,
        Command::Simulate { ticks } => {
            let summary = simulate(config, ticks);
            tracing::info!(
                ticks,
                wraps = summary.wraps,
                pulses = summary.pulses,
                position = summary.last.position,
                "simulation finished"
            );
        }
        Command::DumpConfig { output, format } => {
            dump_config(&config, output.as_deref(), &format)?
        }
    }

    Ok(())
}
