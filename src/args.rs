use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(about = "A point travelling along a sine wave, pulsing the marker at its end")]
pub struct Args {
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the animation window (default).
    Window,

    /// Run the animation headless and log what happens.
    Simulate {
        #[clap(short, long, default_value_t = 160)]
        ticks: usize,
    },

    /// Print the built-in animation constants.
    DumpConfig {
        #[clap(short, long)]
        output: Option<PathBuf>,
        #[clap(short, long, default_value = "toml")]
        format: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Args, Command};

    #[test]
    fn it_defaults_to_the_window() {
        let args = Args::parse_from(["sine-pulse"]);
        assert!(args.command.is_none());
    }

    #[test]
    fn it_parses_simulate() {
        let args = Args::parse_from(["sine-pulse", "simulate", "--ticks", "290"]);
        assert!(matches!(args.command, Some(Command::Simulate { ticks: 290 })));

        let args = Args::parse_from(["sine-pulse", "simulate"]);
        assert!(matches!(args.command, Some(Command::Simulate { ticks: 160 })));
    }

    #[test]
    fn it_parses_dump_config() {
        let args = Args::parse_from(["sine-pulse", "dump-config", "-f", "json"]);
        match args.command {
            Some(Command::DumpConfig { output, format }) => {
                assert_eq!(output, None);
                assert_eq!(format, "json");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
