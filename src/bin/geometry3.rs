use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};

    #[derive(Debug, Parser)]
    #[command(about = "Vectors, matrices and quaternions for 3D graphics", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        #[cfg(feature = "benchmark")]
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run
            #[arg(short, long, value_enum)]
            target: geometry3::benchmark::Target,

            /// Number of seconds to run the target for (it will always be run
            /// at least once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from program start until the target
            /// is run
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run a benchmarking target (requires the `benchmark` feature)
        Benchmark,
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Parsed command line: {cli:?}");

        match cli.command {
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                if !(duration >= 0.0 && delay >= 0.0) {
                    anyhow::bail!(
                        "Duration and delay must be non-negative (got {duration} and {delay})"
                    );
                }
                geometry3::benchmark::benchmark(target, duration, delay);
                Ok(())
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                anyhow::bail!(
                    "The `benchmark` subcommand requires the `benchmark` feature to be enabled."
                )
            }
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
