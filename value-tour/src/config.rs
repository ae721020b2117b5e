use clap::Parser;

/// Prints what two adder closures return, optionally followed by a tour of value categories.
#[derive(Clone, Debug, Default, Parser)]
#[command(name = "value-tour", version)]
pub struct Config {
    /// List every value of the catalog after the closure results
    #[arg(long)]
    pub catalog: bool,

    /// Tour the native types after the closure results
    #[arg(long)]
    pub native: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// The least severe level that should be logged, if `RUST_LOG` doesn't say otherwise.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
