use std::io::{stdout, Write};

use anyhow::Context;
use clap::Parser;
use value_tour::{config::Config, program};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    let mut out = stdout().lock();
    program::run(&config, &mut out)?;
    out.flush().context("failed to flush stdout")
}
