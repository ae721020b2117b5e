use std::io::Write;

use anyhow::Context;

use crate::{
    catalog::ValueCatalog, closure::make_adder, config::Config, native,
    runtime_value::RuntimeNumber,
};

/// Runs the tour top to bottom, writing everything meant for the user to `out`.
///
/// Without any flags set, the output is exactly the two adder results `7` and `12`.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = ValueCatalog::new();

    let add5 = make_adder(5.0);
    let add10 = make_adder(10.0);

    writeln!(out, "{}", RuntimeNumber::new(add5.call(2.0))).context("failed to write add5(2)")?;
    writeln!(out, "{}", RuntimeNumber::new(add10.call(2.0)))
        .context("failed to write add10(2)")?;

    if config.catalog {
        log::debug!("listing value catalog");
        for (name, value) in catalog.entries() {
            writeln!(out, "{name}: {} = {value}", value.type_of())
                .with_context(|| format!("failed to write catalog entry {name}"))?;
        }
    }

    if config.native {
        log::debug!("touring native types");
        native::tour(out).context("failed to write native type tour")?;
    }

    Ok(())
}
