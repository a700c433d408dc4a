//! `check` command.

use anyhow::Result;
use csst::{CsstConfig, log};
use std::io::{Write, stdout};

/// Print the rules and pipelines of an already validated config.
pub fn check_config(config: &CsstConfig) -> Result<()> {
    let mut out = stdout().lock();
    for (name, rule) in &config.rules {
        writeln!(out, "rule      {name} ({})", rule.kind())?;
    }
    for (name, stages) in &config.pipelines {
        writeln!(out, "pipeline  {name}: {}", stages.join(" -> "))?;
    }

    log!(
        "check";
        "{} ok: {} rule(s), {} pipeline(s)",
        config.config_path.display(),
        config.rules.len(),
        config.pipelines.len()
    );
    Ok(())
}
