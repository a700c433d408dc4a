//! `apply` command.
//!
//! Runs a configured rule or pipeline against an in-memory element, once per
//! value, so a sequence of values shows how the class string evolves:
//!
//! ```text
//! $ csst apply items 0 1 2
//! item-0
//! item-1
//! item-n
//! ```

use super::ApplyArgs;
use anyhow::{Context, Result};
use csst::{CsstConfig, Element, Value, debug, run};
use serde::Serialize;
use std::io::Write;

/// One step of `--json` output.
#[derive(Debug, Serialize)]
struct Step<'a> {
    value: &'a Value,
    class: &'a str,
}

/// Apply `args.name` from `config`, printing to stdout.
pub fn run_apply(args: &ApplyArgs, config: &CsstConfig) -> Result<()> {
    let mut out = std::io::stdout().lock();
    apply_to(args, config, &mut out)
}

/// Apply `args.name` from `config`, writing one line per value to `out`.
pub fn apply_to(args: &ApplyArgs, config: &CsstConfig, out: &mut impl Write) -> Result<()> {
    let transform = config
        .build(&args.name)
        .with_context(|| format!("cannot apply `{}`", args.name))?;
    debug!("apply"; "`{}` with {} value(s)", args.name, args.values.len());

    let mut node = Element::new(args.class.as_str());
    for value in &args.values {
        let (value, target) = run(transform.as_ref(), value.clone(), &mut node);
        if args.json {
            let step = Step {
                value: &value,
                class: target.as_str(),
            };
            writeln!(out, "{}", serde_json::to_string(&step)?)?;
        } else {
            writeln!(out, "{}", target.as_str())?;
        }
    }

    Ok(())
}
