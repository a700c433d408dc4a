//! `add` and `remove` commands.

use super::TokenArgs;
use anyhow::Result;
use csst::{add_tokens, debug, remove_tokens};
use std::io::{Write, stdout};

/// Print `args.class` with `args.tokens` added.
pub fn print_added(args: &TokenArgs) -> Result<()> {
    let updated = add_tokens(&args.tokens, &args.class);
    debug!("add"; "`{}` + `{}`", args.class, args.tokens);
    writeln!(stdout().lock(), "{updated}")?;
    Ok(())
}

/// Print `args.class` with `args.tokens` removed.
pub fn print_removed(args: &TokenArgs) -> Result<()> {
    let updated = remove_tokens(&args.tokens, &args.class);
    debug!("remove"; "`{}` - `{}`", args.class, args.tokens);
    writeln!(stdout().lock(), "{updated}")?;
    Ok(())
}
