//! Entry command implementation.
//!
//! Generates the preview entry-point source for a component descriptor and
//! prints it to stdout, without starting any server.

use crate::cli::EntryArgs;
use crate::commands::utils;
use crate::error::Result;
use loupe_gen::{component_entry, FunctionPropPolicy};

/// Execute the entry command.
pub async fn execute(args: EntryArgs) -> Result<()> {
    let descriptor = utils::read_descriptor(&args.descriptor)?;

    let policy = if args.inline_function_props {
        FunctionPropPolicy::Inline
    } else {
        FunctionPropPolicy::Reject
    };

    let source = component_entry(&descriptor, &args.staging, policy)?;
    print!("{source}");
    Ok(())
}
