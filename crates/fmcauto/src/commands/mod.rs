//! Action handlers for the two front ends.

pub mod nat;
pub mod objects;

use clap::CommandFactory;
use clap_complete::Shell;

/// Write a completion script for `C` to stdout.
pub fn print_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    let name = cmd.get_name().to_owned();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
