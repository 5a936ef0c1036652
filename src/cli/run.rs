//! Command dispatch for the langsync CLI.
//!
//! Each handler builds its own [`CommandContext`](super::context::CommandContext)
//! and returns a [`CommandResult`] that the caller reports.

use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, init::init,
        inspect::{list, lookup},
        maintenance::{add, clean, delete, edit, reset},
        sync::{export, find, import},
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    let Some(command) = command else {
        anyhow::bail!("No command provided. Use --help to see available commands.")
    };
    debug!(?command, "dispatching command");

    match command {
        Command::Init => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            init(&cwd)
        }
        Command::Import(cmd) => import(cmd),
        Command::Find(cmd) => find(cmd),
        Command::Export(cmd) => export(cmd),
        Command::Clean(cmd) => clean(cmd),
        Command::Reset(cmd) => reset(cmd),
        Command::Add(cmd) => add(cmd),
        Command::Edit(cmd) => edit(cmd),
        Command::Delete(cmd) => delete(cmd),
        Command::List(cmd) => list(cmd),
        Command::Lookup(cmd) => lookup(cmd),
    }
}
