//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Initialize a langsync configuration file
//! - `import`: Import locale files into the translation store
//! - `find`: Scan source code for translation keys and register missing ones
//! - `export`: Write the translation store back to locale files
//! - `clean`: Remove keys that never received a translation
//! - `reset`: Delete every stored translation
//! - `add`, `edit`, `delete`: Manage individual keys
//! - `list`: Show stored translations
//! - `lookup`: Resolve a key, recording it if it is missing

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::ALL_GROUPS;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match self.command.as_ref()? {
            Command::Import(cmd) => Some(&cmd.common),
            Command::Find(cmd) => Some(&cmd.common),
            Command::Export(cmd) => Some(&cmd.common),
            Command::Clean(cmd) => Some(&cmd.common),
            Command::Reset(cmd) => Some(&cmd.common),
            Command::Add(cmd) => Some(&cmd.common),
            Command::Edit(cmd) => Some(&cmd.common),
            Command::Delete(cmd) => Some(&cmd.common),
            Command::List(cmd) => Some(&cmd.common),
            Command::Lookup(cmd) => Some(&cmd.common),
            Command::Init => None,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Language root containing one directory per locale (overrides config file)
    #[arg(long)]
    pub lang_root: Option<PathBuf>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Translation database path (overrides config file)
    #[arg(long, env = "LANGSYNC_DB")]
    pub db: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    /// Overwrite stored values that differ from the files
    #[arg(long)]
    pub replace: bool,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FindCommand {
    /// Directory to scan (default: sourceRoot from config)
    pub path: Option<PathBuf>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Group to export; `*` exports every group with values
    #[arg(default_value = ALL_GROUPS)]
    pub group: String,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ResetCommand {
    /// Actually delete the translations (default is dry-run)
    #[arg(long)]
    pub apply: bool,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct AddCommand {
    pub group: String,
    /// Keys to create within the group
    #[arg(required = true)]
    pub keys: Vec<String>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct EditCommand {
    pub locale: String,
    pub group: String,
    pub key: String,
    pub value: String,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DeleteCommand {
    pub group: String,
    pub key: String,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only show this group
    pub group: Option<String>,
    /// Only show this locale
    #[arg(long)]
    pub locale: Option<String>,
    /// Only show keys without a translation
    #[arg(long)]
    pub missing: bool,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Key to resolve, e.g. `messages.welcome`
    pub key: String,
    /// Locale to resolve in (default: defaultLocale from config)
    #[arg(long)]
    pub locale: Option<String>,
    /// Do not fall back to the fallback locale
    #[arg(long)]
    pub no_fallback: bool,
    /// Placeholder replacement, e.g. `--with name=Ana`
    #[arg(long = "with", value_name = "NAME=VALUE", value_parser = parse_replacement)]
    pub replacements: Vec<(String, String)>,
    #[command(flatten)]
    pub common: CommonArgs,
}

fn parse_replacement(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .langsyncrc.json configuration file
    Init,
    /// Import locale files into the translation store
    Import(ImportCommand),
    /// Scan source files for translation keys and register the missing ones
    Find(FindCommand),
    /// Export stored translations to locale files
    Export(ExportCommand),
    /// Remove keys that never received a translation
    Clean(CleanCommand),
    /// Delete every stored translation
    Reset(ResetCommand),
    /// Create empty keys in every known locale
    Add(AddCommand),
    /// Set the value of a single translation
    Edit(EditCommand),
    /// Delete a key from every locale
    Delete(DeleteCommand),
    /// List stored translations
    List(ListCommand),
    /// Resolve a key, recording it if no translation exists
    Lookup(LookupCommand),
}
