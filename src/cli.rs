use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::prefs::PreferenceId;

#[derive(Debug, Parser)]
#[command(name = "emojishelf", version, about = "Emoji shelf with persisted theme and layout")]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Preference file, overrides the config
    #[arg(long, value_name = "PATH")]
    pub prefs: Option<PathBuf>,

    /// Log file for the interactive UI, overrides the config
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the persisted preferences
    Show,
    /// Persist one preference
    Set {
        #[command(subcommand)]
        setting: SetCommand,
    },
    /// Restore both preferences to their defaults
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum SetCommand {
    Theme { value: ThemeArg },
    Layout { value: LayoutArg },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Linear,
    Grid,
}

impl SetCommand {
    /// The preference and value this command writes.
    pub fn target(&self) -> (PreferenceId, bool) {
        match self {
            Self::Theme { value } => (PreferenceId::DarkTheme, *value == ThemeArg::Dark),
            Self::Layout { value } => (PreferenceId::LinearLayout, *value == LayoutArg::Linear),
        }
    }
}
