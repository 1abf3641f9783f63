//! The logic for the `ramdos` command line tool.

use crate::logging;
use crate::output::TerminalOutput;
use crate::shell::Shell;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use ram_fs::{FileSystem, FsConfig, MatchMode, Session};
use std::io::{self, IsTerminal};
use tracing::info;

#[derive(Debug, Parser)]
#[clap(
    name = "ramdos",
    about = "DOS-style shell over a volatile in-memory filesystem.",
    version
)]
/// The options for the `ramdos` command line interface
pub struct ShellOptions {
    /// Number of node slots in the RAM disk, the root included
    #[clap(long, env = "RAMDOS_CAPACITY", default_value_t = FsConfig::default().capacity)]
    pub capacity: usize,

    /// Number of entries a single directory can hold
    #[clap(long, env = "RAMDOS_MAX_CHILDREN", default_value_t = FsConfig::default().max_children)]
    pub max_children: usize,

    /// Longest accepted file or directory name, in characters
    #[clap(long, env = "RAMDOS_MAX_NAME_LEN", default_value_t = FsConfig::default().max_name_len)]
    pub max_name_len: usize,

    /// Largest file content, in bytes
    #[clap(long, env = "RAMDOS_MAX_FILE_SIZE", default_value_t = FsConfig::default().max_file_size)]
    pub max_file_size: usize,

    /// How the names given to COPY and CD are matched against directory entries
    #[clap(long = "match", env = "RAMDOS_MATCH", value_enum, default_value_t = NameMatching::Substring)]
    pub matching: NameMatching,

    /// Start with an empty root instead of the demonstration tree
    #[clap(long)]
    pub no_demo: bool,

    /// Don't print the boot banner
    #[clap(long)]
    pub no_banner: bool,

    /// When to color the output
    #[clap(long, env = "RAMDOS_COLOR", value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NameMatching {
    /// A name matches when it contains the argument
    Substring,
    /// A name matches only when it equals the argument
    Exact,
}

impl From<NameMatching> for MatchMode {
    fn from(matching: NameMatching) -> Self {
        match matching {
            NameMatching::Substring => MatchMode::Substring,
            NameMatching::Exact => MatchMode::Exact,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

impl ShellOptions {
    pub fn fs_config(&self) -> FsConfig {
        FsConfig {
            capacity: self.capacity,
            max_children: self.max_children,
            max_name_len: self.max_name_len,
            max_file_size: self.max_file_size,
            match_mode: self.matching.into(),
        }
    }

    /// Boot the RAM disk and serve commands from standard input.
    pub fn execute(&self) -> Result<()> {
        colored::control::set_override(self.color.should_colorize());

        let config = self.fs_config();
        info!(?config, demo = !self.no_demo, "booting RAM disk");
        let fs = if self.no_demo {
            FileSystem::new(config)
        } else {
            FileSystem::bootstrap(config)
        }
        .context("unable to initialize the RAM disk")?;

        let mut shell = Shell::new(Session::new(fs));
        let mut out = TerminalOutput::new(io::stdout().lock());
        if !self.no_banner {
            shell.banner(&mut out);
        }

        shell
            .run(io::stdin().lock(), &mut out)
            .context("the terminal went away")
    }
}

/// The main function for the `ramdos` tool.
pub fn ramdos_main() {
    logging::set_up_logging();

    let options = ShellOptions::parse();
    if let Err(error) = options.execute() {
        eprintln!("{}: {error:?}", "error".red().bold());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_engine() {
        let options = ShellOptions::try_parse_from(["ramdos"]).unwrap();
        let config = options.fs_config();
        let defaults = FsConfig::default();

        assert_eq!(config.capacity, defaults.capacity);
        assert_eq!(config.max_children, defaults.max_children);
        assert_eq!(config.max_name_len, defaults.max_name_len);
        assert_eq!(config.max_file_size, defaults.max_file_size);
        assert_eq!(config.match_mode, MatchMode::Substring);
        assert!(!options.no_demo);
    }

    #[test]
    fn flags_override_defaults() {
        let options = ShellOptions::try_parse_from([
            "ramdos",
            "--capacity",
            "8",
            "--max-children",
            "2",
            "--match",
            "exact",
            "--no-demo",
            "--color",
            "never",
        ])
        .unwrap();
        let config = options.fs_config();

        assert_eq!(config.capacity, 8);
        assert_eq!(config.max_children, 2);
        assert_eq!(config.match_mode, MatchMode::Exact);
        assert!(options.no_demo);
        assert_eq!(options.color, ColorChoice::Never);
    }

    #[test]
    fn rejects_unknown_match_modes() {
        assert!(ShellOptions::try_parse_from(["ramdos", "--match", "glob"]).is_err());
    }
}
