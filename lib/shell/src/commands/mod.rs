//! The built-in commands of the shell.
//!
//! Every handler is its own error boundary: it turns an [`FsError`] into a
//! line of output and returns nothing.

mod cd;
mod cls;
mod copy;
mod dir;
mod help;

use crate::output::{Output, Tone};
use crate::shell::Flow;
use ram_fs::{FsError, Session};

/// A row of the `HELP` table.
#[derive(Clone, Copy, Debug)]
pub struct CommandInfo {
    pub keyword: &'static str,
    pub description: &'static str,
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        keyword: "DIR",
        description: "List files (supports /S)",
    },
    CommandInfo {
        keyword: "COPY",
        description: "Copy source to destination",
    },
    CommandInfo {
        keyword: "CD",
        description: "Change directory (CD .. supported)",
    },
    CommandInfo {
        keyword: "CLS",
        description: "Clear screen",
    },
    CommandInfo {
        keyword: "HELP",
        description: "Show this help menu",
    },
    CommandInfo {
        keyword: "EXIT",
        description: "Leave the shell",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Dir,
    Copy,
    Cd,
    Cls,
    Help,
    Exit,
}

impl Command {
    /// Keywords are matched case-insensitively.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword.to_ascii_uppercase().as_str() {
            "DIR" => Self::Dir,
            "COPY" => Self::Copy,
            "CD" => Self::Cd,
            "CLS" => Self::Cls,
            "HELP" => Self::Help,
            "EXIT" => Self::Exit,
            _ => return None,
        })
    }

    pub fn run(self, session: &mut Session, arguments: &str, out: &mut dyn Output) -> Flow {
        match self {
            Self::Dir => dir::run(session, arguments, out),
            Self::Copy => copy::run(session, arguments, out),
            Self::Cd => cd::run(session, arguments, out),
            Self::Cls => cls::run(out),
            Self::Help => help::run(out),
            Self::Exit => return Flow::Exit,
        }

        Flow::Continue
    }
}

/// Write `error` the way the user should read it.
pub(crate) fn report(out: &mut dyn Output, error: FsError) {
    out.line(&describe(error), Tone::Error);
}

fn describe(error: FsError) -> String {
    match error {
        FsError::Usage(usage) => format!("Usage: {usage}"),
        other => {
            let message = other.to_string();
            let mut chars = message.chars();
            match chars.next() {
                Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
                None => message,
            }
        }
    }
}
