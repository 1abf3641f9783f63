use super::COMMANDS;
use crate::output::{Output, Tone};

/// `HELP`
pub(super) fn run(out: &mut dyn Output) {
    out.line("Available commands:", Tone::Heading);

    for info in COMMANDS {
        out.write(&format!("  {:<6}", info.keyword), Tone::Status);
        out.line(&format!(" {}", info.description), Tone::Plain);
    }
}
