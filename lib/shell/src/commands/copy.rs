use super::report;
use crate::output::{Output, Tone};
use ram_fs::Session;

/// `COPY <source> <destination>`
pub(super) fn run(session: &mut Session, arguments: &str, out: &mut dyn Output) {
    match session.copy(arguments) {
        Ok(_) => out.line("File copied successfully.", Tone::Success),
        Err(error) => report(out, error),
    }
}
