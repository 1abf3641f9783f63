use super::report;
use crate::output::{Output, Tone};
use ram_fs::Session;

/// `CD <name>`, `CD ..`, or a bare `CD` which only reports where we are.
///
/// The resulting directory is printed whether or not the change worked.
pub(super) fn run(session: &mut Session, arguments: &str, out: &mut dyn Output) {
    if !arguments.is_empty() {
        if let Err(error) = session.cd(arguments) {
            report(out, error);
        }
    }

    match session.current_dir_name() {
        Ok(name) => {
            out.write("Current Dir: ", Tone::Status);
            out.line(&name, Tone::Status);
        }
        Err(error) => report(out, error),
    }
}
