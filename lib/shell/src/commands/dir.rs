use super::report;
use crate::output::{Output, Tone};
use ram_fs::{DirEntry, Session};

/// `DIR [/S]`
pub(super) fn run(session: &Session, arguments: &str, out: &mut dyn Output) {
    let recurse = wants_recursion(arguments);

    let path = match session.current_path() {
        Ok(path) => path,
        Err(error) => return report(out, error),
    };
    out.line(&format!("Directory of RAM:{path}"), Tone::Heading);

    match session.list(recurse) {
        Ok(listing) => listing.for_each(|entry| render(&entry, out)),
        Err(error) => report(out, error),
    }
}

/// `/S` anywhere in the arguments, in either case, asks for a recursive
/// listing, so `DIR /S/P` recurses too.
fn wants_recursion(arguments: &str) -> bool {
    arguments.to_ascii_uppercase().contains("/S")
}

fn render(entry: &DirEntry, out: &mut dyn Output) {
    out.write(&"  ".repeat(entry.depth), Tone::Plain);

    if entry.kind.is_dir() {
        out.write(&entry.name, Tone::Directory);
        out.line(" <DIR>", Tone::Plain);
    } else {
        out.write(&entry.name, Tone::Plain);
        out.write("  ", Tone::Plain);
        out.write(&entry.size.to_string(), Tone::Size);
        out.line(" bytes", Tone::Plain);
    }
}
