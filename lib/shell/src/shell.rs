//! Line dispatch and the interactive loop.

use crate::commands::Command;
use crate::output::{Output, Tone};
use ram_fs::Session;
use std::io::{self, BufRead};
use tracing::debug;

/// What the loop should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug)]
pub struct Shell {
    session: Session,
}

impl Shell {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn banner(&self, out: &mut dyn Output) {
        let rule = "=".repeat(41);

        out.line(&rule, Tone::Heading);
        out.line(&format!("    RAM-DOS Shell {}", crate::VERSION), Tone::Heading);
        out.line("    Hierarchical File System Active", Tone::Heading);
        out.line(&rule, Tone::Heading);
        out.line("", Tone::Plain);

        match self.session.current_dir_name() {
            Ok(name) => out.line(
                &format!("[SYSTEM]: F/S Initialized. Current Dir: {name}."),
                Tone::Success,
            ),
            Err(error) => crate::commands::report(out, error),
        }
    }

    pub fn prompt(&self) -> String {
        match self.session.current_path() {
            Ok(path) => format!("RAM:{path}> "),
            Err(_) => "RAM> ".to_owned(),
        }
    }

    /// Run one command line: the first word picks the command, the rest
    /// (leading whitespace removed) is its argument string.
    pub fn execute(&mut self, line: &str, out: &mut dyn Output) -> Flow {
        let line = line.trim();
        if line.is_empty() {
            return Flow::Continue;
        }

        let (keyword, arguments) = line
            .split_once(char::is_whitespace)
            .map(|(keyword, arguments)| (keyword, arguments.trim_start()))
            .unwrap_or((line, ""));

        match Command::from_keyword(keyword) {
            Some(command) => {
                debug!(?command, arguments, "dispatching");
                command.run(&mut self.session, arguments, out)
            }
            None => {
                out.line(
                    &format!("Unknown command: {keyword}. Type HELP for a list of commands."),
                    Tone::Error,
                );
                Flow::Continue
            }
        }
    }

    /// Read and execute lines until `EXIT` or the end of `input`.
    pub fn run(&mut self, input: impl BufRead, out: &mut dyn Output) -> io::Result<()> {
        out.write(&self.prompt(), Tone::Plain);
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            if self.execute(&line, out) == Flow::Exit {
                return out.flush();
            }

            out.write(&self.prompt(), Tone::Plain);
            out.flush()?;
        }

        out.line("", Tone::Plain);
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::BufferOutput;
    use pretty_assertions::assert_eq;
    use ram_fs::{FileSystem, FsConfig};

    fn shell(config: FsConfig) -> Shell {
        Shell::new(Session::new(FileSystem::bootstrap(config).unwrap()))
    }

    fn run(shell: &mut Shell, line: &str) -> String {
        let mut out = BufferOutput::new();
        assert_eq!(shell.execute(line, &mut out), Flow::Continue);
        out.take()
    }

    #[test]
    fn dir_lists_the_current_directory() {
        let mut shell = shell(FsConfig::default());

        assert_eq!(run(&mut shell, "DIR"), "Directory of RAM:\\\nSYSTEM <DIR>\n");
        assert_eq!(
            run(&mut shell, "dir /s"),
            "Directory of RAM:\\\nSYSTEM <DIR>\n  LOG.TXT  128 bytes\n",
        );
        assert_eq!(
            run(&mut shell, "DIR /S/P"),
            "Directory of RAM:\\\nSYSTEM <DIR>\n  LOG.TXT  128 bytes\n",
            "a combined switch still recurses",
        );
    }

    #[test]
    fn copy_then_list() {
        let mut shell = shell(FsConfig::default());

        assert_eq!(run(&mut shell, "CD SYSTEM"), "Current Dir: SYSTEM\n");
        assert_eq!(
            run(&mut shell, "COPY LOG.TXT NEW.TXT"),
            "File copied successfully.\n",
        );
        assert_eq!(
            run(&mut shell, "DIR"),
            "Directory of RAM:\\SYSTEM\nLOG.TXT  128 bytes\nNEW.TXT  128 bytes\n",
        );
    }

    #[test]
    fn copy_errors() {
        let mut shell = shell(FsConfig {
            capacity: 3,
            ..Default::default()
        });

        assert_eq!(
            run(&mut shell, "COPY LOG.TXT"),
            "Usage: COPY <source> <destination>\n",
        );
        assert_eq!(
            run(&mut shell, "COPY SYSTEM BACKUP"),
            "Source file not found or is a directory.\n",
        );
        run(&mut shell, "CD SYSTEM");
        assert_eq!(run(&mut shell, "COPY LOG.TXT NEW.TXT"), "RAM disk full.\n");
    }

    #[test]
    fn cd_always_reports_the_current_directory() {
        let mut shell = shell(FsConfig::default());

        assert_eq!(run(&mut shell, "CD .."), "Current Dir: RAM_ROOT\n");
        assert_eq!(
            run(&mut shell, "CD NOWHERE"),
            "Directory not found.\nCurrent Dir: RAM_ROOT\n",
        );
        assert_eq!(run(&mut shell, "CD"), "Current Dir: RAM_ROOT\n");
        assert_eq!(run(&mut shell, "cd   SYS"), "Current Dir: SYSTEM\n");
        assert_eq!(shell.prompt(), "RAM:\\SYSTEM> ");
        assert_eq!(run(&mut shell, "CD .."), "Current Dir: RAM_ROOT\n");
    }

    #[test]
    fn help_unknown_and_blank_lines() {
        let mut shell = shell(FsConfig::default());

        let help = run(&mut shell, "HELP");
        assert!(help.starts_with("Available commands:\n"));
        assert!(help.contains("  DIR    List files (supports /S)\n"));
        assert!(help.contains("  CD     Change directory (CD .. supported)\n"));

        assert_eq!(
            run(&mut shell, "FORMAT C:"),
            "Unknown command: FORMAT. Type HELP for a list of commands.\n",
        );
        assert_eq!(run(&mut shell, "   "), "");
    }

    #[test]
    fn cls_and_exit() {
        let mut shell = shell(FsConfig::default());
        let mut out = BufferOutput::new();

        shell.execute("DIR", &mut out);
        assert_eq!(shell.execute("CLS", &mut out), Flow::Continue);
        assert_eq!(out.contents(), "");
        assert_eq!(shell.execute("exit", &mut out), Flow::Exit);
    }

    #[test]
    fn banner_names_the_root() {
        let shell = shell(FsConfig::default());
        let mut out = BufferOutput::new();
        shell.banner(&mut out);

        assert!(
            out.contents()
                .ends_with("[SYSTEM]: F/S Initialized. Current Dir: RAM_ROOT.\n")
        );
    }

    #[test]
    fn run_stops_at_exit() {
        let mut shell = shell(FsConfig::default());
        let mut out = BufferOutput::new();
        let input = "CD SYSTEM\nEXIT\nCD ..\n".as_bytes();

        shell.run(input, &mut out).unwrap();

        assert_eq!(
            out.contents(),
            "RAM:\\> Current Dir: SYSTEM\nRAM:\\SYSTEM> ",
        );
        assert_eq!(shell.session().current_path().unwrap(), "\\SYSTEM");
    }

    #[test]
    fn run_until_end_of_input() {
        let mut shell = shell(FsConfig::default());
        let mut out = BufferOutput::new();

        shell.run("CD SYSTEM\n".as_bytes(), &mut out).unwrap();

        assert_eq!(
            out.contents(),
            "RAM:\\> Current Dir: SYSTEM\nRAM:\\SYSTEM> \n",
        );
    }
}
