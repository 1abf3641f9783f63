use crate::config::MatchMode;
use crate::filesystem::FileSystemInner;
use crate::node::Handle;
use crate::Result;
use tracing::trace;

impl FileSystemInner {
    /// Resolve `fragment` to a child of `directory`.
    ///
    /// Children are scanned in slot order and the first match wins, so with
    /// [`MatchMode::Substring`] the answer depends on which sibling was
    /// linked first, not on name order.
    pub(crate) fn find(
        &self,
        directory: Handle,
        fragment: &str,
        mode: MatchMode,
    ) -> Result<Option<Handle>> {
        let found = self
            .directory(directory)?
            .children()
            .find(|child| {
                self.arena
                    .get(*child)
                    .is_some_and(|node| mode.matches(node.name(), fragment))
            });

        trace!(
            directory = directory.index(),
            fragment,
            ?mode,
            found = ?found.map(Handle::index),
            "lookup",
        );

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use crate::{FileSystem, FsConfig, FsError, MatchMode};

    #[test]
    fn first_slot_wins_among_overlapping_names() {
        let fs = FileSystem::new(FsConfig::default()).unwrap();
        let root = fs.root();

        let report_b = fs.insert_file(root, "REPORT.B", b"").unwrap();
        let report_a = fs.insert_file(root, "REPORT.A", b"").unwrap();
        let port = fs.insert_directory(root, "PORT").unwrap();

        assert_eq!(
            fs.find(root, "REPORT"),
            Ok(Some(report_b)),
            "slot order, not alphabetical order",
        );
        assert_eq!(fs.find(root, ".A"), Ok(Some(report_a)));
        assert_eq!(
            fs.find(root, "PORT"),
            Ok(Some(report_b)),
            "`REPORT.B` contains `PORT` and sits in an earlier slot",
        );
        assert_eq!(fs.find_with(root, "PORT", MatchMode::Exact), Ok(Some(port)));
        assert_eq!(fs.find(root, "MISSING"), Ok(None));
        assert_eq!(fs.find(root, ""), Ok(Some(report_b)), "empty fragment matches all");
        assert_eq!(fs.find_with(root, "", MatchMode::Exact), Ok(None));
    }

    #[test]
    fn exact_mode_from_config() {
        let fs = FileSystem::new(FsConfig {
            match_mode: MatchMode::Exact,
            ..Default::default()
        })
        .unwrap();
        let root = fs.root();
        let log = fs.insert_file(root, "LOG.TXT", b"").unwrap();

        assert_eq!(fs.find(root, "LOG"), Ok(None));
        assert_eq!(fs.find(root, "LOG.TXT"), Ok(Some(log)));
    }

    #[test]
    fn searching_a_file_fails() {
        let fs = FileSystem::new(FsConfig::default()).unwrap();
        let file = fs.insert_file(fs.root(), "LOG.TXT", b"").unwrap();

        assert_eq!(fs.find(file, "LOG"), Err(FsError::NotADirectory));
    }

    #[test]
    fn empty_directory_finds_nothing() {
        let fs = FileSystem::new(FsConfig::default()).unwrap();

        assert_eq!(fs.find(fs.root(), "ANYTHING"), Ok(None));
    }
}
