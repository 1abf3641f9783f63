use crate::{FsError, Result};

/// How a name fragment is compared against child names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// A child matches when its name contains the fragment. `..` is detected
    /// the same way, so `CD a..b` navigates to the parent.
    #[default]
    Substring,
    /// A child matches only when its name equals the fragment.
    Exact,
}

impl MatchMode {
    pub fn matches(self, name: &str, fragment: &str) -> bool {
        match self {
            Self::Substring => name.contains(fragment),
            Self::Exact => name == fragment,
        }
    }

    /// Whether a `CD` argument asks for the parent directory.
    pub fn is_parent_request(self, argument: &str) -> bool {
        self.matches(argument, "..")
    }
}

/// Largest accepted arena capacity and children table size. Both are
/// preallocated at boot.
pub const MAX_CAPACITY: usize = 1 << 16;

#[derive(Clone, Debug)]
pub struct FsConfig {
    /// Number of node slots in the arena, the root included.
    pub capacity: usize,
    /// Size of every directory's children table.
    pub max_children: usize,
    /// Longest accepted node name, in characters.
    pub max_name_len: usize,
    /// Largest file content, in bytes.
    pub max_file_size: usize,
    pub match_mode: MatchMode,
}

impl Default for FsConfig {
    fn default() -> Self {
        Self {
            capacity: 128,
            max_children: 16,
            // 12 byte name field, terminator excluded.
            max_name_len: 11,
            max_file_size: 512,
            match_mode: MatchMode::Substring,
        }
    }
}

impl FsConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(FsError::InvalidConfig("capacity must leave room for the root"));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(FsError::InvalidConfig("capacity exceeds 65536 slots"));
        }
        if self.max_children == 0 {
            return Err(FsError::InvalidConfig("directories need at least one child slot"));
        }
        if self.max_children > MAX_CAPACITY {
            return Err(FsError::InvalidConfig("children table exceeds 65536 slots"));
        }
        if self.max_name_len == 0 {
            return Err(FsError::InvalidConfig("names need at least one character"));
        }

        Ok(())
    }
}
