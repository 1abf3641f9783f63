//! RAM-DOS: a DOS-style shell over a volatile, fixed-capacity in-memory
//! filesystem.
//!
//! The engine lives in [`ram_fs`]; the command layer and the `ramdos`
//! binary live in [`ramdos_shell`].

#![deny(unused_imports, unused_variables)]

pub use ram_fs as fs;
pub use ramdos_shell as shell;
