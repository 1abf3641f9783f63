//! The `ramdos` shell: a DOS-flavoured command line over a [`ram_fs`]
//! RAM disk.

#![deny(
    dead_code,
    nonstandard_style,
    unused_mut,
    unused_variables,
    unused_unsafe,
    unreachable_patterns
)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
pub mod shell;

/// Version number of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
