//! Build support shared by the toolchain build scripts.
//!
//! Structure:
//! - `toolchain` - the toolchains we know how to build
//! - `host` - build host descriptor
//! - `paths` - source tree path helpers
//! - `harness` - runs build scripts with the shared policy

pub mod harness;
pub mod host;
pub mod paths;
pub mod toolchain;

pub use host::Host;
pub use paths::SourceTree;
pub use toolchain::{Toolchain, ALL_TOOLCHAINS};

use std::path::PathBuf;

/// Settings shared by every build, resolved once from the command line.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    pub host: Host,
    pub tree: SourceTree,
    /// Where `build-gcc.sh` drops its packaged toolchain.
    pub dist_dir: PathBuf,
    pub jobs_arg: String,
}
