//! Source tree path resolution.
//!
//! Every path the build needs hangs off the checkout root (`ANDROID_BUILD_TOP`).
//! The root is resolved once at startup and handed around as a [`SourceTree`].

use super::toolchain::Toolchain;
use anyhow::{Context, Result};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Prebuilt NDK that provides the platform sysroots.
const PREBUILT_NDK: &str = "prebuilts/ndk/current";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceTree {
    top: PathBuf,
}

impl SourceTree {
    pub fn new(top: impl Into<PathBuf>) -> Self {
        Self { top: top.into() }
    }

    /// Use `top` if given, otherwise the current directory.
    pub fn resolve(top: Option<&Path>) -> Result<Self> {
        let top = match top {
            Some(path) => absolute(path)?,
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        Ok(Self::new(top))
    }

    pub fn top(&self) -> &Path {
        &self.top
    }

    pub fn android_path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.top.join(rel)
    }

    pub fn ndk_path(&self) -> PathBuf {
        self.android_path("ndk")
    }

    pub fn ndk_build_tools(&self) -> PathBuf {
        self.android_path("ndk/build/tools")
    }

    pub fn toolchain_path(&self) -> PathBuf {
        self.android_path("toolchain")
    }

    /// Directory holding `build-gcc.sh`; builds run from here.
    pub fn gcc_dir(&self) -> PathBuf {
        self.toolchain_path().join("gcc")
    }

    /// Platform sysroot for the oldest API level the toolchain supports.
    pub fn sysroot_path(&self, toolchain: Toolchain) -> PathBuf {
        self.android_path(PREBUILT_NDK).join(format!(
            "platforms/android-{}/arch-{}",
            toolchain.min_api_level(),
            toolchain.arch()
        ))
    }

    pub fn default_out_dir(&self) -> PathBuf {
        self.android_path("out")
    }
}

/// `-j` argument for make; twice the CPU count unless overridden.
pub fn jobs_arg(jobs: Option<NonZeroUsize>) -> String {
    let jobs = jobs.map_or_else(|| cpus() * 2, NonZeroUsize::get);
    format!("-j{jobs}")
}

fn cpus() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Make a command-line path absolute against the current directory.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("Invalid path: {}", path.display()))
}
