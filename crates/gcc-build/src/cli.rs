use crate::support::paths::{absolute, jobs_arg};
use crate::support::{BuildConfig, Host, SourceTree, Toolchain};
use anyhow::Result;
use clap::{Args, Parser};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Options every NDK build script accepts.
#[derive(Args, Debug)]
pub struct BaseArgs {
    /// Build binaries for the given OS.
    #[arg(long, value_enum, default_value_t = Host::current())]
    pub host: Host,

    /// Directory to place temporary build files [default: <android-top>/out]
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Directory to place the packaged artifact [default: <out-dir>/dist]
    #[arg(long)]
    pub dist_dir: Option<PathBuf>,

    /// Root of the source checkout [default: current directory]
    #[arg(long, env = "ANDROID_BUILD_TOP")]
    pub android_top: Option<PathBuf>,

    /// Parallel make jobs [default: twice the CPU count]
    #[arg(short, long)]
    pub jobs: Option<NonZeroUsize>,

    /// Print the build commands without running them.
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the startup prerequisite checks.
    #[arg(long)]
    pub skip_checks: bool,
}

impl BaseArgs {
    /// Resolve defaults that depend on other arguments.
    pub fn resolve(&self) -> Result<BuildConfig> {
        let tree = SourceTree::resolve(self.android_top.as_deref())?;
        let out_dir = match &self.out_dir {
            Some(dir) => absolute(dir)?,
            None => tree.default_out_dir(),
        };
        let dist_dir = match &self.dist_dir {
            Some(dir) => absolute(dir)?,
            None => out_dir.join("dist"),
        };

        Ok(BuildConfig {
            host: self.host,
            tree,
            dist_dir,
            jobs_arg: jobs_arg(self.jobs),
        })
    }
}

#[derive(Parser, Debug)]
#[command(name = "gcc-build")]
#[command(about = "Builds GCC for Android")]
pub struct Cli {
    #[command(flatten)]
    pub base: BaseArgs,

    /// Toolchain to build. Builds all if not present.
    #[arg(long, value_enum)]
    pub toolchain: Option<Toolchain>,
}
