//! GCC toolchain builder.
//!
//! Builds each selected toolchain by handing `build-gcc.sh` the paths and
//! flags for that target. The script does the real work.

use crate::support::harness::{self, Executor};
use crate::support::{BuildConfig, Toolchain, ALL_TOOLCHAINS};
use anyhow::{Context, Result};

/// GCC release every toolchain is built from.
pub const GCC_VERSION: &str = "4.9";

const BUILD_SCRIPT: &str = "build-gcc.sh";

/// The one requested toolchain, or all of them in build order.
pub fn selected_toolchains(only: Option<Toolchain>) -> Vec<Toolchain> {
    match only {
        Some(toolchain) => vec![toolchain],
        None => ALL_TOOLCHAINS.to_vec(),
    }
}

/// Toolchain name qualified with the GCC version, e.g. `x86-4.9`.
pub fn versioned_name(toolchain: Toolchain) -> String {
    format!("{}-{GCC_VERSION}", toolchain.name())
}

/// Command line for one `build-gcc.sh` run.
pub fn build_command(toolchain: Toolchain, config: &BuildConfig) -> Vec<String> {
    let tree = &config.tree;
    let sysroot_arg = format!("--sysroot={}", tree.sysroot_path(toolchain).display());

    let mut cmd = vec![
        "bash".to_string(),
        BUILD_SCRIPT.to_string(),
        tree.toolchain_path().display().to_string(),
        tree.ndk_path().display().to_string(),
        versioned_name(toolchain),
        config.jobs_arg.clone(),
        sysroot_arg,
        "--try-64".to_string(),
    ];

    if config.host.is_windows() {
        cmd.push("--mingw".to_string());
    }

    cmd
}

/// Build the selected toolchains one after another, stopping at the first failure.
pub fn build(only: Option<Toolchain>, config: &BuildConfig, executor: &mut dyn Executor) -> Result<()> {
    let toolchains = selected_toolchains(only);
    let names: Vec<_> = toolchains.iter().map(|t| t.name()).collect();
    println!("Building {} toolchains: {}", config.host, names.join(" "));

    for toolchain in toolchains {
        log::info!(
            "Building {} ({})",
            versioned_name(toolchain),
            toolchain.triple()
        );
        let cmd = build_command(toolchain, config);
        harness::build(&cmd, config, executor)
            .with_context(|| format!("Failed to build {}", versioned_name(toolchain)))?;
    }

    Ok(())
}
