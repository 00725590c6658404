//! # gcc-build
//!
//! Builds the GCC cross toolchains for the NDK.
//!
//! ## Usage
//!
//! ```bash
//! gcc-build                                  # All toolchains for this host
//! gcc-build --toolchain arm-linux-androideabi
//! gcc-build --host windows64 --dist-dir /tmp/dist
//! gcc-build --dry-run                        # Print the build-gcc.sh commands
//! ```
//!
//! The compiler itself is built by `toolchain/gcc/build-gcc.sh`; this binary
//! picks the toolchains, works out their paths, and runs the script once per
//! toolchain. A failing build ends the run with the script's exit code.

use clap::Parser;
use std::process::ExitCode;

mod app;
mod bootstrap;
mod cli;
mod gcc;
mod support;

fn main() -> ExitCode {
    bootstrap::init_logging();
    let cli = cli::Cli::parse();

    match app::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code(&err)
        }
    }
}

/// A failed build script exits us with its own code.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<support::harness::HarnessError>()
        .map_or(ExitCode::FAILURE, |e| ExitCode::from(e.exit_code()))
}
