//! Execution harness for build scripts.
//!
//! Every build goes through [`prepare`], which applies the policy shared by all
//! NDK build scripts: verbose output, the package directory, and the
//! `ANDROID_*` environment. The [`Executor`] then runs it (or only logs it).

use super::BuildConfig;
use anyhow::{bail, Context, Result};
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

/// A build child that did not exit cleanly.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("`{command}` failed with exit code {code}")]
    Failed { command: String, code: i32 },
    #[error("`{command}` was terminated by a signal")]
    Terminated { command: String },
}

impl HarnessError {
    /// Process exit code to report for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Failed { code, .. } => u8::try_from(*code)
                .ok()
                .filter(|c| *c != 0)
                .unwrap_or(1),
            Self::Terminated { .. } => 1,
        }
    }
}

/// A fully prepared child process invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(&'static str, PathBuf)>,
    pub current_dir: PathBuf,
}

impl BuildCommand {
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.current_dir);
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs prepared build commands.
pub trait Executor {
    fn execute(&mut self, cmd: &BuildCommand) -> Result<()>;
}

/// Spawns the command and waits for it.
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn execute(&mut self, cmd: &BuildCommand) -> Result<()> {
        log::info!("Running: {cmd}");
        log::debug!("  in {}", cmd.current_dir.display());

        let status = cmd
            .to_command()
            .status()
            .with_context(|| format!("Failed to run {}", cmd.program))?;

        if !status.success() {
            let command = cmd.to_string();
            return Err(match status.code() {
                Some(code) => HarnessError::Failed { command, code },
                None => HarnessError::Terminated { command },
            }
            .into());
        }
        Ok(())
    }
}

/// Logs the command instead of running it.
pub struct DryRunExecutor;

impl Executor for DryRunExecutor {
    fn execute(&mut self, cmd: &BuildCommand) -> Result<()> {
        log::info!("Would run: {cmd}");
        Ok(())
    }
}

/// Attach the shared build policy to a script command line.
///
/// `tokens[0]` is the program; the rest are its arguments.
pub fn prepare(tokens: &[String], config: &BuildConfig) -> Result<BuildCommand> {
    let Some((program, rest)) = tokens.split_first() else {
        bail!("Empty build command");
    };

    let mut args = rest.to_vec();
    args.push("--verbose".to_string());
    args.push(format!("--package-dir={}", config.dist_dir.display()));

    let tree = &config.tree;
    Ok(BuildCommand {
        program: program.clone(),
        args,
        env: vec![
            ("NDK_BUILDTOOLS_PATH", tree.ndk_build_tools()),
            ("ANDROID_NDK_ROOT", tree.ndk_path()),
            ("ANDROID_BUILD_TOP", tree.top().to_path_buf()),
        ],
        current_dir: tree.gcc_dir(),
    })
}

/// Prepare and execute one build. Failure is fatal to the caller.
pub fn build(tokens: &[String], config: &BuildConfig, executor: &mut dyn Executor) -> Result<()> {
    let cmd = prepare(tokens, config)?;
    executor.execute(&cmd)
}
