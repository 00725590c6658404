//! Startup: logging and prerequisite checks.
//!
//! Runs once before any build. Nothing here touches process-wide state
//! beyond installing the logger.

use crate::support::SourceTree;
use anyhow::{bail, Result};

/// Install the logger at `info`, unless `RUST_LOG` says otherwise.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .try_init();
}

/// Check that the tools and scripts a GCC build needs are present.
pub fn check_prerequisites(tree: &SourceTree) -> Result<()> {
    log::debug!("Checking prerequisites under {}", tree.top().display());

    let mut ok = true;

    if which::which("bash").is_err() {
        eprintln!("[FAIL] missing `bash` in PATH");
        ok = false;
    } else {
        eprintln!("[OK] bash");
    }

    let script = tree.gcc_dir().join("build-gcc.sh");
    if script.is_file() {
        eprintln!("[OK] {}", script.display());
    } else {
        eprintln!("[FAIL] missing build script: {}", script.display());
        ok = false;
    }

    if !ok {
        bail!(
            "prerequisite checks failed (is {} the source tree root?)",
            tree.top().display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_script_fails() {
        let top = tempfile::tempdir().unwrap();
        let tree = SourceTree::new(top.path());
        assert!(check_prerequisites(&tree).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_present_script_passes() {
        let top = tempfile::tempdir().unwrap();
        let gcc_dir = top.path().join("toolchain/gcc");
        std::fs::create_dir_all(&gcc_dir).unwrap();
        std::fs::write(gcc_dir.join("build-gcc.sh"), "#!/bin/bash\n").unwrap();

        check_prerequisites(&SourceTree::new(top.path())).unwrap();
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }
}
