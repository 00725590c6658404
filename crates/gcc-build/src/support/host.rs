//! Build host descriptor.

use clap::ValueEnum;
use std::fmt;

/// Operating system the toolchain binaries are built to run on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Host {
    #[value(name = "linux")]
    Linux,
    #[value(name = "darwin")]
    Darwin,
    #[value(name = "windows")]
    Windows,
    #[value(name = "windows64")]
    Windows64,
}

impl Host {
    pub fn id(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
            Self::Windows64 => "windows64",
        }
    }

    /// Windows toolchains are cross-compiled with MinGW.
    pub fn is_windows(self) -> bool {
        matches!(self, Self::Windows | Self::Windows64)
    }

    /// The host this binary is running on.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows64
        } else if cfg!(target_os = "macos") {
            Self::Darwin
        } else {
            Self::Linux
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_windows() {
        assert!(Host::Windows.is_windows());
        assert!(Host::Windows64.is_windows());
        assert!(!Host::Linux.is_windows());
        assert!(!Host::Darwin.is_windows());
    }

    #[test]
    fn test_ids_match_clap_values() {
        for host in Host::value_variants() {
            let value = host.to_possible_value().unwrap();
            assert_eq!(value.get_name(), host.id());
        }
    }
}
