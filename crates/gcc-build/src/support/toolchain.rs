//! Toolchain registry - single source of truth for the GCC toolchains we build.
//!
//! Order matters: a full build walks [`ALL_TOOLCHAINS`] front to back.

use clap::ValueEnum;
use std::fmt;

/// A GCC cross toolchain, named the way `build-gcc.sh` expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Toolchain {
    #[value(name = "arm-linux-androideabi")]
    Arm,
    #[value(name = "aarch64-linux-android")]
    Arm64,
    #[value(name = "x86")]
    X86,
    #[value(name = "x86_64")]
    X86_64,
}

/// All known toolchains, in build order.
pub static ALL_TOOLCHAINS: &[Toolchain] = &[
    Toolchain::Arm,
    Toolchain::Arm64,
    Toolchain::X86,
    Toolchain::X86_64,
];

impl Toolchain {
    /// Toolchain directory name (also the `--toolchain` value).
    pub fn name(self) -> &'static str {
        match self {
            Self::Arm => "arm-linux-androideabi",
            Self::Arm64 => "aarch64-linux-android",
            Self::X86 => "x86",
            Self::X86_64 => "x86_64",
        }
    }

    /// Sysroot architecture directory (`arch-<arch>`).
    pub fn arch(self) -> &'static str {
        match self {
            Self::Arm => "arm",
            Self::Arm64 => "arm64",
            Self::X86 => "x86",
            Self::X86_64 => "x86_64",
        }
    }

    pub fn triple(self) -> &'static str {
        match self {
            Self::Arm => "arm-linux-androideabi",
            Self::Arm64 => "aarch64-linux-android",
            Self::X86 => "i686-linux-android",
            Self::X86_64 => "x86_64-linux-android",
        }
    }

    /// Lowest platform level with a prebuilt sysroot for this architecture.
    ///
    /// 64-bit ABIs did not exist before android-21.
    pub fn min_api_level(self) -> u32 {
        if self.is_64_bit() {
            21
        } else {
            16
        }
    }

    pub fn is_64_bit(self) -> bool {
        matches!(self, Self::Arm64 | Self::X86_64)
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_value_enum_order() {
        assert_eq!(Toolchain::value_variants(), ALL_TOOLCHAINS);
    }

    #[test]
    fn test_names_match_clap_values() {
        for toolchain in ALL_TOOLCHAINS {
            let value = toolchain.to_possible_value().unwrap();
            assert_eq!(value.get_name(), toolchain.name());
            assert_eq!(toolchain.to_string(), toolchain.name());
        }
    }

    #[test]
    fn test_clap_value_names() {
        let parsed = Toolchain::from_str("aarch64-linux-android", false).unwrap();
        assert_eq!(parsed, Toolchain::Arm64);
        assert!(Toolchain::from_str("arm", false).is_err());
    }

    #[test]
    fn test_min_api_level() {
        assert_eq!(Toolchain::Arm.min_api_level(), 16);
        assert_eq!(Toolchain::X86.min_api_level(), 16);
        assert_eq!(Toolchain::Arm64.min_api_level(), 21);
        assert_eq!(Toolchain::X86_64.min_api_level(), 21);
    }

    #[test]
    fn test_x86_triple_differs_from_name() {
        assert_eq!(Toolchain::X86.triple(), "i686-linux-android");
        assert_eq!(Toolchain::Arm.triple(), Toolchain::Arm.name());
    }
}
