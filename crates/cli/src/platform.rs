//! Host detection, expressed in the tokens V8 uses for its build directories and tools.

use std::fmt;

use crate::{Error, Result};

/// CPU architecture in V8's naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    Arm64,
}

impl Arch {
    /// Maps a machine name such as `x86_64` to the V8 architecture token.
    ///
    /// `aarch64` is the name Linux and Rust target triples give to the same CPU that macOS
    /// reports as `arm64`, so both are accepted.
    pub fn from_machine(machine: &str) -> Result<Self> {
        match machine {
            "x86_64" => Ok(Arch::X64),
            "arm64" | "aarch64" => Ok(Arch::Arm64),
            other => Err(Error::UnsupportedArchitecture(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating system in V8's naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    Mac,
}

impl Os {
    /// Maps an OS name such as `Linux` or `Darwin` to the V8 platform token.
    pub fn from_system(system: &str) -> Result<Self> {
        let lower = system.to_ascii_lowercase();
        match lower.as_str() {
            "linux" => Ok(Os::Linux),
            "darwin" | "macos" => Ok(Os::Mac),
            // target-lexicon renders versioned Apple targets as e.g. `macosx10.7`.
            s if s.starts_with("macosx") => Ok(Os::Mac),
            _ => Err(Error::UnsupportedOs(system.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Mac => "mac",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub arch: Arch,
    pub os: Os,
}

impl Platform {
    pub fn new(arch: Arch, os: Os) -> Self {
        Self { arch, os }
    }

    /// Detects the platform this binary was built for.
    pub fn detect() -> Result<Self> {
        let host = target_lexicon::HOST;
        Self::from_host_strings(&host.architecture.to_string(), &host.operating_system.to_string())
    }

    pub fn from_host_strings(machine: &str, system: &str) -> Result<Self> {
        Ok(Self::new(Arch::from_machine(machine)?, Os::from_system(system)?))
    }

    /// Name of the release output directory under `out/`, e.g. `x64.release`.
    pub fn release_dir_name(&self) -> String {
        format!("{}.release", self.arch)
    }

    /// Name of the tick processor script under `tools/`, e.g. `linux-tick-processor`.
    pub fn tick_processor_name(&self) -> String {
        format!("{}-tick-processor", self.os)
    }
}
