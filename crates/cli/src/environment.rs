use std::path::{Path, PathBuf};

use crate::{
    exec::{verify_path_exists, CommandRunner, FileSystem, Invocation},
    instance::{standard_suite, ProfilingInstance, ENGINE_BINARY},
    platform::{Os, Platform},
    ticks::SummaryScan,
    Error, Result,
};

/// File the engine writes its samples to, relative to the working directory.
pub const TICK_LOG: &str = "v8.log";

const BINUTILS_HINT: &str = "brew install binutils";

/// User-provided inputs to environment resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The V8 checkout holding `out/` and `tools/`.
    pub v8_root: PathBuf,
    /// Directory the engine runs in and writes [`TICK_LOG`] to.
    pub work_dir: PathBuf,
    /// Reference d8 to use instead of searching `$PATH`.
    pub reference_d8: Option<PathBuf>,
    pub script: PathBuf,
    pub script_args: Vec<String>,
    pub summary_scan: SummaryScan,
}

/// Everything a profiling session needs, resolved and validated up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub platform: Platform,
    pub work_dir: PathBuf,
    pub reference_dir: PathBuf,
    pub development_dir: PathBuf,
    pub tick_processor: PathBuf,
    pub tick_processor_args: Vec<String>,
    pub script: PathBuf,
    pub script_args: Vec<String>,
    pub summary_scan: SummaryScan,
}

impl Environment {
    /// Locates both engines and the tick processor, failing on the first missing artifact.
    pub fn resolve(
        platform: Platform,
        settings: Settings,
        runner: &impl CommandRunner,
        fs: &impl FileSystem,
    ) -> Result<Self> {
        let development_dir = settings.v8_root.join("out").join(platform.release_dir_name());
        let reference_dir =
            locate_reference_dir(settings.reference_d8.as_deref(), &settings.work_dir, fs)?;
        let tick_processor = settings.v8_root.join("tools").join(platform.tick_processor_name());
        let tick_processor_args = tick_processor_args(platform.os, runner, fs)?;

        verify_path_exists(
            fs,
            &development_dir.join(ENGINE_BINARY),
            "our V8 release build executable",
        )?;
        verify_path_exists(fs, &tick_processor, "tick processor script for the current platform")?;

        tracing::info!("reference d8: {}", reference_dir.display());
        tracing::info!("development d8: {}", development_dir.display());
        tracing::info!("tick processor: {} {:?}", tick_processor.display(), tick_processor_args);

        Ok(Self {
            platform,
            work_dir: settings.work_dir,
            reference_dir,
            development_dir,
            tick_processor,
            tick_processor_args,
            script: settings.script,
            script_args: settings.script_args,
            summary_scan: settings.summary_scan,
        })
    }

    pub fn tick_log(&self) -> PathBuf {
        self.work_dir.join(TICK_LOG)
    }

    pub fn suite(&self) -> Vec<ProfilingInstance> {
        standard_suite(&self.reference_dir, &self.development_dir)
    }
}

/// Directory containing the reference d8.
///
/// A relative override is taken from `work_dir`, so the directory is never empty.
fn locate_reference_dir(
    reference_d8: Option<&Path>,
    work_dir: &Path,
    fs: &impl FileSystem,
) -> Result<PathBuf> {
    let d8 = match reference_d8 {
        Some(path) => {
            let path = work_dir.join(path);
            verify_path_exists(fs, &path, "reference d8 executable")?;
            path
        }
        None => fs
            .find_executable(ENGINE_BINARY)
            .ok_or_else(|| Error::ReferenceEngineNotFound { binary: ENGINE_BINARY.to_string() })?,
    };
    Ok(d8.parent().map(Path::to_path_buf).unwrap_or_default())
}

/// Extra arguments the platform's tick processor needs.
///
/// On macOS the system `nm` cannot read d8's symbols, so the GNU one from Homebrew is passed.
pub fn tick_processor_args(
    os: Os,
    runner: &impl CommandRunner,
    fs: &impl FileSystem,
) -> Result<Vec<String>> {
    match os {
        Os::Linux => Ok(vec![]),
        Os::Mac => {
            let lookup = Invocation::new("brew").args(["--prefix", "binutils"]);
            let output = runner.run(&lookup).map_err(|source| Error::HelperLookupFailed {
                helper: "binutils",
                hint: BINUTILS_HINT,
                source: Box::new(source),
            })?;
            let nm = PathBuf::from(output.stdout.trim()).join("bin").join("nm");
            verify_path_exists(fs, &nm, "GNU binutils version of nm (brew install binutils)")?;
            Ok(vec![format!("--nm={}", nm.display())])
        }
    }
}
