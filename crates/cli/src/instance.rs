use std::path::{Path, PathBuf};

use crate::exec::Invocation;

/// Name of the V8 shell binary, both on `$PATH` and in a build output directory.
pub const ENGINE_BINARY: &str = "d8";

/// Environment variable the tick processor reads to find the d8 it symbolizes against.
pub const D8_PATH_VAR: &str = "D8_PATH";

pub const NO_INLINING_FLAG: &str = "--no-turbo-inlining";
pub const INLINING_FLAG: &str = "--turbo-inlining";

/// One engine configuration to profile the script with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilingInstance {
    name: String,
    engine_dir: PathBuf,
    extra_flags: Vec<String>,
}

impl ProfilingInstance {
    pub fn new<I, S>(
        name: impl Into<String>,
        engine_dir: impl Into<PathBuf>,
        extra_flags: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            engine_dir: engine_dir.into(),
            extra_flags: extra_flags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn engine_dir(&self) -> &Path {
        &self.engine_dir
    }

    pub fn extra_flags(&self) -> &[String] {
        &self.extra_flags
    }

    /// Path to the d8 executable of this configuration.
    pub fn engine_path(&self) -> PathBuf {
        self.engine_dir.join(ENGINE_BINARY)
    }

    /// `d8 --prof <extra flags> <script> -- <script args>`
    pub fn engine_invocation(&self, script: &Path, script_args: &[String]) -> Invocation {
        Invocation::new(self.engine_path())
            .arg("--prof")
            .args(&self.extra_flags)
            .arg(script)
            .arg("--")
            .args(script_args)
    }

    /// Runs the tick processor against this configuration's d8.
    pub fn tick_processor_invocation(&self, tick_processor: &Path, args: &[String]) -> Invocation {
        Invocation::new(tick_processor).args(args).env(D8_PATH_VAR, &self.engine_dir)
    }
}

/// The configurations profiled on every run, in reporting order.
pub fn standard_suite(reference_dir: &Path, development_dir: &Path) -> Vec<ProfilingInstance> {
    vec![
        ProfilingInstance::new("reference", reference_dir, Vec::<String>::new()),
        ProfilingInstance::new("no inlining", reference_dir, [NO_INLINING_FLAG]),
        ProfilingInstance::new("development", development_dir, [INLINING_FLAG]),
    ]
}
