use std::path::PathBuf;

use clap::Parser;

use crate::{environment::Settings, ticks::SummaryScan};

/// Compare the JavaScript tick counts of a reference d8 and a local V8 release build.
///
/// The script is profiled three times, in order: with the reference d8, with the reference d8
/// and inlining disabled, and with `out/<arch>.release/d8` and inlining enabled. Options must
/// come before the script; everything after it, including `-h`, `--version` and `--`, is passed
/// to the script.
#[derive(Parser, Debug, Clone)]
#[command(name = "tickprof", version)]
pub struct Args {
    /// The V8 checkout containing `out/` and `tools/`. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub v8_root: Option<PathBuf>,

    /// Reference d8 executable to use instead of the one found on `$PATH`.
    #[arg(long, value_name = "PATH")]
    pub reference_d8: Option<PathBuf>,

    /// How to locate the rows of the tick processor's `[Summary]:` table.
    #[arg(long, value_enum, default_value = "fixed")]
    pub summary_scan: SummaryScan,

    /// The JavaScript file to profile, followed by the arguments passed to it.
    ///
    /// Parsing stops at the script, so nothing after it is read as an option of this tool.
    #[arg(value_name = "SCRIPT", required = true, num_args = 1.., trailing_var_arg = true)]
    pub command: Vec<String>,
}

impl Args {
    /// Resolution settings for a session running in `work_dir`.
    pub fn settings(self, work_dir: PathBuf) -> Settings {
        let mut command = self.command.into_iter();
        // clap requires at least one value, so the script is always present.
        let script = command.next().map(PathBuf::from).unwrap_or_default();
        Settings {
            v8_root: self.v8_root.unwrap_or_else(|| work_dir.clone()),
            work_dir,
            reference_d8: self.reference_d8,
            script,
            script_args: command.collect(),
            summary_scan: self.summary_scan,
        }
    }
}
