//! Comparative CPU profiling of V8 builds.
//!
//! A script is run under `d8 --prof` with a reference build from `$PATH` and with the local
//! release build, the platform tick processor symbolizes each resulting `v8.log`, and the number
//! of ticks spent in JavaScript is reported per configuration.

pub mod args;
pub mod environment;
mod error;
pub mod exec;
pub mod instance;
pub mod logger;
pub mod platform;
pub mod profiler;
pub mod report;
pub mod ticks;
mod util;

#[cfg(test)]
mod testing;

pub use args::Args;
pub use environment::{Environment, Settings, TICK_LOG};
pub use error::{Error, Result, TickLogError};
pub use exec::{CapturedOutput, CommandRunner, FileSystem, HostFileSystem, Invocation, SystemRunner};
pub use instance::{standard_suite, ProfilingInstance};
pub use platform::{Arch, Os, Platform};
pub use profiler::Profiler;
pub use report::{ProfileReport, Reporter};
pub use ticks::{parse_javascript_ticks, SummaryScan};
