use std::io::Write;

use crate::{
    environment::Environment,
    exec::{remove_if_exists, verify_path_exists, CommandRunner, FileSystem},
    instance::ProfilingInstance,
    report::{ProfileReport, Reporter},
    ticks::parse_javascript_ticks,
    util::time_operation,
    Error, Result,
};

/// Runs profiling instances one after another against a resolved [`Environment`].
///
/// All instances share the single tick log in the working directory, so each run is followed by
/// its parse before the next run starts.
pub struct Profiler<'a, R, F> {
    env: &'a Environment,
    runner: &'a R,
    fs: &'a F,
}

impl<'a, R: CommandRunner, F: FileSystem> Profiler<'a, R, F> {
    pub fn new(env: &'a Environment, runner: &'a R, fs: &'a F) -> Self {
        Self { env, runner, fs }
    }

    /// Runs d8 on the script with profiling enabled, leaving a fresh tick log behind.
    pub fn run_program<W: Write>(
        &self,
        instance: &ProfilingInstance,
        reporter: &mut Reporter<W>,
    ) -> Result<()> {
        reporter.status("Running", &format!("script with {} v8", instance.name()))?;

        let log = self.env.tick_log();
        if remove_if_exists(self.fs, &log)? {
            tracing::debug!("removed stale {}", log.display());
        }

        let invocation = instance
            .engine_invocation(&self.env.script, &self.env.script_args)
            .current_dir(&self.env.work_dir);
        let (result, duration) = time_operation(|| self.runner.run(&invocation));
        result?;
        tracing::info!("{} run finished in {:.2?}", instance.name(), duration);
        Ok(())
    }

    /// Symbolizes the tick log with the tick processor and returns the JavaScript tick count.
    pub fn parse_tick_log<W: Write>(
        &self,
        instance: &ProfilingInstance,
        reporter: &mut Reporter<W>,
    ) -> Result<u64> {
        reporter.status("Parsing", &format!("log for {} v8", instance.name()))?;

        let log = self.env.tick_log();
        verify_path_exists(self.fs, &log, &format!("V8 log file from {}", instance.name()))?;

        let invocation = instance
            .tick_processor_invocation(&self.env.tick_processor, &self.env.tick_processor_args)
            .current_dir(&self.env.work_dir);
        let output = self.runner.run(&invocation)?;

        parse_javascript_ticks(&output.stdout, self.env.summary_scan)
            .map_err(|source| Error::TickLog { name: instance.name().to_string(), source })
    }

    /// Runs, parses and reports a single instance.
    pub fn profile<W: Write>(
        &self,
        instance: &ProfilingInstance,
        reporter: &mut Reporter<W>,
    ) -> Result<ProfileReport> {
        self.run_program(instance, reporter)?;
        let ticks = self.parse_tick_log(instance, reporter)?;
        let report = ProfileReport { name: instance.name().to_string(), ticks };
        reporter.ticks(&report)?;
        Ok(report)
    }

    /// Profiles every instance in order, stopping at the first failure.
    pub fn run_suite<W: Write>(
        &self,
        instances: &[ProfilingInstance],
        reporter: &mut Reporter<W>,
    ) -> Result<Vec<ProfileReport>> {
        instances.iter().map(|instance| self.profile(instance, reporter)).collect()
    }
}
