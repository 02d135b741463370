use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use tickprof_cli::{
    logger::setup_logger, Args, Environment, HostFileSystem, Platform, Profiler, Reporter,
    SystemRunner,
};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logger();

    let work_dir = std::env::current_dir().context("failed to read the current directory")?;
    let platform = Platform::detect().context("unsupported host platform")?;

    let runner = SystemRunner;
    let fs = HostFileSystem;
    let env = Environment::resolve(platform, args.settings(work_dir), &runner, &fs)
        .context("failed to set up the profiling environment")?;

    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let mut reporter = Reporter::new(stdout.lock(), color);
    Profiler::new(&env, &runner, &fs).run_suite(&env.suite(), &mut reporter)?;

    Ok(())
}
