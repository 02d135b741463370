//! In-memory stand-ins for processes and the filesystem.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet, VecDeque},
    io,
    path::{Path, PathBuf},
};

use crate::{
    environment::TICK_LOG,
    exec::{CapturedOutput, CommandRunner, FileSystem, Invocation},
    Error, Result,
};

pub(crate) const BREW: &str = "brew";

/// A fake host: d8 writes `v8.log` into its working directory, tick processors answer with
/// queued reports, and `brew` answers with a configured prefix.
#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    files: RefCell<BTreeSet<PathBuf>>,
    executables: BTreeMap<String, PathBuf>,
    calls: RefCell<Vec<Invocation>>,
    reports: RefCell<VecDeque<String>>,
    brew_prefix: Option<String>,
    failing: Option<String>,
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.files.borrow_mut().insert(path.into());
        self
    }

    pub(crate) fn with_executable(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.executables.insert(name.to_string(), path.clone());
        self.with_file(path)
    }

    pub(crate) fn with_report(self, report: impl Into<String>) -> Self {
        self.reports.borrow_mut().push_back(report.into());
        self
    }

    pub(crate) fn with_brew_prefix(mut self, prefix: &str) -> Self {
        self.brew_prefix = Some(prefix.to_string());
        self
    }

    /// Every invocation of a program with this file name exits with status 1.
    pub(crate) fn failing(mut self, program: &str) -> Self {
        self.failing = Some(program.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub(crate) fn has_file(&self, path: &Path) -> bool {
        self.files.borrow().contains(path)
    }
}

impl CommandRunner for FakeHost {
    fn run(&self, invocation: &Invocation) -> Result<CapturedOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        let name = invocation
            .program
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if self.failing.as_deref() == Some(name.as_str()) {
            return Err(Error::CommandFailed {
                command: invocation.to_string(),
                status: "exit status: 1".to_string(),
                stdout: String::new(),
                stderr: format!("{name}: simulated failure"),
            });
        }

        match name.as_str() {
            BREW => match &self.brew_prefix {
                Some(prefix) => {
                    Ok(CapturedOutput { stdout: format!("{prefix}\n"), ..Default::default() })
                }
                None => Err(Error::Spawn {
                    command: invocation.to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
                }),
            },
            "d8" => {
                let dir = invocation.current_dir.clone().unwrap_or_default();
                self.files.borrow_mut().insert(dir.join(TICK_LOG));
                Ok(CapturedOutput::default())
            }
            tool if tool.ends_with("-tick-processor") => {
                let stdout = self.reports.borrow_mut().pop_front().unwrap_or_default();
                Ok(CapturedOutput { stdout, ..Default::default() })
            }
            _ => Ok(CapturedOutput::default()),
        }
    }
}

impl FileSystem for FakeHost {
    fn exists(&self, path: &Path) -> bool {
        self.has_file(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        if self.files.borrow_mut().remove(path) {
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
        }
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        self.executables.get(name).cloned()
    }
}
