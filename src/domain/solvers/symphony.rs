use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::solver::{SolverInvocation, SolverProcess, SolverRun};
use crate::error::{ProblemError, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs the SYMPHONY binary as `<program> [-f <parameters>] -L <converted>`
/// with stdout and stderr redirected to the solution artifact.
#[derive(Debug, Clone)]
pub struct SymphonyCommand {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl SymphonyCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        SymphonyCommand {
            program: program.into(),
            timeout: None,
        }
    }

    /// Kill the solver if it has not finished after `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(invocation: &SolverInvocation) -> Vec<OsString> {
        let mut args = Vec::with_capacity(4);
        if let Some(parameters) = invocation.parameters {
            args.push(OsString::from("-f"));
            args.push(parameters.as_os_str().to_owned());
        }
        args.push(OsString::from("-L"));
        args.push(invocation.converted.as_os_str().to_owned());
        args
    }
}

impl SolverProcess for SymphonyCommand {
    fn run(&self, invocation: &SolverInvocation) -> Result<SolverRun> {
        let stdout = File::create(invocation.solution)?;
        let stderr = stdout.try_clone()?;

        log::debug!(
            "running {} {:?}",
            self.program.display(),
            Self::args(invocation)
        );

        let mut child = Command::new(&self.program)
            .args(Self::args(invocation))
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .spawn()
            .map_err(|source| ProblemError::SolverLaunch {
                program: self.program.display().to_string(),
                source,
            })?;

        let status = match self.timeout {
            Some(timeout) => child.wait_timeout(timeout)?,
            None => Some(child.wait()?),
        };

        match status {
            Some(status) => Ok(SolverRun::exited(status.code())),
            None => {
                let _ = child.kill();
                let _ = child.wait();
                Ok(SolverRun::timed_out())
            }
        }
    }

    fn name(&self) -> &str {
        "SYMPHONY"
    }
}

trait ChildExt {
    fn wait_timeout(&mut self, timeout: Duration) -> std::io::Result<Option<ExitStatus>>;
}

impl ChildExt for Child {
    fn wait_timeout(&mut self, timeout: Duration) -> std::io::Result<Option<ExitStatus>> {
        let start = Instant::now();
        loop {
            if let Some(status) = self.try_wait()? {
                return Ok(Some(status));
            }
            if start.elapsed() >= timeout {
                return Ok(None);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_without_parameters() {
        let invocation = SolverInvocation {
            converted: Path::new("out/converted_a.lp"),
            parameters: None,
            solution: Path::new("out/solution_a.txt"),
        };
        assert_eq!(
            SymphonyCommand::args(&invocation),
            vec![OsString::from("-L"), OsString::from("out/converted_a.lp")]
        );
    }

    #[test]
    fn test_args_with_parameters() {
        let invocation = SolverInvocation {
            converted: Path::new("converted_a.lp"),
            parameters: Some(Path::new("symphonyParameters.txt")),
            solution: Path::new("solution_a.txt"),
        };
        assert_eq!(
            SymphonyCommand::args(&invocation),
            vec![
                OsString::from("-f"),
                OsString::from("symphonyParameters.txt"),
                OsString::from("-L"),
                OsString::from("converted_a.lp"),
            ]
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(SymphonyCommand::new("symphony").name(), "SYMPHONY");
    }
}
