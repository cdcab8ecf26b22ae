//! Package-manager installer: runs `<pm> install` as a child process.
//!
//! Both output streams are drained on scoped reader threads while the
//! parent waits, so a chatty installer can never block on a full pipe.
//! Lines from the two streams interleave in no particular order.

use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;

use tracing::{debug, info, instrument, warn};

use kiln_core::application::{InstallError, ports::DependencyInstaller};
use kiln_core::domain::PackageManager;

/// Which pipe a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

impl OutputStream {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl fmt::Display for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of installer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLine {
    pub stream: OutputStream,
    pub text: String,
}

/// Callback invoked for every output line, from either reader thread.
pub type LineHandler = Arc<dyn Fn(&InstallLine) + Send + Sync>;

/// [`DependencyInstaller`] backed by `std::process`.
#[derive(Default, Clone)]
pub struct ProcessInstaller {
    on_line: Option<LineHandler>,
    command: Option<(String, Vec<String>)>,
}

impl fmt::Debug for ProcessInstaller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessInstaller")
            .field("on_line", &self.on_line.is_some())
            .field("command", &self.command)
            .finish()
    }
}

impl ProcessInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward every output line to `handler` (in addition to tracing).
    pub fn on_line(mut self, handler: impl Fn(&InstallLine) + Send + Sync + 'static) -> Self {
        self.on_line = Some(Arc::new(handler));
        self
    }

    /// Run `program args..` instead of the package manager's own command.
    pub fn with_command(
        mut self,
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.command = Some((program.into(), args.into_iter().map(Into::into).collect()));
        self
    }

    fn command_for(&self, manager: PackageManager) -> (String, Vec<String>) {
        match &self.command {
            Some(command) => command.clone(),
            None => (
                manager.program().to_string(),
                manager.install_args().iter().map(|a| a.to_string()).collect(),
            ),
        }
    }

    fn drain(
        &self,
        program: &str,
        stream: OutputStream,
        reader: impl Read,
    ) -> Result<(), InstallError> {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| InstallError::Stream {
                    program: program.to_string(),
                    stream: stream.as_str(),
                    reason: e.to_string(),
                })?;
            if read == 0 {
                break;
            }

            // Installers print whatever bytes their tools emit.
            let text = String::from_utf8_lossy(&buf)
                .trim_end_matches(['\n', '\r'])
                .to_string();

            match stream {
                OutputStream::Stdout => debug!(target: "kiln::install", "{text}"),
                OutputStream::Stderr => info!(target: "kiln::install", "{text}"),
            }

            if let Some(handler) = &self.on_line {
                handler(&InstallLine { stream, text });
            }
        }
        Ok(())
    }
}

impl DependencyInstaller for ProcessInstaller {
    #[instrument(skip(self, root), fields(root = %root.display()))]
    fn install(&self, root: &Path, manager: PackageManager) -> Result<(), InstallError> {
        let (program, args) = self.command_for(manager);
        info!(%program, ?args, "running installer");

        let mut child = Command::new(&program)
            .args(&args)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| InstallError::Spawn {
                program: program.clone(),
                reason: e.to_string(),
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let name = program.as_str();

        let drained: Result<(), InstallError> = thread::scope(|scope| {
            let readers = [
                stdout.map(|s| scope.spawn(move || self.drain(name, OutputStream::Stdout, s))),
                stderr.map(|s| scope.spawn(move || self.drain(name, OutputStream::Stderr, s))),
            ];

            readers.into_iter().flatten().try_for_each(|reader| {
                reader.join().unwrap_or_else(|_| {
                    Err(InstallError::Stream {
                        program: name.to_string(),
                        stream: "output",
                        reason: "reader thread panicked".to_string(),
                    })
                })
            })
        });

        // Reap the child before reporting a stream failure.
        let status = child.wait().map_err(|e| InstallError::Spawn {
            program: program.clone(),
            reason: format!("failed waiting for exit: {e}"),
        })?;
        drained?;

        if status.success() {
            info!("install finished");
            Ok(())
        } else {
            warn!(code = ?status.code(), "install failed");
            Err(InstallError::NonZeroExit {
                program,
                code: status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[test]
    fn default_command_is_the_package_manager_install() {
        let installer = ProcessInstaller::new();
        let (program, args) = installer.command_for(PackageManager::Pnpm);
        assert!(program.starts_with("pnpm"));
        assert_eq!(args, ["install"]);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let tmp = TempDir::new().unwrap();
        let installer = ProcessInstaller::new().with_command("kiln-no-such-binary", ["install"]);

        let err = installer.install(tmp.path(), PackageManager::Npm).unwrap_err();
        assert!(matches!(err, InstallError::Spawn { ref program, .. } if program == "kiln-no-such-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn both_streams_reach_the_handler() {
        let tmp = TempDir::new().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let installer = ProcessInstaller::new()
            .with_command("sh", ["-c", "echo added 12 packages; echo npm warn deprecated 1>&2"])
            .on_line(move |line| sink.lock().unwrap().push(line.clone()));

        installer.install(tmp.path(), PackageManager::Npm).unwrap();

        let mut lines = seen.lock().unwrap().clone();
        lines.sort_by_key(|l| l.stream.as_str());
        assert_eq!(
            lines,
            [
                InstallLine {
                    stream: OutputStream::Stderr,
                    text: "npm warn deprecated".into()
                },
                InstallLine {
                    stream: OutputStream::Stdout,
                    text: "added 12 packages".into()
                },
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_output_does_not_fail_the_install() {
        let tmp = TempDir::new().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let installer = ProcessInstaller::new()
            .with_command("sh", ["-c", "printf 'added 1 package \\377\\n'; echo done"])
            .on_line(move |line| sink.lock().unwrap().push(line.text.clone()));

        assert_eq!(installer.install(tmp.path(), PackageManager::Npm), Ok(()));

        let lines = seen.lock().unwrap().clone();
        assert_eq!(lines, ["added 1 package \u{fffd}", "done"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_carries_the_code() {
        let tmp = TempDir::new().unwrap();
        let installer = ProcessInstaller::new().with_command("sh", ["-c", "exit 3"]);

        let err = installer.install(tmp.path(), PackageManager::Yarn).unwrap_err();
        assert_eq!(
            err,
            InstallError::NonZeroExit {
                program: "sh".into(),
                code: Some(3)
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn runs_inside_the_project_root() {
        let tmp = TempDir::new().unwrap();
        let installer = ProcessInstaller::new().with_command("sh", ["-c", "touch installed.marker"]);

        installer.install(tmp.path(), PackageManager::Bun).unwrap();
        assert!(tmp.path().join("installed.marker").exists());
    }
}
