//! Dev-server process handle.
//!
//! Owns the spawned bundler/dev-server child process. The lifecycle manager
//! is the only holder; no other component may terminate the process.

use crate::config::PreviewConfig;
use crate::error::{Result, ServerError};
use std::process::Stdio;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::process::{Child, Command};
use tracing::{debug, info};

/// Interval between readiness probes.
const PROBE_INTERVAL: Duration = Duration::from_millis(200);

/// Handle to the running dev-server process.
#[derive(Debug)]
pub struct DevProcess {
    child: Child,
    command: String,
}

impl DevProcess {
    /// Spawn the dev-server process bound to the configured host/port, with
    /// the staging directory as its working directory.
    pub fn spawn(config: &PreviewConfig) -> Result<Self> {
        let mut argv = config.command.iter();
        let program = argv.next().cloned().unwrap_or_else(|| "npx".to_string());

        let mut cmd = Command::new(&program);
        for arg in argv {
            cmd.arg(arg);
        }
        cmd.arg("--port")
            .arg(config.port.to_string())
            .arg("--host")
            .arg(&config.host)
            .arg("--strictPort");

        cmd.current_dir(&config.staging_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        debug!(command = %program, port = config.port, "spawning dev server");

        let child = cmd.spawn().map_err(|source| ServerError::Spawn {
            command: program.clone(),
            source,
        })?;

        Ok(Self {
            child,
            command: program,
        })
    }

    /// Wait until the dev server accepts TCP connections on its host/port.
    ///
    /// Polls every 200ms up to the configured timeout. Bails out early if
    /// the process exits before ever accepting a connection.
    pub async fn wait_ready(&mut self, host: &str, port: u16, timeout_secs: u64) -> Result<()> {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(timeout_secs);

        loop {
            if let Some(status) = self.child.try_wait()? {
                return Err(ServerError::ProcessExited {
                    command: self.command.clone(),
                    code: status.code(),
                });
            }

            match tokio::time::timeout(PROBE_INTERVAL, TcpStream::connect((host, port))).await {
                Ok(Ok(_)) => {
                    info!(url = %format!("http://{host}:{port}"), "dev server ready");
                    return Ok(());
                }
                _ => {}
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(ServerError::ReadyTimeout {
                    url: format!("http://{host}:{port}"),
                    timeout_secs,
                });
            }

            tokio::time::sleep(PROBE_INTERVAL).await;
        }
    }

    /// Terminate the process. Consumes the handle; errors during kill are
    /// ignored because the process may already have exited.
    pub async fn terminate(mut self) {
        debug!(command = %self.command, "terminating dev server");
        let _ = self.child.kill().await;
    }
}
