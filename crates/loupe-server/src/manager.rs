//! Preview server lifecycle management.
//!
//! `PreviewManager` owns the dev-server process and the theme watch
//! subscription for one workspace, and orchestrates regeneration of the
//! safelist stylesheet and entry point whenever the component or theme
//! changes. It is the only interface external collaborators call.
//!
//! State machine: Stopped → Starting → Running → Stopped. All transitions
//! happen under a single mutex, and `start()` marks the Starting state
//! before its first await point, so two near-simultaneous calls cannot both
//! spawn a process.

use crate::config::PreviewConfig;
use crate::error::{Result, ServerError};
use crate::process::DevProcess;
use crate::scan::scan_theme_dir;
use crate::watcher::ThemeWatcher;
use loupe_gen::{component_entry, diagnostic_entry, ComponentDescriptor, Prop};
use loupe_theme::safelist;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Message rendered by the diagnostic entry until a component is selected.
const IDLE_MESSAGE: &str = "Select a component to preview";

/// Externally observable server state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// No dev-server process exists.
    Stopped,
    /// Startup in flight.
    Starting,
    /// Dev server accepting connections; watch subscription live.
    Running,
}

enum Lifecycle {
    Stopped,
    Starting,
    Running(RunningServer),
}

/// Resources owned only while Running.
struct RunningServer {
    process: DevProcess,
    /// Watch subscription; `None` when the workspace has no theme directory.
    watcher: Option<ThemeWatcher>,
    watch_task: Option<JoinHandle<()>>,
}

/// Lifecycle manager for one workspace's preview session.
///
/// Constructed through [`crate::registry::PreviewRegistry`]; always handled
/// as an `Arc`.
pub struct PreviewManager {
    config: PreviewConfig,
    lifecycle: Mutex<Lifecycle>,
    current: Mutex<Option<ComponentDescriptor>>,
}

impl PreviewManager {
    /// Create a manager. Fails immediately when either configured path is
    /// empty; existence is checked at startup.
    pub fn new(config: PreviewConfig) -> Result<Arc<Self>> {
        config.validate_non_empty()?;
        Ok(Arc::new(Self {
            config,
            lifecycle: Mutex::new(Lifecycle::Stopped),
            current: Mutex::new(None),
        }))
    }

    /// The configuration this manager was built with.
    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Start the dev server and begin watching the theme directory.
    ///
    /// No-op when already Starting or Running. On failure the state is reset
    /// to Stopped and the error carries both configured paths.
    pub async fn start(self: &Arc<Self>) -> Result<()> {
        {
            let mut lifecycle = self.lifecycle.lock();
            match &*lifecycle {
                Lifecycle::Starting | Lifecycle::Running(_) => {
                    debug!("start() while already active, no-op");
                    return Ok(());
                }
                Lifecycle::Stopped => *lifecycle = Lifecycle::Starting,
            }
        }

        match self.start_inner().await {
            Ok(running) => {
                *self.lifecycle.lock() = Lifecycle::Running(running);
                info!(url = %self.config.server_url(), "preview server running");
                Ok(())
            }
            Err(source) => {
                *self.lifecycle.lock() = Lifecycle::Stopped;
                Err(ServerError::StartupFailed {
                    workspace: self.config.workspace_root.clone(),
                    staging: self.config.staging_dir.clone(),
                    source: Box::new(source),
                })
            }
        }
    }

    async fn start_inner(self: &Arc<Self>) -> Result<RunningServer> {
        self.config.validate_exists()?;

        let mut process = DevProcess::spawn(&self.config)?;
        process
            .wait_ready(
                &self.config.host,
                self.config.port,
                self.config.ready_timeout_secs,
            )
            .await?;

        // Stage an initial stylesheet and entry so the embedding surface has
        // something to render before any component is selected.
        self.regenerate()?;

        // The watch begins only once the server is up.
        let theme_dir = self.config.theme_dir();
        let (watcher, watch_task) = if theme_dir.is_dir() {
            let (watcher, mut rx) = ThemeWatcher::new(theme_dir, self.config.debounce_ms)?;
            let weak = Arc::downgrade(self);
            let task = tokio::spawn(async move {
                while let Some(change) = rx.recv().await {
                    let Some(manager) = weak.upgrade() else { break };
                    debug!(paths = change.paths.len(), "theme changed, regenerating");
                    if let Err(error) = manager.regenerate() {
                        warn!(%error, "theme regeneration failed");
                    }
                }
            });
            (Some(watcher), Some(task))
        } else {
            debug!(dir = %theme_dir.display(), "no theme directory, watch disabled");
            (None, None)
        };

        Ok(RunningServer {
            process,
            watcher,
            watch_task,
        })
    }

    /// Stop the dev server. No-op when already Stopped.
    ///
    /// The watch subscription is torn down before the process so shutdown
    /// cannot trigger a spurious regeneration.
    pub async fn stop(&self) {
        let running = {
            let mut lifecycle = self.lifecycle.lock();
            match std::mem::replace(&mut *lifecycle, Lifecycle::Stopped) {
                Lifecycle::Stopped => return,
                Lifecycle::Starting => {
                    // An in-flight startup cannot be aborted; it will land
                    // in Running and a later stop() takes effect.
                    *lifecycle = Lifecycle::Starting;
                    warn!("stop() called while startup in flight, ignored");
                    return;
                }
                Lifecycle::Running(running) => running,
            }
        };

        if let Some(task) = running.watch_task {
            task.abort();
        }
        drop(running.watcher);
        running.process.terminate().await;
        info!("preview server stopped");
    }

    /// Replace the current component and regenerate both staged files.
    ///
    /// Ensures the dev server is running first; its own hot-reload mechanism
    /// propagates the file changes to the embedding surface.
    pub async fn update_component(self: &Arc<Self>, descriptor: ComponentDescriptor) -> Result<()> {
        info!(component = %descriptor.name, "component selected");
        *self.current.lock() = Some(descriptor);
        self.start().await?;
        self.regenerate()
    }

    /// Replace only the props of the currently loaded component.
    pub async fn update_component_props(self: &Arc<Self>, props: Vec<Prop>) -> Result<()> {
        let descriptor = {
            let current = self.current.lock();
            let Some(descriptor) = current.as_ref() else {
                return Err(ServerError::NoComponentLoaded);
            };
            ComponentDescriptor {
                props,
                ..descriptor.clone()
            }
        };
        self.update_component(descriptor).await
    }

    /// Current state of the lifecycle.
    pub fn state(&self) -> ServerState {
        match &*self.lifecycle.lock() {
            Lifecycle::Stopped => ServerState::Stopped,
            Lifecycle::Starting => ServerState::Starting,
            Lifecycle::Running(_) => ServerState::Running,
        }
    }

    /// True when the dev server is accepting connections.
    pub fn is_running(&self) -> bool {
        self.state() == ServerState::Running
    }

    /// The origin the embedding surface should load.
    pub fn get_server_url(&self) -> String {
        self.config.server_url()
    }

    /// The currently loaded component, if any.
    pub fn get_current_component(&self) -> Option<ComponentDescriptor> {
        self.current.lock().clone()
    }

    /// Stop everything and clear the current component. Idempotent.
    pub async fn dispose(&self) {
        self.stop().await;
        *self.current.lock() = None;
        debug!("preview manager disposed");
    }

    /// Rescan the theme directory and rewrite both staged files.
    ///
    /// Writes are synchronous; the files are small text and the dev server's
    /// file watch picks them up on its own.
    fn regenerate(&self) -> Result<()> {
        let discovered = scan_theme_dir(&self.config.theme_dir());
        let stylesheet = safelist::generate(&safelist::baseline(), &discovered);
        std::fs::write(self.config.safelist_path(), stylesheet)?;

        let current = self.current.lock().clone();
        let entry = match current {
            Some(descriptor) => component_entry(
                &descriptor,
                &self.config.staging_dir,
                self.config.function_props,
            )?,
            None => diagnostic_entry(IDLE_MESSAGE),
        };
        std::fs::write(self.config.entry_path(), entry)?;

        debug!(
            tokens = discovered.len(),
            stylesheet = %self.config.safelist_path().display(),
            entry = %self.config.entry_path().display(),
            "staging files regenerated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loupe_gen::PropKind;
    use std::fs;
    use std::path::PathBuf;

    fn prop(name: &str, kind: PropKind, default_value: &str) -> Prop {
        Prop {
            name: name.to_string(),
            kind,
            default_value: default_value.to_string(),
        }
    }

    #[test]
    fn test_new_rejects_empty_workspace_path() {
        let config = PreviewConfig::new("", "/tmp/staging");
        assert!(PreviewManager::new(config).is_err());
    }

    #[tokio::test]
    async fn test_stop_when_stopped_is_noop() {
        let manager = PreviewManager::new(PreviewConfig::new("/ws", "/ws/.loupe")).unwrap();
        assert_eq!(manager.state(), ServerState::Stopped);
        manager.stop().await;
        assert_eq!(manager.state(), ServerState::Stopped);
    }

    #[tokio::test]
    async fn test_props_update_without_component_fails() {
        let manager = PreviewManager::new(PreviewConfig::new("/ws", "/ws/.loupe")).unwrap();
        let err = manager
            .update_component_props(vec![prop("label", PropKind::String, "Hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::NoComponentLoaded));
    }

    #[tokio::test]
    async fn test_start_with_missing_dirs_fails_and_resets_state() {
        let config = PreviewConfig::new("/definitely/not/a/workspace", "/nor/a/staging/dir");
        let manager = PreviewManager::new(config).unwrap();

        let err = manager.start().await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/definitely/not/a/workspace"));
        assert!(msg.contains("/nor/a/staging/dir"));
        assert_eq!(manager.state(), ServerState::Stopped);
        assert!(!manager.is_running());
    }

    #[test]
    fn test_server_url_query_has_no_side_effects() {
        let manager =
            PreviewManager::new(PreviewConfig::new("/ws", "/ws/.loupe").with_addr("127.0.0.1", 9000))
                .unwrap();
        assert_eq!(manager.get_server_url(), "http://127.0.0.1:9000");
        assert_eq!(manager.state(), ServerState::Stopped);
    }

    /// Full lifecycle against a stand-in dev server: a TCP listener bound by
    /// the test satisfies the readiness probe while a harmless long-running
    /// command plays the process role.
    #[tokio::test]
    #[serial_test::serial]
    async fn test_lifecycle_with_stub_server() {
        const PORT: u16 = 43117;

        let workspace = tempfile::tempdir().unwrap();
        let staging = tempfile::tempdir().unwrap();
        let theme_dir = workspace.path().join("src/theme");
        fs::create_dir_all(&theme_dir).unwrap();
        fs::write(theme_dir.join("tokens.css"), "--color-brand-500: #f0f;").unwrap();

        let _listener = std::net::TcpListener::bind(("127.0.0.1", PORT)).unwrap();

        let config = PreviewConfig::new(workspace.path(), staging.path())
            .with_addr("127.0.0.1", PORT)
            .with_command(vec![
                "sh".to_string(),
                "-c".to_string(),
                "sleep 30".to_string(),
            ])
            .with_ready_timeout(5);
        let manager = PreviewManager::new(config).unwrap();

        manager.start().await.unwrap();
        assert!(manager.is_running());

        // Re-entrant start is a no-op.
        manager.start().await.unwrap();
        assert!(manager.is_running());

        // Initial staging files were written.
        let stylesheet = fs::read_to_string(staging.path().join("safelist.css")).unwrap();
        assert!(stylesheet.starts_with("@import \"tailwindcss\";"));
        assert!(stylesheet.contains("brand"));
        let entry = fs::read_to_string(staging.path().join("preview.tsx")).unwrap();
        assert!(entry.contains(IDLE_MESSAGE));

        // Selecting a component regenerates the entry.
        let descriptor = ComponentDescriptor {
            name: "Btn".to_string(),
            absolute_path: workspace.path().join("src/components/Btn.tsx"),
            props: vec![prop("disabled", PropKind::Boolean, "true")],
        };
        manager.update_component(descriptor).await.unwrap();
        let entry = fs::read_to_string(staging.path().join("preview.tsx")).unwrap();
        assert!(entry.contains("<Btn {...props} />"));
        assert!(entry.contains("disabled: true,"));

        // Props-only update keeps identity, replaces values.
        manager
            .update_component_props(vec![prop("disabled", PropKind::Boolean, "false")])
            .await
            .unwrap();
        let entry = fs::read_to_string(staging.path().join("preview.tsx")).unwrap();
        assert!(entry.contains("disabled: false,"));

        manager.stop().await;
        assert!(!manager.is_running());

        // dispose() is idempotent and clears the current component.
        manager.dispose().await;
        manager.dispose().await;
        assert!(manager.get_current_component().is_none());
    }
}
