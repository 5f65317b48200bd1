//! Per-workspace manager registry.
//!
//! Maps workspace roots to their [`PreviewManager`] instances so independent
//! workspaces can hold preview sessions concurrently without sharing process
//! or watcher state.

use crate::config::PreviewConfig;
use crate::error::Result;
use crate::manager::PreviewManager;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Registry of preview managers, keyed by workspace root.
#[derive(Default)]
pub struct PreviewRegistry {
    managers: Mutex<HashMap<PathBuf, Arc<PreviewManager>>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the manager for the config's workspace root, creating it on first
    /// use. Later calls for the same root return the existing manager and
    /// ignore the new config.
    pub fn get_or_create(&self, config: PreviewConfig) -> Result<Arc<PreviewManager>> {
        let mut managers = self.managers.lock();
        if let Some(existing) = managers.get(&config.workspace_root) {
            return Ok(Arc::clone(existing));
        }

        debug!(workspace = %config.workspace_root.display(), "creating preview manager");
        let manager = PreviewManager::new(config)?;
        managers.insert(manager.config().workspace_root.clone(), Arc::clone(&manager));
        Ok(manager)
    }

    /// Look up an existing manager without creating one.
    pub fn get(&self, workspace_root: &Path) -> Option<Arc<PreviewManager>> {
        self.managers.lock().get(workspace_root).cloned()
    }

    /// Remove a workspace's manager and dispose it. No-op for an unknown
    /// root.
    ///
    /// The map entry is removed under the lock; disposal runs outside it so
    /// process teardown never blocks other registry calls.
    pub async fn dispose(&self, workspace_root: &Path) {
        let manager = self.managers.lock().remove(workspace_root);
        if let Some(manager) = manager {
            debug!(workspace = %workspace_root.display(), "disposing preview manager");
            manager.dispose().await;
        }
    }

    /// Dispose every registered manager.
    pub async fn dispose_all(&self) {
        let managers: Vec<_> = self.managers.lock().drain().collect();
        for (_, manager) in managers {
            manager.dispose().await;
        }
    }

    pub fn len(&self) -> usize {
        self.managers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_root_returns_same_manager() {
        let registry = PreviewRegistry::new();
        let a = registry
            .get_or_create(PreviewConfig::new("/ws/one", "/ws/one/.loupe"))
            .unwrap();
        let b = registry
            .get_or_create(PreviewConfig::new("/ws/one", "/tmp/other-staging"))
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_roots_get_distinct_managers() {
        let registry = PreviewRegistry::new();
        let a = registry
            .get_or_create(PreviewConfig::new("/ws/one", "/ws/one/.loupe"))
            .unwrap();
        let b = registry
            .get_or_create(PreviewConfig::new("/ws/two", "/ws/two/.loupe"))
            .unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_invalid_config_creates_nothing() {
        let registry = PreviewRegistry::new();
        assert!(registry
            .get_or_create(PreviewConfig::new("", "/staging"))
            .is_err());
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_dispose_removes_entry() {
        let registry = PreviewRegistry::new();
        registry
            .get_or_create(PreviewConfig::new("/ws/one", "/ws/one/.loupe"))
            .unwrap();

        registry.dispose(Path::new("/ws/one")).await;
        assert!(registry.get(Path::new("/ws/one")).is_none());

        // Unknown root is a no-op.
        registry.dispose(Path::new("/ws/unknown")).await;
        assert!(registry.is_empty());
    }
}
