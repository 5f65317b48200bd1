//! Theme-directory watcher with trailing-edge debounce.
//!
//! Raw filesystem events arrive one per underlying change; a rapid save
//! burst would otherwise trigger one full rescan-and-regenerate cycle per
//! event. A coalescing task batches events until the directory has been
//! quiet for the debounce window, then emits a single notification.

use crate::error::Result;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// One coalesced theme change: every path touched during the burst.
#[derive(Debug, Clone)]
pub struct ThemeChange {
    /// Paths touched since the last notification.
    pub paths: Vec<PathBuf>,
}

/// Live watch subscription on a theme directory.
///
/// Exists only while the server is Running; dropping it tears the
/// subscription down.
pub struct ThemeWatcher {
    _watcher: RecommendedWatcher,
    root: PathBuf,
}

impl ThemeWatcher {
    /// Watch `root` recursively and deliver debounced change notifications.
    ///
    /// Only CSS file events are forwarded. Returns the watcher handle and
    /// the receiver for coalesced notifications.
    pub fn new(root: PathBuf, debounce_ms: u64) -> Result<(Self, mpsc::Receiver<ThemeChange>)> {
        let (raw_tx, raw_rx) = mpsc::channel::<PathBuf>(256);

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let Ok(event) = res else { return };
            if !matches!(
                event.kind,
                EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
            ) {
                return;
            }
            for path in event.paths {
                if is_css_file(&path) {
                    // Channel full means a regeneration is already pending;
                    // dropping the event loses nothing.
                    let _ = raw_tx.try_send(path);
                }
            }
        })?;

        watcher.watch(&root, RecursiveMode::Recursive)?;
        debug!(root = %root.display(), "watching theme directory");

        let (tx, rx) = mpsc::channel(16);
        tokio::spawn(coalesce(raw_rx, tx, Duration::from_millis(debounce_ms)));

        Ok((
            Self {
                _watcher: watcher,
                root,
            },
            rx,
        ))
    }

    /// The directory being watched.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_css_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("css"))
}

/// Trailing-edge debounce: collect raw events until the channel has been
/// quiet for `window`, then emit one coalesced notification.
async fn coalesce(
    mut raw_rx: mpsc::Receiver<PathBuf>,
    tx: mpsc::Sender<ThemeChange>,
    window: Duration,
) {
    while let Some(first) = raw_rx.recv().await {
        let mut paths = vec![first];
        let mut closed = false;

        loop {
            match tokio::time::timeout(window, raw_rx.recv()).await {
                Ok(Some(path)) => paths.push(path),
                Ok(None) => {
                    closed = true;
                    break;
                }
                // Quiet period elapsed.
                Err(_) => break,
            }
        }

        // Dedup needs adjacency; a burst can interleave files.
        paths.sort();
        paths.dedup();
        debug!(count = paths.len(), "theme change burst coalesced");
        if tx.send(ThemeChange { paths }).await.is_err() || closed {
            return;
        }
    }
}
