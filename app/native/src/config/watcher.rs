//! Configuration file watcher for hot-reloading.
//!
//! Watches the configuration file and, whenever it changes, reloads it and
//! forwards the result to the compositor thread as an
//! [`EffectEvent::Reconfigure`]. The watcher thread never touches effect
//! state itself.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};

use super::load_config_from_path;
use crate::effect::EffectEvent;

/// Debounce duration for config file changes.
/// Some editors trigger multiple events per save (truncate then write, write
/// to temp then rename, etc.). The file is only read once it has been quiet
/// for this long.
const CONFIG_DEBOUNCE_MS: u64 = 200;

/// Starts watching the configuration file at `config_path`.
///
/// Every burst of changes is followed by one reload once the file has been
/// quiet for the debounce period, and the result is sent on `events`. Files
/// that fail to parse are reported and skipped, so the effect keeps its last
/// good settings. The thread exits once the receiving side of `events` is
/// gone.
#[must_use]
pub fn watch_config_file(config_path: PathBuf, events: Sender<EffectEvent>) -> JoinHandle<()> {
    let config_filename =
        config_path.file_name().map(std::ffi::OsStr::to_os_string).unwrap_or_default();

    std::thread::spawn(move || {
        let (tx, rx) = std::sync::mpsc::channel();

        let mut watcher: RecommendedWatcher = match notify::recommended_watcher(tx) {
            Ok(w) => w,
            Err(err) => {
                tracing::warn!(error = %err, "failed to create config watcher");
                return;
            }
        };

        // Watch the parent directory to catch file replacements
        // (some editors save by writing to a temp file then renaming)
        let watch_path = config_path.parent().unwrap_or(&config_path);

        if let Err(err) = watcher.watch(watch_path, RecursiveMode::NonRecursive) {
            tracing::warn!(error = %err, path = %watch_path.display(), "failed to watch config file");
            return;
        }

        let debounce_duration = Duration::from_millis(CONFIG_DEBOUNCE_MS);
        let mut pending = false;

        loop {
            let next = if pending {
                rx.recv_timeout(debounce_duration)
            } else {
                rx.recv().map_err(|_| RecvTimeoutError::Disconnected)
            };

            match next {
                Ok(Ok(event)) => {
                    let affects_config = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().is_some_and(|name| name == config_filename));

                    // Restarts the quiet period
                    pending |= affects_config;
                }
                Ok(Err(err)) => {
                    tracing::warn!(error = %err, "config watch error");
                }
                Err(RecvTimeoutError::Timeout) => {
                    pending = false;
                    if !reload(&config_path, &events) {
                        // Receiver dropped, nobody left to reconfigure
                        break;
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    // Channel closed, watcher dropped
                    break;
                }
            }
        }
    })
}

/// Reloads the file and forwards it. Returns `false` once `events` is closed.
fn reload(config_path: &Path, events: &Sender<EffectEvent>) -> bool {
    match load_config_from_path(config_path) {
        Ok((config, _)) => {
            tracing::debug!(path = %config_path.display(), "config file changed");
            events.send(EffectEvent::Reconfigure(config)).is_ok()
        }
        Err(err) => {
            tracing::warn!(error = %err, "ignoring config change");
            true
        }
    }
}
