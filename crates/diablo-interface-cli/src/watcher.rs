use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime};

use diablo_interface::LiveCharacters;
use tracing::{debug, info, warn};

use crate::shutdown::ShutdownSignal;
use crate::state;

/// Spawn a thread that republishes the state file whenever it changes.
///
/// The file's modification time is polled every `interval`. A file that fails
/// to load is logged and skipped; the previously published characters stay
/// in place. The thread exits when `shutdown` is triggered.
pub fn spawn_state_watcher(
    path: PathBuf,
    live: Arc<LiveCharacters>,
    interval: Duration,
    shutdown: Arc<ShutdownSignal>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        debug!("State watcher started for {}", path.display());
        let mut last_modified = modified_time(&path);

        while !shutdown.wait(interval) {
            let modified = modified_time(&path);
            if modified.is_none() || modified == last_modified {
                continue;
            }
            last_modified = modified;

            match state::load_into(&path, &live) {
                Ok(()) => info!("Reloaded character state from {}", path.display()),
                Err(e) => warn!("Failed to reload character state: {:#}", e),
            }
        }

        debug!("State watcher stopped");
    })
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}
