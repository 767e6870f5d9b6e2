//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use qstories::{StoryId, ViewTracker};
use tempfile::TempDir;

/// Path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Temp dir with a config file that logs into the same dir.
///
/// Returns the dir (keep it alive) and the config path.
pub fn temp_config(extra: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let log = dir.path().join("qstories.log");
    let path = dir.path().join("config.toml");
    let content = format!(
        "[log]\nlevel = \"debug\"\nfile = {:?}\n{}",
        log.display().to_string(),
        extra
    );
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Tracker that records every id it is asked to mark.
pub fn recording_tracker() -> (Arc<dyn ViewTracker>, Arc<Mutex<Vec<StoryId>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let tracker: Arc<dyn ViewTracker> =
        Arc::new(move |id: &StoryId| sink.lock().unwrap().push(id.clone()));
    (tracker, seen)
}
