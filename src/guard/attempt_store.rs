use std::path::PathBuf;

/// Persisted bookkeeping for prior submission attempts: an ordered sequence
/// of epoch-millisecond timestamps behind a read/write capability, so the
/// rate limiter can be exercised against an in-memory double in tests.
pub trait AttemptStore {
    fn read(&self) -> Vec<i64>;
    fn write(&mut self, attempts: &[i64]);
}

/// JSON-file store, one array per file. Missing or undecodable state reads
/// as an empty history.
pub struct FileAttemptStore {
    path: PathBuf,
}

impl FileAttemptStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AttemptStore for FileAttemptStore {
    fn read(&self) -> Vec<i64> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn write(&mut self, attempts: &[i64]) {
        let encoded = serde_json::to_string(attempts).expect("Failed to encode attempt history");
        if let Err(err) = std::fs::write(&self.path, encoded) {
            // A lost bookkeeping write must not block the signup itself.
            tracing::warn!(
                error.message = %err,
                path = %self.path.display(),
                "Failed to persist submission history"
            );
        }
    }
}

#[derive(Default)]
pub struct InMemoryAttemptStore {
    attempts: Vec<i64>,
}

impl InMemoryAttemptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttemptStore for InMemoryAttemptStore {
    fn read(&self) -> Vec<i64> {
        self.attempts.clone()
    }

    fn write(&mut self, attempts: &[i64]) {
        self.attempts = attempts.to_vec();
    }
}
