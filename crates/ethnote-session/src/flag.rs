use std::path::PathBuf;

/// The single piece of state surviving a process restart: whether the
/// wallet was connected last time.
///
/// Read once at startup to gate the silent reconnect attempt; written
/// `true` on a successful connect and `false` on an explicit disconnect.
pub trait ReconnectFlag: Send {
    /// Returns the persisted flag; absence reads as `false`.
    fn load(&self) -> bool;

    /// Persists the flag. Failures are the implementation's to swallow;
    /// losing the flag costs one silent reconnect, nothing more.
    fn store(&mut self, connected: bool);
}

/// In-memory flag, for tests and embedders with their own persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryFlag {
    connected: bool,
}

impl MemoryFlag {
    /// Creates a flag with the given initial value.
    pub fn new(connected: bool) -> Self {
        Self { connected }
    }
}

impl ReconnectFlag for MemoryFlag {
    fn load(&self) -> bool {
        self.connected
    }

    fn store(&mut self, connected: bool) {
        self.connected = connected;
    }
}

/// Flag persisted as a JSON boolean in a file.
#[derive(Debug, Clone)]
pub struct FileFlag {
    path: PathBuf,
}

impl FileFlag {
    /// Creates a flag backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReconnectFlag for FileFlag {
    fn load(&self) -> bool {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or(false)
    }

    fn store(&mut self, connected: bool) {
        let contents = if connected { "true" } else { "false" };
        if let Err(e) = std::fs::write(&self.path, contents) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist reconnect flag");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_flag() {
        let mut flag = MemoryFlag::default();
        assert!(!flag.load());
        flag.store(true);
        assert!(flag.load());
        flag.store(false);
        assert!(!flag.load());
    }

    #[test]
    fn test_file_flag_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connected.json");

        let mut flag = FileFlag::new(&path);
        assert!(!flag.load(), "missing file reads as false");

        flag.store(true);
        assert!(flag.load());
        assert!(FileFlag::new(&path).load(), "flag survives a fresh handle");

        flag.store(false);
        assert!(!flag.load());
    }

    #[test]
    fn test_file_flag_garbage_reads_false() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connected.json");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(!FileFlag::new(&path).load());
    }
}
