//! File-based data source.
//!
//! Polls a JSON snapshot file, for replaying captures offline or pointing
//! the dashboard at a file some other process keeps fresh.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::DataSource;
use nodewatch_types::NetworkSnapshot;

/// A data source that reads network snapshots from a JSON file.
///
/// Tracks the file's modification time and only returns data when the file
/// has changed since the last read.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// Returns the path being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    fn read_file(&mut self) -> Option<NetworkSnapshot> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(snapshot) => {
                    self.last_error = None;
                    Some(snapshot)
                }
                Err(e) => {
                    self.last_error = Some(format!("Parse error: {}", e));
                    None
                }
            },
            Err(e) => {
                self.last_error = Some(format!("Read error: {}", e));
                None
            }
        }
    }
}

impl DataSource for FileSource {
    fn poll(&mut self) -> Option<NetworkSnapshot> {
        let current_modified = self.modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // first poll, always read
            (Some(_), None) => false, // file disappeared, keep last data
            (Some(last), Some(current)) => current > last,
        };

        if file_changed {
            if let Some(snapshot) = self.read_file() {
                self.last_modified = current_modified;
                return Some(snapshot);
            }
        }

        None
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"{
            "nodes": [
                {
                    "name": "validator-1",
                    "address": "grpc.example.org:50051",
                    "network": "mainnet",
                    "status": [{"date": "2024-01-03", "color": 2}],
                    "overallScore": 99.0
                }
            ],
            "bootstrap": []
        }"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/snapshot.json");
        assert_eq!(source.path(), Path::new("/tmp/snapshot.json"));
        assert_eq!(source.description(), "file: /tmp/snapshot.json");
        assert!(source.error().is_none());
    }

    #[test]
    fn test_poll_reads_file_once() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.nodes.len(), 1);
        assert_eq!(snapshot.nodes[0].name, "validator-1");

        // No change since last read, nothing new to report.
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_missing_file() {
        let mut source = FileSource::new("/nonexistent/path/snapshot.json");
        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());
        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Parse error"));
    }

    #[test]
    fn test_parse_error_does_not_mark_read() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "broken").unwrap();

        let mut source = FileSource::new(file.path());
        assert!(source.poll().is_none());
        // Still considered unread; a later poll retries the same content.
        assert!(source.poll().is_none());
        assert!(source.error().is_some());
    }
}
