//! Destinations for built event records

use crate::error::{ErrorCode, ErrorExt, HookError, Result};
use crate::record::EventRecord;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Receives event records once built
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn write(&self, record: &EventRecord) -> Result<()>;

    async fn flush(&self) -> Result<()>;

    fn name(&self) -> &str;
}

fn serialize(sink: &str, record: &EventRecord) -> Result<String> {
    record.to_json().map_err(|e| {
        HookError::sink_with_code(
            ErrorCode::SINK_SERIALIZATION_ERROR,
            "Failed to serialize event record",
            Some(sink.to_string()),
        )
        .with_source(e)
    })
}

/// Appends one JSON object per line to a file
pub struct JsonLinesSink {
    name: String,
    path: PathBuf,
    buffer: Arc<Mutex<Vec<String>>>,
    capacity: usize,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            name: "jsonl".to_string(),
            path: path.into(),
            buffer: Arc::new(Mutex::new(Vec::new())),
            capacity: 100,
        }
    }

    /// Flush automatically once `capacity` records are buffered
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn append(&self, lines: &[String]) -> Result<()> {
        if lines.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .to_sink_error(&self.name, "Failed to create output directory")?;
            }
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .to_sink_error(&self.name, "Failed to open output file")?;

        for line in lines {
            file.write_all(format!("{}\n", line).as_bytes())
                .await
                .to_sink_error(&self.name, "Failed to write event record")?;
        }

        file.flush()
            .await
            .to_sink_error(&self.name, "Failed to flush output file")?;
        debug!("Wrote {} record(s) to {}", lines.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl RecordSink for JsonLinesSink {
    async fn write(&self, record: &EventRecord) -> Result<()> {
        let line = serialize(&self.name, record)?;
        let mut buffer = self.buffer.lock().await;
        buffer.push(line);

        if buffer.len() >= self.capacity {
            self.append(&buffer).await?;
            buffer.clear();
        }
        Ok(())
    }

    /// Lines stay buffered when the append fails, so a later flush retries them
    async fn flush(&self) -> Result<()> {
        let mut buffer = self.buffer.lock().await;
        self.append(&buffer).await?;
        buffer.clear();
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Prints each record as a JSON line on stdout
#[derive(Debug, Default)]
pub struct StdoutSink;

#[async_trait]
impl RecordSink for StdoutSink {
    async fn write(&self, record: &EventRecord) -> Result<()> {
        let line = serialize(self.name(), record)?;
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("{}\n", line).as_bytes())
            .await
            .to_sink_error(self.name(), "Failed to write to stdout")
    }

    async fn flush(&self) -> Result<()> {
        tokio::io::stdout()
            .flush()
            .await
            .to_sink_error(self.name(), "Failed to flush stdout")
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// Keeps records in memory, for tests
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Arc<RwLock<Vec<EventRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<EventRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn write(&self, record: &EventRecord) -> Result<()> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{EventType, Field, RecordBuilder};
    use tempfile::TempDir;

    fn record(query_id: &str) -> EventRecord {
        RecordBuilder::new(EventType::QuerySubmitted)
            .set(Field::QueryId, query_id)
            .build()
    }

    #[tokio::test]
    async fn test_memory_sink() {
        let sink = MemorySink::new();
        sink.write(&record("q1")).await.unwrap();
        sink.write(&record("q2")).await.unwrap();

        let records = sink.records().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get_str(Field::QueryId), Some("q2"));
    }

    #[tokio::test]
    async fn test_jsonl_sink_buffers_until_flush() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("events.jsonl");
        let sink = JsonLinesSink::new(&path);

        sink.write(&record("q1")).await.unwrap();
        assert!(!path.exists());

        sink.flush().await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains(r#""QueryId":"q1""#));
    }

    #[tokio::test]
    async fn test_jsonl_sink_auto_flush_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.jsonl");
        let sink = JsonLinesSink::new(&path).with_capacity(2);

        for id in ["q1", "q2", "q3"] {
            sink.write(&record(id)).await.unwrap();
        }
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        sink.flush().await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let ids: Vec<String> = content
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["QueryId"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(ids, vec!["q1", "q2", "q3"]);
    }

    #[tokio::test]
    async fn test_jsonl_sink_keeps_lines_after_failed_append() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("out");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("events.jsonl");
        let sink = JsonLinesSink::new(&path).with_capacity(2);

        sink.write(&record("q1")).await.unwrap();
        let err = sink.write(&record("q2")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::SINK_IO_ERROR);
        assert!(sink.flush().await.is_err());

        std::fs::remove_file(&blocker).unwrap();
        sink.flush().await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains(r#""QueryId":"q2""#));

        sink.flush().await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
