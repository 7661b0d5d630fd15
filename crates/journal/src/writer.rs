//! Journal writer runtime.
//!
//! Bridges the sync game loop with an async file writer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::record::JournalRecord;
use crate::types::QuizEvent;

/// Journal configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalConfig {
    pub path: Option<PathBuf>,
}

impl JournalConfig {
    /// Blank or missing values disable the journal.
    pub fn from_value(value: Option<String>) -> Self {
        let path = value
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Self { path }
    }

    pub fn enabled(&self) -> bool {
        self.path.is_some()
    }
}

/// Running journal instance.
pub struct EventJournal {
    rt: Runtime,
    tx: Option<mpsc::UnboundedSender<JournalRecord>>,
    task: Option<JoinHandle<()>>,
    next_seq: u64,
}

impl EventJournal {
    /// Open (append) the configured file and spawn the writer task.
    ///
    /// Returns `Ok(None)` when the journal is disabled.
    pub fn start(config: &JournalConfig) -> Result<Option<Self>> {
        let Some(path) = config.path.clone() else {
            return Ok(None);
        };

        let rt = Runtime::new().context("journal: failed to create tokio runtime")?;
        let file = rt
            .block_on(OpenOptions::new().create(true).append(true).open(&path))
            .with_context(|| format!("journal: cannot open {}", path.display()))?;

        let (tx, mut rx) = mpsc::unbounded_channel::<JournalRecord>();
        let task = rt.spawn(async move {
            let mut file = file;
            let mut buf: Vec<u8> = Vec::with_capacity(256);

            while let Some(rec) = rx.recv().await {
                buf.clear();
                if serde_json::to_writer(&mut buf, &rec).is_err() {
                    continue;
                }
                buf.push(b'\n');
                if let Err(e) = file.write_all(&buf).await {
                    warn!(error = %e, "journal write failed, stopping writer");
                    break;
                }
            }

            let _ = file.flush().await;
        });

        debug!(path = %path.display(), "journal started");
        Ok(Some(Self {
            rt,
            tx: Some(tx),
            task: Some(task),
            next_seq: 1,
        }))
    }

    /// Queue one event. Never blocks.
    pub fn record(&mut self, session: u32, event: &QuizEvent) {
        let rec = JournalRecord::new(self.next_seq, session, event);
        self.next_seq += 1;
        if let Some(tx) = &self.tx {
            // The writer only goes away after a write error; drop records then.
            let _ = tx.send(rec);
        }
    }

    /// Number of records queued so far.
    pub fn recorded(&self) -> u64 {
        self.next_seq - 1
    }

    /// Close the channel and wait until every queued record is on disk.
    pub fn finish(mut self) -> Result<()> {
        self.tx.take();
        if let Some(task) = self.task.take() {
            self.rt
                .block_on(task)
                .context("journal: writer task panicked")?;
        }
        Ok(())
    }
}
