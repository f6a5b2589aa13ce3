//! Narrative message sink.
//!
//! The core reports every user-visible event as a complete string; how and
//! when the text is rendered (typewriter effects included) is entirely the
//! view's business. Sound cues queue alongside for the same reason.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    /// 1-based week the message was emitted in.
    pub week: u32,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct GameLog {
    entries: Vec<LogEntry>,
    sounds: Vec<String>,
    week: u32,
    /// Index of the first entry not yet drained by the view.
    drained: usize,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp subsequent messages with the given week.
    pub fn set_week(&mut self, week: u32) {
        self.week = week;
    }

    pub fn show(&mut self, text: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp: Utc::now(),
            week: self.week,
            text: text.into(),
        });
    }

    pub fn play(&mut self, sound: &str) {
        if !sound.is_empty() {
            self.sounds.push(sound.to_string());
        }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Messages added since the last drain, for incremental display.
    pub fn drain_new(&mut self) -> Vec<LogEntry> {
        let new = self.entries[self.drained..].to_vec();
        self.drained = self.entries.len();
        new
    }

    pub fn take_sounds(&mut self) -> Vec<String> {
        std::mem::take(&mut self.sounds)
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, json)
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Vec<LogEntry>> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
