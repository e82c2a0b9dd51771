use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub term: Option<String>,
    pub event: String,
    pub details: Option<String>,
}

/// Append-only activity log of search lifecycle events.
///
/// Best effort by contract: callers ignore logging failures so a read-only
/// home directory never breaks a search.
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    pub fn new() -> crate::Result<Self> {
        let user_dirs = directories::UserDirs::new().ok_or_else(|| {
            crate::PatrawlError::Storage("could not determine home directory".to_string())
        })?;
        let home = user_dirs.home_dir();
        let patrawl_dir = home.join(".patrawl");
        fs::create_dir_all(&patrawl_dir)?;

        Ok(Self {
            log_path: patrawl_dir.join("activity.log"),
        })
    }

    /// Log to an explicit file instead of `~/.patrawl/activity.log`.
    pub fn with_path(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn log(
        &self,
        level: LogLevel,
        term: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> crate::Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            term: term.map(|t| t.to_string()),
            event: event.to_string(),
            details: details.map(|d| d.to_string()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        let level_str = match entry.level {
            LogLevel::Info => "\u{1f7e2}",
            LogLevel::Error => "\u{1f534}",
        };

        let term_str = entry.term.as_deref().unwrap_or("*");
        let details_str = entry.details.as_deref().unwrap_or("");

        writeln!(
            file,
            "{} {} {} {} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            level_str,
            entry.event,
            term_str,
            details_str
        )?;

        Ok(())
    }

    pub fn read_logs(
        &self,
        term_filter: Option<&str>,
        errors_only: bool,
    ) -> crate::Result<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(vec![]);
        }

        let file = std::fs::File::open(&self.log_path)?;
        let reader = BufReader::new(file);
        let mut matching_lines = Vec::new();

        for line in reader.lines() {
            let line = line?;

            if errors_only && !line.contains('\u{1f534}') {
                continue;
            }

            if let Some(term) = term_filter {
                if !line.contains(term) {
                    continue;
                }
            }

            matching_lines.push(line);
        }

        // Most recent entries first
        matching_lines.reverse();
        Ok(matching_lines)
    }

    pub fn info(&self, term: Option<&str>, event: &str, details: Option<&str>) -> crate::Result<()> {
        self.log(LogLevel::Info, term, event, details)
    }

    pub fn error(
        &self,
        term: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> crate::Result<()> {
        self.log(LogLevel::Error, term, event, details)
    }
}
