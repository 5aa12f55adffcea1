//! Append-only JSONL file, one per service per day.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::LogEntry;

/// `<log_dir>/<YYYY-MM-DD>_<service>.jsonl`
pub fn log_file_path(log_dir: &Path, service: &str) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    log_dir.join(format!("{}_{}.jsonl", date, service))
}

pub struct ServiceLogWriter {
    service: String,
    path: PathBuf,
    out: Mutex<BufWriter<File>>,
}

impl ServiceLogWriter {
    pub fn open(log_dir: impl AsRef<Path>, service: impl Into<String>) -> io::Result<Self> {
        let service = service.into();
        let log_dir = log_dir.as_ref();
        fs::create_dir_all(log_dir)?;

        let path = log_file_path(log_dir, &service);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            service,
            path,
            out: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry and flush, so a crash loses at most the current line.
    pub fn append(&self, entry: &LogEntry) -> io::Result<()> {
        let line = entry
            .to_line()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let mut out = self.out.lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

impl Drop for ServiceLogWriter {
    fn drop(&mut self) {
        let _ = self.out.lock().flush();
    }
}

/// Read back a JSONL file, skipping lines that do not parse.
pub fn read_entries(path: impl AsRef<Path>) -> io::Result<Vec<LogEntry>> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(entry) = LogEntry::from_line(&line) {
            entries.push(entry);
        }
    }
    Ok(entries)
}
