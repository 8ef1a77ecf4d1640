//! Captured envelopes on disk, one file per message.
//!
//! Files are named `{timestamp:011}-{routing_key}` and hold the body
//! verbatim.

use feedstream::Envelope;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Capture I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Envelope cannot be stored: {0}")]
    InvalidEnvelope(String),
}

pub type Result<T> = std::result::Result<T, CaptureError>;

pub fn file_name(envelope: &Envelope) -> Result<String> {
    if envelope.timestamp < 0 {
        return Err(CaptureError::InvalidEnvelope(format!(
            "negative timestamp {}",
            envelope.timestamp
        )));
    }
    if envelope.routing_key.is_empty() || envelope.routing_key.contains(['/', '\\']) {
        return Err(CaptureError::InvalidEnvelope(format!(
            "routing key {:?} is not a valid file name",
            envelope.routing_key
        )));
    }
    Ok(format!("{:011}-{}", envelope.timestamp, envelope.routing_key))
}

/// Split a capture file name back into timestamp and routing key
pub fn parse_file_name(name: &str) -> Option<(i64, &str)> {
    let (timestamp, routing_key) = name.split_once('-')?;
    if timestamp.is_empty() || routing_key.is_empty() {
        return None;
    }
    if !timestamp.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((timestamp.parse().ok()?, routing_key))
}

/// Write one envelope under `dir`, creating the directory if needed
pub fn save(dir: impl AsRef<Path>, envelope: &Envelope) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name(envelope)?);
    std::fs::write(&path, &envelope.body)?;
    debug!(path = %path.display(), bytes = envelope.body.len(), "Captured envelope");
    Ok(path)
}

/// Read every capture file in `dir`, ordered by timestamp then routing key.
///
/// Ordering uses the parsed timestamp, so names wider than the 11-digit
/// padding still load in time order. Entries whose names are not capture
/// names are skipped.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<Envelope>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        match parse_file_name(&name) {
            Some((timestamp, routing_key)) => {
                entries.push((timestamp, routing_key.to_string(), entry.path()))
            }
            None => warn!(file = %name, "Skipping non-capture file"),
        }
    }
    entries.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));

    let mut envelopes = Vec::with_capacity(entries.len());
    for (timestamp, routing_key, path) in entries {
        let body = std::fs::read(&path)?;
        envelopes.push(Envelope::new(timestamp, routing_key, body));
    }
    debug!(count = envelopes.len(), "Loaded captured envelopes");
    Ok(envelopes)
}
