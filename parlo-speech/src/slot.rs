//! Shared audio output slot
//!
//! The playback surface always loads the same well-known file. Writes delete
//! the previous file first; there is no versioning and no locking, so
//! concurrent writers race and the last one wins.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// File name of the audio slot inside the static directory.
pub const SLOT_FILE_NAME: &str = "output.mp3";

/// Single overwritable audio file consumed by the playback surface.
#[derive(Debug, Clone)]
pub struct AudioSlot {
    path: PathBuf,
}

impl AudioSlot {
    /// Slot located at `<static_dir>/output.mp3`.
    pub fn new<P: AsRef<Path>>(static_dir: P) -> Self {
        Self {
            path: static_dir.as_ref().join(SLOT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the slot contents: delete the old file, then write the new one.
    pub fn write(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }

        std::fs::write(&self.path, bytes)?;
        debug!("Wrote {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}
