//! Persistence for [`InvertedIndex`]
//!
//! Frame layout (little endian):
//! - 4 bytes magic `WIDX`
//! - u32 format version
//! - u64 payload length
//! - u32 crc32 of payload
//! - payload: bincode-encoded [`IndexSnapshot`]
//!
//! Loading validates the frame, the checksum, and the decoded structure
//! before anything is handed back, so a failed load never yields a
//! partially built index.

use std::collections::HashMap;
use std::io::{self, Read, Write};

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::catalog::FeatureCatalog;
use super::inverted::InvertedIndex;
use super::posting_list::PostingList;
use crate::error::{IndexError, Result};
use crate::models::{Feature, FeatureId};

/// Frame magic
pub const SNAPSHOT_MAGIC: [u8; 4] = *b"WIDX";

/// Snapshot version for compatibility checking
pub const SNAPSHOT_VERSION: u32 = 1;

const HEADER_LEN: usize = 4 + 4 + 8 + 4;

/// Serializable image of an inverted index
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    /// Catalog entries ordered by feature id
    pub features: Vec<(Feature, FeatureId)>,
    /// Posting lists ordered by feature id
    pub postings: Vec<(FeatureId, PostingList)>,
}

impl IndexSnapshot {
    pub fn capture(index: &InvertedIndex) -> Self {
        let mut postings: Vec<(FeatureId, PostingList)> = index
            .postings
            .iter()
            .map(|(&id, list)| (id, list.clone()))
            .collect();
        postings.sort_unstable_by_key(|(id, _)| *id);

        Self {
            features: index.catalog.entries(),
            postings,
        }
    }

    /// Validate and turn the snapshot back into an index
    pub fn into_index(self) -> Result<InvertedIndex> {
        let catalog = FeatureCatalog::from_entries(self.features)?;
        let feature_count = catalog.len() as FeatureId;

        let mut postings = HashMap::with_capacity(self.postings.len());
        for (id, list) in self.postings {
            if id == 0 || id > feature_count {
                return Err(IndexError::InvalidSnapshot(format!(
                    "posting list for unknown feature id {}",
                    id
                )));
            }
            if !list.is_sorted() {
                return Err(IndexError::InvalidSnapshot(format!(
                    "posting list for feature id {} is not ascending",
                    id
                )));
            }
            if postings.insert(id, list).is_some() {
                return Err(IndexError::InvalidSnapshot(format!(
                    "feature id {} has two posting lists",
                    id
                )));
            }
        }

        Ok(InvertedIndex { catalog, postings })
    }
}

impl InvertedIndex {
    /// Write the index to `sink`
    pub fn save<W: Write>(&self, mut sink: W) -> Result<()> {
        let payload = bincode::serialize(&IndexSnapshot::capture(self))?;

        let mut hasher = Hasher::new();
        hasher.update(&payload);
        let crc32 = hasher.finalize();

        sink.write_all(&SNAPSHOT_MAGIC)?;
        sink.write_all(&SNAPSHOT_VERSION.to_le_bytes())?;
        sink.write_all(&(payload.len() as u64).to_le_bytes())?;
        sink.write_all(&crc32.to_le_bytes())?;
        sink.write_all(&payload)?;
        sink.flush()?;

        info!(
            features = self.len(),
            bytes = payload.len() + HEADER_LEN,
            "saved inverted index"
        );
        Ok(())
    }

    /// Serialize into an in-memory frame
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.save(&mut bytes)?;
        Ok(bytes)
    }

    /// Read an index previously written by [`InvertedIndex::save`]
    pub fn load<R: Read>(source: R) -> Result<Self> {
        match read_frame(source) {
            Ok(index) => {
                info!(features = index.len(), "loaded inverted index");
                Ok(index)
            }
            Err(err) => {
                warn!(error = %err, "rejected inverted index snapshot");
                Err(err)
            }
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::load(bytes)
    }

    /// Replace this index with the one read from `source`
    ///
    /// On error the current contents are left untouched.
    pub fn restore<R: Read>(&mut self, source: R) -> Result<()> {
        *self = Self::load(source)?;
        Ok(())
    }
}

fn read_frame<R: Read>(mut source: R) -> Result<InvertedIndex> {
    let mut header = [0u8; HEADER_LEN];
    source.read_exact(&mut header).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => {
            IndexError::InvalidSnapshot("truncated snapshot header".to_string())
        }
        _ => IndexError::Io(e),
    })?;

    if header[0..4] != SNAPSHOT_MAGIC {
        return Err(IndexError::InvalidSnapshot("bad magic".to_string()));
    }

    let version = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
    if version == 0 {
        return Err(IndexError::InvalidSnapshot("version 0".to_string()));
    }
    if version > SNAPSHOT_VERSION {
        return Err(IndexError::IncompatibleSnapshot {
            expected: SNAPSHOT_VERSION,
            actual: version,
        });
    }

    let mut len_bytes = [0u8; 8];
    len_bytes.copy_from_slice(&header[8..16]);
    let len = u64::from_le_bytes(len_bytes);
    let expected_crc = u32::from_le_bytes([header[16], header[17], header[18], header[19]]);

    let mut payload = Vec::new();
    source.take(len).read_to_end(&mut payload)?;
    if payload.len() as u64 != len {
        return Err(IndexError::InvalidSnapshot(format!(
            "payload truncated: expected {} bytes, found {}",
            len,
            payload.len()
        )));
    }

    let mut hasher = Hasher::new();
    hasher.update(&payload);
    let actual_crc = hasher.finalize();
    if actual_crc != expected_crc {
        return Err(IndexError::ChecksumMismatch {
            expected: expected_crc,
            actual: actual_crc,
        });
    }

    let snapshot: IndexSnapshot = bincode::deserialize(&payload)?;
    snapshot.into_index()
}
