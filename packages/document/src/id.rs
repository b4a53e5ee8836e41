use crc32fast::Hasher;

/// Derive a stable session seed from a label using CRC32
pub fn get_session_seed(label: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(label.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential identity generator for native layers within a host session.
///
/// Every materialized layer gets a fresh identity from here; portable
/// object ids are never reused.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Session seed (CRC32)
    count: u64,   // Sequential counter
}

impl IdGenerator {
    pub fn new(label: &str) -> Self {
        Self {
            seed: get_session_seed(label),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential identity
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Get session seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}
