// Record ID generator - millisecond timestamp with a per-millisecond sequence
//
// Seed records use small literal ids ("1", "2", ...); generated records get
// timestamp-ordered ids so appends stay chronologically sortable.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// 64-bit ID format: [timestamp_ms:52][sequence:12], rendered as a decimal
/// string to match the seed-record id representation. Allows 4096 ids per
/// millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    sequence: AtomicU64,
    last_timestamp: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
            last_timestamp: AtomicU64::new(0),
        }
    }

    /// Generate the next unique id.
    pub fn next_id(&self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let last_ts = self.last_timestamp.load(Ordering::Relaxed);

        let sequence = if now == last_ts {
            // Same millisecond - increment sequence
            let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
            if seq >= 4096 {
                // Sequence overflow - wait for next millisecond
                std::thread::sleep(std::time::Duration::from_millis(1));
                self.sequence.store(0, Ordering::Relaxed);
                return self.next_id();
            }
            seq
        } else {
            // New millisecond - reset sequence
            self.last_timestamp.store(now, Ordering::Relaxed);
            self.sequence.store(1, Ordering::Relaxed);
            0
        };

        let id = ((now & 0xF_FFFF_FFFF_FFFF) << 12) | (sequence & 0xFFF);
        id.to_string()
    }

    /// Extract the millisecond timestamp embedded in a generated id.
    pub fn extract_timestamp(id: &str) -> Option<u64> {
        id.parse::<u64>().ok().map(|raw| raw >> 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let generator = IdGenerator::new();

        let id1 = generator.next_id();
        let id2 = generator.next_id();
        let id3 = generator.next_id();

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);

        let n1: u64 = id1.parse().unwrap();
        let n2: u64 = id2.parse().unwrap();
        let n3: u64 = id3.parse().unwrap();
        assert!(n1 < n2);
        assert!(n2 < n3);
    }

    #[test]
    fn test_timestamp_extraction() {
        let generator = IdGenerator::new();
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        let id = generator.next_id();
        let ts = IdGenerator::extract_timestamp(&id).unwrap();
        assert!(ts >= before);
    }
}
