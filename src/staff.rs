//! Staff Directory - Chained hash table of staff names.
//!
//! A fixed number of buckets, each a chain of records. The bucket for a
//! name comes from the djb2 string hash, so placement is identical across
//! runs and can be asserted in tests.

use tracing::debug;

/// Number of hash buckets
pub const BUCKETS: usize = 10;

/// djb2 seed
const HASH_SEED: u64 = 5381;

/// A staff member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffRecord {
    pub name: String,
}

/// Bucket index of `name`: djb2 (`h * 33 + byte`) reduced modulo `BUCKETS`.
///
/// Bytes are added as signed values, so UTF-8 bytes at or above 0x80
/// sign-extend before the wrapping add.
pub fn hash(name: &str) -> usize {
    let h = name.bytes().fold(HASH_SEED, |h, byte| {
        (h << 5).wrapping_add(h).wrapping_add(byte as i8 as u64)
    });
    (h % BUCKETS as u64) as usize
}

/// Hash table of staff records with chained collision lists.
#[derive(Clone, Debug)]
pub struct StaffDirectory {
    /// Each chain is stored oldest first; readers walk it in reverse so the
    /// newest record comes first, matching prepend insertion.
    buckets: [Vec<StaffRecord>; BUCKETS],
    count: usize,
}

impl StaffDirectory {
    pub fn new() -> Self {
        Self {
            buckets: Default::default(),
            count: 0,
        }
    }

    /// Add a record to the front of its bucket's chain. Duplicates are kept.
    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        let bucket = hash(&name);
        debug!(%name, bucket, "staff added");
        self.buckets[bucket].push(StaffRecord { name });
        self.count += 1;
    }

    /// True if a record with this exact name exists. Only the name's own
    /// bucket is scanned.
    pub fn contains(&self, name: &str) -> bool {
        self.buckets[hash(name)]
            .iter()
            .any(|record| record.name == name)
    }

    /// Records in one bucket, newest first.
    ///
    /// # Panics
    /// Panics if `index >= BUCKETS`.
    pub fn bucket(&self, index: usize) -> impl Iterator<Item = &StaffRecord> + '_ {
        self.buckets[index].iter().rev()
    }

    /// All records, bucket by bucket, newest first within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = &StaffRecord> + '_ {
        self.buckets.iter().flat_map(|chain| chain.iter().rev())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for StaffDirectory {
    fn default() -> Self {
        Self::new()
    }
}
