use alloy::primitives::B256;

use crate::record::TransactionRecord;

/// Insertion-ordered collection of resolved transaction records,
/// newest-first, keyed by hash for in-place replacement.
///
/// Unbounded: the list only grows within a session, which matches its use
/// as a per-session activity log.
#[derive(Debug, Default)]
pub struct TransactionStore {
    records: Vec<TransactionRecord>,
}

impl TransactionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record at the front.
    ///
    /// If a record with the same hash already exists it is replaced at its
    /// original position instead of duplicated or moved; the list order
    /// keeps reflecting first insertion.
    pub fn append(&mut self, record: TransactionRecord) {
        match self.position(record.hash) {
            Some(pos) => self.records[pos] = record,
            None => self.records.insert(0, record),
        }
    }

    /// Replaces the record with the given hash, keeping its position.
    ///
    /// Returns false (and stores nothing) when the hash is not present.
    /// This is the pending → success/failed upgrade path.
    pub fn replace(&mut self, hash: B256, record: TransactionRecord) -> bool {
        match self.position(hash) {
            Some(pos) => {
                self.records[pos] = record;
                true
            }
            None => false,
        }
    }

    /// Returns the record with the given hash.
    pub fn get(&self, hash: B256) -> Option<&TransactionRecord> {
        self.position(hash).map(|pos| &self.records[pos])
    }

    /// Empties the store.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the records newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter()
    }

    /// The records as a slice, newest-first.
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    fn position(&self, hash: B256) -> Option<usize> {
        self.records.iter().position(|r| r.hash == hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::TxData;
    use crate::record::TxStatus;
    use alloy::primitives::{Address, Bytes, U256};

    fn record(tag: u8) -> TransactionRecord {
        TransactionRecord::assemble(
            TxData {
                hash: B256::repeat_byte(tag),
                from: Address::repeat_byte(0xaa),
                to: Some(Address::repeat_byte(0xbb)),
                value: U256::from(tag),
                payload: Bytes::new(),
                block_number: None,
            },
            None,
            None,
        )
    }

    #[test]
    fn test_newest_first() {
        let mut store = TransactionStore::new();
        store.append(record(1));
        store.append(record(2));
        store.append(record(3));

        let hashes: Vec<B256> = store.iter().map(|r| r.hash).collect();
        assert_eq!(
            hashes,
            vec![
                B256::repeat_byte(3),
                B256::repeat_byte(2),
                B256::repeat_byte(1)
            ]
        );
    }

    #[test]
    fn test_append_same_hash_replaces_in_place() {
        let mut store = TransactionStore::new();
        store.append(record(1));
        store.append(record(2));

        let mut updated = record(1);
        updated.value = U256::from(999u64);
        store.append(updated);

        assert_eq!(store.len(), 2);
        // still at its original (back) position, with the new data visible
        assert_eq!(store.records()[1].hash, B256::repeat_byte(1));
        assert_eq!(store.records()[1].value, U256::from(999u64));
        assert_eq!(store.records()[0].hash, B256::repeat_byte(2));
    }

    #[test]
    fn test_replace_upgrades_status() {
        let mut store = TransactionStore::new();
        store.append(record(1));
        assert_eq!(store.get(B256::repeat_byte(1)).unwrap().status, TxStatus::Pending);

        let mut mined = record(1);
        mined.status = TxStatus::Success;
        assert!(store.replace(B256::repeat_byte(1), mined));
        assert_eq!(store.get(B256::repeat_byte(1)).unwrap().status, TxStatus::Success);
    }

    #[test]
    fn test_replace_missing_hash() {
        let mut store = TransactionStore::new();
        store.append(record(1));
        assert!(!store.replace(B256::repeat_byte(9), record(9)));
        assert_eq!(store.len(), 1);
        assert!(store.get(B256::repeat_byte(9)).is_none());
    }

    #[test]
    fn test_clear() {
        let mut store = TransactionStore::new();
        store.append(record(1));
        store.append(record(2));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
