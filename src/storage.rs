//! Backing storage for user records.
//!
//! The registry only talks to [`UserStore`], so a persistent implementation
//! can replace [`MemoryUserStore`] without touching registry semantics.

use crate::models::UserRecord;

pub trait UserStore: Send {
    fn get(&self, id: u64) -> Option<UserRecord>;

    /// Inserts a new record at the end, or replaces an existing one with the
    /// same id in place.
    fn put(&mut self, record: UserRecord);

    fn delete(&mut self, id: u64) -> Option<UserRecord>;

    /// All records in insertion order.
    fn scan(&self) -> Vec<UserRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    records: Vec<UserRecord>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }
}

impl UserStore for MemoryUserStore {
    fn get(&self, id: u64) -> Option<UserRecord> {
        self.position(id).map(|index| self.records[index].clone())
    }

    fn put(&mut self, record: UserRecord) {
        match self.position(record.id) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    fn delete(&mut self, id: u64) -> Option<UserRecord> {
        self.position(id).map(|index| self.records.remove(index))
    }

    fn scan(&self) -> Vec<UserRecord> {
        self.records.clone()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
