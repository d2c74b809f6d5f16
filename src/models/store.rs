//! ContactStore: the name-keyed, insertion-ordered collection of records.

use super::record::Record;
use crate::birthdays::{upcoming_birthdays, UpcomingBirthday};
use crate::domain::ContactName;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use tracing::debug;

/// Default number of days `birthdays` looks ahead.
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// All contacts, keyed by exact name.
///
/// Iteration follows insertion order. Every key equals the name of the
/// record it points to; mutations go through the methods below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    records: Vec<Record>,
    index: HashMap<ContactName, usize>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// An existing record with the same name is replaced and keeps its place
    /// in the iteration order.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().clone();
        match self.index.get(&name) {
            Some(&position) => {
                debug!(contact = %name, "replacing existing record");
                self.records[position] = record;
            }
            None => {
                debug!(contact = %name, "adding record");
                self.index.insert(name, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Look up a record for in-place changes (phones, birthday).
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&position) => self.records.get_mut(position),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Remove the record called `name`.
    ///
    /// Deleting an unknown name is a no-op and returns `None`.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let position = self.index.remove(name)?;
        let removed = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        debug!(contact = %name, "deleted record");
        Some(removed)
    }

    /// Records in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays celebrated within `horizon_days` of today's local date.
    pub fn upcoming(&self, horizon_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_at(horizon_days, Local::now().date_naive())
    }

    /// Birthdays celebrated within `horizon_days` of `today`.
    pub fn upcoming_at(&self, horizon_days: u32, today: NaiveDate) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(self, today, horizon_days)
    }
}

impl FromIterator<Record> for ContactStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut store = ContactStore::new();
        for record in iter {
            store.add_record(record);
        }
        store
    }
}

// Serde support - an ordered list of records
impl Serialize for ContactStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.records)
    }
}

// Serde support - rebuild through add_record so the index stays consistent
impl<'de> Deserialize<'de> for ContactStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
