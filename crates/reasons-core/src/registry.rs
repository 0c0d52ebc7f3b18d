//! The read-only registry of every named reason.
//!
//! `REGISTRY` is a plain `static`: built at compile time, never written, safe to
//! read from any thread. Lookups by name are linear over a handful of entries
//! and do not allocate unless they fail.

use std::fmt;

use crate::codes::ReasonCode;
use crate::domain::{FailureReason, Family, UnscheduledReason};
use crate::error::ReasonError;

/// The literal bound to a symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonValue {
    Code(ReasonCode),
    Message(&'static str),
}

impl ReasonValue {
    pub const fn family(self) -> Family {
        match self {
            ReasonValue::Code(_) => Family::FailureCode,
            ReasonValue::Message(_) => Family::PlacementMessage,
        }
    }

    pub const fn as_code(self) -> Option<ReasonCode> {
        match self {
            ReasonValue::Code(code) => Some(code),
            ReasonValue::Message(_) => None,
        }
    }

    pub const fn as_message(self) -> Option<&'static str> {
        match self {
            ReasonValue::Code(_) => None,
            ReasonValue::Message(message) => Some(message),
        }
    }
}

impl fmt::Display for ReasonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonValue::Code(code) => write!(f, "{code}"),
            ReasonValue::Message(message) => f.write_str(message),
        }
    }
}

/// One name-to-value binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    pub name: &'static str,
    pub value: ReasonValue,
}

impl Entry {
    const fn failure(reason: FailureReason) -> Self {
        Self {
            name: reason.name(),
            value: ReasonValue::Code(reason.code()),
        }
    }

    const fn unscheduled(reason: UnscheduledReason) -> Self {
        Self {
            name: reason.name(),
            value: ReasonValue::Message(reason.message()),
        }
    }

    pub const fn family(&self) -> Family {
        self.value.family()
    }
}

const ENTRY_COUNT: usize = FailureReason::ALL.len() + UnscheduledReason::ALL.len();

static ENTRIES: [Entry; ENTRY_COUNT] = build_entries();

/// Every named reason, failure codes first, each family in declaration order.
pub static REGISTRY: ReasonRegistry = ReasonRegistry { entries: &ENTRIES };

const fn build_entries() -> [Entry; ENTRY_COUNT] {
    let mut entries = [Entry::failure(FailureReason::ALL[0]); ENTRY_COUNT];
    let mut i = 0;
    while i < FailureReason::ALL.len() {
        entries[i] = Entry::failure(FailureReason::ALL[i]);
        i += 1;
    }
    let mut j = 0;
    while j < UnscheduledReason::ALL.len() {
        entries[i + j] = Entry::unscheduled(UnscheduledReason::ALL[j]);
        j += 1;
    }
    entries
}

#[derive(Debug)]
pub struct ReasonRegistry {
    entries: &'static [Entry],
}

impl ReasonRegistry {
    pub fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one family, in registry order.
    pub fn family(&self, family: Family) -> impl Iterator<Item = &'static Entry> + use<> {
        self.entries.iter().filter(move |e| e.family() == family)
    }

    pub fn get(&self, name: &str) -> Option<&'static Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Look up a value by its exact symbolic name.
    pub fn lookup(&self, name: &str) -> Result<ReasonValue, ReasonError> {
        self.get(name)
            .map(|e| e.value)
            .ok_or_else(|| ReasonError::UnknownName(name.to_string()))
    }

    pub fn code(&self, name: &str) -> Result<ReasonCode, ReasonError> {
        let value = self.lookup(name)?;
        value.as_code().ok_or_else(|| wrong_family(name, Family::FailureCode, value))
    }

    pub fn message(&self, name: &str) -> Result<&'static str, ReasonError> {
        let value = self.lookup(name)?;
        value
            .as_message()
            .ok_or_else(|| wrong_family(name, Family::PlacementMessage, value))
    }
}

fn wrong_family(name: &str, expected: Family, value: ReasonValue) -> ReasonError {
    ReasonError::WrongFamily {
        name: name.to_string(),
        expected,
        actual: value.family(),
    }
}

// Table invariants, checked when the crate is compiled.

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn codes_are_distinct() -> bool {
    let all = FailureReason::ALL;
    let mut i = 0;
    while i < all.len() {
        let mut j = i + 1;
        while j < all.len() {
            if all[i].code() == all[j].code() {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn messages_are_distinct_and_non_empty() -> bool {
    let all = UnscheduledReason::ALL;
    let mut i = 0;
    while i < all.len() {
        if all[i].message().is_empty() {
            return false;
        }
        let mut j = i + 1;
        while j < all.len() {
            if bytes_eq(all[i].message().as_bytes(), all[j].message().as_bytes()) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn names_are_distinct(entries: &[Entry]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if bytes_eq(entries[i].name.as_bytes(), entries[j].name.as_bytes()) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(codes_are_distinct(), "two failure reasons share a code");
const _: () = assert!(
    messages_are_distinct_and_non_empty(),
    "placement messages must be non-empty and distinct"
);
const _: () = assert!(
    names_are_distinct(&build_entries()),
    "two reasons share a symbolic name"
);
