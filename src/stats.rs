//! Aggregate statistics over parsed records.
//!
//! Every function here is a pure fold over a `&[Record]` and returns an owned
//! table. Empty input yields empty tables, never an error.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`count_by_sender`] | [`Ranking`] of sender names |
//! | [`count_by_day`] | calendar date → count, chronological |
//! | [`top_words`] | most frequent lowercased tokens |
//! | [`senders_without_marker`] | senders none of whose messages contain a marker |
//!
//! # Ordering and ties
//!
//! Rankings sort by count, highest first. Equal counts keep the order in
//! which the keys were first seen, so results are deterministic for a given
//! input.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::parse;
//! use chatstats::stats::{count_by_sender, top_words};
//!
//! let records = parse(
//!     [
//!         "[01/01/23, 10:00:00 AM] Alice: \u{200E}hello world",
//!         "[01/01/23, 10:01:00 AM] Bob: \u{200E}Hello again",
//!         "[01/01/23, 10:02:00 AM] Alice: \u{200E}bye",
//!     ],
//!     &[] as &[&str],
//! )?;
//!
//! let senders = count_by_sender(&records);
//! assert_eq!(senders.get("Alice"), Some(2));
//! assert_eq!(senders.leaders(), vec!["Alice"]);
//!
//! assert_eq!(top_words(&records, 1), vec![("hello".to_string(), 2)]);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::Record;
use crate::config::ReportConfig;

/// Counts sorted highest first, ties in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking<K> {
    entries: Vec<(K, usize)>,
}

impl<K> Default for Ranking<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Ranking<K> {
    /// Tallies `keys` in iteration order.
    pub fn tally<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut entries: Vec<(K, usize)> = Vec::new();

        for key in keys {
            if let Some(&i) = index.get(&key) {
                entries[i].1 += 1;
            } else {
                index.insert(key.clone(), entries.len());
                entries.push((key, 1));
            }
        }

        // stable: equal counts stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Returns the count for `key`, if it occurred.
    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, n)| *n)
    }
}

impl<K> Ranking<K> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Highest count, or 0 when empty.
    pub fn max_count(&self) -> usize {
        self.entries.first().map_or(0, |(_, n)| *n)
    }

    /// Every key sharing the highest count.
    pub fn leaders(&self) -> Vec<&K> {
        let max = self.max_count();
        self.entries
            .iter()
            .take_while(|(_, n)| *n == max && max > 0)
            .map(|(k, _)| k)
            .collect()
    }

    /// The first `n` entries.
    pub fn top(&self, n: usize) -> &[(K, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Iterates entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &(K, usize)> {
        self.entries.iter()
    }

    /// Consumes the ranking, returning its entries.
    pub fn into_vec(self) -> Vec<(K, usize)> {
        self.entries
    }
}

/// Number of messages per sender.
pub fn count_by_sender(records: &[Record]) -> Ranking<String> {
    Ranking::tally(records.iter().map(|r| r.sender().to_string()))
}

/// Number of messages per calendar date.
pub fn count_by_day(records: &[Record]) -> BTreeMap<NaiveDate, usize> {
    let mut days = BTreeMap::new();
    for record in records {
        *days.entry(record.date()).or_insert(0) += 1;
    }
    days
}

/// The `k` most frequent words across all message bodies.
///
/// Bodies are joined with single spaces, lowercased and split on whitespace.
/// Punctuation is kept, so `"hello,"` and `"hello"` are different words.
/// Ties at the cutoff go to the word that appeared first.
pub fn top_words(records: &[Record], k: usize) -> Vec<(String, usize)> {
    if k == 0 {
        return Vec::new();
    }

    let text = records
        .iter()
        .map(|r| r.message())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut ranking = Ranking::tally(text.split_whitespace().map(str::to_string)).into_vec();
    ranking.truncate(k);
    ranking
}

/// Senders for whom none of their messages contains `marker`.
pub fn senders_without_marker(records: &[Record], marker: &str) -> BTreeSet<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut marked: HashSet<&str> = HashSet::new();

    for record in records {
        seen.insert(record.sender());
        if record.contains(marker) {
            marked.insert(record.sender());
        }
    }

    seen.difference(&marked).map(|s| (*s).to_string()).collect()
}

/// Everything the reporter needs, computed together from one record slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of retained records
    pub total_messages: usize,

    /// Earliest timestamp, if any
    pub first_message: Option<NaiveDateTime>,

    /// Latest timestamp, if any
    pub last_message: Option<NaiveDateTime>,

    /// Messages per sender, ranked
    pub senders: Ranking<String>,

    /// Messages per calendar date
    pub days: BTreeMap<NaiveDate, usize>,

    /// Most frequent words, ranked
    pub top_words: Vec<(String, usize)>,

    /// Senders who never used the sender marker
    pub senders_without_marker: BTreeSet<String>,
}

impl Summary {
    /// Computes all aggregates for `records`.
    pub fn from_records(records: &[Record], config: &ReportConfig) -> Self {
        Self {
            total_messages: records.len(),
            first_message: records.iter().map(Record::timestamp).min(),
            last_message: records.iter().map(Record::timestamp).max(),
            senders: count_by_sender(records),
            days: count_by_day(records),
            top_words: top_words(records, config.top_words),
            senders_without_marker: senders_without_marker(records, &config.sender_marker),
        }
    }

    /// Returns `true` if no records were retained.
    pub fn is_empty(&self) -> bool {
        self.total_messages == 0
    }
}
