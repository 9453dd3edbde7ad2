use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::record::IdiomRecord;

/// First code point of the CJK Unified Ideographs block.
pub const HAN_FIRST: char = '\u{4e00}';
/// Last code point of the CJK Unified Ideographs block.
pub const HAN_LAST: char = '\u{9fff}';

/// Returns true for characters in the CJK Unified Ideographs block.
///
/// ASCII, punctuation, digits and other scripts fall outside the block and
/// are never indexed.
pub fn is_han(c: char) -> bool {
    (HAN_FIRST..=HAN_LAST).contains(&c)
}

/// Lookup table from a Han character to every idiom containing it.
///
/// Keys iterate in first-encounter order and each bucket keeps its idioms in
/// input order, so identical input always produces identical output.
#[derive(Debug, Default, Clone)]
pub struct CharIndex {
    buckets: HashMap<char, Vec<String>>,
    order: Vec<char>,
}

impl CharIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters with at least one idiom.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The bucket for one character, if any idiom contains it.
    pub fn get(&self, c: char) -> Option<&[String]> {
        self.buckets.get(&c).map(Vec::as_slice)
    }

    /// Iterate buckets in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[String])> {
        self.order.iter().map(|c| (*c, self.buckets[c].as_slice()))
    }

    /// Index one idiom: append it to the bucket of every distinct Han
    /// character it contains. A character repeated within the word is
    /// considered once; non-Han characters are discarded.
    pub fn add_word(&mut self, word: &str) {
        let mut seen = Vec::new();
        for c in word.chars() {
            if !is_han(c) || seen.contains(&c) {
                continue;
            }
            seen.push(c);
            self.push(c, word);
        }
    }

    fn push(&mut self, c: char, word: &str) {
        match self.buckets.entry(c) {
            Entry::Occupied(mut e) => e.get_mut().push(word.to_string()),
            Entry::Vacant(e) => {
                self.order.push(c);
                e.insert(vec![word.to_string()]);
            }
        }
    }
}

impl Serialize for CharIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (c, words) in self.iter() {
            map.serialize_entry(&c.to_string(), words)?;
        }
        map.end()
    }
}

/// Build the lookup table from the parsed input elements.
///
/// Elements that do not form a valid record are skipped. Returns the index
/// together with the number of skipped elements.
pub fn build_index(values: &[Value]) -> (CharIndex, usize) {
    let mut index = CharIndex::new();
    let mut skipped = 0;
    for value in values {
        match IdiomRecord::from_value(value) {
            Some(record) => index.add_word(&record.word),
            None => skipped += 1,
        }
    }
    (index, skipped)
}
