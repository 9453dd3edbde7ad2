use serde::Deserialize;
use serde_json::Value;

/// One entry of the input idiom list.
///
/// Only the `word` field matters here; upstream data sets carry pinyin,
/// explanation and provenance fields which are ignored during indexing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdiomRecord {
    pub word: String,
}

impl IdiomRecord {
    /// Extract a record from one element of the input array.
    ///
    /// Returns `None` for elements that are not objects, lack `word`, or
    /// carry a non-string `word`. Such elements are skipped by the indexer
    /// rather than aborting the run.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_record() {
        let rec = IdiomRecord::from_value(&json!({ "word": "一心一意" })).unwrap();
        assert_eq!(rec.word, "一心一意");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let rec =
            IdiomRecord::from_value(&json!({ "word": "画蛇添足", "pinyin": "huà shé tiān zú" }))
                .unwrap();
        assert_eq!(rec.word, "画蛇添足");
    }

    #[test]
    fn malformed_entries_yield_none() {
        assert!(IdiomRecord::from_value(&json!({ "notword": "x" })).is_none());
        assert!(IdiomRecord::from_value(&json!("一心一意")).is_none());
        assert!(IdiomRecord::from_value(&json!({ "word": 42 })).is_none());
        assert!(IdiomRecord::from_value(&json!(null)).is_none());
    }
}
