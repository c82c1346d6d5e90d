use crate::grid::domain::record::collect_leaf_texts;
use crate::grid::domain::{FlattenedRecord, Predicate, SortDirection, SortKey, StructuredQuery};
use crate::ports::outbound::RecordSource;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

/// InMemoryRecordSource adapter - a small query engine over loaded records
///
/// Interprets the `Predicate` tree with LIKE-style semantics:
/// - matching is ASCII case-insensitive and terms are literal (no wildcards)
/// - array fields match when any of their leaves matches
/// - null and missing fields never match
///
/// Ordering is stable: null < bool < number < text, arrays compare by their
/// leaves joined with commas. Descending reverses the comparison, ties keep
/// load order either way.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordSource {
    records: Arc<Vec<FlattenedRecord>>,
}

impl InMemoryRecordSource {
    pub fn new(records: Vec<FlattenedRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Runs a query synchronously: filter, sort, then apply the page window
    pub fn select(&self, query: &StructuredQuery) -> Vec<FlattenedRecord> {
        let mut matching: Vec<&FlattenedRecord> = self
            .records
            .iter()
            .filter(|record| Self::admits(query.predicate(), record))
            .collect();

        if let Some(sort) = query.sort() {
            matching.sort_by(|a, b| Self::compare(sort, a, b));
        }

        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let limit = query
            .limit()
            .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);

        matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn count_matching(&self, predicate: Option<&Predicate>) -> u64 {
        self.records
            .iter()
            .filter(|record| Self::admits(predicate, record))
            .count() as u64
    }

    fn admits(predicate: Option<&Predicate>, record: &FlattenedRecord) -> bool {
        predicate.map_or(true, |predicate| Self::matches(predicate, record))
    }

    fn matches(predicate: &Predicate, record: &FlattenedRecord) -> bool {
        match predicate {
            Predicate::Equals { column, value } => {
                Self::any_leaf(record, column, value, |leaf, term| leaf == term)
            }
            Predicate::Prefix { column, term } => {
                Self::any_leaf(record, column, term, |leaf, term| leaf.starts_with(term))
            }
            Predicate::Contains { column, term } => {
                Self::any_leaf(record, column, term, |leaf, term| leaf.contains(term))
            }
            Predicate::And { all } => all.iter().all(|p| Self::matches(p, record)),
            Predicate::Or { any } => any.iter().any(|p| Self::matches(p, record)),
        }
    }

    fn any_leaf(
        record: &FlattenedRecord,
        column: &str,
        term: &str,
        test: impl Fn(&str, &str) -> bool,
    ) -> bool {
        let term = term.to_ascii_lowercase();
        record
            .leaf_texts(column)
            .iter()
            .any(|leaf| test(&leaf.to_ascii_lowercase(), &term))
    }

    fn compare(sort: &SortKey, a: &FlattenedRecord, b: &FlattenedRecord) -> Ordering {
        let ordering = compare_values(a.get(&sort.column), b.get(&sort.column));
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(_) => 3,
    }
}

fn sort_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => {
            let mut leaves = Vec::new();
            collect_leaf_texts(other, &mut leaves);
            leaves.join(",")
        }
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Some(x), Some(y)) if type_rank(a) == 3 && type_rank(b) == 3 => {
            sort_text(x).cmp(&sort_text(y))
        }
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn find_all(&self, query: &StructuredQuery) -> Result<Vec<FlattenedRecord>> {
        Ok(self.select(query))
    }

    async fn count(&self, predicate: Option<&Predicate>) -> Result<u64> {
        Ok(self.count_matching(predicate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source(values: Vec<Value>) -> InMemoryRecordSource {
        InMemoryRecordSource::new(
            values
                .into_iter()
                .map(|v| FlattenedRecord::from_value(v).unwrap())
                .collect(),
        )
    }

    fn paths(records: &[FlattenedRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.get("path").and_then(Value::as_str).unwrap_or("").to_string())
            .collect()
    }

    fn query(predicate: Option<Predicate>, sort: Option<SortKey>) -> StructuredQuery {
        StructuredQuery::new(predicate, sort, None, 0)
    }

    #[test]
    fn test_prefix_is_case_insensitive_and_literal() {
        let source = source(vec![
            json!({"path": "lib/a.c"}),
            json!({"path": "LIB/b.c"}),
            json!({"path": "src/lib.c"}),
            json!({"path": "l%b/c.c"}),
        ]);
        let rows = source.select(&query(Some(Predicate::prefix("path", "lib")), None));
        assert_eq!(paths(&rows), vec!["lib/a.c", "LIB/b.c"]);

        let rows = source.select(&query(Some(Predicate::prefix("path", "l%")), None));
        assert_eq!(paths(&rows), vec!["l%b/c.c"]);
    }

    #[test]
    fn test_contains_matches_any_array_leaf() {
        let source = source(vec![
            json!({"path": "a", "copyright_holders": [["nexB Inc."], ["Jane Doe"]]}),
            json!({"path": "b", "copyright_holders": [["John"]]}),
            json!({"path": "c", "copyright_holders": null}),
            json!({"path": "d"}),
        ]);
        let rows = source.select(&query(
            Some(Predicate::contains("copyright_holders", "doe")),
            None,
        ));
        assert_eq!(paths(&rows), vec!["a"]);
    }

    #[test]
    fn test_equals_on_numbers_and_bools() {
        let source = source(vec![
            json!({"path": "a", "size": 10, "is_text": true}),
            json!({"path": "b", "size": 100, "is_text": false}),
        ]);
        assert_eq!(source.count_matching(Some(&Predicate::equals("size", "10"))), 1);
        assert_eq!(
            source.count_matching(Some(&Predicate::equals("is_text", "TRUE"))),
            1
        );
    }

    #[test]
    fn test_and_or_combination() {
        let source = source(vec![
            json!({"path": "lib/mit.c", "license_key": ["mit"]}),
            json!({"path": "lib/gpl.c", "license_key": ["gpl-2.0"]}),
            json!({"path": "src/mit.c", "license_key": ["mit"]}),
        ]);
        let predicate = Predicate::And {
            all: vec![
                Predicate::prefix("path", "lib"),
                Predicate::Or {
                    any: vec![
                        Predicate::contains("path", "gpl"),
                        Predicate::contains("license_key", "gpl"),
                    ],
                },
            ],
        };
        let rows = source.select(&query(Some(predicate), None));
        assert_eq!(paths(&rows), vec!["lib/gpl.c"]);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let source = source(vec![
            json!({"path": "b"}),
            json!({"path": "c"}),
            json!({"path": "a"}),
        ]);
        let rows = source.select(&query(None, Some(SortKey::new("path", SortDirection::Asc))));
        assert_eq!(paths(&rows), vec!["a", "b", "c"]);

        let rows = source.select(&query(None, Some(SortKey::new("path", SortDirection::Desc))));
        assert_eq!(paths(&rows), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_numbers_numerically_with_nulls_first() {
        let source = source(vec![
            json!({"path": "big", "size": 1000}),
            json!({"path": "none", "size": null}),
            json!({"path": "small", "size": 9}),
            json!({"path": "missing"}),
        ]);
        let rows = source.select(&query(None, Some(SortKey::new("size", SortDirection::Asc))));
        assert_eq!(paths(&rows), vec!["none", "missing", "small", "big"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let source = source(vec![
            json!({"path": "1", "type": "file"}),
            json!({"path": "2", "type": "directory"}),
            json!({"path": "3", "type": "file"}),
        ]);
        let rows = source.select(&query(None, Some(SortKey::new("type", SortDirection::Desc))));
        assert_eq!(paths(&rows), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_page_window() {
        let source = source((0..25).map(|i| json!({"path": format!("f{:02}", i)})).collect());
        let sort = Some(SortKey::new("path", SortDirection::Asc));

        let rows = source.select(&StructuredQuery::new(None, sort.clone(), Some(10), 20));
        assert_eq!(paths(&rows), vec!["f20", "f21", "f22", "f23", "f24"]);

        let rows = source.select(&StructuredQuery::new(None, sort, Some(10), 100));
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_record_source_port() {
        let source = source(vec![json!({"path": "a"}), json!({"path": "b"})]);
        assert_eq!(source.count(None).await.unwrap(), 2);
        assert_eq!(
            source
                .count(Some(&Predicate::prefix("path", "a")))
                .await
                .unwrap(),
            1
        );
        let rows = source.find_all(&StructuredQuery::default()).await.unwrap();
        assert_eq!(rows.len(), 2);
    }
}
