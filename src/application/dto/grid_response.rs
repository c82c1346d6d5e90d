use crate::grid::domain::FlattenedRecord;
use serde::{Deserialize, Serialize};

/// GridResponse - the answer to one redraw, in the widget's wire shape
///
/// `records_total` ignores every filter; `records_filtered` counts the
/// records matching the same predicate that selected `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse {
    /// Echo of the request's draw number
    pub draw: u64,
    pub data: Vec<FlattenedRecord>,
    pub records_total: u64,
    pub records_filtered: u64,
}

impl GridResponse {
    pub fn new(
        draw: u64,
        data: Vec<FlattenedRecord>,
        records_total: u64,
        records_filtered: u64,
    ) -> Self {
        Self {
            draw,
            data,
            records_total,
            records_filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_widget_keys() {
        let record = FlattenedRecord::from_value(json!({"path": "a.c"})).unwrap();
        let response = GridResponse::new(7, vec![record], 25, 1);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "draw": 7,
                "data": [{"path": "a.c"}],
                "recordsTotal": 25,
                "recordsFiltered": 1
            })
        );
    }
}
