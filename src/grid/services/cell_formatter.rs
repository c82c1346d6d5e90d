use crate::grid::domain::column::LINK_BREAK;
use crate::grid::domain::record::collect_leaf_texts;
use crate::grid::domain::{CellRenderer, ColumnDescriptor, FlattenedRecord};
use serde_json::Value;

/// Separator used when an array lands in a plain cell
const PLAIN_ARRAY_SEPARATOR: &str = ",";

/// CellFormatter - renders flattened record fields into display HTML
///
/// Every function here is pure: same column and record in, same string out.
/// Text coming from scan data is HTML-escaped before it is wrapped in markup.
pub struct CellFormatter;

impl CellFormatter {
    /// Renders the cell of `column` for `record`
    pub fn render(column: &ColumnDescriptor, record: &FlattenedRecord) -> String {
        let Some(value) = record.get(column.field()) else {
            return String::new();
        };

        match column.renderer() {
            CellRenderer::Plain => Self::plain(value),
            CellRenderer::Joined { separator } => Self::joined(value, separator),
            CellRenderer::NestedJoin { inner, outer } => Self::nested_join(value, inner, outer),
            CellRenderer::Links => Self::links(value),
        }
    }

    /// Escapes the characters that are significant in HTML text and attributes
    pub fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    fn plain(value: &Value) -> String {
        Self::escaped_leaves(value).join(PLAIN_ARRAY_SEPARATOR)
    }

    fn joined(value: &Value, separator: &str) -> String {
        match value {
            Value::Array(items) => items
                .iter()
                .map(Self::plain)
                .collect::<Vec<_>>()
                .join(separator),
            other => Self::plain(other),
        }
    }

    /// `[["A","B"],["C"]]` renders as `A{inner}B{outer}C`
    fn nested_join(value: &Value, inner: &str, outer: &str) -> String {
        match value {
            Value::Array(groups) => groups
                .iter()
                .map(|group| Self::escaped_leaves(group).join(inner))
                .collect::<Vec<_>>()
                .join(outer),
            other => Self::plain(other),
        }
    }

    fn links(value: &Value) -> String {
        Self::escaped_leaves(value)
            .iter()
            .map(|href| format!("<a href=\"{}\" target=\"_blank\">{}</a>", href, href))
            .collect::<Vec<_>>()
            .join(LINK_BREAK)
    }

    fn escaped_leaves(value: &Value) -> Vec<String> {
        let mut texts = Vec::new();
        collect_leaf_texts(value, &mut texts);
        texts.iter().map(|text| Self::escape_html(text)).collect()
    }
}
