use super::column::{ColumnDescriptor, ColumnGroup, LINK_BREAK, RULE_LINE};
use serde::Serialize;
use std::sync::LazyLock;

use super::column::ColumnCategory::{Copyright, Email, File, License, Location, Package, Url};

const LOCATION_COLUMNS: &[ColumnDescriptor] = &[ColumnDescriptor::plain("path", "Path", Location)];

const COPYRIGHT_COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::nested("copyright_statements", "Copyright Statements", Copyright),
    ColumnDescriptor::nested("copyright_holders", "Copyright Holders", Copyright),
    ColumnDescriptor::nested("copyright_authors", "Copyright Authors", Copyright),
    ColumnDescriptor::joined("copyright_start_line", "Copyright Start Line", Copyright, RULE_LINE),
    ColumnDescriptor::joined("copyright_end_line", "Copyright End Line", Copyright, RULE_LINE),
];

const LICENSE_COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::joined("license_key", "License Key", License, RULE_LINE),
    ColumnDescriptor::joined("license_score", "License Score", License, RULE_LINE),
    ColumnDescriptor::joined("license_short_name", "License Short Name", License, RULE_LINE),
    ColumnDescriptor::plain("license_category", "License Category", License),
    ColumnDescriptor::joined("license_owner", "License Owner", License, RULE_LINE),
    ColumnDescriptor::links("license_homepage_url", "License Homepage URL", License),
    ColumnDescriptor::links("license_text_url", "License Text URL", License),
    ColumnDescriptor::links("license_djc_url", "DejaCode License URL", License),
    ColumnDescriptor::joined("license_spdx_key", "SPDX License Key", License, RULE_LINE),
    ColumnDescriptor::joined("license_start_line", "License Start Line", License, RULE_LINE),
    ColumnDescriptor::joined("license_end_line", "License End Line", License, RULE_LINE),
];

const EMAIL_COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::joined("email", "Email", Email, RULE_LINE),
    ColumnDescriptor::joined("email_start_line", "Email Start Line", Email, RULE_LINE),
    ColumnDescriptor::joined("email_end_line", "Email End Line", Email, RULE_LINE),
];

const URL_COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::links("url", "URL", Url),
    ColumnDescriptor::joined("url_start_line", "URL Start Line", Url, LINK_BREAK),
    ColumnDescriptor::joined("url_end_line", "URL End Line", Url, LINK_BREAK),
];

const FILE_COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::plain("type", "Type", File),
    ColumnDescriptor::plain("name", "File Name", File),
    ColumnDescriptor::plain("extension", "File Extension", File),
    ColumnDescriptor::plain("date", "File Date", File),
    ColumnDescriptor::plain("size", "File Size", File),
    ColumnDescriptor::plain("sha1", "SHA1", File),
    ColumnDescriptor::plain("md5", "MD5", File),
    ColumnDescriptor::plain("file_count", "File Count", File),
    ColumnDescriptor::plain("mime_type", "MIME Type", File),
    ColumnDescriptor::plain("file_type", "File Type", File),
    ColumnDescriptor::plain("programming_language", "Language", File),
    ColumnDescriptor::plain("is_binary", "Binary", File),
    ColumnDescriptor::plain("is_text", "Text File", File),
    ColumnDescriptor::plain("is_archive", "Archive File", File),
    ColumnDescriptor::plain("is_media", "Media File", File),
    ColumnDescriptor::plain("is_source", "Source File", File),
    ColumnDescriptor::plain("is_script", "Script File", File),
];

const PACKAGE_COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::plain("packages_type", "Package Type", Package),
    ColumnDescriptor::plain("packages_packaging", "Packaging", Package),
    ColumnDescriptor::plain("packages_primary_language", "Package Primary Language", Package),
];

/// Columns (besides `path`) shown by the "Origin info" preset
const ORIGIN_COLUMN_NAMES: &[&str] = &[
    "copyright_statements",
    "license_short_name",
    "license_category",
    "email",
    "url",
];

/// Selector the widget understands as "every currently hidden column"
const HIDDEN_COLUMNS_SELECTOR: &str = ":hidden";

static CATALOG: LazyLock<ColumnCatalog> = LazyLock::new(ColumnCatalog::build);

/// A show/hide button preset for the grid's column-visibility menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityPreset {
    pub label: String,
    pub show: Vec<String>,
    pub hide: Vec<String>,
}

/// Ordered registry of every displayable column.
///
/// Catalog order is the widget's default column order. Requests address
/// columns by name; a sort index refers to the request's own column list.
#[derive(Debug)]
pub struct ColumnCatalog {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnCatalog {
    fn build() -> Self {
        let columns = [
            LOCATION_COLUMNS,
            COPYRIGHT_COLUMNS,
            LICENSE_COLUMNS,
            EMAIL_COLUMNS,
            URL_COLUMNS,
            FILE_COLUMNS,
            PACKAGE_COLUMNS,
        ]
        .concat();
        Self { columns }
    }

    /// The process-wide catalog, built on first use
    pub fn global() -> &'static ColumnCatalog {
        &CATALOG
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColumnDescriptor> {
        self.columns.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.name() == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|column| column.name())
    }

    /// Columns of a group in catalog order, always led by the location column
    pub fn subset(&self, group: ColumnGroup) -> Vec<ColumnDescriptor> {
        self.columns
            .iter()
            .filter(|column| {
                column.category() == Location
                    || match group {
                        ColumnGroup::Category(category) => column.category() == category,
                        ColumnGroup::Origin => ORIGIN_COLUMN_NAMES.contains(&column.name()),
                    }
            })
            .copied()
            .collect()
    }

    /// Presets backing the visibility menu: one per curated group, plus "show all"
    pub fn visibility_presets(&self) -> Vec<VisibilityPreset> {
        let mut presets: Vec<VisibilityPreset> = [
            ("Copyright info", ColumnGroup::Category(Copyright)),
            ("License info", ColumnGroup::Category(License)),
            ("Origin info", ColumnGroup::Origin),
        ]
        .into_iter()
        .map(|(label, group)| self.group_preset(label, group))
        .collect();

        presets.push(VisibilityPreset {
            label: "Show all columns".to_string(),
            show: vec![HIDDEN_COLUMNS_SELECTOR.to_string()],
            hide: Vec::new(),
        });
        presets
    }

    fn group_preset(&self, label: &str, group: ColumnGroup) -> VisibilityPreset {
        let shown = self.subset(group);
        let (show, hide): (Vec<&ColumnDescriptor>, Vec<&ColumnDescriptor>) = self
            .columns
            .iter()
            .partition(|column| shown.contains(*column));

        VisibilityPreset {
            label: label.to_string(),
            show: show.iter().map(|column| column.name_selector()).collect(),
            hide: hide.iter().map(|column| column.name_selector()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::domain::column::{CellRenderer, ColumnCategory};
    use std::collections::HashSet;

    #[test]
    fn test_catalog_starts_with_path() {
        let catalog = ColumnCatalog::global();
        assert_eq!(catalog.get(0).unwrap().name(), "path");
        assert_eq!(catalog.position("path"), Some(0));
    }

    #[test]
    fn test_catalog_size_and_group_order() {
        let catalog = ColumnCatalog::global();
        assert_eq!(catalog.len(), 43);

        let categories: Vec<ColumnCategory> = catalog.columns().iter().map(|c| c.category()).collect();
        let mut seen = Vec::new();
        for category in categories {
            if seen.last() != Some(&category) {
                seen.push(category);
            }
        }
        assert_eq!(
            seen,
            vec![Location, Copyright, License, Email, Url, File, Package]
        );
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let catalog = ColumnCatalog::global();
        let names: HashSet<&str> = catalog.names().collect();
        assert_eq!(names.len(), catalog.len());
        assert!(catalog.find("email_end_line").is_some());
    }

    #[test]
    fn test_copyright_text_columns_use_dual_separators() {
        let catalog = ColumnCatalog::global();
        for name in ["copyright_statements", "copyright_holders", "copyright_authors"] {
            assert_eq!(
                catalog.find(name).unwrap().renderer(),
                CellRenderer::NestedJoin {
                    inner: "<br/>",
                    outer: "<hr/>"
                }
            );
        }
    }

    #[test]
    fn test_link_columns() {
        let catalog = ColumnCatalog::global();
        let links: Vec<&str> = catalog
            .columns()
            .iter()
            .filter(|c| c.renderer() == CellRenderer::Links)
            .map(|c| c.name())
            .collect();
        assert_eq!(
            links,
            vec![
                "license_homepage_url",
                "license_text_url",
                "license_djc_url",
                "url"
            ]
        );
    }

    #[test]
    fn test_copyright_subset() {
        let subset = ColumnCatalog::global().subset(ColumnGroup::Category(Copyright));
        let names: Vec<&str> = subset.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "path",
                "copyright_statements",
                "copyright_holders",
                "copyright_authors",
                "copyright_start_line",
                "copyright_end_line"
            ]
        );
    }

    #[test]
    fn test_origin_subset_uses_catalog_order_and_fixed_license_name() {
        let subset = ColumnCatalog::global().subset(ColumnGroup::Origin);
        let names: Vec<&str> = subset.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "path",
                "copyright_statements",
                "license_short_name",
                "license_category",
                "email",
                "url"
            ]
        );
    }

    #[test]
    fn test_location_subset_is_only_path() {
        let subset = ColumnCatalog::global().subset(ColumnGroup::Category(Location));
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].name(), "path");
    }

    #[test]
    fn test_visibility_presets() {
        let catalog = ColumnCatalog::global();
        let presets = catalog.visibility_presets();
        let labels: Vec<&str> = presets.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Copyright info", "License info", "Origin info", "Show all columns"]
        );

        let license = &presets[1];
        assert_eq!(license.show[0], "path:name");
        assert_eq!(license.show.len(), 12);
        assert_eq!(license.show.len() + license.hide.len(), catalog.len());
        assert!(license.hide.contains(&"copyright_statements:name".to_string()));

        let show_all = &presets[3];
        assert_eq!(show_all.show, vec![":hidden".to_string()]);
        assert!(show_all.hide.is_empty());
    }
}
