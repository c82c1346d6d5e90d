use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Separator between lines of a single match (e.g. one multi-line copyright statement)
pub const LINE_BREAK: &str = "<br/>";

/// Separator between separate matches of the same file
pub const RULE_LINE: &str = "<hr/>";

/// Separator used between rendered link values
pub const LINK_BREAK: &str = "<br>";

/// Semantic category a column belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnCategory {
    Location,
    Copyright,
    License,
    Email,
    Url,
    File,
    Package,
}

/// How a column turns its raw field value into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRenderer {
    /// Scalar value printed as-is
    Plain,
    /// Flat array whose values are joined with one separator
    Joined { separator: &'static str },
    /// Array of arrays: inner values joined with `inner`, groups joined with `outer`
    NestedJoin {
        inner: &'static str,
        outer: &'static str,
    },
    /// Array of URLs, each rendered as an anchor opening in a new tab
    Links,
}

/// A single displayable column of the scan grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    name: &'static str,
    title: &'static str,
    category: ColumnCategory,
    field: &'static str,
    renderer: CellRenderer,
}

impl ColumnDescriptor {
    /// Column whose name doubles as the record field it reads
    pub const fn new(
        name: &'static str,
        title: &'static str,
        category: ColumnCategory,
        renderer: CellRenderer,
    ) -> Self {
        Self {
            name,
            title,
            category,
            field: name,
            renderer,
        }
    }

    pub const fn plain(name: &'static str, title: &'static str, category: ColumnCategory) -> Self {
        Self::new(name, title, category, CellRenderer::Plain)
    }

    pub const fn joined(
        name: &'static str,
        title: &'static str,
        category: ColumnCategory,
        separator: &'static str,
    ) -> Self {
        Self::new(name, title, category, CellRenderer::Joined { separator })
    }

    pub const fn nested(name: &'static str, title: &'static str, category: ColumnCategory) -> Self {
        Self::new(
            name,
            title,
            category,
            CellRenderer::NestedJoin {
                inner: LINE_BREAK,
                outer: RULE_LINE,
            },
        )
    }

    pub const fn links(name: &'static str, title: &'static str, category: ColumnCategory) -> Self {
        Self::new(name, title, category, CellRenderer::Links)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn category(&self) -> ColumnCategory {
        self.category
    }

    /// Record field this column reads
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn renderer(&self) -> CellRenderer {
        self.renderer
    }

    /// Accessor string handed to the grid widget.
    ///
    /// Joined columns use the widget's `field[separator]` array notation; every
    /// other column is addressed by its plain field path and rendered by
    /// `CellFormatter`.
    pub fn data_source(&self) -> String {
        match self.renderer {
            CellRenderer::Joined { separator } => format!("{}[{}]", self.field, separator),
            _ => self.field.to_string(),
        }
    }

    /// Widget selector addressing this column by name (`path:name`)
    pub fn name_selector(&self) -> String {
        format!("{}:name", self.name)
    }
}

/// Named column subset used for show/hide presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnGroup {
    Category(ColumnCategory),
    /// Curated cross-cutting subset describing where a file came from
    Origin,
}

impl FromStr for ColumnGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "location" => Ok(ColumnGroup::Category(ColumnCategory::Location)),
            "copyright" => Ok(ColumnGroup::Category(ColumnCategory::Copyright)),
            "license" => Ok(ColumnGroup::Category(ColumnCategory::License)),
            "email" => Ok(ColumnGroup::Category(ColumnCategory::Email)),
            "url" => Ok(ColumnGroup::Category(ColumnCategory::Url)),
            "file" => Ok(ColumnGroup::Category(ColumnCategory::File)),
            "package" => Ok(ColumnGroup::Category(ColumnCategory::Package)),
            "origin" => Ok(ColumnGroup::Origin),
            _ => Err(format!(
                "Invalid column group: {}. Expected one of location, copyright, license, email, url, file, package, origin",
                s
            )),
        }
    }
}

impl fmt::Display for ColumnGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColumnGroup::Category(ColumnCategory::Location) => "location",
            ColumnGroup::Category(ColumnCategory::Copyright) => "copyright",
            ColumnGroup::Category(ColumnCategory::License) => "license",
            ColumnGroup::Category(ColumnCategory::Email) => "email",
            ColumnGroup::Category(ColumnCategory::Url) => "url",
            ColumnGroup::Category(ColumnCategory::File) => "file",
            ColumnGroup::Category(ColumnCategory::Package) => "package",
            ColumnGroup::Origin => "origin",
        };
        write!(f, "{}", label)
    }
}
