use serde::Serialize;
use std::fmt;

/// Filter predicate over flattened records.
///
/// Record sources interpret these variants; the translator never builds
/// query strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Predicate {
    /// Field value equals the term
    Equals { column: String, value: String },
    /// Field value starts with the term
    Prefix { column: String, term: String },
    /// Field value contains the term
    Contains { column: String, term: String },
    And { all: Vec<Predicate> },
    Or { any: Vec<Predicate> },
}

impl Predicate {
    pub fn equals(column: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::Equals {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn prefix(column: impl Into<String>, term: impl Into<String>) -> Self {
        Predicate::Prefix {
            column: column.into(),
            term: term.into(),
        }
    }

    pub fn contains(column: impl Into<String>, term: impl Into<String>) -> Self {
        Predicate::Contains {
            column: column.into(),
            term: term.into(),
        }
    }

    /// Conjunction that collapses to its only member, or `None` when empty
    pub fn all_of(mut predicates: Vec<Predicate>) -> Option<Self> {
        match predicates.len() {
            0 => None,
            1 => predicates.pop(),
            _ => Some(Predicate::And { all: predicates }),
        }
    }

    /// Disjunction that collapses to its only member, or `None` when empty
    pub fn any_of(mut predicates: Vec<Predicate>) -> Option<Self> {
        match predicates.len() {
            0 => None,
            1 => predicates.pop(),
            _ => Some(Predicate::Or { any: predicates }),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, parts: &[Predicate], op: &str) -> fmt::Result {
            write!(f, "(")?;
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    write!(f, " {} ", op)?;
                }
                write!(f, "{}", part)?;
            }
            write!(f, ")")
        }

        match self {
            Predicate::Equals { column, value } => write!(f, "{} = {:?}", column, value),
            Predicate::Prefix { column, term } => write!(f, "{} starts_with {:?}", column, term),
            Predicate::Contains { column, term } => write!(f, "{} contains {:?}", column, term),
            Predicate::And { all } => join(f, all, "AND"),
            Predicate::Or { any } => join(f, any, "OR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Widget direction marker: only the exact `"desc"` sorts descending
    pub fn from_marker(marker: &str) -> Self {
        if marker == "desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }
}

/// A fully translated page query: filter, ordering and page window
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StructuredQuery {
    predicate: Option<Predicate>,
    sort: Option<SortKey>,
    limit: Option<u64>,
    offset: u64,
}

impl StructuredQuery {
    pub fn new(
        predicate: Option<Predicate>,
        sort: Option<SortKey>,
        limit: Option<u64>,
        offset: u64,
    ) -> Self {
        Self {
            predicate,
            sort,
            limit,
            offset,
        }
    }

    pub fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    pub fn sort(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    /// Page size; `None` means every matching record
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }
}
