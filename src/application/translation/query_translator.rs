use crate::application::dto::GridRequest;
use crate::grid::domain::{ColumnCatalog, Predicate, SortKey, StructuredQuery};
use crate::shared::error::GridError;
use crate::shared::Result;

/// QueryTranslator - turns a widget redraw request into a `StructuredQuery`
///
/// The translated query is:
/// - every non-empty column search as a prefix match, AND-combined
/// - a non-empty global search as one substring match per searchable column,
///   OR-combined and AND-ed with the column searches
/// - the first ordering instruction as the sort key
/// - `length`/`start` as limit/offset
///
/// Column names are checked against the catalog so a request can only
/// address fields the grid actually displays.
pub struct QueryTranslator<'a> {
    catalog: &'a ColumnCatalog,
}

impl<'a> QueryTranslator<'a> {
    pub fn new(catalog: &'a ColumnCatalog) -> Self {
        Self { catalog }
    }

    /// Translates a redraw request
    ///
    /// # Errors
    /// - `GridError::InvalidColumn` if the sort index is outside the request's column list
    /// - `GridError::UnknownColumn` if a request column is not in the catalog
    pub fn translate(&self, request: &GridRequest) -> Result<StructuredQuery> {
        self.validate_columns(request)?;

        let sort = self.sort_key(request)?;
        let predicate = Self::predicate(request);
        let query = StructuredQuery::new(
            predicate,
            sort,
            request.page_length(),
            request.page_offset(),
        );

        tracing::debug!(
            draw = request.draw_sequence_number(),
            predicate = %query.predicate().map(|p| p.to_string()).unwrap_or_default(),
            sort = ?query.sort(),
            limit = ?query.limit(),
            offset = query.offset(),
            "translated grid request"
        );

        Ok(query)
    }

    fn validate_columns(&self, request: &GridRequest) -> Result<()> {
        if let Some(unknown) = request
            .columns
            .iter()
            .find(|column| self.catalog.find(&column.name).is_none())
        {
            return Err(GridError::UnknownColumn {
                name: unknown.name.clone(),
            }
            .into());
        }
        Ok(())
    }

    fn sort_key(&self, request: &GridRequest) -> Result<Option<SortKey>> {
        let Some(index) = request.sort_column_index() else {
            return Ok(None);
        };

        let column = request
            .columns
            .get(index)
            .ok_or(GridError::InvalidColumn {
                index,
                column_count: request.columns.len(),
            })?;

        Ok(Some(SortKey::new(
            column.name.clone(),
            request.sort_direction(),
        )))
    }

    fn predicate(request: &GridRequest) -> Option<Predicate> {
        let mut conjuncts: Vec<Predicate> = request
            .columns
            .iter()
            .filter_map(|column| {
                column
                    .search
                    .term()
                    .map(|term| Predicate::prefix(column.name.clone(), term))
            })
            .collect();

        if let Some(term) = request.global_search_term() {
            let disjuncts: Vec<Predicate> = request
                .columns
                .iter()
                .filter(|column| column.searchable)
                .map(|column| Predicate::contains(column.name.clone(), term))
                .collect();
            // No searchable column can contain the term: match nothing.
            conjuncts.push(
                Predicate::any_of(disjuncts).unwrap_or(Predicate::Or { any: Vec::new() }),
            );
        }

        Predicate::all_of(conjuncts)
    }
}
