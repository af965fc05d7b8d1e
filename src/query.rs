//! Catalog search and filtering
//!
//! A query is a pair of optional filters: free text matched against name,
//! location, and description, and a category filter matched against the
//! category label. Both are case-insensitive substring checks. Results
//! preserve catalog order; there is no ranking, pagination, or size limit.

use crate::catalog::Catalog;
use crate::models::Destination;

/// Reserved category value meaning "apply no category restriction"
pub const ALL_CATEGORIES: &str = "semua";

/// Optional text and category filters over the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationQuery {
    pub text: Option<String>,
    pub category: Option<String>,
}

impl DestinationQuery {
    pub fn new(text: Option<String>, category: Option<String>) -> Self {
        Self { text, category }
    }

    /// Lowercased text filter; `None` when absent or empty.
    fn text_filter(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(str::to_lowercase)
            .filter(|t| !t.is_empty())
    }

    /// Lowercased category filter; `None` when absent, empty, or the
    /// "semua" sentinel.
    fn category_filter(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::to_lowercase)
            .filter(|c| !c.is_empty() && c != ALL_CATEGORIES)
    }

    /// Lowercased text as echoed back in search responses.
    pub fn echoed_text(&self) -> String {
        self.text.as_deref().unwrap_or_default().to_lowercase()
    }

    /// Lowercased category as echoed back in search responses.
    ///
    /// The sentinel is echoed verbatim even though it applies no filter.
    pub fn echoed_category(&self) -> String {
        self.category.as_deref().unwrap_or_default().to_lowercase()
    }
}

/// Compute the subsequence of the catalog matching `query`.
///
/// A destination is included when it passes the text filter (vacuously true
/// for an empty query) AND the category filter (vacuously true for an empty
/// or "semua" category). Pure and idempotent; an all-non-matching query is
/// an empty result, never an error.
pub fn search<'a>(catalog: &'a Catalog, query: &DestinationQuery) -> Vec<&'a Destination> {
    let text = query.text_filter();
    let category = query.category_filter();

    catalog
        .all()
        .iter()
        .filter(|d| text.as_deref().is_none_or(|t| d.matches_text(t)))
        .filter(|d| category.as_deref().is_none_or(|c| d.matches_category(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn ids(results: &[&Destination]) -> Vec<u32> {
        results.iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_empty_query_returns_full_catalog_in_order() {
        let catalog = catalog();
        let results = search(&catalog, &DestinationQuery::default());
        assert_eq!(ids(&results), vec![1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    #[case(Some(""), None)]
    #[case(None, Some(""))]
    #[case(None, Some("semua"))]
    #[case(Some(""), Some("Semua"))]
    #[case(None, Some("SEMUA"))]
    fn test_vacuous_filters_return_everything(
        #[case] text: Option<&str>,
        #[case] category: Option<&str>,
    ) {
        let catalog = catalog();
        let query = DestinationQuery::new(
            text.map(str::to_string),
            category.map(str::to_string),
        );
        assert_eq!(search(&catalog, &query).len(), catalog.len());
    }

    #[rstest]
    #[case("borobudur", vec![1])] // name
    #[case("BOROBUDUR", vec![1])] // case-insensitive input
    #[case("papua", vec![2])] // location
    #[case("danau", vec![4])] // name and description of the same record
    #[case("dunia", vec![1, 2, 6])] // description across records
    #[case("bromo", vec![])] // no match
    fn test_text_search(#[case] text: &str, #[case] expected: Vec<u32>) {
        let catalog = catalog();
        let query = DestinationQuery::new(Some(text.to_string()), None);
        assert_eq!(ids(&search(&catalog, &query)), expected);
    }

    #[rstest]
    #[case("alam", vec![2, 4, 5, 6])]
    #[case("Alam", vec![2, 4, 5, 6])]
    #[case("budaya", vec![1, 3, 5])]
    #[case("laut", vec![2])]
    #[case("kuliner", vec![])]
    fn test_category_filter(#[case] category: &str, #[case] expected: Vec<u32>) {
        let catalog = catalog();
        let query = DestinationQuery::new(None, Some(category.to_string()));
        assert_eq!(ids(&search(&catalog, &query)), expected);
    }

    #[test]
    fn test_text_and_category_are_conjunctive() {
        let catalog = catalog();
        // "dunia" matches ids 1, 2, 6; category "laut" narrows to id 2
        let query = DestinationQuery::new(Some("dunia".to_string()), Some("laut".to_string()));
        assert_eq!(ids(&search(&catalog, &query)), vec![2]);

        // Passing text but failing category excludes the record
        let query = DestinationQuery::new(Some("borobudur".to_string()), Some("laut".to_string()));
        assert!(search(&catalog, &query).is_empty());
    }

    #[test]
    fn test_excluded_records_match_no_field() {
        let catalog = catalog();
        let query = DestinationQuery::new(Some("toba".to_string()), None);
        let results = search(&catalog, &query);
        let included: Vec<u32> = ids(&results);

        for destination in catalog.all() {
            if included.contains(&destination.id) {
                assert!(destination.matches_text("toba"));
            } else {
                assert!(!destination.matches_text("toba"));
            }
        }
    }

    #[test]
    fn test_search_is_idempotent() {
        let catalog = catalog();
        let query = DestinationQuery::new(Some("alam".to_string()), Some("alam".to_string()));
        let first = ids(&search(&catalog, &query));
        let second = ids(&search(&catalog, &query));
        assert_eq!(first, second);
    }

    #[test]
    fn test_echoed_values_are_lowercased() {
        let query = DestinationQuery::new(Some("Borobudur".to_string()), Some("SEMUA".to_string()));
        assert_eq!(query.echoed_text(), "borobudur");
        assert_eq!(query.echoed_category(), "semua");

        let empty = DestinationQuery::default();
        assert_eq!(empty.echoed_text(), "");
        assert_eq!(empty.echoed_category(), "");
    }
}
