//! Career catalog. Loaded and enriched once at startup, then shared read-only.

pub mod enrich;
pub mod fallback;
pub mod loader;

use std::collections::HashSet;

use crate::errors::CatalogError;
use crate::models::career::{Career, RawCareer};

/// Immutable, fully enriched catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    careers: Vec<Career>,
}

impl Catalog {
    /// Enriches every raw record in source order and rejects duplicate ids.
    pub fn from_raw(raw: Vec<RawCareer>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut careers = Vec::with_capacity(raw.len());

        for (index, record) in raw.into_iter().enumerate() {
            let career = enrich::enrich_career(record, index)?;
            if !seen.insert(career.id.clone()) {
                return Err(CatalogError::DuplicateIdentifier { id: career.id });
            }
            careers.push(career);
        }

        Ok(Self { careers })
    }

    pub fn careers(&self) -> &[Career] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Career> {
        self.careers.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, title: &str) -> RawCareer {
        RawCareer {
            id: Some(id.into()),
            title: Some(title.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_raw_preserves_source_order() {
        let catalog = Catalog::from_raw(vec![raw("b", "Writer"), raw("a", "Analyst")]).unwrap();
        let ids: Vec<&str> = catalog.careers().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::from_raw(vec![raw("a", "Writer"), raw("a", "Analyst")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIdentifier { id } if id == "a"));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::from_raw(vec![raw("a", "Writer")]).unwrap();
        assert_eq!(catalog.get("a").unwrap().title, "Writer");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_raw(vec![]).unwrap();
        assert!(catalog.is_empty());
    }
}
