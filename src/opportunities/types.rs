// src/opportunities/types.rs
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobListing {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub salary_range: Option<String>,
    pub posted_at: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scholarship {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub provider: Option<String>,
    pub amount: Option<String>,
    pub deadline: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// Paged listing envelope shared by the job and scholarship endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Paged<T> {
    #[serde(default)]
    pub results: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            total: 0,
            page: 0,
        }
    }
}

/// Query filters for the listing endpoints. Unset filters are omitted from
/// the query string entirely.
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    pub search: Option<String>,
    pub location: Option<String>,
    pub page: Option<u32>,
}

impl ListFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(location) = &self.location {
            query.push(("location", location.clone()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_omit_unset_fields() {
        let filters = ListFilters::default();
        assert!(filters.to_query().is_empty());

        let filters = ListFilters {
            search: Some("data engineer".to_string()),
            location: None,
            page: Some(2),
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("search", "data engineer".to_string()),
                ("page", "2".to_string())
            ]
        );
    }

    #[test]
    fn test_paged_defaults_to_empty() {
        let paged: Paged<JobListing> = serde_json::from_str("{}").expect("lenient parse");
        assert!(paged.results.is_empty());
        assert_eq!(paged.total, 0);
    }
}
