use serde::{Deserialize, Serialize};

/// Query parameters for paged list endpoints. `page` is zero-based on the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Pageable {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl Pageable {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: None,
        }
    }

    pub fn sorted(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(sort) = &self.sort {
            query.push(("sort", sort.clone()));
        }
        query
    }
}

/// One page of a server-side paged collection.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    /// Zero-based index of this page.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.total_pages == 0 || self.number + 1 >= self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pageable_query() {
        let q = Pageable::new(2, 0).sorted("createdAt,desc").query();
        assert_eq!(
            q,
            vec![
                ("page", "2".to_string()),
                ("size", "1".to_string()),
                ("sort", "createdAt,desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_parse() {
        let body = r#"{"content":[1,2,3],"totalPages":4,"totalElements":31,"number":3,"size":9,"first":false}"#;
        let page: Page<u8> = serde_json::from_str(body).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert!(page.is_last());

        let empty: Page<u8> = serde_json::from_str("{}").unwrap();
        assert!(empty.content.is_empty());
        assert!(empty.is_last());
    }
}
