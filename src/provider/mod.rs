//! CRUD adapter between admin screens and the remote phonebook API.
//!
//! [`DataProvider`] is the statically typed contract: one method per CRUD
//! kind. [`request::DataRequest`] and [`request::dispatch`] expose the same
//! contract through the generic `{type, resource, params}` shape used by
//! browser admin frameworks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::contact::{Contact, ContactPatch, NewContact, PartialContact};
use crate::domain::types::ContactId;
use crate::provider::errors::{ProviderError, ProviderResult};

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod request;

/// Name of the only remote collection served by the adapter.
pub const RESOURCE: &str = "phonebook";

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Optional substring filters applied server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_substring: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_substring: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetListParams {
    pub pagination: Pagination,
    #[serde(default)]
    pub filter: ListFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOneParams {
    pub id: ContactId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateParams {
    pub data: NewContact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateParams {
    pub id: ContactId,
    #[serde(default)]
    pub data: ContactPatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteParams {
    pub id: ContactId,
    pub previous_data: NewContact,
}

/// Offset window sent to the API for a list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub start: usize,
    /// Inclusive.
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_substring: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_substring: Option<String>,
}

impl ListQuery {
    /// Converts a 1-based page into the `[start, end]` offset window.
    pub fn from_pagination(pagination: Pagination) -> ProviderResult<Self> {
        let Pagination { page, per_page } = pagination;
        if page == 0 || per_page == 0 {
            return Err(ProviderError::InvalidPagination);
        }
        let start = (page - 1)
            .checked_mul(per_page)
            .ok_or(ProviderError::InvalidPagination)?;
        let end = page
            .checked_mul(per_page)
            .ok_or(ProviderError::InvalidPagination)?
            - 1;
        Ok(Self {
            start,
            end,
            name_substring: None,
            phone_substring: None,
        })
    }

    pub fn filter(mut self, filter: ListFilter) -> Self {
        self.name_substring = filter.name_substring;
        self.phone_substring = filter.phone_substring;
        self
    }
}

impl TryFrom<GetListParams> for ListQuery {
    type Error = ProviderError;

    fn try_from(params: GetListParams) -> Result<Self, Self::Error> {
        Ok(Self::from_pagination(params.pagination)?.filter(params.filter))
    }
}

/// One page of entries together with the size of the full matching set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResult {
    pub data: Vec<Contact>,
    pub total: usize,
}

/// CRUD operations on the phonebook resource.
///
/// Every call issues exactly one HTTP request. Create, update and delete echo
/// the caller's values instead of fetching the stored record again.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn get_list(&self, params: GetListParams) -> ProviderResult<ListResult>;
    async fn get_one(&self, params: GetOneParams) -> ProviderResult<Contact>;
    async fn create(&self, params: CreateParams) -> ProviderResult<Contact>;
    async fn update(&self, params: UpdateParams) -> ProviderResult<PartialContact>;
    async fn delete(&self, params: DeleteParams) -> ProviderResult<Contact>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn page(page: usize, per_page: usize) -> Pagination {
        Pagination { page, per_page }
    }

    #[test]
    fn window_is_derived_from_page() {
        for (p, n) in [(1, 1), (1, 10), (2, 10), (3, 25), (7, 100)] {
            let query = ListQuery::from_pagination(page(p, n)).unwrap();
            assert_eq!(query.start, (p - 1) * n);
            assert_eq!(query.end, p * n - 1);
        }
    }

    #[test]
    fn zero_page_or_size_is_rejected() {
        assert!(matches!(
            ListQuery::from_pagination(page(0, 10)),
            Err(ProviderError::InvalidPagination)
        ));
        assert!(matches!(
            ListQuery::from_pagination(page(1, 0)),
            Err(ProviderError::InvalidPagination)
        ));
    }

    #[test]
    fn list_params_accept_camel_case_and_missing_filter() {
        let params: GetListParams =
            serde_json::from_value(json!({"pagination": {"page": 2, "perPage": 25}})).unwrap();
        assert_eq!(params.pagination, page(2, 25));
        assert_eq!(params.filter, ListFilter::default());

        let query = ListQuery::try_from(params).unwrap();
        assert_eq!(query.start, 25);
        assert_eq!(query.end, 49);
    }

    #[test]
    fn query_omits_absent_filters() {
        let query = ListQuery::from_pagination(page(1, 10))
            .unwrap()
            .filter(ListFilter {
                name_substring: Some("bo".into()),
                phone_substring: None,
            });
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"start": 0, "end": 9, "nameSubstring": "bo"})
        );
    }

    #[test]
    fn delete_params_read_previous_data() {
        let params: DeleteParams = serde_json::from_value(json!({
            "id": 3,
            "previousData": {"name": "Y", "phone": "+16502530000"}
        }))
        .unwrap();
        assert_eq!(params.id.get(), 3);
        assert_eq!(params.previous_data.name, "Y");
    }
}
