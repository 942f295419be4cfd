//! [`DataProvider`] backed by the phonebook REST API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use url::Url;

use crate::domain::contact::{Contact, PartialContact};
use crate::domain::types::ContactId;
use crate::provider::errors::{ProviderError, ProviderResult};
use crate::provider::{
    CreateParams, DataProvider, DeleteParams, GetListParams, GetOneParams, ListQuery, ListResult,
    RESOURCE, UpdateParams,
};

/// Header carrying the size of the full matching set on list responses.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
const LOCATION_HEADER: &str = "location";

#[derive(Deserialize)]
struct EntryBody {
    name: String,
    phone: String,
}

/// Stateless HTTP adapter. Cloning shares the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpDataProvider {
    client: Client,
    collection: Url,
}

impl HttpDataProvider {
    /// Creates an adapter for the API rooted at `base_url`.
    pub fn new(base_url: &str) -> ProviderResult<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// Same as [`HttpDataProvider::new`] but reuses a preconfigured client.
    pub fn with_client(client: Client, base_url: &str) -> ProviderResult<Self> {
        let collection = Url::parse(&format!("{}/{RESOURCE}", base_url.trim_end_matches('/')))?;
        if collection.cannot_be_a_base() {
            return Err(ProviderError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { client, collection })
    }

    /// URL of the phonebook collection, e.g. `http://host/phonebook`.
    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    fn entry_url(&self, id: ContactId) -> Url {
        let mut url = self.collection.clone();
        // Cannot fail: cannot-be-a-base urls are rejected on construction.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.to_string());
        }
        url
    }

    /// The single-entry read passes the id as the bare query string.
    fn lookup_url(&self, id: ContactId) -> Url {
        let mut url = self.collection.clone();
        url.set_query(Some(&id.to_string()));
        url
    }
}

fn header_value<'a>(response: &'a Response, name: &'static str) -> ProviderResult<&'a str> {
    let value = response
        .headers()
        .get(name)
        .ok_or(ProviderError::MissingHeader(name))?;
    value.to_str().map_err(|_| ProviderError::InvalidHeader {
        name,
        value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
    })
}

fn parse_total(value: &str) -> ProviderResult<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ProviderError::InvalidHeader {
            name: TOTAL_COUNT_HEADER,
            value: value.to_string(),
        })
}

/// Extracts the new id from a `Location` value: the segment after the last `/`.
fn parse_location_id(location: &str) -> ProviderResult<ContactId> {
    let invalid = || ProviderError::InvalidHeader {
        name: LOCATION_HEADER,
        value: location.to_string(),
    };
    let segment = location.rsplit('/').next().ok_or_else(invalid)?;
    segment.parse::<ContactId>().map_err(|_| invalid())
}

#[async_trait]
impl DataProvider for HttpDataProvider {
    async fn get_list(&self, params: GetListParams) -> ProviderResult<ListResult> {
        let query = ListQuery::try_from(params)?;
        log::debug!(
            "GET {} start={} end={}",
            self.collection,
            query.start,
            query.end
        );

        let response = self
            .client
            .get(self.collection.clone())
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let total = parse_total(header_value(&response, TOTAL_COUNT_HEADER)?)?;
        let data = response.json::<Vec<Contact>>().await?;

        Ok(ListResult { data, total })
    }

    async fn get_one(&self, params: GetOneParams) -> ProviderResult<Contact> {
        let url = self.lookup_url(params.id);
        log::debug!("GET {url}");

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<EntryBody>()
            .await?;

        Ok(Contact {
            id: params.id,
            name: body.name,
            phone: body.phone,
        })
    }

    async fn create(&self, params: CreateParams) -> ProviderResult<Contact> {
        log::debug!("POST {}", self.collection);

        let response = self
            .client
            .post(self.collection.clone())
            .json(&params.data)
            .send()
            .await?
            .error_for_status()?;

        let id = parse_location_id(header_value(&response, LOCATION_HEADER)?)?;

        Ok(Contact {
            id,
            name: params.data.name,
            phone: params.data.phone,
        })
    }

    async fn update(&self, params: UpdateParams) -> ProviderResult<PartialContact> {
        let url = self.entry_url(params.id);
        log::debug!("PATCH {url}");

        self.client
            .patch(url)
            .json(&params.data)
            .send()
            .await?
            .error_for_status()?;

        Ok(PartialContact {
            id: params.id,
            name: params.data.name,
            phone: params.data.phone,
        })
    }

    async fn delete(&self, params: DeleteParams) -> ProviderResult<Contact> {
        let url = self.entry_url(params.id);
        log::debug!("DELETE {url}");

        self.client.delete(url).send().await?.error_for_status()?;

        Ok(Contact {
            id: params.id,
            name: params.previous_data.name,
            phone: params.previous_data.phone,
        })
    }
}
