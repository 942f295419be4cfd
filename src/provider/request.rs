//! Generic `{type, resource, params}` entry point over a [`DataProvider`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::contact::{Contact, PartialContact};
use crate::provider::errors::{ProviderError, ProviderResult};
use crate::provider::{
    CreateParams, DataProvider, DeleteParams, GetListParams, GetOneParams, ListResult, RESOURCE,
    UpdateParams,
};

/// CRUD kinds understood by the adapter, named as admin frameworks send them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    GetList,
    GetOne,
    Create,
    Update,
    Delete,
}

impl OperationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            OperationKind::GetList => "GET_LIST",
            OperationKind::GetOne => "GET_ONE",
            OperationKind::Create => "CREATE",
            OperationKind::Update => "UPDATE",
            OperationKind::Delete => "DELETE",
        }
    }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET_LIST" => Ok(OperationKind::GetList),
            "GET_ONE" => Ok(OperationKind::GetOne),
            "CREATE" => Ok(OperationKind::Create),
            "UPDATE" => Ok(OperationKind::Update),
            "DELETE" => Ok(OperationKind::Delete),
            other => Err(ProviderError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// Wire envelope posted by a browser admin framework.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_resource")]
    pub resource: String,
    #[serde(default)]
    pub params: Value,
}

fn default_resource() -> String {
    RESOURCE.to_string()
}

/// A typed CRUD request, one variant per operation kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataRequest {
    GetList(GetListParams),
    GetOne(GetOneParams),
    Create(CreateParams),
    Update(UpdateParams),
    Delete(DeleteParams),
}

impl DataRequest {
    /// Decodes untyped parameters for the given kind. Unknown kinds fail
    /// without looking at the parameters.
    pub fn from_parts(kind: &str, params: Value) -> ProviderResult<Self> {
        let request = match kind.parse::<OperationKind>()? {
            OperationKind::GetList => DataRequest::GetList(serde_json::from_value(params)?),
            OperationKind::GetOne => DataRequest::GetOne(serde_json::from_value(params)?),
            OperationKind::Create => DataRequest::Create(serde_json::from_value(params)?),
            OperationKind::Update => DataRequest::Update(serde_json::from_value(params)?),
            OperationKind::Delete => DataRequest::Delete(serde_json::from_value(params)?),
        };
        Ok(request)
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            DataRequest::GetList(_) => OperationKind::GetList,
            DataRequest::GetOne(_) => OperationKind::GetOne,
            DataRequest::Create(_) => OperationKind::Create,
            DataRequest::Update(_) => OperationKind::Update,
            DataRequest::Delete(_) => OperationKind::Delete,
        }
    }
}

impl TryFrom<DataEnvelope> for DataRequest {
    type Error = ProviderError;

    fn try_from(envelope: DataEnvelope) -> Result<Self, Self::Error> {
        Self::from_parts(&envelope.kind, envelope.params)
    }
}

/// Result of a dispatched request, serialized as `{data, total?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DataResponse {
    List(ListResult),
    Record { data: Contact },
    Partial { data: PartialContact },
}

/// Runs one request against the provider.
pub async fn dispatch<P>(
    provider: &P,
    resource: &str,
    request: DataRequest,
) -> ProviderResult<DataResponse>
where
    P: DataProvider + ?Sized,
{
    if resource != RESOURCE {
        log::warn!("Serving {} for resource {resource} from {RESOURCE}", request.kind());
    }

    let response = match request {
        DataRequest::GetList(params) => DataResponse::List(provider.get_list(params).await?),
        DataRequest::GetOne(params) => DataResponse::Record {
            data: provider.get_one(params).await?,
        },
        DataRequest::Create(params) => DataResponse::Record {
            data: provider.create(params).await?,
        },
        DataRequest::Update(params) => DataResponse::Partial {
            data: provider.update(params).await?,
        },
        DataRequest::Delete(params) => DataResponse::Record {
            data: provider.delete(params).await?,
        },
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::types::ContactId;
    use crate::provider::mock::MockProvider;

    fn id(value: i64) -> ContactId {
        ContactId::new(value).unwrap()
    }

    #[test]
    fn unknown_kind_is_unsupported() {
        let err = DataRequest::from_parts("GET_MANY", json!({"ids": [1, 2]})).unwrap_err();
        assert!(matches!(err, ProviderError::UnsupportedOperation(ref kind) if kind == "GET_MANY"));
        assert_eq!(
            err.to_string(),
            "Unsupported data provider request type GET_MANY"
        );
    }

    #[test]
    fn params_are_decoded_per_kind() {
        let request = DataRequest::from_parts("UPDATE", json!({"id": 7, "data": {"name": "X"}}))
            .unwrap();
        assert_eq!(request.kind(), OperationKind::Update);
        match request {
            DataRequest::Update(params) => {
                assert_eq!(params.id, id(7));
                assert_eq!(params.data.name.as_deref(), Some("X"));
                assert!(params.data.phone.is_none());
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn mismatched_params_are_rejected() {
        let err = DataRequest::from_parts("GET_ONE", json!({"name": "nobody"})).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidParams(_)));
        assert!(err.is_client_side());
    }

    #[test]
    fn envelope_defaults_resource() {
        let envelope: DataEnvelope =
            serde_json::from_value(json!({"type": "DELETE", "params": {}})).unwrap();
        assert_eq!(envelope.resource, RESOURCE);
    }

    #[tokio::test]
    async fn dispatch_routes_to_matching_method() {
        let mut provider = MockProvider::new();
        provider
            .expect_update()
            .times(1)
            .returning(|params| {
                Ok(PartialContact {
                    id: params.id,
                    name: params.data.name,
                    phone: params.data.phone,
                })
            });
        provider.expect_get_list().never();

        let request =
            DataRequest::from_parts("UPDATE", json!({"id": 7, "data": {"name": "X"}})).unwrap();
        let response = dispatch(&provider, RESOURCE, request).await.unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"data": {"id": 7, "name": "X"}})
        );
    }

    #[tokio::test]
    async fn list_response_carries_total() {
        let mut provider = MockProvider::new();
        provider.expect_get_list().times(1).returning(|_| {
            Ok(ListResult {
                data: vec![Contact {
                    id: ContactId::new(1).unwrap(),
                    name: "A".into(),
                    phone: "+16502530000".into(),
                }],
                total: 31,
            })
        });

        let request = DataRequest::from_parts(
            "GET_LIST",
            json!({"pagination": {"page": 1, "perPage": 10}, "filter": {}}),
        )
        .unwrap();
        let response = dispatch(&provider, RESOURCE, request).await.unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"data": [{"id": 1, "name": "A", "phone": "+16502530000"}], "total": 31})
        );
    }
}
