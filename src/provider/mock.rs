//! Mock provider for isolating services and routes in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::contact::{Contact, PartialContact};
use crate::provider::errors::ProviderResult;
use crate::provider::{
    CreateParams, DataProvider, DeleteParams, GetListParams, GetOneParams, ListResult,
    UpdateParams,
};

mock! {
    pub Provider {}

    #[async_trait]
    impl DataProvider for Provider {
        async fn get_list(&self, params: GetListParams) -> ProviderResult<ListResult>;
        async fn get_one(&self, params: GetOneParams) -> ProviderResult<Contact>;
        async fn create(&self, params: CreateParams) -> ProviderResult<Contact>;
        async fn update(&self, params: UpdateParams) -> ProviderResult<PartialContact>;
        async fn delete(&self, params: DeleteParams) -> ProviderResult<Contact>;
    }
}
