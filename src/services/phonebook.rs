//! Use-cases behind the phonebook admin screens.

use crate::domain::contact::{Contact, PartialContact};
use crate::domain::types::ContactId;
use crate::dto::phonebook::{ListPageData, ListPageQuery};
use crate::forms::contact::{CreateContactForm, DeleteContactForm, EditContactForm};
use crate::pagination::{Paginated, normalize_per_page};
use crate::provider::{
    CreateParams, DataProvider, DeleteParams, GetListParams, GetOneParams, Pagination,
    UpdateParams,
};
use crate::services::ServiceResult;

/// Loads one page of entries for the list screen.
pub async fn load_list_page<P>(provider: &P, query: ListPageQuery) -> ServiceResult<ListPageData>
where
    P: DataProvider + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let per_page = normalize_per_page(query.per_page);
    let filter = query.filter();

    let result = provider
        .get_list(GetListParams {
            pagination: Pagination { page, per_page },
            filter: filter.clone(),
        })
        .await
        .map_err(|err| {
            log::error!("Failed to list phonebook entries: {err}");
            err
        })?;

    Ok(ListPageData {
        contacts: Paginated::new(result.data, page, per_page, result.total),
        filter,
    })
}

/// Fetches the entry shown on the edit screen.
pub async fn load_contact<P>(provider: &P, id: ContactId) -> ServiceResult<Contact>
where
    P: DataProvider + ?Sized,
{
    Ok(provider.get_one(GetOneParams { id }).await?)
}

/// Validates the create form and adds the entry.
pub async fn create_contact<P>(provider: &P, form: CreateContactForm) -> ServiceResult<Contact>
where
    P: DataProvider + ?Sized,
{
    let data = form.into_new_contact().map_err(|err| {
        log::warn!("Rejected create form: {err}");
        err
    })?;

    Ok(provider.create(CreateParams { data }).await?)
}

/// Validates the edit form and sends the non-blank fields.
pub async fn update_contact<P>(
    provider: &P,
    id: ContactId,
    form: EditContactForm,
) -> ServiceResult<PartialContact>
where
    P: DataProvider + ?Sized,
{
    let data = form.into_patch().map_err(|err| {
        log::warn!("Rejected edit form for entry {id}: {err}");
        err
    })?;

    Ok(provider.update(UpdateParams { id, data }).await?)
}

/// Deletes the entry, echoing back the values the caller last saw.
pub async fn delete_contact<P>(
    provider: &P,
    id: ContactId,
    form: DeleteContactForm,
) -> ServiceResult<Contact>
where
    P: DataProvider + ?Sized,
{
    Ok(provider
        .delete(DeleteParams {
            id,
            previous_data: form.into(),
        })
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::NewContact;
    use crate::provider::errors::ProviderError;
    use crate::provider::mock::MockProvider;
    use crate::provider::{ListFilter, ListResult};
    use crate::services::ServiceError;

    fn id(value: i64) -> ContactId {
        ContactId::new(value).unwrap()
    }

    #[tokio::test]
    async fn list_page_normalizes_query() {
        let mut provider = MockProvider::new();
        provider
            .expect_get_list()
            .times(1)
            .withf(|params| {
                params.pagination == Pagination { page: 1, per_page: 10 }
                    && params.filter
                        == ListFilter {
                            name_substring: Some("bo".into()),
                            phone_substring: None,
                        }
            })
            .returning(|_| {
                Ok(ListResult {
                    data: vec![Contact {
                        id: ContactId::new(1).unwrap(),
                        name: "Bob".into(),
                        phone: "+16502530000".into(),
                    }],
                    total: 42,
                })
            });

        let query = ListPageQuery {
            page: Some(0),
            per_page: Some(13),
            name_substring: Some(" bo ".into()),
            phone_substring: Some("  ".into()),
        };
        let data = load_list_page(&provider, query).await.unwrap();

        assert_eq!(data.contacts.total, 42);
        assert_eq!(data.contacts.items.len(), 1);
        assert_eq!(data.contacts.pages.last(), Some(&Some(5)));
    }

    #[tokio::test]
    async fn invalid_create_form_never_reaches_provider() {
        let mut provider = MockProvider::new();
        provider.expect_create().never();

        let form = CreateContactForm {
            name: "Bob".into(),
            phone: "not a number".into(),
        };
        let err = create_contact(&provider, form).await.unwrap_err();

        assert!(matches!(err, ServiceError::Form(ref m) if m == "Phone number cannot be parsed"));
    }

    #[tokio::test]
    async fn update_sends_only_filled_fields() {
        let mut provider = MockProvider::new();
        provider
            .expect_update()
            .times(1)
            .withf(|params| {
                params.id == ContactId::new(7).unwrap()
                    && params.data.name.as_deref() == Some("X")
                    && params.data.phone.is_none()
            })
            .returning(|params| {
                Ok(PartialContact {
                    id: params.id,
                    name: params.data.name,
                    phone: params.data.phone,
                })
            });

        let form = EditContactForm {
            name: "X".into(),
            phone: String::new(),
        };
        let updated = update_contact(&provider, id(7), form).await.unwrap();

        assert_eq!(updated.name.as_deref(), Some("X"));
        assert!(updated.phone.is_none());
    }

    #[tokio::test]
    async fn delete_passes_previous_data() {
        let mut provider = MockProvider::new();
        provider
            .expect_delete()
            .times(1)
            .withf(|params| params.previous_data == NewContact::new("Y", "+16502530000"))
            .returning(|params| {
                Ok(Contact {
                    id: params.id,
                    name: params.previous_data.name,
                    phone: params.previous_data.phone,
                })
            });

        let form = DeleteContactForm {
            name: "Y".into(),
            phone: "+16502530000".into(),
        };
        let deleted = delete_contact(&provider, id(3), form).await.unwrap();

        assert_eq!(deleted.id, id(3));
        assert_eq!(deleted.name, "Y");
    }

    #[tokio::test]
    async fn provider_errors_are_passed_through() {
        let mut provider = MockProvider::new();
        provider
            .expect_get_one()
            .times(1)
            .returning(|_| Err(ProviderError::MissingHeader("location")));

        let err = load_contact(&provider, id(5)).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Provider(ProviderError::MissingHeader("location"))
        ));
    }
}
