//! List, create, edit and delete screens for phonebook entries.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::ContactId;
use crate::dto::phonebook::ListPageQuery;
use crate::forms::contact::{CreateContactForm, DeleteContactForm, EditContactForm};
use crate::pagination::PAGE_SIZES;
use crate::provider::http::HttpDataProvider;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, phonebook as phonebook_service};

fn parse_id(raw: i64) -> Option<ContactId> {
    ContactId::new(raw)
        .map_err(|err| log::warn!("Rejected entry id {raw}: {err}"))
        .ok()
}

#[get("/")]
/// Show one page of entries with the substring filters applied.
pub async fn show_list(
    query: web::Query<ListPageQuery>,
    provider: web::Data<HttpDataProvider>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match phonebook_service::load_list_page(provider.get_ref(), query.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("contacts", &data.contacts);
            context.insert("filter", &data.filter);
            context.insert("page_sizes", &PAGE_SIZES);
            render_template(&tera, "phonebook/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the phonebook: {err}");
            let mut context = base_context(&flash_messages, "index");
            context.insert("error", &err.to_string());
            render_template(&tera, "phonebook/unavailable.html", &context)
        }
    }
}

#[get("/contacts/new")]
pub async fn show_create(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "create");
    render_template(&tera, "phonebook/create.html", &context)
}

#[post("/contacts/new")]
/// Validate the posted form and add the entry.
pub async fn create_contact(
    provider: web::Data<HttpDataProvider>,
    web::Form(form): web::Form<CreateContactForm>,
) -> impl Responder {
    match phonebook_service::create_contact(provider.get_ref(), form).await {
        Ok(contact) => {
            FlashMessage::success(format!("Entry #{} added.", contact.id)).send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/contacts/new")
        }
        Err(err) => {
            log::error!("Failed to add an entry: {err}");
            FlashMessage::error(format!("Failed to add the entry: {err}")).send();
            redirect("/contacts/new")
        }
    }
}

#[get("/contacts/{id}")]
/// Show the edit form prefilled with the stored entry.
pub async fn show_edit(
    id: web::Path<i64>,
    provider: web::Data<HttpDataProvider>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Some(id) = parse_id(id.into_inner()) else {
        FlashMessage::error("Entry not found.").send();
        return redirect("/");
    };

    match phonebook_service::load_contact(provider.get_ref(), id).await {
        Ok(contact) => {
            let mut context = base_context(&flash_messages, "edit");
            context.insert("contact", &contact);
            render_template(&tera, "phonebook/edit.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load entry {id}: {err}");
            FlashMessage::error(format!("Failed to load entry #{id}: {err}")).send();
            redirect("/")
        }
    }
}

#[post("/contacts/{id}")]
/// Validate the edit form and send the filled-in fields.
pub async fn save_contact(
    id: web::Path<i64>,
    provider: web::Data<HttpDataProvider>,
    web::Form(form): web::Form<EditContactForm>,
) -> impl Responder {
    let Some(id) = parse_id(id.into_inner()) else {
        FlashMessage::error("Entry not found.").send();
        return redirect("/");
    };

    match phonebook_service::update_contact(provider.get_ref(), id, form).await {
        Ok(_) => {
            FlashMessage::success(format!("Entry #{id} updated.")).send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/contacts/{id}"))
        }
        Err(err) => {
            log::error!("Failed to update entry {id}: {err}");
            FlashMessage::error(format!("Failed to update entry #{id}: {err}")).send();
            redirect(&format!("/contacts/{id}"))
        }
    }
}

#[post("/contacts/{id}/delete")]
pub async fn delete_contact(
    id: web::Path<i64>,
    provider: web::Data<HttpDataProvider>,
    web::Form(form): web::Form<DeleteContactForm>,
) -> impl Responder {
    let Some(id) = parse_id(id.into_inner()) else {
        FlashMessage::error("Entry not found.").send();
        return redirect("/");
    };

    match phonebook_service::delete_contact(provider.get_ref(), id, form).await {
        Ok(contact) => {
            FlashMessage::success(format!("Entry #{} deleted.", contact.id)).send();
        }
        Err(err) => {
            log::error!("Failed to delete entry {id}: {err}");
            FlashMessage::error(format!("Failed to delete entry #{id}: {err}")).send();
        }
    }
    redirect("/")
}
