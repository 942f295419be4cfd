use serde::{Deserialize, Serialize};

use crate::domain::contact::Contact;
use crate::pagination::Paginated;
use crate::provider::ListFilter;

/// Query parameters accepted by the list page.
#[derive(Debug, Default, Deserialize)]
pub struct ListPageQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub name_substring: Option<String>,
    pub phone_substring: Option<String>,
}

impl ListPageQuery {
    /// Filter with blank inputs dropped.
    pub fn filter(&self) -> ListFilter {
        let clean = |value: &Option<String>| {
            value
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        ListFilter {
            name_substring: clean(&self.name_substring),
            phone_substring: clean(&self.phone_substring),
        }
    }
}

/// Data required to render the list template.
#[derive(Debug, Serialize)]
pub struct ListPageData {
    pub contacts: Paginated<Contact>,
    /// Filter echoed back into the search inputs.
    pub filter: ListFilter,
}
