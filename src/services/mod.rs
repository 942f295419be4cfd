use thiserror::Error;

use crate::forms::FormError;
use crate::provider::errors::ProviderError;

pub mod phonebook;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Submitted form was rejected before reaching the API.
    #[error("{0}")]
    Form(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.message())
    }
}
