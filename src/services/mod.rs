//! Service layer tying the form normalizer, search backend and renderer together.

use thiserror::Error;

pub mod search;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("template error: {0}")]
    Render(#[from] tera::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
