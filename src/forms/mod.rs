//! Form definitions backing the search routes.

use thiserror::Error;

pub mod search;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("malformed form body: {0}")]
    Malformed(String),
}
