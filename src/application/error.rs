// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("host failure: {0}")]
    Host(String),

    #[error("widget is detached")]
    Detached,
}

impl ApplicationError {
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }
}
