use crate::errors::{repository::RepositoryError, service::ServiceError};
use thiserror::Error;
use tonic::Status;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AppErrorGrpc {
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}

impl AppErrorGrpc {
    pub fn log(&self) {
        match self {
            AppErrorGrpc::Service(service_err) => match service_err {
                ServiceError::InvalidAccountId(id) => warn!("📝 {} ({id:?})", self),
                ServiceError::NotFound(id) => warn!("🔍 {} (id={id})", self),
                ServiceError::Validation(_) => warn!("📝 {}", self),
                _ => error!("🚨 {}", self),
            },
        }
    }
}

impl From<AppErrorGrpc> for Status {
    fn from(err: AppErrorGrpc) -> Self {
        err.log();
        match err {
            AppErrorGrpc::Service(service_err) => match service_err {
                ServiceError::InvalidAccountId(_) => {
                    Status::invalid_argument("invalid account identifier")
                }
                ServiceError::NotFound(_) => Status::not_found("account not found"),
                ServiceError::Validation(errors) => {
                    Status::invalid_argument(format!("Validation failed: {}", errors.join(", ")))
                }
                ServiceError::Repo(repo_err) => match repo_err {
                    RepositoryError::NotFound => Status::not_found("Resource not found"),
                    RepositoryError::AlreadyExists(msg) => {
                        Status::already_exists(format!("Already exists: {msg}"))
                    }
                    RepositoryError::ForeignKey(msg) => {
                        Status::failed_precondition(format!("Foreign key constraint: {msg}"))
                    }
                    RepositoryError::Constraint(msg) => {
                        Status::failed_precondition(format!("Constraint violation: {msg}"))
                    }
                    RepositoryError::Sqlx(err) => {
                        error!("💾 Database SQLx error: {err:?}");
                        Status::internal(format!("Database error: {err}"))
                    }
                    RepositoryError::Custom(msg) => Status::internal(msg),
                },
                ServiceError::Internal(msg) => Status::internal(msg),
            },
        }
    }
}
