use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("{0}")]
    Custom(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let message = db_err.message().to_string();
            match db_err.code().as_deref() {
                Some("23505") => return RepositoryError::AlreadyExists(message),
                Some("23503") => return RepositoryError::ForeignKey(message),
                Some("23502") | Some("23514") => return RepositoryError::Constraint(message),
                _ => {}
            }
        }

        RepositoryError::Sqlx(err)
    }
}
