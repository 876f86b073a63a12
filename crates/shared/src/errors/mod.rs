mod grpc;
mod repository;
mod service;

pub use self::grpc::AppErrorGrpc;
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
