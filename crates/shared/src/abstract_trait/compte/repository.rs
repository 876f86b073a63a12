use crate::{errors::RepositoryError, model::compte::CompteModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCompteRepository = Arc<dyn CompteRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CompteRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<CompteModel>, RepositoryError>;
    /// `Ok(None)` when no account has this id.
    async fn find_by_id(&self, id: i64) -> Result<Option<CompteModel>, RepositoryError>;
    /// Persists `compte` and returns it with its id populated.
    async fn save(&self, compte: &CompteModel) -> Result<CompteModel, RepositoryError>;
}
