use crate::{
    domain::{
        requests::CreateCompteRequest,
        responses::{CompteResponse, SoldeStatsResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCompteService = Arc<dyn CompteServiceTrait + Send + Sync>;

#[async_trait]
pub trait CompteServiceTrait {
    async fn find_all(&self) -> Result<Vec<CompteResponse>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<CompteResponse, ServiceError>;
    async fn total_solde(&self) -> Result<SoldeStatsResponse, ServiceError>;
    async fn save(&self, req: &CreateCompteRequest) -> Result<CompteResponse, ServiceError>;
}
