use crate::{
    abstract_trait::compte::{
        repository::DynCompteRepository, service::CompteServiceTrait,
    },
    domain::{
        requests::{CreateCompteRequest, parse_compte_id},
        responses::{CompteResponse, SoldeStatsResponse},
    },
    errors::ServiceError,
    model::compte::{CompteModel, SoldeStats},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

/// Translation and aggregation layer over the account store.
///
/// Holds nothing but the store handle; every call reads through to it.
pub struct CompteService {
    repository: DynCompteRepository,
}

impl CompteService {
    pub fn new(repository: DynCompteRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CompteServiceTrait for CompteService {
    async fn find_all(&self) -> Result<Vec<CompteResponse>, ServiceError> {
        info!("🔍 Listing all comptes");

        let comptes = self.repository.find_all().await.map_err(|e| {
            error!("❌ Failed to fetch all comptes: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Found {} comptes", comptes.len());

        Ok(comptes.into_iter().map(CompteResponse::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<CompteResponse, ServiceError> {
        let id = parse_compte_id(id)?;

        info!("🔍 Finding compte by ID: {id}");

        let compte = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("❌ Database error while finding compte by ID {id}: {e:?}");
                ServiceError::Repo(e)
            })?
            .ok_or(ServiceError::NotFound(id))?;

        info!("✅ Found compte with ID: {id}");

        Ok(CompteResponse::from(compte))
    }

    async fn total_solde(&self) -> Result<SoldeStatsResponse, ServiceError> {
        info!("💰 Computing solde statistics");

        let comptes = self.repository.find_all().await.map_err(|e| {
            error!("❌ Failed to fetch comptes for statistics: {e:?}");
            ServiceError::Repo(e)
        })?;

        let stats = SoldeStats::from_comptes(&comptes);

        info!(
            "✅ Solde statistics | count: {}, sum: {}, average: {}",
            stats.count, stats.sum, stats.average
        );

        SoldeStatsResponse::try_from(stats)
    }

    async fn save(&self, req: &CreateCompteRequest) -> Result<CompteResponse, ServiceError> {
        info!(
            "🆕 Saving compte | type: {}, solde: {}",
            req.type_compte, req.solde
        );

        let compte = CompteModel::from(req);

        let saved = self.repository.save(&compte).await.map_err(|e| {
            error!("❌ Failed to save compte: {e:?}");
            ServiceError::Repo(e)
        })?;

        let response = CompteResponse::from(saved);

        info!("✅ Compte saved with ID: {}", response.id);

        Ok(response)
    }
}
