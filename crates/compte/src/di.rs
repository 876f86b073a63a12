use anyhow::{Result, anyhow};
use shared::{
    abstract_trait::compte::{repository::DynCompteRepository, service::DynCompteService},
    config::ConnectionPool,
    model::compte::ensure_type_compte_mapping,
    repository::compte::CompteRepository,
    service::compte::CompteService,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub compte_service: DynCompteService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("compte_service", &"DynCompteService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(db: ConnectionPool) -> Result<Self> {
        let repository = Arc::new(CompteRepository::new(db)) as DynCompteRepository;
        Self::with_repository(repository)
    }

    /// Wires the service over any store, refusing to start if the account
    /// type enumerations have drifted apart.
    pub fn with_repository(repository: DynCompteRepository) -> Result<Self> {
        ensure_type_compte_mapping().map_err(|e| anyhow!("account type mapping mismatch: {e}"))?;

        let compte_service = Arc::new(CompteService::new(repository)) as DynCompteService;

        Ok(Self { compte_service })
    }
}
