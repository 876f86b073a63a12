use crate::{
    abstract_trait::compte::repository::CompteRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::compte::{CompteModel, TypeCompte},
};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Debug, FromRow)]
struct CompteRow {
    id: i64,
    solde: f32,
    date_creation: String,
    type_compte: String,
}

impl TryFrom<CompteRow> for CompteModel {
    type Error = RepositoryError;

    fn try_from(row: CompteRow) -> Result<Self, Self::Error> {
        let type_compte = row
            .type_compte
            .parse::<TypeCompte>()
            .map_err(|e| RepositoryError::Custom(format!("compte {}: {e}", row.id)))?;

        Ok(Self {
            id: Some(row.id),
            solde: row.solde,
            date_creation: row.date_creation,
            type_compte,
        })
    }
}

pub struct CompteRepository {
    db: ConnectionPool,
}

impl CompteRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn insert(&self, compte: &CompteModel) -> Result<CompteModel, RepositoryError> {
        let row = sqlx::query_as::<_, CompteRow>(
            r#"
            INSERT INTO comptes (solde, date_creation, type_compte)
            VALUES ($1, $2, $3)
            RETURNING id, solde, date_creation, type_compte
            "#,
        )
        .bind(compte.solde)
        .bind(&compte.date_creation)
        .bind(compte.type_compte.as_str())
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert compte: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Inserted compte id={}", row.id);

        row.try_into()
    }

    async fn update(&self, id: i64, compte: &CompteModel) -> Result<CompteModel, RepositoryError> {
        let row = sqlx::query_as::<_, CompteRow>(
            r#"
            UPDATE comptes
            SET solde = $2, date_creation = $3, type_compte = $4
            WHERE id = $1
            RETURNING id, solde, date_creation, type_compte
            "#,
        )
        .bind(id)
        .bind(compte.solde)
        .bind(&compte.date_creation)
        .bind(compte.type_compte.as_str())
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update compte id={id}: {e:?}");
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("✅ Updated compte id={id}");

        row.try_into()
    }
}

#[async_trait]
impl CompteRepositoryTrait for CompteRepository {
    async fn find_all(&self) -> Result<Vec<CompteModel>, RepositoryError> {
        info!("🔍 Fetching all comptes");

        let rows = sqlx::query_as::<_, CompteRow>(
            r#"
            SELECT id, solde, date_creation, type_compte
            FROM comptes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch comptes: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} comptes", rows.len());

        rows.into_iter().map(CompteModel::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CompteModel>, RepositoryError> {
        info!("🔍 Fetching compte id={id}");

        let row = sqlx::query_as::<_, CompteRow>(
            r#"
            SELECT id, solde, date_creation, type_compte
            FROM comptes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch compte id={id}: {e:?}");
            RepositoryError::from(e)
        })?;

        row.map(CompteModel::try_from).transpose()
    }

    async fn save(&self, compte: &CompteModel) -> Result<CompteModel, RepositoryError> {
        // store-level upsert; the account service only inserts
        match compte.id {
            Some(id) => self.update(id, compte).await,
            None => self.insert(compte).await,
        }
    }
}
