use async_trait::async_trait;
use compte::{di::DependenciesInject, service::CompteServiceImpl};
use genproto::compte::{
    CompteRequest, GetAllComptesRequest, GetCompteByIdRequest, GetTotalSoldeRequest,
    SaveCompteRequest, TypeCompte as TypeCompteProto, compte_service_server::CompteService,
};
use shared::{
    abstract_trait::compte::repository::CompteRepositoryTrait,
    errors::RepositoryError,
    model::compte::{CompteModel, TypeCompte},
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::RwLock;
use tonic::{Code, Request};

#[derive(Default)]
struct FakeStore {
    comptes: RwLock<Vec<CompteModel>>,
    calls: AtomicUsize,
    save_error: Option<String>,
}

impl FakeStore {
    fn with(comptes: Vec<CompteModel>) -> Arc<Self> {
        Arc::new(Self {
            comptes: RwLock::new(comptes),
            ..Default::default()
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompteRepositoryTrait for FakeStore {
    async fn find_all(&self) -> Result<Vec<CompteModel>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.comptes.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CompteModel>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let comptes = self.comptes.read().await;
        Ok(comptes.iter().find(|c| c.id == Some(id)).cloned())
    }

    async fn save(&self, compte: &CompteModel) -> Result<CompteModel, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(msg) = &self.save_error {
            return Err(RepositoryError::AlreadyExists(msg.clone()));
        }
        let mut comptes = self.comptes.write().await;
        let id = comptes.iter().filter_map(|c| c.id).max().unwrap_or(0) + 1;
        let saved = CompteModel {
            id: Some(id),
            ..compte.clone()
        };
        comptes.push(saved.clone());
        Ok(saved)
    }
}

fn compte(id: i64, solde: f32, type_compte: TypeCompte) -> CompteModel {
    CompteModel {
        id: Some(id),
        solde,
        date_creation: "2024-01-01".to_string(),
        type_compte,
    }
}

fn grpc(store: Arc<FakeStore>) -> CompteServiceImpl {
    let deps = DependenciesInject::with_repository(store).expect("type mapping is consistent");
    CompteServiceImpl::new(deps.compte_service)
}

#[tokio::test]
async fn all_comptes_lists_in_store_order() {
    let store = FakeStore::with(vec![
        compte(3, 30.0, TypeCompte::Courant),
        compte(1, 10.0, TypeCompte::Epargne),
    ]);

    let response = grpc(store)
        .all_comptes(Request::new(GetAllComptesRequest {}))
        .await
        .unwrap()
        .into_inner();

    let ids: Vec<&str> = response.comptes.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["3", "1"]);
    assert_eq!(response.comptes[1].solde, 10.0);
    assert_eq!(response.comptes[1].r#type, TypeCompteProto::Epargne as i32);
}

#[tokio::test]
async fn all_comptes_on_empty_store_succeeds() {
    let response = grpc(FakeStore::with(vec![]))
        .all_comptes(Request::new(GetAllComptesRequest {}))
        .await
        .unwrap()
        .into_inner();

    assert!(response.comptes.is_empty());
}

#[tokio::test]
async fn compte_by_id_returns_the_account() {
    let store = FakeStore::with(vec![compte(8, 42.25, TypeCompte::Epargne)]);

    let response = grpc(store)
        .compte_by_id(Request::new(GetCompteByIdRequest { id: "8".into() }))
        .await
        .unwrap()
        .into_inner();

    let found = response.compte.expect("compte is set");
    assert_eq!(found.id, "8");
    assert_eq!(found.solde, 42.25);
    assert_eq!(found.date_creation, "2024-01-01");
    assert_eq!(found.r#type, TypeCompteProto::Epargne as i32);
}

#[tokio::test]
async fn compte_by_id_rejects_malformed_ids_without_store_access() {
    let store = FakeStore::with(vec![compte(1, 1.0, TypeCompte::Courant)]);
    let service = grpc(store.clone());

    for id in ["abc", "", "-1"] {
        let status = service
            .compte_by_id(Request::new(GetCompteByIdRequest { id: id.into() }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument, "{id:?}");
        assert_eq!(status.message(), "invalid account identifier");
    }

    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn compte_by_id_reports_missing_accounts() {
    let store = FakeStore::with(vec![compte(1, 1.0, TypeCompte::Courant)]);

    let status = grpc(store)
        .compte_by_id(Request::new(GetCompteByIdRequest { id: "2".into() }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "account not found");
}

#[tokio::test]
async fn total_solde_over_empty_store_is_zero() {
    let response = grpc(FakeStore::with(vec![]))
        .total_solde(Request::new(GetTotalSoldeRequest {}))
        .await
        .unwrap()
        .into_inner();

    let stats = response.stats.expect("stats are set");
    assert_eq!(stats.count, 0);
    assert_eq!(stats.sum, 0.0);
    assert_eq!(stats.average, 0.0);
}

#[tokio::test]
async fn total_solde_aggregates_every_balance() {
    let store = FakeStore::with(vec![
        compte(1, 10.0, TypeCompte::Courant),
        compte(2, 20.0, TypeCompte::Courant),
        compte(3, 30.0, TypeCompte::Epargne),
    ]);

    let stats = grpc(store)
        .total_solde(Request::new(GetTotalSoldeRequest {}))
        .await
        .unwrap()
        .into_inner()
        .stats
        .expect("stats are set");

    assert_eq!(stats.count, 3);
    assert_eq!(stats.sum, 60.0);
    assert_eq!(stats.average, 20.0);
}

#[tokio::test]
async fn save_compte_persists_and_returns_assigned_id() {
    let store = FakeStore::with(vec![]);
    let service = grpc(store.clone());

    let saved = service
        .save_compte(Request::new(SaveCompteRequest {
            compte: Some(CompteRequest {
                solde: 100.0,
                date_creation: "2024-01-01".into(),
                r#type: TypeCompteProto::Courant as i32,
            }),
        }))
        .await
        .unwrap()
        .into_inner()
        .compte
        .expect("compte is set");

    assert!(!saved.id.is_empty());
    assert_eq!(saved.solde, 100.0);
    assert_eq!(saved.date_creation, "2024-01-01");
    assert_eq!(saved.r#type, TypeCompteProto::Courant as i32);

    let fetched = service
        .compte_by_id(Request::new(GetCompteByIdRequest { id: saved.id.clone() }))
        .await
        .unwrap()
        .into_inner()
        .compte
        .expect("compte is set");
    assert_eq!(fetched, saved);
}

#[tokio::test]
async fn save_compte_requires_a_payload() {
    let store = FakeStore::with(vec![]);

    let status = grpc(store.clone())
        .save_compte(Request::new(SaveCompteRequest { compte: None }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn save_compte_rejects_unknown_types() {
    let store = FakeStore::with(vec![]);

    let status = grpc(store.clone())
        .save_compte(Request::new(SaveCompteRequest {
            compte: Some(CompteRequest {
                solde: 1.0,
                date_creation: "2024-01-01".into(),
                r#type: 7,
            }),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn save_compte_forwards_store_failures() {
    let store = Arc::new(FakeStore {
        save_error: Some("duplicate key value".into()),
        ..Default::default()
    });

    let status = grpc(store)
        .save_compte(Request::new(SaveCompteRequest {
            compte: Some(CompteRequest {
                solde: 1.0,
                date_creation: "2024-01-01".into(),
                r#type: TypeCompteProto::Epargne as i32,
            }),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::AlreadyExists);
    assert!(status.message().contains("duplicate key value"));
}
