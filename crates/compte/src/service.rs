use genproto::compte::{
    GetAllComptesRequest, GetAllComptesResponse, GetCompteByIdRequest, GetCompteByIdResponse,
    GetTotalSoldeRequest, GetTotalSoldeResponse, SaveCompteRequest, SaveCompteResponse,
    compte_service_server::CompteService,
};
use shared::{
    abstract_trait::compte::service::DynCompteService,
    domain::requests::CreateCompteRequest,
    errors::{AppErrorGrpc, ServiceError},
};
use tonic::{Request, Response, Status};
use tracing::{info, instrument};

#[derive(Clone)]
pub struct CompteServiceImpl {
    pub service: DynCompteService,
}

impl CompteServiceImpl {
    pub fn new(service: DynCompteService) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl CompteService for CompteServiceImpl {
    #[instrument(skip(self, _request), level = "info")]
    async fn all_comptes(
        &self,
        _request: Request<GetAllComptesRequest>,
    ) -> Result<Response<GetAllComptesResponse>, Status> {
        info!("Handling gRPC request: AllComptes");

        match self.service.find_all().await {
            Ok(comptes) => {
                let grpc_response = GetAllComptesResponse {
                    comptes: comptes.into_iter().map(Into::into).collect(),
                };
                Ok(Response::new(grpc_response))
            }
            Err(e) => Err(AppErrorGrpc::from(e).into()),
        }
    }

    #[instrument(skip(self, request), level = "info")]
    async fn compte_by_id(
        &self,
        request: Request<GetCompteByIdRequest>,
    ) -> Result<Response<GetCompteByIdResponse>, Status> {
        let req = request.into_inner();
        info!("Handling gRPC request: CompteById {:?}", req.id);

        match self.service.find_by_id(&req.id).await {
            Ok(compte) => {
                let grpc_response = GetCompteByIdResponse {
                    compte: Some(compte.into()),
                };
                Ok(Response::new(grpc_response))
            }
            Err(e) => Err(AppErrorGrpc::from(e).into()),
        }
    }

    #[instrument(skip(self, _request), level = "info")]
    async fn total_solde(
        &self,
        _request: Request<GetTotalSoldeRequest>,
    ) -> Result<Response<GetTotalSoldeResponse>, Status> {
        info!("Handling gRPC request: TotalSolde");

        match self.service.total_solde().await {
            Ok(stats) => {
                let grpc_response = GetTotalSoldeResponse {
                    stats: Some(stats.into()),
                };
                Ok(Response::new(grpc_response))
            }
            Err(e) => Err(AppErrorGrpc::from(e).into()),
        }
    }

    #[instrument(skip(self, request), level = "info")]
    async fn save_compte(
        &self,
        request: Request<SaveCompteRequest>,
    ) -> Result<Response<SaveCompteResponse>, Status> {
        let req = request.into_inner();
        info!("Handling gRPC request: SaveCompte");

        let compte = req.compte.ok_or_else(|| {
            AppErrorGrpc::from(ServiceError::Validation(vec![
                "compte: payload is required".to_string(),
            ]))
        })?;

        let domain_req = CreateCompteRequest::try_from(compte).map_err(AppErrorGrpc::from)?;

        match self.service.save(&domain_req).await {
            Ok(saved) => {
                let grpc_response = SaveCompteResponse {
                    compte: Some(saved.into()),
                };
                Ok(Response::new(grpc_response))
            }
            Err(e) => Err(AppErrorGrpc::from(e).into()),
        }
    }
}
