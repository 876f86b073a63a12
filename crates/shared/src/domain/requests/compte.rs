use crate::{
    errors::ServiceError,
    model::compte::{CompteModel, TypeCompte},
};
use genproto::compte::{CompteRequest as CompteRequestProto, TypeCompte as TypeCompteProto};

/// Input for creating an account. There is no identifier: the store assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCompteRequest {
    pub solde: f32,
    pub date_creation: String,
    pub type_compte: TypeCompte,
}

impl From<&CreateCompteRequest> for CompteModel {
    fn from(req: &CreateCompteRequest) -> Self {
        Self {
            id: None,
            solde: req.solde,
            date_creation: req.date_creation.clone(),
            type_compte: req.type_compte,
        }
    }
}

// proto to domain
impl TryFrom<CompteRequestProto> for CreateCompteRequest {
    type Error = ServiceError;

    fn try_from(req: CompteRequestProto) -> Result<Self, Self::Error> {
        let type_compte = TypeCompteProto::try_from(req.r#type)
            .map(TypeCompte::from)
            .map_err(|_| {
                ServiceError::Validation(vec![format!("type: unknown account type {}", req.r#type)])
            })?;

        Ok(Self {
            solde: req.solde,
            date_creation: req.date_creation,
            type_compte,
        })
    }
}

/// Parses a wire identifier into a store key. Only non-negative integers are accepted.
pub fn parse_compte_id(raw: &str) -> Result<i64, ServiceError> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 0 => Ok(id),
        _ => Err(ServiceError::InvalidAccountId(raw.to_string())),
    }
}
