use crate::{
    errors::ServiceError,
    model::compte::{CompteModel, SoldeStats, TypeCompte},
};
use genproto::compte::{
    Compte as CompteProto, SoldeStats as SoldeStatsProto, TypeCompte as TypeCompteProto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CompteResponse {
    pub id: String,
    pub solde: f32,
    pub date_creation: String,
    pub type_compte: TypeCompte,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoldeStatsResponse {
    pub count: i32,
    pub sum: f32,
    pub average: f32,
}

// model to response
impl From<CompteModel> for CompteResponse {
    fn from(model: CompteModel) -> Self {
        Self {
            id: model.id.map(|id| id.to_string()).unwrap_or_default(),
            solde: model.solde,
            date_creation: model.date_creation,
            type_compte: model.type_compte,
        }
    }
}

impl TryFrom<SoldeStats> for SoldeStatsResponse {
    type Error = ServiceError;

    fn try_from(stats: SoldeStats) -> Result<Self, Self::Error> {
        let count = i32::try_from(stats.count).map_err(|_| {
            ServiceError::Internal(format!("account count {} exceeds i32", stats.count))
        })?;

        Ok(Self {
            count,
            sum: stats.sum,
            average: stats.average,
        })
    }
}

// response to proto
impl From<CompteResponse> for CompteProto {
    fn from(r: CompteResponse) -> Self {
        Self {
            id: r.id,
            solde: r.solde,
            date_creation: r.date_creation,
            r#type: TypeCompteProto::from(r.type_compte) as i32,
        }
    }
}

impl From<SoldeStatsResponse> for SoldeStatsProto {
    fn from(r: SoldeStatsResponse) -> Self {
        Self {
            count: r.count,
            sum: r.sum,
            average: r.average,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::CreateCompteRequest;
    use genproto::compte::CompteRequest as CompteRequestProto;

    fn to_wire(model: CompteModel) -> CompteProto {
        CompteResponse::from(model).into()
    }

    #[test]
    fn id_is_rendered_as_plain_decimal() {
        let proto = to_wire(CompteModel {
            id: Some(7),
            solde: 12.5,
            date_creation: "2024-03-05".to_string(),
            type_compte: TypeCompte::Courant,
        });

        assert_eq!(proto.id, "7");
        assert_eq!(proto.solde, 12.5);
        assert_eq!(proto.date_creation, "2024-03-05");
        assert_eq!(proto.r#type, TypeCompteProto::Courant as i32);
    }

    #[test]
    fn unsaved_model_has_empty_id() {
        let response = CompteResponse::from(CompteModel {
            id: None,
            solde: 0.0,
            date_creation: String::new(),
            type_compte: TypeCompte::Epargne,
        });

        assert!(response.id.is_empty());
    }

    #[test]
    fn wire_round_trip_preserves_everything_but_id() {
        for type_compte in TypeCompte::ALL {
            let model = CompteModel {
                id: Some(1234),
                solde: -0.1,
                date_creation: "not-a-date, passed through".to_string(),
                type_compte,
            };

            let wire = to_wire(model);
            let request = CompteRequestProto {
                solde: wire.solde,
                date_creation: wire.date_creation.clone(),
                r#type: wire.r#type,
            };
            let domain = CreateCompteRequest::try_from(request).expect("valid request");
            let again = to_wire(CompteModel::from(&domain));

            assert_eq!(again.solde.to_bits(), wire.solde.to_bits());
            assert_eq!(again.date_creation, wire.date_creation);
            assert_eq!(again.r#type, wire.r#type);
            assert_eq!(wire.id, "1234");
            assert!(again.id.is_empty());
        }
    }

    #[test]
    fn stats_response_carries_count_as_i32() {
        let stats = SoldeStats {
            count: 3,
            sum: 60.0,
            average: 20.0,
        };

        let proto = SoldeStatsProto::from(SoldeStatsResponse::try_from(stats).expect("fits"));
        assert_eq!(proto.count, 3);
        assert_eq!(proto.sum, 60.0);
        assert_eq!(proto.average, 20.0);
    }
}
