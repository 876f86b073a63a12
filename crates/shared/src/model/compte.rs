use genproto::compte::TypeCompte as TypeCompteProto;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCompte {
    Courant,
    Epargne,
}

impl TypeCompte {
    pub const ALL: [TypeCompte; 2] = [TypeCompte::Courant, TypeCompte::Epargne];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCompte::Courant => "COURANT",
            TypeCompte::Epargne => "EPARGNE",
        }
    }
}

impl fmt::Display for TypeCompte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCompte {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeCompte::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown account type '{s}'"))
    }
}

// domain to proto
impl From<TypeCompte> for TypeCompteProto {
    fn from(value: TypeCompte) -> Self {
        match value {
            TypeCompte::Courant => TypeCompteProto::Courant,
            TypeCompte::Epargne => TypeCompteProto::Epargne,
        }
    }
}

// proto to domain
impl From<TypeCompteProto> for TypeCompte {
    fn from(value: TypeCompteProto) -> Self {
        match value {
            TypeCompteProto::Courant => TypeCompte::Courant,
            TypeCompteProto::Epargne => TypeCompte::Epargne,
        }
    }
}

/// Every variant of the wire enum, in declaration order.
const WIRE_TYPES: [TypeCompteProto; 2] = [TypeCompteProto::Courant, TypeCompteProto::Epargne];

/// Checks that the domain and wire account types have identical membership,
/// variant for variant and name for name.
///
/// Called once at startup so a schema drift stops the server instead of
/// surfacing as a failed request.
pub fn ensure_type_compte_mapping() -> Result<(), String> {
    for domain in TypeCompte::ALL {
        let wire = TypeCompteProto::from(domain);
        if wire.as_str_name() != domain.as_str() {
            return Err(format!(
                "account type {domain} maps to wire variant {}",
                wire.as_str_name()
            ));
        }
    }

    for wire in WIRE_TYPES {
        let domain = TypeCompte::from(wire);
        if domain.as_str() != wire.as_str_name() {
            return Err(format!(
                "wire account type {} maps to domain variant {domain}",
                wire.as_str_name()
            ));
        }
    }

    same_type_names(
        &TypeCompte::ALL.map(|t| t.as_str()),
        &WIRE_TYPES.map(|t| t.as_str_name()),
    )
}

/// Compares two sets of type names, ignoring order and wire numbering.
fn same_type_names(domain: &[&str], wire: &[&str]) -> Result<(), String> {
    let missing_on_wire: Vec<&str> = domain
        .iter()
        .filter(|name| !wire.contains(*name))
        .copied()
        .collect();
    let missing_in_domain: Vec<&str> = wire
        .iter()
        .filter(|name| !domain.contains(*name))
        .copied()
        .collect();

    if missing_on_wire.is_empty() && missing_in_domain.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "account types differ | missing on wire: {missing_on_wire:?}, missing in domain: {missing_in_domain:?}"
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompteModel {
    pub id: Option<i64>,
    pub solde: f32,
    pub date_creation: String,
    pub type_compte: TypeCompte,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoldeStats {
    pub count: usize,
    pub sum: f32,
    pub average: f32,
}

impl SoldeStats {
    pub fn from_comptes(comptes: &[CompteModel]) -> Self {
        let count = comptes.len();
        let sum = comptes.iter().fold(0.0_f32, |acc, c| acc + c.solde);
        let average = if count > 0 { sum / count as f32 } else { 0.0 };

        Self {
            count,
            sum,
            average,
        }
    }
}
