mod compte;

pub use self::compte::{CreateCompteRequest, parse_compte_id};
