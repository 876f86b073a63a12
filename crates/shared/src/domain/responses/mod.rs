mod compte;

pub use self::compte::{CompteResponse, SoldeStatsResponse};
