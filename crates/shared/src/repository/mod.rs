pub mod compte;
