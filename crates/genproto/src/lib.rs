pub mod compte {
    include!("gen/compte.rs");
}
