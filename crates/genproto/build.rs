use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = "src/gen";

    fs::create_dir_all(out_dir)?;

    if std::env::var_os("PROTOC").is_none() {
        let protoc = protoc_bin_vendored::protoc_bin_path()?;
        // SAFETY: build scripts run single-threaded before protoc is spawned.
        unsafe { std::env::set_var("PROTOC", protoc) };
    }

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .out_dir(out_dir)
        .compile_protos(&["../../proto/compte.proto"], &["../../proto"])?;

    println!("cargo:rerun-if-changed=../../proto");

    Ok(())
}
