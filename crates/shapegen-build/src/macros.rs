//! Build-script helper that runs shape codegen for a model file.
//!
//! Writes `$OUT_DIR/shapes.rs`, to be pulled in with
//! `include!(concat!(env!("OUT_DIR"), "/shapes.rs"))`. The config path is
//! optional; a missing file falls back to the defaults.
#[macro_export]
macro_rules! build {
    ($model:expr) => {
        $crate::build!($model, "shapegen.toml")
    };
    ($model:expr, $config:expr) => {{
        use std::{env::var, fs::File, io::Write, path::PathBuf};

        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={}", $model);
        println!("cargo:rerun-if-changed={}", $config);

        // Get the output directory set by Cargo
        let out_dir = var("OUT_DIR").expect("OUT_DIR not set");

        //
        // SHAPES
        //

        let output = $crate::generate_from_paths($model, $config)
            .unwrap_or_else(|e| panic!("shapegen codegen failed: {e}"));

        // write the file
        let shapes_file = PathBuf::from(out_dir).join("shapes.rs");
        let mut file = File::create(shapes_file).expect("create shapes.rs");
        file.write_all(output.as_bytes()).expect("write shapes.rs");
    }};
}
