use std::{env, fs};

const MODEL: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../testing/fixtures/model/widgets.json"
);

#[test]
fn build_macro_resolves_through_its_own_crate() {
    let out_dir = env::temp_dir().join(format!("shapegen-build-macro-{}", std::process::id()));
    fs::create_dir_all(&out_dir).unwrap();

    // SAFETY: the only test in this binary, nothing else touches the environment
    unsafe { env::set_var("OUT_DIR", &out_dir) };

    shapegen_build::build!(MODEL, "missing-shapegen.toml");

    let shapes = fs::read_to_string(out_dir.join("shapes.rs")).unwrap();
    assert!(shapes.starts_with(shapegen_build::GENERATED_HEADER));
    assert!(shapes.contains("pub struct WidgetServiceBuilder"));

    fs::remove_dir_all(&out_dir).unwrap();
}
