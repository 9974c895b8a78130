fn main() {
    shapegen::build!("model/widgets.json", "shapegen.toml");
}
