pub use convert_case::{Case, Casing};

/// Convert a model name into `snake_case`.
#[must_use]
pub fn to_snake(name: &str) -> String {
    name.to_case(Case::Snake)
}

/// Convert a model name into `PascalCase`.
#[must_use]
pub fn to_pascal(name: &str) -> String {
    name.to_case(Case::Pascal)
}
