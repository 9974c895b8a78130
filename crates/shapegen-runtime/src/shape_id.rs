use std::fmt;

///
/// ShapeId
/// absolute model identity of a shape, e.g. `example.widgets#GetWidget`
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ShapeId {
    absolute: &'static str,
    namespace: &'static str,
    name: &'static str,
}

impl ShapeId {
    #[must_use]
    pub const fn new(absolute: &'static str, namespace: &'static str, name: &'static str) -> Self {
        Self {
            absolute,
            namespace,
            name,
        }
    }

    #[must_use]
    pub const fn absolute(&self) -> &'static str {
        self.absolute
    }

    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        self.namespace
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.absolute)
    }
}
