use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Route-keyed error accumulator. Validation keeps going after the first
/// problem so a broken model is reported in one pass.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, message: impl ToString) {
        self.messages.push(message.to_string());
    }

    /// Add a message under a child route.
    pub fn add_for(&mut self, route: impl Into<String>, message: impl ToString) {
        self.children.entry(route.into()).or_default().add(message);
    }

    /// Merge a whole subtree under a child route; empty trees are dropped.
    pub fn merge_for(&mut self, route: impl Into<String>, tree: Self) {
        if tree.is_empty() {
            return;
        }

        let child = self.children.entry(route.into()).or_default();
        child.messages.extend(tree.messages);
        for (route, sub) in tree.children {
            child.merge_for(route, sub);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Flatten into `(route, message)` pairs, routes joined with `.`.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);

        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for msg in &self.messages {
            out.push((prefix.to_string(), msg.clone()));
        }
        for (route, child) in &self.children {
            let route = if prefix.is_empty() {
                route.clone()
            } else {
                format!("{prefix}.{route}")
            };
            child.flatten_into(&route, out);
        }
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (route, msg) in self.flatten() {
            if route.is_empty() {
                writeln!(f, "{msg}")?;
            } else {
                writeln!(f, "{route}: {msg}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

/// Push a formatted message onto an `ErrorTree`.
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {{
        $errs.add(format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_children_do_not_count() {
        let mut tree = ErrorTree::new();
        tree.merge_for("structure User", ErrorTree::new());

        assert!(tree.is_empty());
        assert!(tree.result().is_ok());
    }

    #[test]
    fn flatten_joins_routes() {
        let mut child = ErrorTree::new();
        child.add_for("member id", "duplicate member");

        let mut tree = ErrorTree::new();
        err!(tree, "top {}", 1);
        tree.merge_for("structure User", child);

        assert_eq!(tree.len(), 2);
        assert_eq!(
            tree.flatten(),
            vec![
                (String::new(), "top 1".to_string()),
                (
                    "structure User.member id".to_string(),
                    "duplicate member".to_string()
                ),
            ]
        );
    }
}
