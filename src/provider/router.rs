//! Declarative command routing.
//!
//! A `Router` owns a path prefix, the commands registered directly under it,
//! and nested routers. Flattening the tree gives the `(path, model)` table the
//! provider dispatches on.

use crate::provider::catalog::{self, GROUPS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub model: &'static str,
}

/// A fully qualified command path and the model it dispatches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub model: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    prefix: String,
    commands: Vec<Command>,
    children: Vec<Router>,
}

impl Router {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    pub fn command(mut self, name: &'static str, model: &'static str) -> Self {
        self.commands.push(Command { name, model });
        self
    }

    pub fn include_router(mut self, router: Router) -> Self {
        self.children.push(router);
        self
    }

    /// Every command in the tree, depth first, in registration order.
    pub fn routes(&self) -> Vec<Route> {
        let mut out = Vec::new();
        self.collect("", &mut out);
        out
    }

    fn collect(&self, parent: &str, out: &mut Vec<Route>) {
        let base = format!("{parent}{}", self.prefix);
        for cmd in &self.commands {
            out.push(Route {
                path: format!("{base}/{}", cmd.name),
                model: cmd.model,
            });
        }
        for child in &self.children {
            child.collect(&base, out);
        }
    }
}

/// `/natural_gas` with one sub-router per catalog group.
pub fn natural_gas() -> Router {
    GROUPS.iter().fold(Router::new("/natural_gas"), |root, group| {
        let sub = catalog::in_group(group)
            .fold(Router::new(format!("/{group}")), |r, e| r.command(e.command, e.model));
        root.include_router(sub)
    })
}

/// Canonical form of a user-supplied path.
///
/// Accepts `/natural_gas/price/futures`, `natural_gas/price/futures/` and the
/// dotted `natural_gas.price.futures`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    let segments: Vec<&str> = trimmed
        .split(['/', '.'])
        .filter(|s| !s.is_empty())
        .collect();
    format!("/{}", segments.join("/"))
}
