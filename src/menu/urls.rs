//! Route name resolution
//!
//! Maps symbolic route names such as `admin:index` to concrete paths.

use std::collections::HashMap;

use tracing::warn;

/// Looks up the path registered for a route name.
///
/// `None` means the name is unknown; callers decide how to fall back.
pub trait UrlResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<String>;
}

impl<F> UrlResolver for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Static route-name → path table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses comma-separated `name=/path` pairs.
    ///
    /// Blank segments are skipped; malformed ones are logged and skipped.
    pub fn parse(routes: &str) -> Self {
        let mut table = Self::new();
        for pair in routes.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match pair.split_once('=') {
                Some((name, path)) if !name.trim().is_empty() => {
                    table.insert(name.trim(), path.trim());
                }
                _ => warn!("Ignoring malformed route entry '{}'", pair),
            }
        }
        table
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.routes.insert(name.into(), path.into());
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl UrlResolver for RouteTable {
    fn resolve(&self, name: &str) -> Option<String> {
        self.routes.get(name).cloned()
    }
}

impl<N, P> FromIterator<(N, P)> for RouteTable
where
    N: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, path) in iter {
            table.insert(name, path);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_and_unknown() {
        let table = RouteTable::from_iter([("admin:index", "/admin/")]);

        assert_eq!(table.resolve("admin:index").as_deref(), Some("/admin/"));
        assert!(table.resolve("blog:index").is_none());
    }

    #[test]
    fn test_parse() {
        let table = RouteTable::parse(" home=/ , admin:index=/admin/,,broken, =/nameless");

        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("home").as_deref(), Some("/"));
        assert_eq!(table.resolve("admin:index").as_deref(), Some("/admin/"));
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |name: &str| (name == "home").then(|| "/".to_string());

        assert_eq!(UrlResolver::resolve(&resolver, "home").as_deref(), Some("/"));
        assert!(UrlResolver::resolve(&resolver, "other").is_none());
    }
}
