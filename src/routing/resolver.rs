//! Ordered path-to-view resolution.
//!
//! DESIGN
//! ======
//! Routes are scanned in registration order and the first matching pattern
//! wins, so static routes must be registered before dynamic routes that would
//! otherwise shadow them. `shadowed_routes` reports the static routes that can
//! never match, which lets the app warn about ordering mistakes at startup.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use super::pattern::{Params, PathPattern, PatternError};

/// A resolved view plus the parameters extracted from the path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewDescriptor<V> {
    pub view: V,
    pub params: Params,
}

/// Registry of `(pattern, view)` pairs.
#[derive(Clone, Debug)]
pub struct Resolver<V> {
    routes: Vec<(PathPattern, V)>,
}

impl<V> Default for Resolver<V> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<V: Clone> Resolver<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Resolver::register`].
    ///
    /// # Errors
    ///
    /// Returns a `PatternError` if `pattern` does not parse.
    pub fn route(mut self, pattern: &str, view: V) -> Result<Self, PatternError> {
        self.register(pattern, view)?;
        Ok(self)
    }

    /// Append a route. Later routes only match paths no earlier route claims.
    ///
    /// # Errors
    ///
    /// Returns a `PatternError` if `pattern` does not parse.
    pub fn register(&mut self, pattern: &str, view: V) -> Result<(), PatternError> {
        let pattern = PathPattern::parse(pattern)?;
        self.routes.push((pattern, view));
        Ok(())
    }

    /// Resolve `path` against the routes in registration order.
    pub fn resolve(&self, path: &str) -> Option<ViewDescriptor<V>> {
        self.routes.iter().find_map(|(pattern, view)| {
            pattern.match_path(path).map(|params| ViewDescriptor { view: view.clone(), params })
        })
    }

    /// Registered patterns in order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(pattern, _)| pattern.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// `(earlier, shadowed)` pattern pairs where a static route is unreachable
    /// because an earlier route already matches its path.
    pub fn shadowed_routes(&self) -> Vec<(String, String)> {
        let mut shadowed = Vec::new();
        for (i, (later, _)) in self.routes.iter().enumerate() {
            let Some(path) = later.static_path() else {
                continue;
            };
            let earlier = self.routes.iter().take(i).find(|(p, _)| p.match_path(&path).is_some());
            if let Some((earlier, _)) = earlier {
                shadowed.push((earlier.as_str().to_owned(), later.as_str().to_owned()));
            }
        }
        shadowed
    }
}
