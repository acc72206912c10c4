//! Client-side route table
//!
//! Four fixed routes, no guards, no parameters. Matching follows the usual
//! history-router defaults: a single trailing slash is optional, ASCII case
//! is ignored, and `?query` / `#hash` never take part.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::views::{self, ViewId};

/// How a route produces its view.
#[derive(Debug, Clone, Copy)]
pub enum Component {
    /// Available as soon as the app starts.
    Eager(ViewId),
    /// Built by the loader on first navigation.
    Lazy(fn() -> ViewId),
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub component: Component,
}

fn load_help() -> ViewId {
    views::help::load();
    ViewId::Help
}

/// The app's routes. Paths and names are unique.
pub static ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "login",
        component: Component::Eager(ViewId::Login),
    },
    Route {
        path: "/students",
        name: "students",
        component: Component::Eager(ViewId::Students),
    },
    Route {
        path: "/archive",
        name: "archive",
        component: Component::Eager(ViewId::Archive),
    },
    Route {
        path: "/help",
        name: "help",
        component: Component::Lazy(load_help),
    },
];

/// Resolves locations against [`ROUTES`].
#[derive(Debug)]
pub struct Router {
    /// Deployment base without trailing slash; empty when served from `/`.
    base: String,
    loaded: RefCell<HashMap<&'static str, ViewId>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Router for an app served from `/`.
    pub fn new() -> Self {
        Self::with_base("/")
    }

    /// Router for an app served under `base` (e.g. `/records/`).
    pub fn with_base(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let base = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        Self {
            base,
            loaded: RefCell::new(HashMap::new()),
        }
    }

    pub fn routes(&self) -> &'static [Route] {
        ROUTES
    }

    /// Route matching a full location (base, path, query, hash).
    pub fn resolve(&self, location: &str) -> Option<&'static Route> {
        let path = self.strip_base(strip_query_and_hash(location))?;
        let path = normalize(path);
        ROUTES.iter().find(|r| r.path.eq_ignore_ascii_case(&path))
    }

    pub fn resolve_name(&self, name: &str) -> Option<&'static Route> {
        ROUTES.iter().find(|r| r.name == name)
    }

    /// Full location for the named route, including the base.
    pub fn href(&self, name: &str) -> Option<String> {
        let route = self.resolve_name(name)?;
        if route.path == "/" {
            Some(format!("{}/", self.base))
        } else {
            Some(format!("{}{}", self.base, route.path))
        }
    }

    /// View for `route`, running a lazy loader the first time only.
    pub fn load(&self, route: &'static Route) -> ViewId {
        match route.component {
            Component::Eager(view) => view,
            Component::Lazy(loader) => {
                if let Some(view) = self.loaded.borrow().get(route.name) {
                    return *view;
                }
                log::info!("Loading lazy route '{}'", route.name);
                let view = loader();
                self.loaded.borrow_mut().insert(route.name, view);
                view
            }
        }
    }

    /// Resolve and load in one step.
    pub fn navigate(&self, location: &str) -> Option<ViewId> {
        match self.resolve(location) {
            Some(route) => {
                log::info!("Navigating to '{}' ({})", route.path, route.name);
                Some(self.load(route))
            }
            None => {
                log::warn!("No route matches '{}'", location);
                None
            }
        }
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.borrow().contains_key(name)
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(path);
        }
        let n = self.base.len();
        let head = path.get(..n)?;
        if !head.eq_ignore_ascii_case(&self.base) {
            return None;
        }
        let rest = &path[n..];
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

fn strip_query_and_hash(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

/// Leading slash added, one trailing slash dropped (except for the root).
fn normalize(path: &str) -> String {
    let mut path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_names_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.path, b.path);
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_each_path_resolves_to_its_view_only() {
        let router = Router::new();
        let expected = [
            ("/", ViewId::Login),
            ("/students", ViewId::Students),
            ("/archive", ViewId::Archive),
            ("/help", ViewId::Help),
        ];
        for (path, view) in expected {
            assert_eq!(router.navigate(path), Some(view), "path {}", path);
            let route = router.resolve(path).unwrap();
            assert_eq!(route.name, view.name());
        }
    }

    #[test]
    fn test_unknown_paths_resolve_to_nothing() {
        let router = Router::new();
        for path in ["/login", "/students/1", "/helpme", "/archive//"] {
            assert!(router.resolve(path).is_none(), "path {}", path);
        }
    }

    #[test]
    fn test_trailing_slash_case_query_hash() {
        let router = Router::new();
        assert_eq!(router.resolve("/students/").unwrap().name, "students");
        assert_eq!(router.resolve("/Archive").unwrap().name, "archive");
        assert_eq!(router.resolve("/help?topic=x#top").unwrap().name, "help");
        assert_eq!(router.resolve("").unwrap().name, "login");
        assert_eq!(router.resolve("?next=/students").unwrap().name, "login");
    }

    #[test]
    fn test_base_is_stripped() {
        let router = Router::with_base("/records/");
        assert_eq!(router.resolve("/records").unwrap().name, "login");
        assert_eq!(router.resolve("/records/").unwrap().name, "login");
        assert_eq!(router.resolve("/records/archive").unwrap().name, "archive");
        assert!(router.resolve("/archive").is_none());
        assert!(router.resolve("/recordsarchive").is_none());
    }

    #[test]
    fn test_href_includes_base() {
        assert_eq!(Router::new().href("students").as_deref(), Some("/students"));
        assert_eq!(Router::new().href("login").as_deref(), Some("/"));

        let router = Router::with_base("records");
        assert_eq!(router.href("help").as_deref(), Some("/records/help"));
        assert_eq!(router.href("login").as_deref(), Some("/records/"));
        assert_eq!(router.href("nope"), None);
    }

    #[test]
    fn test_lazy_route_loads_once() {
        let router = Router::new();
        let help = router.resolve_name("help").unwrap();
        assert!(matches!(help.component, Component::Lazy(_)));
        assert!(!router.is_loaded("help"));

        assert_eq!(router.load(help), ViewId::Help);
        assert!(router.is_loaded("help"));
        assert!(views::help::is_loaded());
        assert_eq!(router.load(help), ViewId::Help);
    }

    #[test]
    fn test_eager_routes_not_cached() {
        let router = Router::new();
        let students = router.resolve_name("students").unwrap();
        assert_eq!(router.load(students), ViewId::Students);
        assert!(!router.is_loaded("students"));
    }
}
