//! App shell: config, router and roster bundled behind one handle.

use crate::config::AppConfig;
use crate::error::RosterError;
use crate::persistence::StudentService;
use crate::roster::Roster;
use crate::router::Router;
use crate::storage::KeyValueStore;
use crate::views::{self, ViewId};

pub struct App<S> {
    config: AppConfig,
    router: Router,
    roster: Roster<S>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(config: AppConfig, store: S) -> Self {
        let router = Router::with_base(&config.base_url);
        let roster = Roster::new(StudentService::from_config(store, &config));
        Self {
            config,
            router,
            roster,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn roster(&self) -> &Roster<S> {
        &self.roster
    }

    /// Page text for `location`, or `None` when no route matches.
    pub fn render(&self, location: &str) -> Result<Option<String>, RosterError> {
        let Some(view) = self.router.navigate(location) else {
            return Ok(None);
        };
        let counts = match view {
            ViewId::Students | ViewId::Archive => self.roster.counts()?,
            _ => Default::default(),
        };
        Ok(Some(views::render(view, counts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_render_routes_under_base() {
        let config = AppConfig::from_values(Some("/records/"), None);
        let app = App::new(config, MemoryStore::new());
        app.roster().add(json!({"name": "Ada"})).unwrap();
        app.roster().add(json!({"name": "Grace"})).unwrap();
        app.roster().archive(0).unwrap();

        assert_eq!(
            app.render("/records/students").unwrap().as_deref(),
            Some("Students\n1 student on roll")
        );
        assert_eq!(
            app.render("/records/archive/").unwrap().as_deref(),
            Some("Archive\n1 student archived")
        );
        assert!(app.render("/records/help").unwrap().unwrap().starts_with("Help"));
        assert_eq!(app.render("/students").unwrap(), None);
    }

    #[test]
    fn test_login_renders_without_counts() {
        let store = MemoryStore::new();
        store.set_item("students", "[1,2]").unwrap();
        let app = App::new(AppConfig::default(), &store);
        let page = app.render("/").unwrap().unwrap();
        assert!(page.starts_with("Sign in"));
    }
}
