//! Client-side route table for the helpdesk web console.
//!
//! A static list of path → view mappings in history mode. The home view is
//! bundled eagerly; every other view is loaded on first navigation and kept
//! for the lifetime of the [`Router`].
//!
//! Matching follows the usual history-router defaults: paths compare
//! case-insensitively, a single trailing slash is tolerated, and the query
//! string and fragment are split off before matching. There are no guards
//! and no dynamic segments.

use std::sync::OnceLock;

/// Top-level screens of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    About,
    Tickets,
    Analytics,
    Simulation,
    AiConfiguration,
    Chatbot,
}

impl View {
    /// Human-readable title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About",
            View::Tickets => "Tickets",
            View::Analytics => "Analytics",
            View::Simulation => "Simulation",
            View::AiConfiguration => "AI Configuration",
            View::Chatbot => "Chatbot",
        }
    }
}

/// How a route obtains its view.
#[derive(Debug, Clone, Copy)]
pub enum Component {
    /// Available as soon as the router exists.
    Eager(View),
    /// Produced by the loader on first resolution, then memoized.
    Lazy(fn() -> View),
}

impl Component {
    #[must_use]
    pub fn is_lazy(&self) -> bool {
        matches!(self, Component::Lazy(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: &'static str,
    pub component: Component,
}

fn load_about() -> View {
    View::About
}

fn load_tickets() -> View {
    View::Tickets
}

fn load_analytics() -> View {
    View::Analytics
}

fn load_simulation() -> View {
    View::Simulation
}

fn load_ai_configuration() -> View {
    View::AiConfiguration
}

fn load_chatbot() -> View {
    View::Chatbot
}

/// The route table, in declaration (and matching) order.
pub static ROUTES: &[RouteRecord] = &[
    RouteRecord {
        path: "/",
        name: "home",
        component: Component::Eager(View::Home),
    },
    RouteRecord {
        path: "/about",
        name: "about",
        component: Component::Lazy(load_about),
    },
    RouteRecord {
        path: "/tickets",
        name: "tickets",
        component: Component::Lazy(load_tickets),
    },
    RouteRecord {
        path: "/analytics",
        name: "analytics",
        component: Component::Lazy(load_analytics),
    },
    RouteRecord {
        path: "/simulation",
        name: "simulation",
        component: Component::Lazy(load_simulation),
    },
    RouteRecord {
        path: "/ai-configuration",
        name: "ai-configuration",
        component: Component::Lazy(load_ai_configuration),
    },
    RouteRecord {
        path: "/chatbot",
        name: "chatbot",
        component: Component::Lazy(load_chatbot),
    },
];

/// Result of resolving a location against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub name: &'static str,
    /// Path of the matched record.
    pub path: &'static str,
    /// Location as requested, minus the base: path, query and fragment.
    pub full_path: String,
    pub query: Vec<(String, String)>,
    /// Fragment without the leading `#`.
    pub hash: Option<String>,
    pub view: View,
}

/// Resolves locations against [`ROUTES`] under a history base.
#[derive(Debug)]
pub struct Router {
    base: String,
    loaded: Vec<OnceLock<View>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router {
    /// Creates a router mounted under `base` (e.g. `/` or `/console/`).
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            loaded: ROUTES.iter().map(|_| OnceLock::new()).collect(),
        }
    }

    /// Normalized base: leading slash, no trailing slash, empty for root.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn routes(&self) -> &'static [RouteRecord] {
        ROUTES
    }

    /// Matches `location` (path with optional `?query` and `#hash`) and
    /// loads the view if it is lazy. Returns `None` when no route matches.
    pub fn resolve(&self, location: &str) -> Option<ResolvedRoute> {
        let (rest, hash) = match location.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (location, None),
        };
        let (path, query_str) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        let path = self.strip_base(path);
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        let index = ROUTES
            .iter()
            .position(|record| path_matches(record.path, &path))?;
        let record = &ROUTES[index];

        let view = match record.component {
            Component::Eager(view) => view,
            Component::Lazy(loader) => *self.loaded[index].get_or_init(|| {
                tracing::debug!(route = record.name, "Loading view");
                loader()
            }),
        };

        let query = query_str
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();

        let mut full_path = path;
        if let Some(q) = query_str {
            full_path.push('?');
            full_path.push_str(q);
        }
        if let Some(h) = &hash {
            full_path.push('#');
            full_path.push_str(h);
        }

        Some(ResolvedRoute {
            name: record.name,
            path: record.path,
            full_path,
            query,
            hash,
            view,
        })
    }

    /// Looks a route up by name.
    pub fn resolve_name(&self, name: &str) -> Option<&'static RouteRecord> {
        ROUTES.iter().find(|record| record.name == name)
    }

    /// Browser-facing URL path for a named route, base included.
    pub fn href(&self, name: &str) -> Option<String> {
        let record = self.resolve_name(name)?;
        if self.base.is_empty() {
            Some(record.path.to_string())
        } else if record.path == "/" {
            Some(format!("{}/", self.base))
        } else {
            Some(format!("{}{}", self.base, record.path))
        }
    }

    /// Whether the named route's view is available without loading.
    /// Unknown names report `false`.
    pub fn is_loaded(&self, name: &str) -> bool {
        match ROUTES.iter().position(|record| record.name == name) {
            Some(index) => match ROUTES[index].component {
                Component::Eager(_) => true,
                Component::Lazy(_) => self.loaded[index].get().is_some(),
            },
            None => false,
        }
    }

    fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        if self.base.is_empty()
            || !path
                .to_ascii_lowercase()
                .starts_with(&self.base.to_ascii_lowercase())
        {
            return path;
        }
        let stripped = &path[self.base.len()..];
        if stripped.is_empty() { "/" } else { stripped }
    }
}

fn normalize_base(base: &str) -> String {
    let base = base.trim();
    let base = if base.starts_with('/') {
        base.to_string()
    } else {
        format!("/{base}")
    };
    base.trim_end_matches('/').to_string()
}

fn path_matches(record_path: &str, path: &str) -> bool {
    let path = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    record_path.eq_ignore_ascii_case(path)
}
