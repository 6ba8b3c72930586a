//! Path-to-view routing table.

use serde::Serialize;
use std::fmt;

/// Page view selected for a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Home,
    Tournaments,
    CreateTournament,
    Learn,
    Resources,
    Contact,
    /// Catch-all for unmatched paths
    NotFound,
}

/// Ordered table, first exact match wins
const ROUTE_TABLE: [(&str, Route); 6] = [
    ("/", Route::Home),
    ("/tournaments", Route::Tournaments),
    ("/tournaments/create", Route::CreateTournament),
    ("/learn", Route::Learn),
    ("/resources", Route::Resources),
    ("/contact", Route::Contact),
];

impl Route {
    /// Resolve a request path to exactly one view.
    ///
    /// Query string and fragment are ignored and one trailing slash is
    /// tolerated. Matching is exact and case-sensitive; anything else is
    /// [`Route::NotFound`].
    pub fn resolve(path: &str) -> Route {
        let path = normalize(path);
        ROUTE_TABLE
            .iter()
            .find(|(pattern, _)| *pattern == path)
            .map(|(_, route)| *route)
            .unwrap_or(Route::NotFound)
    }

    /// Canonical path, `None` for [`Route::NotFound`]
    pub fn path(&self) -> Option<&'static str> {
        ROUTE_TABLE
            .iter()
            .find(|(_, route)| route == self)
            .map(|(pattern, _)| *pattern)
    }

    /// Routes that have a path, in table order
    pub fn navigable() -> impl Iterator<Item = Route> {
        ROUTE_TABLE.iter().map(|(_, route)| *route)
    }

    /// Page title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Tournaments => "Tournaments",
            Route::CreateTournament => "New Tournament",
            Route::Learn => "Learn",
            Route::Resources => "Resources",
            Route::Contact => "Contact",
            Route::NotFound => "Not Found",
        }
    }

    /// Stable label for logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Tournaments => "tournaments",
            Route::CreateTournament => "create_tournament",
            Route::Learn => "learn",
            Route::Resources => "resources",
            Route::Contact => "contact",
            Route::NotFound => "not_found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path {
        "" | "/" => "/",
        _ => match path.strip_suffix('/') {
            Some(trimmed) if trimmed.len() > 1 => trimmed,
            _ => path,
        },
    }
}
