//! Declarative route table for the dashboard.
//!
//! A static mapping of path patterns to page identifiers, including
//! parameterized segments ("/vehicules/:id"). Resolution is total: paths
//! that match nothing land on [`Page::NotFound`].

use std::collections::HashMap;

use serde::Serialize;

/// Pages the dashboard can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Dashboard,
    Vehicles,
    VehicleDetail,
    Drivers,
    DriverDetail,
    Infractions,
    InfractionDetail,
    Controls,
    ControlDetail,
    Equipment,
    EquipmentDetail,
    Licenses,
    LicenseDetail,
    Reports,
    NotFound,
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    /// Path pattern; segments starting with ':' capture a parameter.
    pub pattern: &'static str,
    pub page: Page,
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: Page,
    /// Captured parameters, keyed by segment name without the ':'.
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    fn not_found() -> Self {
        Self {
            page: Page::NotFound,
            params: HashMap::new(),
        }
    }
}

/// Ordered route table. First match wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// The dashboard's route table.
    pub fn dashboard() -> Self {
        Self {
            routes: vec![
                Route { pattern: "/", page: Page::Dashboard },
                Route { pattern: "/vehicules", page: Page::Vehicles },
                Route { pattern: "/vehicules/:id", page: Page::VehicleDetail },
                Route { pattern: "/conducteurs", page: Page::Drivers },
                Route { pattern: "/conducteurs/:id", page: Page::DriverDetail },
                Route { pattern: "/infractions", page: Page::Infractions },
                Route { pattern: "/infractions/:id", page: Page::InfractionDetail },
                Route { pattern: "/controles", page: Page::Controls },
                Route { pattern: "/controles/:id", page: Page::ControlDetail },
                Route { pattern: "/equipements", page: Page::Equipment },
                Route { pattern: "/equipements/:id", page: Page::EquipmentDetail },
                Route { pattern: "/permis", page: Page::Licenses },
                Route { pattern: "/permis/:id", page: Page::LicenseDetail },
                Route { pattern: "/rapports", page: Page::Reports },
            ],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a path to a page and captured params.
    ///
    /// Query strings are ignored, trailing slashes tolerated, and unmatched
    /// paths yield `NotFound` with empty params.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments = split_segments(path);

        for route in &self.routes {
            if let Some(params) = match_pattern(route.pattern, &segments) {
                return RouteMatch {
                    page: route.page,
                    params,
                };
            }
        }
        RouteMatch::not_found()
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &str, segments: &[&str]) -> Option<HashMap<String, String>> {
    let pattern_segments = split_segments(pattern);
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (pat, seg) in pattern_segments.iter().zip(segments.iter()) {
        if let Some(name) = pat.strip_prefix(':') {
            if seg.is_empty() {
                return None;
            }
            params.insert(name.to_string(), (*seg).to_string());
        } else if pat != seg {
            return None;
        }
    }
    Some(params)
}
