//! Route table and path matching.
//!
//! Patterns are absolute paths whose segments are either literals or
//! `:name` parameters. A table may carry a fallback path that every
//! unmatched path resolves to, the way a catch-all route redirects to the
//! not-found page.

use std::collections::BTreeMap;

use portal_acl::{CustomCheck, PermissionRequirement, Role, paths};
use portal_core::{Error, Result};

/// Per-route metadata read by the guard.
#[derive(Debug, Clone, Default)]
pub struct RouteMeta {
    /// Any logged-in user may enter.
    pub requires_auth: bool,
    /// Role the user must satisfy.
    pub required_role: Option<Role>,
    /// Shortcut that forces [`Role::Admin`], taking precedence over
    /// `required_role`.
    pub requires_admin: bool,
    /// Predicate overriding all other rules.
    pub custom_check: Option<CustomCheck>,
    /// Page title.
    pub title: Option<String>,
    /// Left out of navigation menus.
    pub hide_in_menu: bool,
}

impl RouteMeta {
    /// Metadata with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Requires a logged-in user.
    pub fn auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Requires `role`.
    pub fn role(mut self, role: Role) -> Self {
        self.required_role = Some(role);
        self
    }

    /// Requires an administrator.
    pub fn admin(mut self) -> Self {
        self.requires_admin = true;
        self
    }

    /// Guards the route with a predicate.
    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(Option<&portal_acl::User>) -> bool + Send + Sync + 'static,
    {
        self.custom_check = Some(CustomCheck::new(check));
        self
    }

    /// Hides the route from menus.
    pub fn hidden(mut self) -> Self {
        self.hide_in_menu = true;
        self
    }

    /// The access rule these metadata declare.
    ///
    /// `requires_auth` defaults to false, the admin shortcut wins over an
    /// explicit role, and a custom check is passed through.
    ///
    /// ```
    /// use portal_acl::Role;
    /// use portal_router::RouteMeta;
    ///
    /// let meta = RouteMeta::default().auth().role(Role::User).admin();
    /// assert_eq!(meta.requirement().required_role(), Some(Role::Admin));
    /// ```
    pub fn requirement(&self) -> PermissionRequirement {
        let role = if self.requires_admin {
            Some(Role::Admin)
        } else {
            self.required_role
        };
        PermissionRequirement::from_parts(self.requires_auth, role, self.custom_check.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A named route.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: String,
    segments: Vec<Segment>,
    /// Route name, used by the guard to recognise the auth forms.
    pub name: Option<String>,
    /// Metadata.
    pub meta: RouteMeta,
}

impl Route {
    /// Creates a route for `pattern`, e.g. `/interface/:id`.
    pub fn new(pattern: &str, meta: RouteMeta) -> Result<Self> {
        let path = normalize(pattern)?;
        let segments = split(&path)
            .map(|seg| match seg.strip_prefix(':') {
                Some("") => Err(Error::navigation(format!(
                    "Empty parameter name in route {pattern:?}"
                ))),
                Some(name) => Ok(Segment::Param(name.to_string())),
                None => Ok(Segment::Literal(seg.to_string())),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            pattern: path,
            segments,
            name: None,
            meta,
        })
    }

    /// Sets the route name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The normalized pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Matches a normalized path, returning its parameters.
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let parts: Vec<&str> = split(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}

/// A resolved destination (or origin) of a transition.
#[derive(Debug, Clone)]
pub struct Location {
    /// Normalized path.
    pub path: String,
    /// Name of the matched route.
    pub name: Option<String>,
    /// Values of `:param` segments.
    pub params: BTreeMap<String, String>,
    /// Metadata of the matched route.
    pub meta: RouteMeta,
}

impl Location {
    /// The location before the first navigation: the root path with no
    /// route attached.
    pub fn start() -> Self {
        Self::unrouted(paths::ROOT)
    }

    /// A location not backed by any route.
    pub fn unrouted(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            params: BTreeMap::new(),
            meta: RouteMeta::default(),
        }
    }

    /// Whether the matched route has the given name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Value of a path parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered list of routes; the first match wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: Option<String>,
}

impl RouteTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route.
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Sends every unmatched path to `path`.
    pub fn fallback(mut self, path: impl Into<String>) -> Self {
        self.fallback = Some(path.into());
        self
    }

    /// All routes, in match order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The catch-all target, if any.
    pub fn fallback_path(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// The platform's pages.
    pub fn platform() -> Self {
        let routes = [
            (
                paths::LOGIN,
                "login",
                RouteMeta::titled("User Login").hidden(),
            ),
            (
                paths::REGISTER,
                "register",
                RouteMeta::titled("User Registration").hidden(),
            ),
            (paths::ROOT, "home", RouteMeta::titled("Interface Market").auth()),
            (
                "/interface/:id",
                "interface-detail",
                RouteMeta::titled("Interface Details").auth().hidden(),
            ),
            ("/profile", "profile", RouteMeta::titled("Profile").auth()),
            (
                "/admin",
                "admin",
                RouteMeta::titled("Administration").auth().role(Role::Admin),
            ),
            (
                paths::FORBIDDEN,
                "forbidden",
                RouteMeta::titled("Access Denied").hidden(),
            ),
            (
                paths::NOT_FOUND,
                "not-found",
                RouteMeta::titled("Page Not Found").hidden(),
            ),
        ];

        let mut table = Self::new().fallback(paths::NOT_FOUND);
        for (pattern, name, meta) in routes {
            // Patterns above are literals known to be well formed.
            if let Ok(route) = Route::new(pattern, meta) {
                table = table.route(route.named(name));
            }
        }
        table
    }

    /// Resolves `path` to a location, falling back to the catch-all target
    /// when nothing matches.
    ///
    /// # Errors
    ///
    /// [`Error::Navigation`] if the path is malformed, or if nothing matches
    /// and there is no usable fallback.
    pub fn resolve(&self, path: &str) -> Result<Location> {
        let path = normalize(path)?;
        if let Some(location) = self.lookup(&path) {
            return Ok(location);
        }
        match &self.fallback {
            Some(fallback) => {
                let fallback = normalize(fallback)?;
                log::debug!("No route for {path}, falling back to {fallback}");
                self.lookup(&fallback).ok_or_else(|| {
                    Error::navigation(format!("Fallback route {fallback} is not in the table"))
                })
            }
            None => Err(Error::navigation(format!("No route matches {path}"))),
        }
    }

    fn lookup(&self, path: &str) -> Option<Location> {
        self.routes.iter().find_map(|route| {
            route.matches(path).map(|params| Location {
                path: path.to_string(),
                name: route.name.clone(),
                params,
                meta: route.meta.clone(),
            })
        })
    }
}

/// Strips the query and fragment and any trailing slash.
fn normalize(raw: &str) -> Result<String> {
    let path = raw.split(['?', '#']).next().unwrap_or_default();
    if !path.starts_with('/') {
        return Err(Error::navigation(format!(
            "Invalid path {raw:?}: must start with '/'"
        )));
    }
    if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(Error::navigation(format!("Invalid path {raw:?}")));
    }
    let trimmed = path.trim_end_matches('/');
    Ok(if trimmed.is_empty() {
        paths::ROOT.to_string()
    } else {
        trimmed.to_string()
    })
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|seg| !seg.is_empty())
}
