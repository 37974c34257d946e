//! The per-transition navigation guard.
//!
//! [`decide`] is the pure core: given destination, origin, and the current
//! user it computes where the transition goes and which warning to show.
//! [`NavigationGuard::before_each`] wraps it with the side effects: the page
//! title, refreshing an empty session, and surfacing the warning.

use std::sync::Arc;

use portal_acl::{DenyReason, PermissionDecision, User, paths, resolve};
use portal_core::{Error, Result};
use portal_session::SessionStore;

use crate::notifier::Notifier;
use crate::routes::Location;

/// Default site name appended to page titles.
pub const DEFAULT_SITE_TITLE: &str = "API Open Platform";

/// Route names of the authentication forms.
const AUTH_FORMS: [&str; 2] = ["login", "register"];

/// What to do with a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Commit the destination.
    Proceed,
    /// Start a new transition to this path instead.
    Redirect(String),
    /// Cancel the transition and stay on the origin.
    Abort,
}

/// Outcome of [`decide`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardDecision {
    /// Where the transition goes.
    pub navigation: Navigation,
    /// Warning to surface, if the transition was denied with a reason.
    pub warning: Option<DenyReason>,
}

impl GuardDecision {
    fn proceed() -> Self {
        Self {
            navigation: Navigation::Proceed,
            warning: None,
        }
    }
}

/// Full title for a page: `"<title> - <site>"`.
pub fn page_title(title: &str, site: &str) -> String {
    format!("{title} - {site}")
}

/// Decides a transition from `from` to `to` for `user`.
///
/// A denial whose redirect is the root goes to the forbidden page instead,
/// unless the origin already is the forbidden page. A redirect back to the
/// destination itself cannot make progress and aborts instead. Logged-in
/// users heading for the login or registration form are sent to the root.
///
/// ```
/// use portal_acl::{Role, User};
/// use portal_router::{Location, Navigation, RouteTable, decide};
///
/// let table = RouteTable::platform();
/// let admin_page = table.resolve("/admin").unwrap();
/// let member = User::new(7, Role::User);
///
/// let decision = decide(&admin_page, &Location::start(), Some(&member));
/// assert_eq!(decision.navigation, Navigation::Redirect("/403".into()));
/// ```
pub fn decide(to: &Location, from: &Location, user: Option<&User>) -> GuardDecision {
    let requirement = to.meta.requirement();

    match resolve(user, &requirement) {
        PermissionDecision::Denied(denial) => {
            let target = match denial.redirect_to.as_deref() {
                Some(paths::ROOT) if from.path != paths::FORBIDDEN => paths::FORBIDDEN,
                Some(target) => target,
                None => paths::LOGIN,
            };
            let navigation = if target == to.path {
                Navigation::Abort
            } else {
                Navigation::Redirect(target.to_string())
            };
            GuardDecision {
                navigation,
                warning: denial.reason,
            }
        }
        PermissionDecision::Allowed
            if user.is_some() && AUTH_FORMS.iter().any(|name| to.is_named(name)) =>
        {
            GuardDecision {
                navigation: Navigation::Redirect(paths::ROOT.to_string()),
                warning: None,
            }
        }
        PermissionDecision::Allowed => GuardDecision::proceed(),
    }
}

/// Guard run before every transition.
pub struct NavigationGuard {
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
    site_title: String,
}

impl NavigationGuard {
    pub fn new(session: Arc<SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            session,
            notifier,
            site_title: DEFAULT_SITE_TITLE.to_string(),
        }
    }

    /// Overrides the site name used in page titles.
    pub fn with_site_title(mut self, site_title: impl Into<String>) -> Self {
        self.site_title = site_title.into();
        self
    }

    /// The session this guard consults.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Runs the guard for a transition from `from` to `to`.
    ///
    /// An empty session is refreshed first; a failed refresh counts as
    /// anonymous. The fetch settles before the decision is made.
    ///
    /// # Errors
    ///
    /// [`Error::Navigation`] if the destination path is not absolute.
    pub async fn before_each(&self, to: &Location, from: &Location) -> Result<Navigation> {
        if !to.path.starts_with('/') {
            return Err(Error::navigation(format!(
                "Invalid destination {:?}",
                to.path
            )));
        }

        if let Some(title) = &to.meta.title {
            self.notifier
                .set_title(&page_title(title, &self.site_title));
        }

        if !self.session.is_logged_in().await {
            if let Err(e) = self.session.fetch_current_user().await {
                log::info!("Could not fetch current user, continuing anonymously: {e}");
            }
        }

        let user = self.session.current_user().await;
        let decision = decide(to, from, user.as_ref());
        log::debug!(
            "Guard {} -> {}: {:?}",
            from.path,
            to.path,
            decision.navigation
        );

        if let Some(reason) = decision.warning {
            self.notifier.warn(reason.message());
        }
        Ok(decision.navigation)
    }
}

impl std::fmt::Debug for NavigationGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationGuard")
            .field("site_title", &self.site_title)
            .finish_non_exhaustive()
    }
}
