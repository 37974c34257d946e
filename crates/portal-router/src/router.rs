//! Router: resolves paths, runs the guard, and follows redirects.

use std::sync::Arc;

use portal_core::{Error, Result};
use portal_session::SessionStore;
use tokio::sync::Mutex;

use crate::guard::{Navigation, NavigationGuard};
use crate::notifier::Notifier;
use crate::routes::{Location, RouteTable};

/// Redirects followed within one navigation before giving up.
pub const MAX_REDIRECTS: usize = 10;

/// Notice shown when a navigation fails outright.
pub const LOAD_FAILURE_NOTICE: &str = "page failed to load, please refresh and try again";

/// Holds the current location and serializes transitions.
///
/// The location lock is held for a whole navigation, so each transition's
/// guard (including any session fetch) completes before the next starts.
pub struct Router {
    table: RouteTable,
    guard: NavigationGuard,
    notifier: Arc<dyn Notifier>,
    current: Mutex<Location>,
    max_redirects: usize,
}

impl Router {
    /// Creates a router at [`Location::start`].
    pub fn new(table: RouteTable, session: Arc<SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            table,
            guard: NavigationGuard::new(session, Arc::clone(&notifier)),
            notifier,
            current: Mutex::new(Location::start()),
            max_redirects: MAX_REDIRECTS,
        }
    }

    /// Overrides the site name used in page titles.
    pub fn with_site_title(mut self, site_title: impl Into<String>) -> Self {
        self.guard = self.guard.with_site_title(site_title);
        self
    }

    /// Overrides the redirect limit.
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        self.guard.session()
    }

    /// The committed location.
    pub async fn current(&self) -> Location {
        self.current.lock().await.clone()
    }

    /// Navigates to `path`, following guard redirects.
    ///
    /// Returns the committed location: the final destination on success,
    /// the unchanged origin when the guard aborts.
    ///
    /// # Errors
    ///
    /// [`Error::Navigation`] for malformed paths, unresolvable redirects, or
    /// more than the allowed number of redirects. The current location is
    /// left unchanged.
    pub async fn push(&self, path: &str) -> Result<Location> {
        let mut current = self.current.lock().await;
        let mut target = path.to_string();

        for _ in 0..=self.max_redirects {
            let to = self.table.resolve(&target)?;
            match self.guard.before_each(&to, &current).await? {
                Navigation::Proceed => {
                    log::debug!("Navigated {} -> {}", current.path, to.path);
                    *current = to.clone();
                    return Ok(to);
                }
                Navigation::Redirect(next) => {
                    log::debug!("Redirect {} -> {next}", to.path);
                    target = next;
                }
                Navigation::Abort => {
                    log::debug!("Navigation to {} aborted", to.path);
                    return Ok(current.clone());
                }
            }
        }

        Err(Error::navigation(format!(
            "Too many redirects navigating to {path} (limit {})",
            self.max_redirects
        )))
    }

    /// Like [`push`](Self::push), but never fails: errors are logged, a
    /// generic notice is shown, and the router stays where it was.
    pub async fn navigate(&self, path: &str) -> Location {
        match self.push(path).await {
            Ok(location) => location,
            Err(e) => {
                log::error!("Navigation to {path} failed: {e}");
                self.notifier.error(LOAD_FAILURE_NOTICE);
                self.current().await
            }
        }
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("table", &self.table)
            .field("guard", &self.guard)
            .field("max_redirects", &self.max_redirects)
            .finish_non_exhaustive()
    }
}
