//! Navigation for the portal.
//!
//! - [`routes`]: the route table and path matching
//! - [`guard`]: the per-transition permission guard
//! - [`notifier`]: sink for titles and user-facing notices
//! - [`router`]: applies guard decisions and follows redirects
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use portal_acl::{Role, User};
//! use portal_router::{RecordingNotifier, RouteTable, Router};
//! use portal_session::{MockSessionProvider, SessionStore};
//!
//! # tokio_test::block_on(async {
//! let provider = MockSessionProvider::with_user(User::new(1, Role::User));
//! let session = Arc::new(SessionStore::new(Arc::new(provider)));
//! let notifier = Arc::new(RecordingNotifier::new());
//! let router = Router::new(RouteTable::platform(), session, notifier.clone());
//!
//! let here = router.navigate("/admin").await;
//! assert_eq!(here.path, "/403");
//! assert_eq!(notifier.warnings(), vec!["insufficient permission".to_string()]);
//! # });
//! ```

pub mod guard;
pub mod notifier;
pub mod router;
pub mod routes;

pub use guard::{DEFAULT_SITE_TITLE, GuardDecision, Navigation, NavigationGuard, decide, page_title};
pub use notifier::{LogNotifier, Notice, Notifier, RecordingNotifier};
pub use router::{LOAD_FAILURE_NOTICE, MAX_REDIRECTS, Router};
pub use routes::{Location, Route, RouteMeta, RouteTable};
