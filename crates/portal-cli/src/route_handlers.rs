//! Handler functions for `portal routes` and `portal check`.

use std::sync::Arc;

use portal_acl::{PermissionRequirement, User};
use portal_core::Result;
use portal_router::{Navigation, NavigationGuard, Notice, RecordingNotifier, RouteTable};
use portal_session::{MockSessionProvider, SessionStore};

// ============================================================================
// routes
// ============================================================================

/// One-line summary of an access rule.
pub fn describe_requirement(requirement: &PermissionRequirement) -> String {
    match requirement {
        PermissionRequirement::AlwaysAllow => "open".to_string(),
        PermissionRequirement::RequireAuth => "login".to_string(),
        PermissionRequirement::RequireRole {
            role,
            requires_auth: true,
        } => format!("login + {role}"),
        PermissionRequirement::RequireRole {
            role,
            requires_auth: false,
        } => format!("role {role}"),
        PermissionRequirement::Custom(_) => "custom".to_string(),
    }
}

/// Render the route table, one route per line.
pub fn format_routes(table: &RouteTable) -> Vec<String> {
    let mut lines: Vec<String> = table
        .routes()
        .iter()
        .map(|route| {
            let meta = &route.meta;
            format!(
                "{:<18} {:<18} {:<14} {}{}",
                route.pattern(),
                route.name.as_deref().unwrap_or("-"),
                describe_requirement(&meta.requirement()),
                meta.title.as_deref().unwrap_or("-"),
                if meta.hide_in_menu { " (hidden)" } else { "" },
            )
        })
        .collect();
    if let Some(fallback) = table.fallback_path() {
        lines.push(format!("{:<18} -> {fallback}", "*"));
    }
    lines
}

/// Print the route table.
pub fn handle_routes(table: &RouteTable) -> Result<()> {
    for line in format_routes(table) {
        println!("{line}");
    }
    Ok(())
}

// ============================================================================
// check
// ============================================================================

/// What the guard did with one simulated transition.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Resolved destination path.
    pub destination: String,
    /// Resolved origin path.
    pub origin: String,
    /// Guard outcome.
    pub navigation: Navigation,
    /// Titles and warnings the guard emitted.
    pub notices: Vec<Notice>,
}

/// Run the guard once for `path`, starting from `from`, with `user` as the
/// session's user.
pub async fn check_route(
    table: &RouteTable,
    site_title: &str,
    path: &str,
    from: &str,
    user: Option<User>,
) -> Result<CheckReport> {
    let provider = match user {
        Some(user) => MockSessionProvider::with_user(user),
        None => MockSessionProvider::anonymous(),
    };
    let session = Arc::new(SessionStore::new(Arc::new(provider)));
    let notifier = Arc::new(RecordingNotifier::new());
    let guard = NavigationGuard::new(session, notifier.clone()).with_site_title(site_title);

    let to = table.resolve(path)?;
    let origin = table.resolve(from)?;
    let navigation = guard.before_each(&to, &origin).await?;

    Ok(CheckReport {
        destination: to.path,
        origin: origin.path,
        navigation,
        notices: notifier.notices(),
    })
}

/// Print a check report.
pub async fn handle_check(
    table: &RouteTable,
    site_title: &str,
    path: &str,
    from: &str,
    user: Option<User>,
) -> Result<()> {
    let who = match &user {
        Some(u) => format!("user {} ({})", u.id, u.role().map_or("no role", |r| r.label())),
        None => "anonymous".to_string(),
    };
    let report = check_route(table, site_title, path, from, user).await?;

    let outcome = match &report.navigation {
        Navigation::Proceed => "proceed".to_string(),
        Navigation::Redirect(target) => format!("redirect to {target}"),
        Navigation::Abort => "abort".to_string(),
    };
    println!(
        "{} -> {} as {who}: {outcome}",
        report.origin, report.destination
    );
    for notice in &report.notices {
        match notice {
            Notice::Title(title) => println!("  title:   {title}"),
            Notice::Warn(text) => println!("  warning: {text}"),
            Notice::Error(text) => println!("  error:   {text}"),
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
