//! Handler for `portal whoami`.

use std::sync::Arc;

use portal_acl::User;
use portal_client::ApiClient;
use portal_core::traits::ConfigProvider;
use portal_core::util::{numbers, strings, time};
use portal_core::{Error, Result};
use portal_session::{Credentials, SessionStore};

/// Ask the API who is logged in, optionally logging in first.
///
/// Returns `Ok(None)` when the API reports no session.
pub async fn whoami<C: ConfigProvider>(
    config: &C,
    account: Option<&str>,
    password: Option<&str>,
) -> Result<Option<User>> {
    let client = ApiClient::from_config(config)?;
    let store = SessionStore::new(Arc::new(client));

    if let Some(account) = account {
        let password = password
            .ok_or_else(|| Error::config("--password (or PORTAL_PASSWORD) is required with --account"))?;
        store.login(&Credentials::new(account, password)).await?;
    }

    match store.fetch_current_user().await {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.is_auth() => {
            log::debug!("No session: {e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Render a user as `key: value` lines.
pub fn format_user(user: &User) -> Vec<String> {
    let mut lines = vec![
        format!("id:       {}", user.id),
        format!(
            "name:     {}",
            user.user_name.as_deref().unwrap_or(time::PLACEHOLDER)
        ),
        format!(
            "role:     {}",
            user.role().map_or("Unknown", |r| r.label())
        ),
    ];
    if let Some(profile) = user.user_profile.as_deref() {
        lines.push(format!("profile:  {}", strings::truncate(profile, 40, "...")));
    }
    if let Some(key) = user.access_key.as_deref() {
        lines.push(format!("key:      {key}"));
    }
    if let Some(balance) = user.balance {
        lines.push(format!("balance:  {}", numbers::format_currency(balance, "¥")));
    }
    if let Some(created) = user.create_time.as_deref() {
        lines.push(format!("created:  {}", time::format_time(created)));
    }
    lines
}

/// Print the current user, or a note that nobody is logged in.
pub async fn handle_whoami<C: ConfigProvider>(
    config: &C,
    account: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    match whoami(config, account, password).await? {
        Some(user) => {
            for line in format_user(&user) {
                println!("{line}");
            }
        }
        None => println!("Not logged in"),
    }
    Ok(())
}
