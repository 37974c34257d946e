//! Route permission resolution.
//!
//! [`resolve`] evaluates a [`PermissionRequirement`] against the optional
//! current user. Rules are checked in a fixed order and the first match wins:
//!
//! 1. a custom check decides alone;
//! 2. a required login is checked;
//! 3. banned users are refused, whether or not a login was required;
//! 4. the required role is checked;
//! 5. otherwise access is granted.
//!
//! A failed admin check while logged in redirects to the root rather than
//! the login form, so an authenticated non-admin never bounces between the
//! login page and an admin page.

use crate::decision::{DenyReason, PermissionDecision};
use crate::paths;
use crate::requirement::PermissionRequirement;
use crate::role::{Role, User, is_banned, is_logged_in, role_satisfies};

/// Decides whether `user` may enter a destination guarded by `requirement`.
///
/// Pure and deterministic.
///
/// # Example
///
/// ```
/// use portal_acl::{resolve, DenyReason, PermissionRequirement, Role, User};
///
/// let admin_page = PermissionRequirement::role(Role::Admin);
///
/// let member = User::new(1, Role::User);
/// let decision = resolve(Some(&member), &admin_page);
/// assert_eq!(decision.redirect_to(), Some("/"));
/// assert_eq!(decision.reason(), Some(DenyReason::InsufficientPermission));
///
/// let admin = User::new(2, Role::Admin);
/// assert!(resolve(Some(&admin), &admin_page).is_allowed());
/// ```
pub fn resolve(user: Option<&User>, requirement: &PermissionRequirement) -> PermissionDecision {
    let decision = match requirement {
        PermissionRequirement::Custom(check) => {
            if check.check(user) {
                PermissionDecision::Allowed
            } else {
                PermissionDecision::deny(paths::LOGIN, DenyReason::InsufficientPermission)
            }
        }
        rule => resolve_rules(user, rule.requires_auth(), rule.required_role()),
    };
    log::trace!(
        "resolve user={:?} requirement={requirement:?} -> {decision:?}",
        user.map(|u| u.id)
    );
    decision
}

fn resolve_rules(
    user: Option<&User>,
    requires_auth: bool,
    required_role: Option<Role>,
) -> PermissionDecision {
    if requires_auth && !is_logged_in(user) {
        return PermissionDecision::deny(paths::LOGIN, DenyReason::LoginRequired);
    }

    if is_banned(user) {
        return PermissionDecision::deny(paths::LOGIN, DenyReason::AccountBanned);
    }

    if let Some(role) = required_role {
        if !role_satisfies(user, Some(role)) {
            let target = if role == Role::Admin {
                paths::ROOT
            } else {
                paths::LOGIN
            };
            return PermissionDecision::deny(target, DenyReason::InsufficientPermission);
        }
    }

    PermissionDecision::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn user(role: Role) -> User {
        User::new(11, role)
    }

    fn requirements() -> Vec<PermissionRequirement> {
        vec![
            PermissionRequirement::AlwaysAllow,
            PermissionRequirement::RequireAuth,
            PermissionRequirement::role(Role::User),
            PermissionRequirement::role(Role::Admin),
            PermissionRequirement::from_parts(false, Some(Role::User), None),
            PermissionRequirement::from_parts(false, Some(Role::Admin), None),
        ]
    }

    // ------------------------------------------------------------------------
    // Rule order
    // ------------------------------------------------------------------------

    #[test]
    fn test_anonymous_requires_login() {
        let decision = resolve(None, &PermissionRequirement::RequireAuth);
        assert_eq!(decision.redirect_to(), Some(paths::LOGIN));
        assert_eq!(decision.reason(), Some(DenyReason::LoginRequired));
    }

    #[test]
    fn test_partial_user_requires_login() {
        let partial = User {
            id: 3,
            ..Default::default()
        };
        let decision = resolve(Some(&partial), &PermissionRequirement::RequireAuth);
        assert_eq!(decision.reason(), Some(DenyReason::LoginRequired));
    }

    #[test]
    fn test_banned_blocked_without_requirement() {
        let decision = resolve(Some(&user(Role::Ban)), &PermissionRequirement::AlwaysAllow);
        assert_eq!(decision.redirect_to(), Some(paths::LOGIN));
        assert_eq!(decision.reason(), Some(DenyReason::AccountBanned));
    }

    #[test]
    fn test_banned_reason_precedes_role_check() {
        let decision = resolve(Some(&user(Role::Ban)), &PermissionRequirement::role(Role::Admin));
        assert_eq!(decision.reason(), Some(DenyReason::AccountBanned));
    }

    #[test]
    fn test_admin_required_logged_in_member_goes_home() {
        let decision = resolve(
            Some(&user(Role::User)),
            &PermissionRequirement::role(Role::Admin),
        );
        assert_eq!(decision.redirect_to(), Some(paths::ROOT));
        assert_eq!(decision.reason(), Some(DenyReason::InsufficientPermission));
    }

    #[test]
    fn test_admin_required_anonymous_goes_to_login() {
        let decision = resolve(None, &PermissionRequirement::role(Role::Admin));
        assert_eq!(decision.redirect_to(), Some(paths::LOGIN));
        assert_eq!(decision.reason(), Some(DenyReason::LoginRequired));
    }

    #[test]
    fn test_admin_role_without_auth_flag_sends_anonymous_home() {
        let req = PermissionRequirement::from_parts(false, Some(Role::Admin), None);
        let decision = resolve(None, &req);
        assert_eq!(decision.redirect_to(), Some(paths::ROOT));
    }

    #[test]
    fn test_user_role_failure_goes_to_login() {
        let req = PermissionRequirement::from_parts(false, Some(Role::User), None);
        let decision = resolve(None, &req);
        assert_eq!(decision.redirect_to(), Some(paths::LOGIN));
        assert_eq!(decision.reason(), Some(DenyReason::InsufficientPermission));
    }

    #[test]
    fn test_unknown_required_role_fails_closed() {
        let req = PermissionRequirement::role(Role::Unknown);
        let decision = resolve(Some(&user(Role::Admin)), &req);
        assert_eq!(decision.redirect_to(), Some(paths::LOGIN));
    }

    #[test]
    fn test_admin_allowed() {
        let decision = resolve(
            Some(&user(Role::Admin)),
            &PermissionRequirement::role(Role::Admin),
        );
        assert_eq!(decision, PermissionDecision::Allowed);
    }

    // ------------------------------------------------------------------------
    // Custom checks
    // ------------------------------------------------------------------------

    #[test]
    fn test_custom_check_overrides_rules() {
        let req = PermissionRequirement::from_parts(
            true,
            Some(Role::Admin),
            Some(crate::CustomCheck::new(|_| true)),
        );
        assert!(resolve(None, &req).is_allowed());
        assert!(resolve(Some(&user(Role::Ban)), &req).is_allowed());
    }

    #[test]
    fn test_custom_check_failure_is_generic() {
        let req = PermissionRequirement::custom(|_| false);
        let decision = resolve(Some(&user(Role::Admin)), &req);
        assert_eq!(decision.redirect_to(), Some(paths::LOGIN));
        assert_eq!(decision.reason(), Some(DenyReason::InsufficientPermission));
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    fn any_user() -> impl Strategy<Value = Option<User>> {
        let role = prop_oneof![
            Just(None),
            Just(Some(Role::User)),
            Just(Some(Role::Admin)),
            Just(Some(Role::Ban)),
            Just(Some(Role::Unknown)),
        ];
        prop::option::of((0u64..1000, role)).prop_map(|parts| {
            parts.map(|(id, user_role)| User {
                id,
                user_role,
                ..Default::default()
            })
        })
    }

    proptest! {
        /// Banned users are refused for every rule-based requirement
        #[test]
        fn banned_always_denied(id in 1u64..10_000, idx in 0usize..6) {
            let banned = User::new(id, Role::Ban);
            let req = &requirements()[idx];
            let decision = resolve(Some(&banned), req);
            prop_assert_eq!(decision.reason(), Some(DenyReason::AccountBanned));
            prop_assert_eq!(decision.redirect_to(), Some(paths::LOGIN));
        }

        /// Open destinations admit everyone who is not banned
        #[test]
        fn open_destination_admits_non_banned(user in any_user()) {
            prop_assume!(!is_banned(user.as_ref()));
            prop_assert!(resolve(user.as_ref(), &PermissionRequirement::AlwaysAllow).is_allowed());
        }

        /// Passing custom checks admit anyone
        #[test]
        fn passing_custom_check_admits_all(user in any_user(), idx in 0usize..6) {
            let base = &requirements()[idx];
            let req = PermissionRequirement::from_parts(
                base.requires_auth(),
                base.required_role(),
                Some(crate::CustomCheck::new(|_| true)),
            );
            prop_assert!(resolve(user.as_ref(), &req).is_allowed());
        }

        /// Same inputs, same decision
        #[test]
        fn resolve_is_idempotent(user in any_user(), idx in 0usize..6) {
            let req = &requirements()[idx];
            prop_assert_eq!(resolve(user.as_ref(), req), resolve(user.as_ref(), req));
        }

        /// Allowed decisions never carry a redirect or reason
        #[test]
        fn allowed_has_no_redirect(user in any_user(), idx in 0usize..6) {
            let decision = resolve(user.as_ref(), &requirements()[idx]);
            if decision.is_allowed() {
                prop_assert!(decision.redirect_to().is_none());
                prop_assert!(decision.reason().is_none());
            }
        }
    }
}
