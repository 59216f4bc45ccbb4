//! Route-guard decision shared by every protected page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical gating: wait for the user fetch, show the
//! page when the role matches, otherwise prompt for sign-in or deny access.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::current_user::{CurrentUser, Role};

/// Which view a protected route should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewChoice {
    /// User data has not resolved yet.
    Loading,
    /// Nobody is signed in.
    SignInPrompt,
    /// Signed in without the required role.
    AccessDenied,
    /// Render the wrapped page unchanged.
    Show,
}

/// Decide the view for `user` on a page requiring `required`.
///
/// A role match wins over `logged_in`, so a user object that carries roles
/// is shown the page even if the flag was never set.
pub fn choose_view(user: &CurrentUser, required: Role) -> ViewChoice {
    if user.initial_data {
        ViewChoice::Loading
    } else if user.has_role(required) {
        ViewChoice::Show
    } else if !user.logged_in {
        ViewChoice::SignInPrompt
    } else {
        ViewChoice::AccessDenied
    }
}
