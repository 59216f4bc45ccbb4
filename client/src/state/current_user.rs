//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components (navbar, profile) to
//! coordinate sign-in prompts and role-dependent rendering. The value is
//! fetched once at startup and treated as read-only afterwards.

#[cfg(test)]
#[path = "current_user_test.rs"]
mod current_user_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{CurrentUserRoot, UserInfo};

/// Role names understood by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Instructor,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Instructor => "INSTRUCTOR",
            Self::Admin => "ADMIN",
        }
    }

    /// Roles whose holders pass a check for `self`.
    ///
    /// Admins can open instructor pages.
    fn satisfied_by(self) -> &'static [Role] {
        match self {
            Self::User => &[Self::User],
            Self::Instructor => &[Self::Instructor, Self::Admin],
            Self::Admin => &[Self::Admin],
        }
    }
}

/// Client-side wrapper around `/api/currentUser`.
///
/// `initial_data` stays `true` until the first fetch resolves so the guard
/// can show a placeholder instead of flashing the sign-in prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub initial_data: bool,
    pub logged_in: bool,
    #[serde(default)]
    pub root: Option<CurrentUserRoot>,
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl CurrentUser {
    /// State held while the fetch is in flight.
    pub fn placeholder() -> Self {
        Self { initial_data: true, logged_in: false, root: None }
    }

    /// Build resolved state from the fetch result.
    pub fn from_fetch(root: Option<CurrentUserRoot>) -> Self {
        Self { initial_data: false, logged_in: root.is_some(), root }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.root.as_ref().map(|root| &root.user)
    }

    /// Whether the user holds `role` (or a role implying it).
    ///
    /// Accepts plain names in `root.user.roles` and `ROLE_`-prefixed
    /// authorities in `root.roles`. Never fails; missing data means `false`.
    pub fn has_role(&self, role: Role) -> bool {
        let Some(root) = self.root.as_ref() else {
            return false;
        };
        let names = root
            .user
            .roles
            .iter()
            .map(String::as_str)
            .chain(root.roles.iter().map(|grant| grant.authority.as_str()));
        let mut held = names.map(|name| name.strip_prefix("ROLE_").unwrap_or(name));
        held.any(|name| role.satisfied_by().iter().any(|r| r.as_str() == name))
    }

    /// Name shown in the navbar: full name, then GitHub login, then email.
    pub fn display_name(&self) -> String {
        let Some(user) = self.user() else {
            return String::new();
        };
        user.full_name
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| user.github_login.clone())
            .unwrap_or_else(|| user.email.clone())
    }
}
