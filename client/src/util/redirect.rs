//! Post-sign-in redirect bookkeeping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in prompt records the path the user tried to open; the
//! `/login/success` page reads it back once OAuth completes. The value lives
//! in `sessionStorage` so it survives the round-trip to the provider but not
//! the browser tab.
//!
//! The stored path is never validated or cleared. The next prompt overwrites
//! it.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

/// `sessionStorage` key holding the attempted path.
pub const REDIRECT_KEY: &str = "redirect";

/// Target used when no attempted path was recorded.
pub const DEFAULT_TARGET: &str = "/";

/// Minimal key-value store so the bookkeeping works off-browser in tests.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// The browser's `window.sessionStorage`. A no-op during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.session_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("sessionStorage write for {key} failed");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Record `path` as the place to return to after sign-in.
pub fn remember_redirect(store: &impl SessionStore, path: &str) {
    store.set(REDIRECT_KEY, path);
}

/// Where to navigate once sign-in completes.
pub fn post_sign_in_target(store: &impl SessionStore) -> String {
    store
        .get(REDIRECT_KEY)
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| DEFAULT_TARGET.to_owned())
}

/// Path plus query of the current browser location.
pub fn current_path() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let location = web_sys::window()?.location();
        let path = location.pathname().ok()?;
        let search = location.search().unwrap_or_default();
        Some(format!("{path}{search}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
