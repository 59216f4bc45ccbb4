//! Login buttons and the sign-in prompt shown by the route guard.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use super::icons::GithubSignInIcon;
use crate::net::types::SystemInfo;
use crate::util::redirect::{BrowserSession, current_path, remember_redirect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginProvider {
    Github,
    Google,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOption {
    pub provider: LoginProvider,
    pub label: &'static str,
    pub href: String,
}

/// Login buttons enabled by the backend's OAuth configuration.
pub fn login_options(info: &SystemInfo) -> Vec<LoginOption> {
    let github = info.github_oauth_login.as_ref().filter(|href| !href.is_empty()).map(|href| LoginOption {
        provider: LoginProvider::Github,
        label: "Log In with GitHub",
        href: href.clone(),
    });
    let google = info.oauth_login.as_ref().filter(|href| !href.is_empty()).map(|href| LoginOption {
        provider: LoginProvider::Google,
        label: "Log In",
        href: href.clone(),
    });
    github.into_iter().chain(google).collect()
}

#[component]
pub fn LoginButtons() -> impl IntoView {
    let system_info = expect_context::<RwSignal<SystemInfo>>();

    move || {
        system_info.with(login_options).into_iter().map(|option| {
            let icon = (option.provider == LoginProvider::Github).then(|| view! { <GithubSignInIcon/> });
            view! {
                <a class="btn btn--primary login-button" href=option.href>
                    {icon}
                    <span>{option.label}</span>
                </a>
            }
        })
        .collect::<Vec<_>>()
    }
}

/// Shown to anonymous visitors of protected pages. Records the attempted path
/// so `/login/success` can send the user back after OAuth completes.
#[component]
pub fn SignInPrompt() -> impl IntoView {
    Effect::new(move || {
        if let Some(path) = current_path() {
            remember_redirect(&BrowserSession, &path);
        }
    });

    view! {
        <div class="sign-in-prompt" data-testid="SignInPrompt">
            <h1>"Sign In Required"</h1>
            <p>"You must sign in to view this page."</p>
            <div class="sign-in-prompt__buttons">
                <LoginButtons/>
            </div>
        </div>
    }
}
