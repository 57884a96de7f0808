//! Login page: credential form, auth-failed banner, existing-session check.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login persists the session and hands the token to the
//! dashboard application through a full-page redirect after a short
//! delay. The button stays disabled from submit until the page unloads.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use retina::fragment::{FragmentSignal, HashLocation};
use retina::guard::{GuardState, Liveness};
use retina::routes::AppRoute;
use retina::{ApiError, forms, handshake};

use crate::app::AppContext;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::router::RouterState;
use crate::util::{location, storage, timer};

/// Form message for a failed login request.
fn login_error_message(error: &ApiError) -> String {
    error.user_message(forms::LOGIN_FAILED_MESSAGE)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let router = expect_context::<RwSignal<RouterState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);
    let banner = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);
    let existing = RwSignal::new(GuardState::Unauthenticated);

    let alive = Liveness::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.mark_dead()
    });

    // Dashboard bounced the handoff back here.
    let hash = router.with_untracked(|r| r.hash.clone());
    if FragmentSignal::from_hash(&hash) == FragmentSignal::AuthFailed {
        banner.set(Some(forms::AUTH_FAILED_BANNER));
        let cleaned = HashLocation::parse(&hash).without_params();
        location::replace_hash_silently(&cleaned);
        router.update_untracked(|r| {
            r.set_hash(&cleaned);
        });
    }

    if storage::vault().token().is_some() {
        existing.set(GuardState::Verifying);
        let config = ctx.config.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let state = api::verify_session(&config).await;
            if alive.is_alive() {
                existing.set(state);
                if state == GuardState::Unauthenticated {
                    auth.update(AuthState::signed_out);
                }
            }
        });
    }

    let submit_config = ctx.config.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(e) = forms::validate_login(&email_value, &password_value) {
            info.set(Some(e.to_string()));
            return;
        }
        busy.set(true);
        info.set(None);

        let config = submit_config.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            match api::login(&config, &email_value, &password_value).await {
                Ok(handoff) => {
                    auth.set(AuthState::from_vault(&storage::vault()));
                    timer::sleep(handoff.delay).await;
                    location::set_href(&handoff.url);
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    if alive.is_alive() {
                        info.set(Some(login_error_message(&e)));
                        busy.set(false);
                    }
                }
            }
        });
    };

    let logout_config = ctx.config.clone();
    let on_logout = move |_| {
        let url = handshake::logout(&storage::vault(), &logout_config);
        auth.update(AuthState::signed_out);
        location::set_href(&url);
    };

    let form = move || {
        view! {
            <form class="auth-form" on:submit=on_submit.clone()>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in…" } else { "Log in" }}
                </button>
            </form>
            {move || info.get().map(|text| view! { <p class="auth-message auth-message--error">{text}</p> })}
            <div class="auth-card__links">
                <a href=AppRoute::ForgotPassword.hash()>"Forgot your password?"</a>
                <a href=AppRoute::Register.hash()>"Create an account"</a>
            </div>
        }
    };

    let body = move || match existing.get() {
        GuardState::Authenticated => view! {
            <div class="auth-card__signed-in">
                <p>"You are already signed in."</p>
                <a href=AppRoute::Landing.hash() class="btn btn--primary">"Go to home"</a>
                <button class="btn" on:click=on_logout.clone()>"Log out"</button>
            </div>
        }
        .into_any(),
        GuardState::Verifying => view! { <div class="spinner" aria-busy="true"></div> }.into_any(),
        GuardState::Unauthenticated => form().into_any(),
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href=AppRoute::Landing.hash() class="auth-card__brand">"RetinaScan"</a>
                <h1>"Log in"</h1>
                {move || banner.get().map(|text| view! { <p class="auth-banner auth-banner--error">{text}</p> })}
                {body}
            </div>
        </div>
    }
}
