//! Top navigation bar: links, profile name, theme controls, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is mounted on every non-auth route, so it also owns the
//! cross-application fragment signals: on each location change it runs
//! `process_fragment`, raises the toast, strips the parameters, and drops
//! signed-in state after a forced logout. A location change without any
//! signal re-checks the profile of a persisted session instead.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use retina::guard::Liveness;
use retina::handshake::{self, FragmentOutcome};
use retina::routes::AppRoute;
use retina::theme::ThemeName;

use crate::app::AppContext;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::notification::NotificationState;
use crate::state::router::RouterState;
use crate::state::theme::ThemeState;
use crate::util::{location, storage, theme};

/// Apply a fragment outcome to the shared state. Returns the hash the
/// router should now hold, if it changed.
fn apply_outcome(
    outcome: FragmentOutcome,
    auth: &mut AuthState,
    notifications: &mut NotificationState,
) -> Option<String> {
    if let Some(notification) = outcome.notification {
        notifications.show(notification);
    }
    if outcome.forced_logout {
        auth.signed_out();
    }
    outcome.cleaned_hash
}

/// The profile is re-checked only on plain navigation with a stored token.
fn should_refresh_profile(outcome: &FragmentOutcome, has_token: bool) -> bool {
    has_token && *outcome == FragmentOutcome::default()
}

fn link_class(current: AppRoute, target: AppRoute) -> &'static str {
    if current == target { "navbar__link navbar__link--active" } else { "navbar__link" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let router = expect_context::<RwSignal<RouterState>>();
    let theme_state = expect_context::<RwSignal<ThemeState>>();
    let menu_open = RwSignal::new(false);

    let alive = Liveness::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.mark_dead()
    });

    // Fragment signals, once per location change. Without a signal, the
    // profile of a persisted session is reloaded; failure clears it.
    let profile_config = ctx.config.clone();
    Effect::new(move || {
        let hash = router.with(|r| r.hash.clone());
        let vault = storage::vault();
        let outcome = handshake::process_fragment(&hash, &vault);
        if should_refresh_profile(&outcome, vault.token().is_some()) {
            auth.update(|a| {
                a.has_session = true;
                if a.user.is_none() {
                    a.loading = true;
                }
            });
            let config = profile_config.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let profile = api::load_profile(&config).await;
                if alive.is_alive() {
                    auth.update(|a| a.set_profile(profile));
                }
            });
            return;
        }
        if outcome == FragmentOutcome::default() {
            return;
        }
        let mut cleaned = None;
        auth.update(|a| {
            notifications.update(|n| cleaned = apply_outcome(outcome, a, n));
        });
        if let Some(cleaned) = cleaned {
            location::replace_hash_silently(&cleaned);
            router.update_untracked(|r| {
                r.set_hash(&cleaned);
            });
        }
    });

    let logout_config = ctx.config.clone();
    let on_logout = move |_| {
        let url = handshake::logout(&storage::vault(), &logout_config);
        auth.update(AuthState::signed_out);
        menu_open.set(false);
        location::set_href(&url);
    };

    let on_toggle_dark = move |_| {
        theme_state.update(|t| {
            t.preference.toggle_dark();
        });
        theme::commit(&theme_state.get_untracked().preference);
    };

    let on_pick_color = move |ev: leptos::ev::Event| {
        if let Some(name) = ThemeName::parse(&event_target_value(&ev)) {
            theme_state.update(|t| t.preference.set_name(name));
            theme::commit(&theme_state.get_untracked().preference);
        }
    };

    let route = move || router.with(RouterState::route);

    view! {
        <nav class="navbar">
            <a href=AppRoute::Landing.hash() class="navbar__brand">"RetinaScan"</a>
            <button
                class="navbar__menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                <a href=AppRoute::Landing.hash() class=move || link_class(route(), AppRoute::Landing)>
                    "Home"
                </a>
                <a href=AppRoute::RetinaScan.hash() class=move || link_class(route(), AppRoute::RetinaScan)>
                    "Retina Scan"
                </a>
            </div>
            <div class="navbar__actions">
                <select
                    class="navbar__theme-picker"
                    aria-label="Color theme"
                    prop:value=move || theme_state.get().name().key()
                    on:change=on_pick_color
                >
                    {ThemeName::ALL
                        .into_iter()
                        .map(|name| view! { <option value=name.key()>{name.key()}</option> })
                        .collect_view()}
                </select>
                <button class="btn navbar__dark-toggle" title="Toggle dark mode" on:click=on_toggle_dark>
                    {move || theme_state.get().toggle_icon()}
                </button>
                <Show
                    when=move || auth.get().has_session
                    fallback=|| {
                        view! {
                            <a href=AppRoute::Login.hash() class="btn navbar__login">"Log in"</a>
                            <a href=AppRoute::Register.hash() class="btn btn--primary navbar__register">
                                "Register"
                            </a>
                        }
                    }
                >
                    <span class="navbar__user">
                        {move || {
                            let state = auth.get();
                            if state.loading { "…".to_owned() } else { state.display_name().to_owned() }
                        }}
                    </span>
                    <button class="btn navbar__logout" on:click=on_logout.clone() title="Log out">
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
