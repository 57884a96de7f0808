//! Reset-password page: reset code plus new password with confirmation.

use leptos::prelude::*;
use retina::forms;
use retina::guard::Liveness;
use retina::routes::AppRoute;

use crate::app::AppContext;
use crate::net::api;
use crate::util::{location, timer};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let code = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let alive = Liveness::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.mark_dead()
    });

    let password_hint = move || forms::password_hint(&password.get()).map(|e| e.to_string());
    let confirm_hint = move || forms::confirm_hint(&password.get(), &confirm.get()).map(|e| e.to_string());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let code_value = code.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(e) = forms::validate_reset(&code_value, &password_value, &confirm.get_untracked()) {
            error.set(Some(e.to_string()));
            return;
        }
        busy.set(true);
        error.set(None);

        let config = ctx.config.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api::reset_password(&config, &code_value, &password_value).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(message) => {
                    log::info!("password reset: {message}");
                    success.set(true);
                    timer::sleep(forms::RESET_REDIRECT_DELAY).await;
                    if alive.is_alive() {
                        location::navigate(AppRoute::Login);
                    }
                }
                Err(e) => {
                    log::warn!("password reset failed: {e}");
                    error.set(Some(e.user_message(forms::GENERIC_FAILURE_MESSAGE)));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href=AppRoute::Landing.hash() class="auth-card__brand">"RetinaScan"</a>
                <h1>"Reset your password"</h1>
                <Show
                    when=move || !success.get()
                    fallback=|| {
                        view! {
                            <p class="auth-message auth-message--success">
                                {forms::RESET_SUCCESS_MESSAGE}
                                " Redirecting you to the login page."
                            </p>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <label class="auth-form__label">
                            "Reset code"
                            <input
                                class="auth-input"
                                type="text"
                                autocomplete="one-time-code"
                                prop:value=move || code.get()
                                on:input=move |ev| code.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "New password"
                            <input
                                class="auth-input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        {move || password_hint().map(|text| view! { <p class="auth-hint">{text}</p> })}
                        <label class="auth-form__label">
                            "Confirm password"
                            <input
                                class="auth-input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                        {move || confirm_hint().map(|text| view! { <p class="auth-hint">{text}</p> })}
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Resetting…" } else { "Reset password" }}
                        </button>
                    </form>
                    {move || error.get().map(|text| view! { <p class="auth-message auth-message--error">{text}</p> })}
                </Show>
                <div class="auth-card__links">
                    <a href=AppRoute::Login.hash()>"Back to log in"</a>
                </div>
            </div>
        </div>
    }
}
