//! Registration page. Success shows a notice, then moves to the login page.

use leptos::prelude::*;
use retina::forms;
use retina::guard::Liveness;
use retina::routes::AppRoute;

use crate::app::AppContext;
use crate::net::api;
use crate::util::{location, timer};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let alive = Liveness::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.mark_dead()
    });

    let hint = move || forms::password_hint(&password.get()).map(|e| e.to_string());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name_value = name.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(e) = forms::validate_register(&name_value, &email_value, &password_value) {
            error.set(Some(e.to_string()));
            return;
        }
        busy.set(true);
        error.set(None);

        let config = ctx.config.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api::register(&config, &name_value, &email_value, &password_value).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(_) => {
                    success.set(Some(forms::REGISTER_SUCCESS_MESSAGE));
                    timer::sleep(forms::REGISTER_REDIRECT_DELAY).await;
                    if alive.is_alive() {
                        location::navigate(AppRoute::Login);
                    }
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    error.set(Some(e.user_message(forms::REGISTER_FAILED_MESSAGE)));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href=AppRoute::Landing.hash() class="auth-card__brand">"RetinaScan"</a>
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Name"
                        <input
                            class="auth-input"
                            type="text"
                            autocomplete="name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || hint().map(|text| view! { <p class="auth-hint">{text}</p> })}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account…" } else { "Register" }}
                    </button>
                </form>
                {move || error.get().map(|text| view! { <p class="auth-message auth-message--error">{text}</p> })}
                {move || success.get().map(|text| view! { <p class="auth-message auth-message--success">{text}</p> })}
                <div class="auth-card__links">
                    <a href=AppRoute::Login.hash()>"Already have an account? Log in"</a>
                </div>
            </div>
        </div>
    }
}
