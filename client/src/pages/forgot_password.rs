//! Forgot-password page: requests a reset code by email.

use leptos::prelude::*;
use retina::forms;
use retina::guard::Liveness;
use retina::routes::AppRoute;

use crate::app::AppContext;
use crate::net::api;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let alive = Liveness::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.mark_dead()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        if let Err(e) = forms::validate_forgot(&email_value) {
            error.set(Some(e.to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        notice.set(None);

        let config = ctx.config.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api::forgot_password(&config, &email_value).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(message) => notice.set(Some(message)),
                Err(e) => {
                    log::warn!("forgot-password request failed: {e}");
                    error.set(Some(e.user_message(forms::GENERIC_FAILURE_MESSAGE)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href=AppRoute::Landing.hash() class="auth-card__brand">"RetinaScan"</a>
                <h1>"Forgot your password?"</h1>
                <p class="auth-card__subtitle">"Enter your email and we will send you a reset code."</p>
                <form class="auth-form" on:submit=on_submit>
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
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending…" } else { "Send reset code" }}
                    </button>
                </form>
                {move || error.get().map(|text| view! { <p class="auth-message auth-message--error">{text}</p> })}
                {move || notice.get().map(|text| view! { <p class="auth-message auth-message--success">{text}</p> })}
                <div class="auth-card__links">
                    <a href=AppRoute::ResetPassword.hash()>"I have a reset code"</a>
                    <a href=AppRoute::Login.hash()>"Back to log in"</a>
                </div>
            </div>
        </div>
    }
}
