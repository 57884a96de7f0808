//! Route guard for pages that need a verified session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mount re-verifies the stored token against the API. Nothing
//! protected renders until the server accepts it; a rejection evicts the
//! token and replaces the history entry with the login route.

use leptos::prelude::*;
use retina::guard::{GuardState, GuardView, Liveness};
use retina::routes::AppRoute;

use crate::app::AppContext;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::location;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let guard = RwSignal::new(GuardState::Verifying);

    let alive = Liveness::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.mark_dead()
    });
    leptos::task::spawn_local(async move {
        let state = api::verify_session(&ctx.config).await;
        if alive.is_alive() {
            guard.set(state);
        }
    });

    Effect::new(move || {
        if let GuardView::RedirectToLogin { replace } = guard.get().view() {
            auth.update(AuthState::signed_out);
            if replace {
                location::replace_route(AppRoute::Login);
            } else {
                location::navigate(AppRoute::Login);
            }
        }
    });

    move || match guard.get().view() {
        GuardView::Content => children().into_any(),
        GuardView::Loading | GuardView::RedirectToLogin { .. } => view! {
            <div class="guard__loading" aria-busy="true">
                <div class="spinner"></div>
                <p>"Checking your session…"</p>
            </div>
        }
        .into_any(),
    }
}
