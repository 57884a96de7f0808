//! Root application component with hash routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routing lives in the fragment so the bundle can be served from any
//! static host. `RouterState` tracks the raw hash; the route, page title,
//! and chrome visibility derive from it.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use retina::AppConfig;
use retina::routes::AppRoute;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toast::Toast;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::retina_scan::RetinaScanPage;
use crate::state::auth::AuthState;
use crate::state::notification::NotificationState;
use crate::state::router::RouterState;
use crate::state::theme::ThemeState;
use crate::util::{location, storage, theme};

/// Immutable per-app values shared through context.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: AppConfig,
}

/// Build-time configuration, or the local defaults when it is invalid.
pub fn load_config() -> AppConfig {
    AppConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("invalid build configuration, using defaults: {e}");
        AppConfig::default()
    })
}

/// Root application component.
///
/// Provides all shared state contexts and renders the route for the
/// current hash.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AppContext { config: load_config() });

    let theme_state = RwSignal::new(ThemeState::new(theme::read_preference()));
    let auth = RwSignal::new(AuthState::from_vault(&storage::vault()));
    let notifications = RwSignal::new(NotificationState::default());
    let router = RwSignal::new(RouterState::new(location::current_hash()));

    provide_context(theme_state);
    provide_context(auth);
    provide_context(notifications);
    provide_context(router);

    Effect::new(move || theme::apply(&theme_state.get().preference));

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            let hash = location::current_hash();
            router.update(|r| {
                r.set_hash(&hash);
            });
        });
        on_cleanup(move || handle.remove());
    }

    let route = Memo::new(move |_| router.with(RouterState::route));

    view! {
        <Title text=move || route.get().title()/>
        <div class="app">
            <Show when=move || route.get().shows_chrome()>
                <Navbar/>
            </Show>
            <main class="app__main">{move || render_route(route.get())}</main>
            <Show when=move || route.get().shows_chrome()>
                <Footer/>
            </Show>
            <Toast/>
        </div>
    }
}

fn render_route(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage/> }.into_any(),
        AppRoute::Login => view! { <LoginPage/> }.into_any(),
        AppRoute::Register => view! { <RegisterPage/> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage/> }.into_any(),
        AppRoute::ResetPassword => view! { <ResetPasswordPage/> }.into_any(),
        AppRoute::RetinaScan => view! {
            <ProtectedRoute>
                <RetinaScanPage/>
            </ProtectedRoute>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <section class="not-found">
                <h1>"Page not found"</h1>
                <a href=AppRoute::Landing.hash() class="btn">"Back to home"</a>
            </section>
        }
        .into_any(),
    }
}
