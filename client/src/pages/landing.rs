//! Marketing landing page.

use leptos::prelude::*;
use retina::routes::AppRoute;

use crate::state::auth::AuthState;

#[derive(Clone, Copy)]
struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Upload a fundus image",
        body: "JPEG or PNG photographs up to 5 MB are accepted.",
    },
    Feature {
        title: "Automated grading",
        body: "Each scan is graded from no retinopathy to proliferative, with a confidence score.",
    },
    Feature {
        title: "Keep a history",
        body: "Past analyses stay in your account until you delete them.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="landing">
            <div class="landing__hero">
                <h1>"Early detection of diabetic retinopathy"</h1>
                <p class="landing__lead">
                    "Upload a retinal photograph and get a severity assessment in seconds."
                </p>
                <Show
                    when=move || auth.get().has_session
                    fallback=|| {
                        view! {
                            <a href=AppRoute::Register.hash() class="btn btn--primary">"Get started"</a>
                            <a href=AppRoute::Login.hash() class="btn">"Log in"</a>
                        }
                    }
                >
                    <a href=AppRoute::RetinaScan.hash() class="btn btn--primary">"Start a scan"</a>
                </Show>
            </div>
            <div class="landing__features">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <article class="landing__feature">
                                <h2>{f.title}</h2>
                                <p>{f.body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
