//! Site footer with route links.

use leptos::prelude::*;
use retina::routes::AppRoute;

#[derive(Clone, Copy)]
struct FooterLink {
    label: &'static str,
    route: AppRoute,
}

const LINKS: &[FooterLink] = &[
    FooterLink { label: "Home", route: AppRoute::Landing },
    FooterLink { label: "Retina Scan", route: AppRoute::RetinaScan },
    FooterLink { label: "Log in", route: AppRoute::Login },
    FooterLink { label: "Register", route: AppRoute::Register },
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <strong>"RetinaScan"</strong>
                <p class="footer__tagline">
                    "Diabetic retinopathy screening from a single fundus photograph."
                </p>
            </div>
            <nav class="footer__links">
                {LINKS
                    .iter()
                    .map(|link| view! { <a href=link.route.hash() class="footer__link">{link.label}</a> })
                    .collect_view()}
            </nav>
            <p class="footer__disclaimer">
                "Results are a screening aid and do not replace an examination by an eye care professional."
            </p>
        </footer>
    }
}
