//! Retina scan page: pick a fundus image, upload it, read the grading,
//! and manage past analyses.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only inside `ProtectedRoute`. Any request that comes back
//! signed out (no token, or a 401 that evicted it) replaces the route with
//! the login page. Preview object URLs are released whenever the
//! selection is replaced, reset, or the page unmounts.

#[cfg(test)]
#[path = "retina_scan_test.rs"]
mod retina_scan_test;

use leptos::prelude::*;
use retina::analysis::{AnalysisRecord, Severity};
use retina::guard::Liveness;
use retina::routes::AppRoute;
use retina::upload::{ACCEPTED_MIME_TYPES, ScanTab};

use crate::app::AppContext;
use crate::net::api::{self, Authorized};
use crate::state::auth::AuthState;
use crate::state::scan::ScanState;
use crate::state::theme::ThemeState;
use crate::util::{file, location};

const DELETE_CONFIRM: &str = "Delete this analysis? This cannot be undone.";

/// Badge color for a grade; unknown grades use the theme color.
fn severity_color(severity: &Severity, fallback: &'static str) -> &'static str {
    severity.color().unwrap_or(fallback)
}

/// Secondary line of a history row: file name and date, when known.
fn history_meta(record: &AnalysisRecord) -> String {
    let mut parts = Vec::new();
    if let Some(name) = record.original_filename.as_deref().filter(|n| !n.is_empty()) {
        parts.push(name.to_owned());
    }
    let created = record.created_at_display();
    if !created.is_empty() {
        parts.push(created);
    }
    parts.join(" · ")
}

fn tab_class(active: ScanTab, tab: ScanTab) -> &'static str {
    if active == tab { "scan-tabs__tab scan-tabs__tab--active" } else { "scan-tabs__tab" }
}

#[component]
pub fn RetinaScanPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme_state = expect_context::<RwSignal<ThemeState>>();
    let state = RwSignal::new(ScanState::default());

    let alive = Liveness::new();
    on_cleanup({
        let alive = alive.clone();
        move || {
            alive.mark_dead();
            if let Some(image) = state.try_with_untracked(|s| s.upload.selected.clone()).flatten() {
                file::release_preview(&image);
            }
        }
    });

    let signed_out = move || {
        auth.update(AuthState::signed_out);
        location::replace_route(AppRoute::Login);
    };

    {
        let config = ctx.config.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api::history(&config).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Authorized::Ok(history) => state.update(|s| s.history_loaded(history)),
                Authorized::Failed(e) => log::warn!("history load failed: {e}"),
                Authorized::SignedOut => signed_out(),
            }
        });
    }

    let on_file_change = {
        let alive = alive.clone();
        move |ev: leptos::ev::Event| {
            #[cfg(feature = "csr")]
            {
                let input = event_target::<web_sys::HtmlInputElement>(&ev);
                let Some(picked) = input.files().and_then(|files| files.get(0)) else {
                    return;
                };
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let loaded = file::load_image(picked).await;
                    if !alive.is_alive() {
                        return;
                    }
                    state.update(|s| {
                        s.request_error = None;
                        match loaded {
                            Ok(image) => {
                                if let Ok(Some(previous)) = s.upload.select(image) {
                                    file::release_preview(&previous);
                                }
                            }
                            Err(e) => s.upload.error = Some(e),
                        }
                    });
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (ev, &alive);
            }
        }
    };

    let upload_config = ctx.config.clone();
    let upload_alive = alive.clone();
    let on_upload = move |_| {
        let Some(Ok(image)) = state.try_update(|s| {
            s.request_error = None;
            s.upload.begin_upload()
        }) else {
            return;
        };
        let config = upload_config.clone();
        let alive = upload_alive.clone();
        leptos::task::spawn_local(async move {
            let result = api::upload(&config, &image).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Authorized::Ok(outcome) => state.update(|s| s.upload_succeeded(outcome)),
                Authorized::Failed(e) => {
                    log::warn!("upload failed: {e}");
                    state.update(|s| s.upload_failed(&e));
                }
                Authorized::SignedOut => signed_out(),
            }
        });
    };

    let on_reset = move |_| {
        if let Some(Some(previous)) = state.try_update(|s| {
            s.request_error = None;
            s.upload.reset()
        }) {
            file::release_preview(&previous);
        }
    };

    let delete_config = ctx.config.clone();
    let delete_alive = alive.clone();
    let on_delete = Callback::new(move |id: String| {
        if state.with_untracked(|s| s.deleting.is_some()) || !location::confirm(DELETE_CONFIRM) {
            return;
        }
        state.update(|s| s.deleting = Some(id.clone()));
        let config = delete_config.clone();
        let alive = delete_alive.clone();
        leptos::task::spawn_local(async move {
            let result = api::delete(&config, &id).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Authorized::Ok(refresh) => state.update(|s| s.delete_succeeded(&id, refresh)),
                Authorized::Failed(e) => {
                    log::warn!("delete of {id} failed: {e}");
                    state.update(|s| s.delete_failed(&e));
                }
                Authorized::SignedOut => signed_out(),
            }
        });
    });

    let active_tab = move || state.with(|s| s.upload.active_tab);
    let set_tab = move |tab: ScanTab| state.update(|s| s.upload.active_tab = tab);

    let scan_panel = move || {
        view! {
            <div class="scan-panel">
                <label class="scan-panel__picker">
                    <span>"Choose a fundus image (JPEG or PNG, up to 5 MB)"</span>
                    <input
                        type="file"
                        accept=ACCEPTED_MIME_TYPES.join(",")
                        disabled=move || state.with(|s| s.upload.loading)
                        on:change=on_file_change.clone()
                    />
                </label>
                {move || {
                    state
                        .with(|s| s.upload.selected.as_ref().map(|i| (i.name.clone(), i.preview_url.clone())))
                        .map(|(name, url)| {
                            view! {
                                <figure class="scan-panel__preview">
                                    {url.map(|src| view! { <img src=src alt="Selected fundus image"/> })}
                                    <figcaption>{name}</figcaption>
                                </figure>
                            }
                        })
                }}
                <div class="scan-panel__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || !state.with(|s| s.upload.can_upload())
                        on:click=on_upload.clone()
                    >
                        {move || if state.with(|s| s.upload.loading) { "Analyzing…" } else { "Analyze" }}
                    </button>
                    <button
                        class="btn"
                        disabled=move || state.with(|s| s.upload.loading)
                        on:click=on_reset
                    >
                        "Reset"
                    </button>
                </div>
            </div>
        }
    };

    let result_panel = move || {
        state.with(|s| s.upload.result.clone()).map(|prediction| {
            let color = severity_color(&prediction.severity, theme_state.with(ThemeState::primary));
            view! {
                <div class="result-panel">
                    <span class="severity-badge" style:background-color=color>
                        {prediction.severity.label().to_owned()}
                    </span>
                    <p class="result-panel__confidence">
                        "Confidence: " {prediction.confidence_percent()} "%"
                    </p>
                </div>
            }
        })
    };

    let history_rows = move || {
        state.with(|s| s.history.clone()).into_iter().map(|record| {
            let id = record.id.clone();
            let row_id = id.clone();
            let color = severity_color(&record.severity, theme_state.with_untracked(ThemeState::primary));
            view! {
                <li class="history__row">
                    <span class="severity-badge" style:background-color=color>
                        {record.severity.label().to_owned()}
                    </span>
                    <span class="history__level">{record.severity_level_label()}</span>
                    <span class="history__confidence">{record.confidence_percent()} "%"</span>
                    <span class="history__meta">{history_meta(&record)}</span>
                    <button
                        class="btn btn--danger history__delete"
                        disabled=move || state.with(|s| s.deleting.is_some())
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        {move || {
                            if state.with(|s| s.deleting.as_deref() == Some(row_id.as_str())) {
                                "Deleting…"
                            } else {
                                "Delete"
                            }
                        }}
                    </button>
                </li>
            }
        })
        .collect_view()
    };

    view! {
        <section class="retina-scan">
            <h1>"Retina Scan"</h1>
            <div class="scan-tabs" role="tablist">
                <button
                    class=move || tab_class(active_tab(), ScanTab::Scan)
                    on:click=move |_| set_tab(ScanTab::Scan)
                >
                    "Scan"
                </button>
                <button
                    class=move || tab_class(active_tab(), ScanTab::Result)
                    disabled=move || state.with(|s| s.upload.result.is_none())
                    on:click=move |_| set_tab(ScanTab::Result)
                >
                    "Result"
                </button>
            </div>
            {move || state.with(ScanState::error_text).map(|text| view! { <p class="scan-error" role="alert">{text}</p> })}
            {move || match active_tab() {
                ScanTab::Scan => scan_panel().into_any(),
                ScanTab::Result => result_panel().into_any(),
            }}
            <section class="history">
                <h2>"Previous analyses"</h2>
                <Show
                    when=move || state.with(|s| !s.history.is_empty())
                    fallback=|| view! { <p class="history__empty">"No analyses yet."</p> }
                >
                    <ul class="history__list">{history_rows}</ul>
                </Show>
            </section>
        </section>
    }
}
