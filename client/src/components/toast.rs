//! Transient notification toast.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `NotificationState::current`. Every new toast starts its own
//! dismiss timer; `expire(seq)` ignores timers for toasts already replaced.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use retina::handshake::NotificationKind;

use crate::state::notification::NotificationState;

fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "toast toast--success",
        NotificationKind::Error => "toast toast--error",
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    Effect::new(move || {
        let (seq, visible) = notifications.with(|n| (n.seq, n.current.is_some()));
        if !visible {
            return;
        }
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(crate::state::notification::AUTO_DISMISS).await;
                let _ = notifications.try_update(|n| n.expire(seq));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = seq;
        }
    });

    move || {
        notifications.get().current.map(|notification| {
            view! {
                <div class=toast_class(notification.kind) role="status">
                    <span class="toast__message">{notification.message}</span>
                    <button
                        class="toast__close"
                        title="Dismiss"
                        on:click=move |_| notifications.update(NotificationState::dismiss)
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
