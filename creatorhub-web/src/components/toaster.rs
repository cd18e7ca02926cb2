//! Toast viewport

use leptos::prelude::*;
use lib_core::NoticeKind;

use crate::state::notifications::use_notifications;

#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || notifications.queue.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|notice| notice.id
                let:notice
            >
                <div class=toast_class(notice.kind)>
                    <span class="toast-title">{notice.title.clone()}</span>
                    <button class="toast-close" on:click=move |_| notifications.dismiss(notice.id)>
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast toast-success",
        NoticeKind::Info => "toast toast-info",
        NoticeKind::Destructive => "toast toast-destructive",
    }
}
