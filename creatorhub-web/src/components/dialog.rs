//! Modal dialog shell. Clicking the backdrop or the close button sets `open` to false.

use leptos::prelude::*;

#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] description: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let description = StoredValue::new(description);

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)>
                <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{move || title.get()}</h2>
                        {description.get_value().map(|d| view! { <p class="muted">{d}</p> })}
                        <button class="modal-close" aria-label="Close" on:click=move |_| open.set(false)>
                            "×"
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

/// Yes/no confirmation on top of another dialog.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let message = StoredValue::new(message);
    let confirm_label = StoredValue::new(confirm_label);

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop confirm-backdrop">
                <div class="modal modal-sm" role="alertdialog">
                    <h3>{title.get_value()}</h3>
                    <p class="muted">{message.get_value()}</p>
                    <div class="modal-actions">
                        <button class="btn btn-outline" on:click=move |_| open.set(false)>"Cancel"</button>
                        <button
                            class="btn btn-destructive"
                            on:click=move |_| {
                                open.set(false);
                                on_confirm.run(());
                            }
                        >
                            {confirm_label.get_value()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
