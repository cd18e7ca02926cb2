//! Labelled inputs with inline validation messages

use leptos::prelude::*;

/// Text input, or a textarea when `multiline` is set.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let control = if multiline {
        view! {
            <textarea
                class="input textarea"
                class:invalid=move || error.with(Option::is_some)
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                class="input"
                class:invalid=move || error.with(Option::is_some)
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            {control}
            <FieldMessage error/>
        </label>
    }
}

/// Dropdown over `(value, label)` options, with an empty placeholder entry.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] selected: Signal<Option<&'static str>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                class="select"
                class:invalid=move || error.with(Option::is_some)
                prop:value=move || selected.get().unwrap_or_default()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
            <FieldMessage error/>
        </label>
    }
}

#[component]
fn FieldMessage(error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <span class="field-error">{message}</span> })
}
