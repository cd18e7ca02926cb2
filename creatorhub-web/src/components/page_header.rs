use leptos::prelude::*;

#[component]
pub fn PageHeader(
    #[prop(into)] heading: String,
    #[prop(optional, into)] subheading: Option<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1>{heading}</h1>
            {subheading.map(|text| view! { <p class="muted">{text}</p> })}
        </div>
    }
}
