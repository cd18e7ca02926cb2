//! Site header with navigation and wallet button

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::WalletButton;
use crate::utils::constants::{APP_NAME, NAV_ITEMS};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <A href="/" attr:class="brand">
                    <span class="brand-gem">"◆"</span>
                    <span class="brand-name">{APP_NAME}</span>
                </A>
                <nav class="main-nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|&(label, href)| {
                            let active = move || pathname.with(|p| p == href);
                            view! {
                                <A href=href attr:class=move || if active() { "nav-link active" } else { "nav-link" }>
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
                <WalletButton/>
            </div>
        </header>
    }
}
