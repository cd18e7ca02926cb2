//! Placeholder shown on wallet-gated pages

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectWalletPrompt(#[prop(into)] message: String) -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <div class="card connect-prompt">
            <div class="prompt-icon">"▣"</div>
            <h3>"Wallet Connection Required"</h3>
            <p class="muted">{message}</p>
            <button
                class="btn btn-primary prompt-button"
                disabled=move || wallet.is_connecting()
                on:click=move |_| wallet.connect()
            >
                {move || {
                    if wallet.is_connecting() {
                        view! { <span class="spinner"></span> "Connecting..." }.into_any()
                    } else {
                        "Connect Wallet".into_any()
                    }
                }}
            </button>
        </div>
    }
}
