//! Wallet button: connect, pending spinner, or address menu

use leptos::prelude::*;
use lib_core::WalletStatus;
use shared::truncate_address;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletButton() -> impl IntoView {
    let wallet = use_wallet_context();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        {move || match wallet.status() {
            WalletStatus::Connecting => view! {
                <button class="btn btn-outline btn-sm" disabled=true>
                    <span class="spinner"></span>
                    "Connecting"
                </button>
            }
            .into_any(),
            WalletStatus::Connected => {
                let short = wallet.address().map(|a| truncate_address(&a)).unwrap_or_default();
                view! {
                    <div class="dropdown">
                        <button
                            class="btn btn-outline btn-sm rounded-full"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <span class="wallet-dot"></span>
                            {short}
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="dropdown-menu">
                                <button
                                    class="dropdown-item"
                                    on:click=move |_| {
                                        wallet.copy_address();
                                        set_menu_open.set(false);
                                    }
                                >
                                    "Copy Address"
                                </button>
                                <button
                                    class="dropdown-item"
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        wallet.disconnect();
                                    }
                                >
                                    "Disconnect"
                                </button>
                            </div>
                        </Show>
                    </div>
                }
                .into_any()
            }
            WalletStatus::Disconnected => view! {
                <button class="btn btn-primary btn-sm" on:click=move |_| wallet.connect()>
                    "Connect Wallet"
                </button>
            }
            .into_any(),
        }}
    }
}
