//! Three-step creator NFT mint wizard (wallet-gated)

use leptos::prelude::*;
use lib_core::forms::mint::{
    mint, mint_notice, BIO_MAX, FIELD_ACCOUNT_URL, FIELD_AVATAR_URL, FIELD_BANNER_URL, FIELD_BIO,
    FIELD_CATEGORY, FIELD_DISPLAY_NAME, FIELD_PLATFORM, FIELD_USERNAME,
};
use lib_core::forms::{MintStep, MintWizard};
use lib_core::SessionConfig;
use shared::{Category, Platform};

use crate::components::{ConnectWalletPrompt, PageHeader, SelectField, TextField};
use crate::state::notifications::use_notifications;
use crate::state::wallet::{use_wallet_context, GlooTimer};

#[component]
pub fn MintPage() -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <div class="container page narrow">
            <PageHeader
                heading="Mint Your Creator NFT"
                subheading="Transform your social media presence into an authenticated digital asset"
            />
            <Show
                when=move || wallet.is_connected()
                fallback=|| view! { <ConnectWalletPrompt message="Connect your wallet to mint your Creator NFT"/> }
            >
                <MintWizardView/>
            </Show>
        </div>
    }
}

#[component]
fn MintWizardView() -> impl IntoView {
    let wizard = RwSignal::new(MintWizard::new());
    let submitting = RwSignal::new(false);
    let step = Memo::new(move |_| wizard.with(|w| w.step()));
    let notifications = use_notifications();
    let mint_delay = expect_context::<SessionConfig>().mint_delay;

    let on_next = move |_| {
        wizard.update(|w| {
            w.advance();
        });
    };
    let on_back = move |_| wizard.update(|w| w.back());

    let on_submit = move |_| {
        if submitting.get_untracked() || !wizard.try_update(|w| w.check_submit()).unwrap_or(false) {
            return;
        }
        let form = wizard.with_untracked(|w| w.form().clone());
        submitting.set(true);

        leptos::task::spawn_local(async move {
            let result = mint(&form, &GlooTimer, mint_delay).await;
            if let Err(e) = &result {
                log::warn!("Mint failed: {}", e);
            }
            notifications.push(mint_notice(&result));
            if result.is_ok() {
                wizard.try_update(|w| w.reset());
            }
            submitting.try_set(false);
        });
    };

    view! {
        <div class="card wizard">
            <ol class="wizard-steps">
                {MintStep::ALL
                    .into_iter()
                    .map(|s| {
                        view! {
                            <li
                                class="wizard-step"
                                class:active=move || step.get() == s
                                class:done={move || step.get().number() > s.number()}
                            >
                                <span class="wizard-step-number">{s.number()}</span>
                                <span class="wizard-step-title">{s.title()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <div class="card-body">
                {move || match step.get() {
                    MintStep::Account => view! { <AccountStep wizard/> }.into_any(),
                    MintStep::Profile => view! { <ProfileStep wizard/> }.into_any(),
                    MintStep::Media => view! { <MediaStep wizard/> }.into_any(),
                }}
            </div>

            <div class="card-footer wizard-actions">
                <button
                    class="btn btn-outline"
                    disabled=move || step.get() == MintStep::Account || submitting.get()
                    on:click=on_back
                >
                    "Back"
                </button>
                <Show
                    when=move || wizard.with(|w| w.is_last_step())
                    fallback=move || view! { <button class="btn btn-primary" on:click=on_next>"Next"</button> }
                >
                    <button class="btn btn-primary" disabled=move || submitting.get() on:click=on_submit>
                        {move || if submitting.get() { "Minting..." } else { "Mint NFT" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}

fn field_error(wizard: RwSignal<MintWizard>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || wizard.with(|w| w.errors().get(field).map(str::to_string)))
}

#[component]
fn AccountStep(wizard: RwSignal<MintWizard>) -> impl IntoView {
    let platforms = Platform::ALL.iter().map(|p| (p.slug(), p.label())).collect::<Vec<_>>();

    view! {
        <SelectField
            label="Platform"
            options=platforms
            selected=move || wizard.with(|w| w.form().platform.map(|p| p.slug()))
            on_change=move |v: String| wizard.update(|w| w.form_mut().platform = v.parse().ok())
            error=field_error(wizard, FIELD_PLATFORM)
            placeholder="Select a platform"
        />
        <TextField
            label="Account URL"
            placeholder="https://twitter.com/yourhandle"
            value=move || wizard.with(|w| w.form().account_url.clone())
            on_input=move |v: String| wizard.update(|w| w.form_mut().account_url = v)
            error=field_error(wizard, FIELD_ACCOUNT_URL)
        />
        <p class="muted small">"We'll verify ownership of this account before minting."</p>
    }
}

#[component]
fn ProfileStep(wizard: RwSignal<MintWizard>) -> impl IntoView {
    let categories = Category::ALL.iter().map(|c| (c.slug(), c.label())).collect::<Vec<_>>();
    let bio_count = move || wizard.with(|w| format!("{}/{}", w.form().bio.chars().count(), BIO_MAX));

    view! {
        <TextField
            label="Display Name"
            placeholder="Your creator name"
            value=move || wizard.with(|w| w.form().display_name.clone())
            on_input=move |v: String| wizard.update(|w| w.form_mut().display_name = v)
            error=field_error(wizard, FIELD_DISPLAY_NAME)
        />
        <TextField
            label="Username"
            placeholder="@username"
            value=move || wizard.with(|w| w.form().username.clone())
            on_input=move |v: String| wizard.update(|w| w.form_mut().username = v)
            error=field_error(wizard, FIELD_USERNAME)
        />
        <SelectField
            label="Category"
            options=categories
            selected=move || wizard.with(|w| w.form().category.map(|c| c.slug()))
            on_change=move |v: String| wizard.update(|w| w.form_mut().category = v.parse().ok())
            error=field_error(wizard, FIELD_CATEGORY)
            placeholder="Select a category"
        />
        <TextField
            label="Bio"
            placeholder="Tell collectors about yourself"
            multiline=true
            value=move || wizard.with(|w| w.form().bio.clone())
            on_input=move |v: String| wizard.update(|w| w.form_mut().bio = v)
            error=field_error(wizard, FIELD_BIO)
        />
        <p class="muted small align-right">{bio_count}</p>
    }
}

#[component]
fn MediaStep(wizard: RwSignal<MintWizard>) -> impl IntoView {
    let avatar = move || wizard.with(|w| w.form().avatar_url.trim().to_string());

    view! {
        <TextField
            label="Avatar URL (optional)"
            placeholder="https://..."
            value=move || wizard.with(|w| w.form().avatar_url.clone())
            on_input=move |v: String| wizard.update(|w| w.form_mut().avatar_url = v)
            error=field_error(wizard, FIELD_AVATAR_URL)
        />
        <TextField
            label="Banner URL (optional)"
            placeholder="https://..."
            value=move || wizard.with(|w| w.form().banner_url.clone())
            on_input=move |v: String| wizard.update(|w| w.form_mut().banner_url = v)
            error=field_error(wizard, FIELD_BANNER_URL)
        />
        <div class="mint-preview">
            <Show when=move || !avatar().is_empty()>
                <img class="avatar avatar-lg" src=avatar alt="Avatar preview"/>
            </Show>
            <div>
                <h4>{move || wizard.with(|w| w.form().display_name.clone())}</h4>
                <p class="muted small">{move || wizard.with(|w| w.form().username.clone())}</p>
            </div>
        </div>
    }
}
