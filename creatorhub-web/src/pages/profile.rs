//! Connected creator's profile: card with edit dialog, analytics and NFTs (wallet-gated)

use leptos::prelude::*;
use lib_core::forms::profile::{FIELD_AVATAR_URL, FIELD_BANNER_URL, FIELD_BIO, FIELD_HANDLE, FIELD_NAME};
use lib_core::forms::{FieldErrors, ProfileForm};
use lib_core::leaderboard::Timeframe;
use lib_core::store::{CreatorStore, NftStore, StatsStore};
use lib_utils::{format_long_date, format_month_year};
use shared::{truncate_address, Category, CollaborationNft, CreatorNft, Profile};

use crate::components::badges::platform_glyph;
use crate::components::chart::{LineChart, ScoreBars};
use crate::components::{ConnectWalletPrompt, Modal, PageHeader, ScoreBadge, SelectField, TextField};
use crate::state::notifications::use_notifications;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <div class="container page">
            <PageHeader
                heading="Creator Profile"
                subheading="Manage your creator profile, NFTs, and collaboration history"
            />
            <Show
                when=move || wallet.is_connected()
                fallback=|| view! { <ConnectWalletPrompt message="Connect your wallet to view your profile"/> }
            >
                <ProfileContent/>
            </Show>
        </div>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let profile = RwSignal::new(CreatorStore::profile().clone());

    view! {
        <ProfileDisplay profile/>
        <div class="profile-grid">
            <CreatorStats/>
            <CreatorNfts/>
        </div>
    }
}

#[component]
fn ProfileDisplay(profile: RwSignal<Profile>) -> impl IntoView {
    let wallet = use_wallet_context();
    let edit_open = RwSignal::new(false);
    let address = move || wallet.address().map(|a| truncate_address(&a)).unwrap_or_default();

    view! {
        <div class="card profile-card">
            <div class="profile-banner">
                <img src=move || profile.with(|p| p.banner.clone()) alt=""/>
            </div>
            <div class="card-body profile-body">
                <img
                    class="avatar avatar-xl"
                    src=move || profile.with(|p| p.avatar.clone())
                    alt=move || profile.with(|p| p.name.clone())
                />
                <div class="profile-info">
                    <h2>{move || profile.with(|p| p.name.clone())}</h2>
                    <p class="muted">{move || profile.with(|p| p.handle.clone())}</p>
                    <div class="creator-meta">
                        <span class="badge badge-secondary">{move || profile.with(|p| p.category.label())}</span>
                        <span class="muted small">
                            {move || profile.with(|p| format!("Joined {}", format_month_year(p.joined)))}
                        </span>
                    </div>
                    <p class="creator-bio">{move || profile.with(|p| p.bio.clone())}</p>
                    <div class="platform-links">
                        {move || {
                            profile.with(|p| {
                                p.platforms
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a class="platform-link" href=link.url.clone() target="_blank" rel="noopener noreferrer">
                                                <span>{platform_glyph(link.platform)}</span>
                                                {link.platform.label()}
                                            </a>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </div>
                </div>
                <div class="profile-side">
                    <div class="score-block">
                        <span class="muted small">"Social Credit Score"</span>
                        {move || view! { <ScoreBadge score=profile.with(|p| p.score)/> }}
                    </div>
                    <div class="creator-counts">
                        <div class="count-block">
                            <strong>{move || profile.with(|p| p.nfts)}</strong>
                            <span class="muted small">"NFTs"</span>
                        </div>
                        <div class="count-block">
                            <strong>{move || profile.with(|p| p.collaborations)}</strong>
                            <span class="muted small">"Collaborations"</span>
                        </div>
                    </div>
                    <div class="address-row">
                        <code>{address}</code>
                        <button class="btn btn-ghost btn-sm" title="Copy address" on:click=move |_| wallet.copy_address()>
                            "⧉"
                        </button>
                    </div>
                    <button class="btn btn-outline" on:click=move |_| edit_open.set(true)>"Edit Profile"</button>
                </div>
            </div>
        </div>
        <EditProfileDialog profile open=edit_open/>
    }
}

#[component]
fn EditProfileDialog(profile: RwSignal<Profile>, open: RwSignal<bool>) -> impl IntoView {
    let form = RwSignal::new(ProfileForm::from_profile(&profile.get_untracked()));
    let errors = RwSignal::new(FieldErrors::new());
    let notifications = use_notifications();

    // Prefill from the saved profile every time the dialog opens
    Effect::new(move |_| {
        if open.get() {
            form.set(profile.with_untracked(ProfileForm::from_profile));
            errors.set(FieldErrors::new());
        }
    });

    let error = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)));
    let categories = Category::ALL.iter().map(|c| (c.slug(), c.label())).collect::<Vec<_>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = form.with_untracked(|f| profile.try_update(|p| f.apply(p)));
        match submitted {
            Some(Ok(toast)) => {
                notifications.push(toast);
                open.set(false);
            }
            Some(Err(invalid)) => errors.set(invalid),
            None => {}
        }
    };

    view! {
        <Modal open title="Edit Profile" description="Update how other creators see you.">
            <form class="modal-form" on:submit=on_submit>
                <div class="field-row">
                    <TextField
                        label="Name"
                        value=move || form.with(|f| f.name.clone())
                        on_input=move |v: String| form.update(|f| f.name = v)
                        error=error(FIELD_NAME)
                    />
                    <TextField
                        label="Handle"
                        value=move || form.with(|f| f.handle.clone())
                        on_input=move |v: String| form.update(|f| f.handle = v)
                        error=error(FIELD_HANDLE)
                    />
                </div>
                <TextField
                    label="Bio"
                    multiline=true
                    value=move || form.with(|f| f.bio.clone())
                    on_input=move |v: String| form.update(|f| f.bio = v)
                    error=error(FIELD_BIO)
                />
                <SelectField
                    label="Category"
                    options=categories.clone()
                    selected=move || form.with(|f| Some(f.category.slug()))
                    on_change=move |v: String| {
                        if let Ok(category) = v.parse::<Category>() {
                            form.update(|f| f.category = category);
                        }
                    }
                    error=Signal::derive(|| None::<String>)
                    placeholder="Select a category"
                />
                <TextField
                    label="Avatar URL"
                    placeholder="Leave blank to keep the current image"
                    value=move || form.with(|f| f.avatar_url.clone())
                    on_input=move |v: String| form.update(|f| f.avatar_url = v)
                    error=error(FIELD_AVATAR_URL)
                />
                <TextField
                    label="Banner URL"
                    placeholder="Leave blank to keep the current image"
                    value=move || form.with(|f| f.banner_url.clone())
                    on_input=move |v: String| form.update(|f| f.banner_url = v)
                    error=error(FIELD_BANNER_URL)
                />
                <div class="modal-actions">
                    <button type="button" class="btn btn-outline" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button type="submit" class="btn btn-primary">"Save Changes"</button>
                </div>
            </form>
        </Modal>
    }
}

/// Score and engagement charts with a weekly/monthly switch.
#[component]
fn CreatorStats() -> impl IntoView {
    let timeframe = RwSignal::new(Timeframe::Weekly);
    let breakdown = StatsStore::score_breakdown()
        .iter()
        .map(|c| (c.name.clone(), c.score))
        .collect::<Vec<_>>();

    let charts = move || {
        let points = StatsStore::analytics(timeframe.get());
        let labels = points.iter().map(|p| p.label.clone()).collect::<Vec<_>>();
        let scores = points.iter().map(|p| p.score).collect::<Vec<_>>();
        let collaborations = points.iter().map(|p| f64::from(p.collaborations)).collect::<Vec<_>>();
        let mentions = points.iter().map(|p| f64::from(p.mentions)).collect::<Vec<_>>();

        view! {
            <LineChart values=scores labels=labels.clone() title="Social Credit Score"/>
            <div class="chart-pair">
                <LineChart
                    values=collaborations
                    labels=labels.clone()
                    title="Collaborations"
                    class="chart-line chart-line-alt"
                />
                <LineChart values=mentions labels title="Mentions" class="chart-line chart-line-muted"/>
            </div>
        }
    };

    view! {
        <div class="card analytics-card">
            <div class="card-header">
                <div>
                    <h3>"Creator Analytics"</h3>
                    <p class="muted small">"Track your social credit score and engagement metrics"</p>
                </div>
                <div class="tabs">
                    {[Timeframe::Weekly, Timeframe::Monthly]
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tab"
                                    class:active=move || timeframe.get() == t
                                    on:click=move |_| timeframe.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="card-body">
                {charts}
                <h4>"Score Breakdown"</h4>
                <ScoreBars items=breakdown/>
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum NftTab {
    Creator,
    Collaboration,
}

#[component]
fn CreatorNfts() -> impl IntoView {
    let tab = RwSignal::new(NftTab::Creator);

    view! {
        <div class="card nfts-card">
            <div class="card-header">
                <h3>"My NFTs"</h3>
                <div class="tabs">
                    <button
                        class="tab"
                        class:active=move || tab.get() == NftTab::Creator
                        on:click=move |_| tab.set(NftTab::Creator)
                    >
                        "Creator NFTs"
                    </button>
                    <button
                        class="tab"
                        class:active=move || tab.get() == NftTab::Collaboration
                        on:click=move |_| tab.set(NftTab::Collaboration)
                    >
                        "Collaboration NFTs"
                    </button>
                </div>
            </div>
            <div class="card-body nft-list">
                {move || match tab.get() {
                    NftTab::Creator => NftStore::creator_nfts()
                        .iter()
                        .map(|nft| view! { <CreatorNftCard nft=nft.clone()/> })
                        .collect_view()
                        .into_any(),
                    NftTab::Collaboration => NftStore::collaboration_nfts()
                        .iter()
                        .map(|nft| view! { <CollaborationNftCard nft=nft.clone()/> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn CreatorNftCard(nft: CreatorNft) -> impl IntoView {
    view! {
        <div class="nft-row">
            <img class="nft-thumb" src=nft.image.clone() alt=nft.name.clone()/>
            <div class="nft-row-body">
                <div class="nft-row-title">
                    <h4>{nft.name.clone()}</h4>
                    <ScoreBadge score=nft.score/>
                </div>
                <p class="muted small">
                    {format!("{} {} • {}", platform_glyph(nft.platform), nft.account, nft.category)}
                </p>
                <div class="nft-row-meta muted tiny">
                    <span>{format!("{} followers", nft.followers)}</span>
                    <span>{format!("{} avg. engagement", nft.avg_engagement)}</span>
                    <span>{format!("Minted {}", format_long_date(nft.mint_date))}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CollaborationNftCard(nft: CollaborationNft) -> impl IntoView {
    view! {
        <div class="nft-row">
            <img class="nft-thumb" src=nft.image.clone() alt=nft.name.clone()/>
            <div class="nft-row-body">
                <div class="nft-row-title">
                    <h4>{nft.name.clone()}</h4>
                    <span class="badge">{nft.status.label()}</span>
                </div>
                <p class="muted small">{format!("with {} • {}", nft.partner, nft.category)}</p>
                <div class="nft-row-meta muted tiny">
                    <span>{format!("Minted {}", format_long_date(nft.mint_date))}</span>
                    <span>{format!("{}: {}", nft.status.end_prefix(), format_long_date(nft.end_date))}</span>
                </div>
            </div>
        </div>
    }
}
