//! Home Page - hero, features, platform stats, recent mints and top creators

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::stats::{animate_stats, progress, FRAME_INTERVAL};
use lib_core::store::{CreatorStore, NftStore, StatsStore};
use shared::PlatformStats;

use crate::components::badges::platform_glyph;
use crate::components::ScoreBadge;
use crate::utils::constants::{FEATURES, HERO_CARDS};
use crate::utils::format::{format_compact, format_count};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero/>
            <FeaturesSection/>
            <StatsDisplay/>
            <div class="container home-lists">
                <RecentNfts/>
                <TopCreators/>
            </div>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title">
                    <span class="block">"Transform Your Social Presence"</span>
                    <span class="block accent">"Into Digital Value"</span>
                </h1>
                <p class="hero-subtitle muted">
                    "Mint your social media accounts as NFTs, collaborate with projects, and build your creator credit score in the Web3 ecosystem."
                </p>
                <div class="hero-actions">
                    <A href="/mint" attr:class="btn btn-primary btn-lg rounded-full">"Start Minting"</A>
                    <A href="/creators" attr:class="btn btn-outline btn-lg rounded-full">"Explore Creators"</A>
                </div>
                <div class="hero-cards">
                    {HERO_CARDS
                        .iter()
                        .map(|&(icon, title, description)| {
                            view! {
                                <div class="card hero-card">
                                    <div class="hero-card-icon">{icon}</div>
                                    <h3>{title}</h3>
                                    <p class="muted">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="section-heading">
                    <h2>"Powerful Tools for Creators"</h2>
                    <p class="muted">
                        "Everything you need to build your reputation, connect with opportunities, and maximize your creator potential."
                    </p>
                </div>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|&(icon, title, description)| {
                            view! {
                                <div class="card feature-card">
                                    <div class="feature-icon">{icon}</div>
                                    <h3>{title}</h3>
                                    <p class="muted">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Platform totals counting up from zero on mount.
#[component]
fn StatsDisplay() -> impl IntoView {
    let target = StatsStore::platform();
    let animated = RwSignal::new(PlatformStats::default());

    leptos::task::spawn_local(async move {
        let started = js_sys::Date::now();
        loop {
            let elapsed = Duration::from_millis((js_sys::Date::now() - started).max(0.0) as u64);
            let p = progress(elapsed);
            if animated.try_set(animate_stats(&target, p)).is_some() {
                // signal disposed: page left mid-animation
                break;
            }
            if p >= 1.0 {
                break;
            }
            gloo_timers::future::sleep(FRAME_INTERVAL).await;
        }
    });

    let cards: [(&str, &str, fn(&PlatformStats) -> String); 4] = [
        ("stat-blue", "Registered Creators", |s| format_count(s.total_creators)),
        ("stat-purple", "Minted NFTs", |s| format_count(s.total_nfts)),
        ("stat-amber", "Collaborations", |s| format_count(s.total_collaborations)),
        ("stat-emerald", "Avg Credit Score", |s| format_compact(s.credit_score_avg)),
    ];

    view! {
        <section class="stats">
            <div class="container stats-grid">
                {cards
                    .into_iter()
                    .map(|(color, label, value)| {
                        view! {
                            <div class="card stat-card">
                                <span class=format!("stat-value {color}")>{move || animated.with(value)}</span>
                                <span class="stat-label muted">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn RecentNfts() -> impl IntoView {
    view! {
        <div class="list-section">
            <div class="list-heading">
                <h3>"Recently Minted NFTs"</h3>
                <A href="/creators" attr:class="link">"View All"</A>
            </div>
            {NftStore::recent()
                .iter()
                .map(|nft| {
                    view! {
                        <div class="card nft-card">
                            <div class="nft-image">
                                <img src=nft.image.clone() alt=nft.name.clone()/>
                                <span class="nft-platform">{platform_glyph(nft.platform)}</span>
                                <ScoreBadge score=nft.score/>
                            </div>
                            <div class="card-body">
                                <h4>{nft.name.clone()}</h4>
                                <p class="muted small">{format!("by {}", nft.creator)}</p>
                            </div>
                            <div class="card-footer">
                                <span class="badge badge-secondary">{nft.category.clone()}</span>
                                <A href="/creators" attr:class="btn btn-ghost btn-sm">"View Details"</A>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TopCreators() -> impl IntoView {
    view! {
        <div class="list-section">
            <div class="list-heading">
                <h3>"Top Creators"</h3>
                <A href="/leaderboard" attr:class="link">"View Leaderboard"</A>
            </div>
            {CreatorStore::top_creators()
                .iter()
                .enumerate()
                .map(|(i, creator)| {
                    view! {
                        <A href=format!("/creators/{}", creator.id) attr:class="card creator-row">
                            <span class="creator-rank">{format!("#{}", i + 1)}</span>
                            <img class="avatar" src=creator.avatar.clone() alt=creator.name.clone()/>
                            <div class="creator-row-body">
                                <h4>{creator.name.clone()}</h4>
                                <p class="muted small">
                                    {format!("{} • {} collaborations", creator.category, creator.collaborations)}
                                </p>
                            </div>
                            <div class="creator-row-score">
                                <ScoreBadge score=creator.score/>
                                <span class="trend-up small">{creator.change.clone()}</span>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
            <A href="/leaderboard" attr:class="btn btn-outline full-width">"View Complete Leaderboard"</A>
        </div>
    }
}
