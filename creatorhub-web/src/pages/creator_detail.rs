//! Single creator view reached from directory cards

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use lib_core::leaderboard::Medal;
use lib_core::store::CreatorStore;
use shared::Creator;

use crate::components::{PlatformIcons, ScoreBadge};

#[component]
pub fn CreatorDetailPage() -> impl IntoView {
    let params = use_params_map();
    let creator = move || {
        let id = params.read().get("id").unwrap_or_default();
        CreatorStore::find(&id).map_err(|e| {
            log::debug!("Creator lookup failed: {}", e);
            e.user_message()
        })
    };

    view! {
        <div class="container page">
            {move || match creator() {
                Ok(creator) => view! { <CreatorDetail creator=creator.clone()/> }.into_any(),
                Err(message) => view! {
                    <div class="card not-found">
                        <h2>"Creator not found"</h2>
                        <p class="muted">{message}</p>
                        <A href="/creators" attr:class="btn btn-primary">"Back to Directory"</A>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn CreatorDetail(creator: Creator) -> impl IntoView {
    let ranking = CreatorStore::rank_of(&creator.id).map(|entry| {
        let medal = Medal::for_rank(entry.rank).map_or("", |m| m.css_class());
        view! {
            <div class=format!("rank-chip {medal}")>
                <span class="muted small">"Leaderboard"</span>
                <strong>{format!("#{}", entry.rank)}</strong>
                <span class="small">{entry.change.clone()}</span>
            </div>
        }
    });

    view! {
        <div class="card creator-detail">
            <div class="profile-banner">
                <img src=creator.banner.clone() alt=""/>
            </div>
            <div class="card-body profile-body">
                <img class="avatar avatar-xl" src=creator.avatar.clone() alt=creator.name.clone()/>
                <div class="profile-info">
                    <h1>{creator.name.clone()}</h1>
                    <p class="muted">{creator.handle.clone()}</p>
                    <div class="creator-meta">
                        <span class="badge badge-secondary">{creator.category.label()}</span>
                        <PlatformIcons platforms=creator.platforms.clone()/>
                    </div>
                    <p class="creator-bio">{creator.bio.clone()}</p>
                </div>
                <div class="profile-side">
                    <div class="score-block">
                        <span class="muted small">"Social Credit Score"</span>
                        <ScoreBadge score=creator.score/>
                    </div>
                    {ranking}
                </div>
            </div>
            <div class="card-footer creator-counts">
                <div class="count-block">
                    <strong>{creator.nfts}</strong>
                    <span class="muted small">"NFTs"</span>
                </div>
                <div class="count-block">
                    <strong>{creator.collaborations}</strong>
                    <span class="muted small">"Collaborations"</span>
                </div>
                <A href="/collaborate" attr:class="btn btn-primary">"Propose Collaboration"</A>
            </div>
        </div>
        <A href="/creators" attr:class="link">"← Back to Directory"</A>
    }
}
