//! Creator directory with search and dropdown filters

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::directory::{directory_categories, filter_creators, DirectoryQuery, EMPTY_MESSAGE};
use lib_core::store::CreatorStore;
use shared::{Category, Creator, Platform};

use crate::components::{PageHeader, PlatformIcons, ScoreBadge};

#[component]
pub fn CreatorsPage() -> impl IntoView {
    let query = RwSignal::new(DirectoryQuery::default());
    let creators = CreatorStore::directory();
    let categories = directory_categories(creators);

    let results = Memo::new(move |_| {
        query.with(|q| filter_creators(creators, q).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <div class="container page">
            <PageHeader
                heading="Creator Directory"
                subheading="Discover and connect with the most innovative creators in the ecosystem"
            />

            <div class="filter-bar">
                <input
                    type="search"
                    class="input search-input"
                    placeholder="Search creators..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                />
                <select
                    class="select"
                    on:change=move |ev| {
                        let category = event_target_value(&ev).parse::<Category>().ok();
                        query.update(|q| q.category = category);
                    }
                >
                    <option value="all">"All Categories"</option>
                    {categories
                        .into_iter()
                        .map(|c| view! { <option value=c.slug()>{c.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="select"
                    on:change=move |ev| {
                        let platform = event_target_value(&ev).parse::<Platform>().ok();
                        query.update(|q| q.platform = platform);
                    }
                >
                    <option value="all">"All Platforms"</option>
                    {Platform::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.slug()>{p.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show
                when=move || results.with(|r| !r.is_empty())
                fallback=|| view! { <div class="empty-state muted">{EMPTY_MESSAGE}</div> }
            >
                <div class="creator-grid">
                    <For
                        each=move || results.get()
                        key=|creator| creator.id.clone()
                        children=|creator| view! { <CreatorCard creator/> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CreatorCard(creator: Creator) -> impl IntoView {
    view! {
        <div class="card creator-card">
            <div class="creator-banner">
                <img src=creator.banner.clone() alt=""/>
            </div>
            <div class="card-body">
                <div class="creator-card-head">
                    <img class="avatar avatar-lg" src=creator.avatar.clone() alt=creator.name.clone()/>
                    <ScoreBadge score=creator.score/>
                </div>
                <h3>{creator.name.clone()}</h3>
                <p class="muted small">{creator.handle.clone()}</p>
                <div class="creator-meta">
                    <span class="badge badge-secondary">{creator.category.label()}</span>
                    <PlatformIcons platforms=creator.platforms.clone()/>
                </div>
                <p class="creator-bio">{creator.bio.clone()}</p>
                <div class="creator-counts muted small">
                    <span>{format!("{} NFTs", creator.nfts)}</span>
                    <span>{format!("{} Collaborations", creator.collaborations)}</span>
                </div>
            </div>
            <div class="card-footer">
                <A href=format!("/creators/{}", creator.id) attr:class="btn btn-outline full-width">
                    "View Profile"
                </A>
            </div>
        </div>
    }
}
