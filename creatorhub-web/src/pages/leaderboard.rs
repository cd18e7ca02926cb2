//! Creator leaderboard with timeframe tabs and category filter

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::leaderboard::{filter_leaderboard, LeaderboardQuery, Medal, Timeframe, LEADERBOARD_CATEGORIES};
use lib_core::store::CreatorStore;
use shared::{Category, LeaderboardEntry, Trend};

use crate::components::{PageHeader, PlatformIcons, ScoreBadge};

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let query = RwSignal::new(LeaderboardQuery::default());

    let rows = Memo::new(move |_| {
        query.with(|q| {
            filter_leaderboard(CreatorStore::leaderboard(), q)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="container page">
            <PageHeader
                heading="Creator Leaderboard"
                subheading="Top creators ranked by social credit score and engagement metrics"
            />

            <div class="filter-bar">
                <div class="tabs">
                    {Timeframe::ALL
                        .into_iter()
                        .map(|timeframe| {
                            view! {
                                <button
                                    class="tab"
                                    class:active=move || query.with(|q| q.timeframe == timeframe)
                                    on:click=move |_| query.update(|q| q.timeframe = timeframe)
                                >
                                    {timeframe.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <select
                    class="select"
                    on:change=move |ev| {
                        let category = event_target_value(&ev).parse::<Category>().ok();
                        query.update(|q| q.category = category);
                    }
                >
                    <option value="all">"All Categories"</option>
                    {LEADERBOARD_CATEGORIES
                        .into_iter()
                        .map(|c| view! { <option value=c.slug()>{c.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="card table-card">
                <table class="leaderboard-table">
                    <thead>
                        <tr>
                            <th>"Rank"</th>
                            <th>"Creator"</th>
                            <th>"Category"</th>
                            <th>"Platforms"</th>
                            <th>"Collaborations"</th>
                            <th>"Score"</th>
                            <th>"Change"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.id.clone()
                            children=|row| view! { <LeaderboardRow row/> }
                        />
                    </tbody>
                </table>
                <Show when=move || rows.with(Vec::is_empty)>
                    <div class="empty-state muted">"No creators in this category yet."</div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn LeaderboardRow(row: LeaderboardEntry) -> impl IntoView {
    let rank_class = Medal::for_rank(row.rank).map_or("rank", |m| m.css_class());
    let (trend_class, arrow) = match row.trend {
        Trend::Up => ("trend-up", "▲"),
        Trend::Down => ("trend-down", "▼"),
        Trend::Flat => ("trend-flat", "–"),
    };

    view! {
        <tr>
            <td><span class=format!("rank-badge {rank_class}")>{row.rank}</span></td>
            <td>
                <A href=format!("/creators/{}", row.id) attr:class="creator-cell">
                    <img class="avatar" src=row.avatar.clone() alt=row.name.clone()/>
                    <div>
                        <div class="creator-name">{row.name.clone()}</div>
                        <div class="muted small">{row.handle.clone()}</div>
                    </div>
                </A>
            </td>
            <td><span class="badge badge-secondary">{row.category.label()}</span></td>
            <td><PlatformIcons platforms=row.platforms.clone()/></td>
            <td>{row.collaborations}</td>
            <td><ScoreBadge score=row.score/></td>
            <td class=trend_class>{format!("{arrow} {}", row.change)}</td>
        </tr>
    }
}
