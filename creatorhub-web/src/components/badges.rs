//! Small display helpers shared by cards and tables

use leptos::prelude::*;
use shared::Platform;

use crate::utils::format::format_score;

#[component]
pub fn PlatformIcons(platforms: Vec<Platform>) -> impl IntoView {
    view! {
        <span class="platform-icons">
            {platforms
                .into_iter()
                .map(|p| view! { <span class=format!("platform-icon platform-{}", p.slug()) title=p.label()>{platform_glyph(p)}</span> })
                .collect_view()}
        </span>
    }
}

#[component]
pub fn ScoreBadge(score: f64) -> impl IntoView {
    view! { <span class="score-badge">{format_score(score)}</span> }
}

pub fn platform_glyph(platform: Platform) -> &'static str {
    match platform {
        Platform::Twitter => "𝕏",
        Platform::Instagram => "◎",
        Platform::YouTube => "▶",
    }
}
