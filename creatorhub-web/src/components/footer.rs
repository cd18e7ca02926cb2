//! Site footer

use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::constants::{APP_NAME, FOOTER_COLUMNS, SOCIAL_LINKS, TAGLINE};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = lib_utils::current_year();

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="brand-gem">"◆"</span>
                    <span class="brand-name">{APP_NAME}</span>
                    <p class="muted small">{TAGLINE}</p>
                </div>
                {FOOTER_COLUMNS
                    .iter()
                    .map(|&(heading, links)| {
                        view! {
                            <div class="footer-column">
                                <h4>{heading}</h4>
                                <ul>
                                    {links
                                        .iter()
                                        .map(|&(label, href)| view! { <li><A href=href>{label}</A></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="container footer-bottom">
                <p class="muted small">{format!("© {year} {APP_NAME}. All rights reserved.")}</p>
                <div class="footer-social">
                    {SOCIAL_LINKS.iter().map(|&name| view! { <a href="#">{name}</a> }).collect_view()}
                </div>
            </div>
        </footer>
    }
}
