//! CreatorHub app shell: contexts, layout and routes

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{SiteFooter, SiteHeader, Toaster};
use crate::pages::{
    CollaboratePage, CreatorDetailPage, CreatorsPage, HomePage, LeaderboardPage, MintPage, ProfilePage,
};
use crate::state::notifications::provide_notification_context;
use crate::state::wallet::provide_wallet_context;
use crate::utils::url::load_session_config;

#[component]
pub fn App() -> impl IntoView {
    let config = load_session_config();
    let notifications = provide_notification_context(config.toast_duration);
    let wallet = provide_wallet_context(&config, notifications);
    provide_context(config);

    // A pending connect must not outlive the app
    on_cleanup(move || wallet.cancel());

    view! {
        <Router>
            <div class="app-container">
                <SiteHeader/>
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/creators") view=CreatorsPage/>
                        <Route path=path!("/creators/:id") view=CreatorDetailPage/>
                        <Route path=path!("/leaderboard") view=LeaderboardPage/>
                        <Route path=path!("/mint") view=MintPage/>
                        <Route path=path!("/collaborate") view=CollaboratePage/>
                        <Route path=path!("/profile") view=ProfilePage/>
                    </Routes>
                </main>
                <SiteFooter/>
                <Toaster/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container centered">
            <div class="card not-found">
                <h1>"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href="/" attr:class="btn btn-primary">
                    "Go to Home"
                </A>
            </div>
        </div>
    }
}
