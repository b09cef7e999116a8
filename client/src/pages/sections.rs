//! Signed-in section pages (collect, report, rewards, leaderboard, settings).
//!
//! The forms behind these sections talk to the backend directly and are not
//! part of this layer; each page shows its heading and the user's context.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::format::format_quantity;
use crate::util::route_gate::AppRoute;

fn section_blurb(route: AppRoute) -> &'static str {
    match route {
        AppRoute::Report => "Report waste you find so collectors can pick it up.",
        AppRoute::Collect => "Pick up reported waste and submit it for verification.",
        AppRoute::Rewards => "Spend the tokens you earn from verified reports and collections.",
        AppRoute::LeaderBoard => "See who is making the biggest difference.",
        AppRoute::Settings => "Manage your profile and preferences.",
        AppRoute::Home | AppRoute::Auth => "",
    }
}

#[component]
pub fn SectionPage(route: AppRoute) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let greeting = move || {
        session.with(|state| {
            state
                .user_info()
                .and_then(|info| info.user.as_ref())
                .map(|user| if user.name.is_empty() { "Welcome back".to_owned() } else { format!("Welcome back, {}", user.name) })
                .unwrap_or_default()
        })
    };
    let balance = move || session.with(|state| format_quantity(state.balance()));

    view! {
        <section class="section-page">
            <h1 class="section-page__title">{route.title()}</h1>
            <p class="section-page__blurb">{section_blurb(route)}</p>
            <p class="section-page__greeting">{greeting}</p>
            <p class="section-page__balance">"Token balance: " {balance}</p>
        </section>
    }
}
