//! Public landing page with the community impact dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Impact figures are re-fetched on mount and after every session write, so
//! a login or logout refreshes the numbers. Failed fetches keep what is shown.

use leptos::prelude::*;

use crate::components::loading::Spinner;
use crate::net::api::HttpApi;
use crate::state::impact::{ImpactCard, ImpactIcon, ImpactState, impact_cards};
use crate::state::session::{SessionState, SessionStore};
use crate::util::route_gate::{AUTH_ENTRY, AppRoute};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<HttpApi>();
    let impact = RwSignal::new(ImpactState::default());

    Effect::new(move || {
        session.with(|_| ());
        #[cfg(feature = "hydrate")]
        {
            let previous = impact.get_untracked().stats;
            impact.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                let stats = crate::state::impact::fetch_impact(&api, previous).await;
                impact.set(ImpactState { stats, loading: false });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = api;
        }
    });

    let logged_in = move || session.with(SessionState::is_authenticated);

    view! {
        <div class="home-page">
            <section class="home-hero">
                <div class="home-hero__globe" aria-hidden="true"></div>
                <h1 class="home-hero__title">
                    "WasteNest " <span class="home-hero__accent">"Garbage Management"</span>
                </h1>
                <p class="home-hero__lead">
                    "Join our community in making garbage management more efficient and rewarding!"
                </p>
                <Show
                    when=logged_in
                    fallback=|| {
                        view! {
                            <a href=AUTH_ENTRY class="btn btn--hero">
                                "Get Started"
                                <span class="icon icon--arrow-right" aria-hidden="true"></span>
                            </a>
                        }
                    }
                >
                    <a href=AppRoute::Report.path() class="btn btn--hero">
                        "Report Waste"
                        <span class="icon icon--arrow-right" aria-hidden="true"></span>
                    </a>
                </Show>
            </section>

            <section class="home-features">
                <FeatureCard
                    icon="leaf"
                    title="Eco-Friendly"
                    description="Contribute to a cleaner environment by reporting and collecting waste."
                />
                <FeatureCard
                    icon="coins"
                    title="Earn Rewards"
                    description="Get tokens for your contributions to waste management efforts."
                />
                <FeatureCard
                    icon="users"
                    title="Community-Driven"
                    description="Be part of a growing community committed to sustainable practices."
                />
            </section>

            <section class="home-impact">
                <h2 class="home-impact__title">"Our Impact"</h2>
                <div class="home-impact__grid">
                    {move || {
                        let state = impact.get();
                        impact_cards(&state.stats)
                            .into_iter()
                            .map(|card| view! { <ImpactCardView card=card loading=state.loading/> })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}

fn icon_class(icon: ImpactIcon) -> &'static str {
    match icon {
        ImpactIcon::Recycle => "icon icon--recycle",
        ImpactIcon::MapPin => "icon icon--map-pin",
        ImpactIcon::Coins => "icon icon--coins",
        ImpactIcon::Leaf => "icon icon--leaf",
    }
}

#[component]
fn ImpactCardView(card: ImpactCard, loading: bool) -> impl IntoView {
    view! {
        <div class="impact-card">
            <span class=icon_class(card.icon) aria-hidden="true"></span>
            <p class="impact-card__value">
                {if loading { view! { <Spinner/> }.into_any() } else { card.value.into_any() }}
            </p>
            <p class="impact-card__title">{card.title}</p>
        </div>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-card__badge">
                <span class=format!("icon icon--{icon}") aria-hidden="true"></span>
            </div>
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__text">{description}</p>
        </div>
    }
}
