//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::gate::{AuthRoute, CatchAll, PrivateRoute};
use crate::components::layout::MainLayout;
use crate::components::loading::LoadingScreen;
use crate::components::toast_stack::ToastStack;
use crate::config::ApiConfig;
use crate::net::api::HttpApi;
use crate::pages::{auth::AuthPage, home::HomePage, sections::SectionPage};
use crate::state::session::{SessionStore, needs_boot_fetch};
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::route_gate::AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// A signed-in-only section inside the standard layout.
fn private_section(route: AppRoute) -> impl IntoView {
    view! {
        <PrivateRoute>
            <MainLayout>
                <SectionPage route=route/>
            </MainLayout>
        </PrivateRoute>
    }
}

/// Root application component.
///
/// Provides the session store and other shared contexts, runs the boot
/// session fetch, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());
    let api = HttpApi::new(ApiConfig::from_build_env());

    provide_context(session);
    provide_context(toasts);
    provide_context(ui);
    provide_context(api);

    let booting = RwSignal::new(false);
    Effect::new(move || {
        if !session.with(|state| needs_boot_fetch(state, booting.get_untracked())) {
            return;
        }
        booting.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let next = crate::state::session::load_session(&api).await;
            session.replace(next);
            booting.set(false);
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/wastenest-ui.css"/>
        <Title text="WasteNest"/>

        <Router>
            <Show when=move || !booting.get() fallback=|| view! { <LoadingScreen/> }>
                <Routes fallback=|| view! { <CatchAll/> }>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <MainLayout><HomePage/></MainLayout> }
                    />
                    <Route path=StaticSegment(AppRoute::Collect.segment()) view=|| private_section(AppRoute::Collect)/>
                    <Route path=StaticSegment(AppRoute::Report.segment()) view=|| private_section(AppRoute::Report)/>
                    <Route path=StaticSegment(AppRoute::Rewards.segment()) view=|| private_section(AppRoute::Rewards)/>
                    <Route
                        path=StaticSegment(AppRoute::LeaderBoard.segment())
                        view=|| private_section(AppRoute::LeaderBoard)
                    />
                    <Route path=StaticSegment(AppRoute::Settings.segment()) view=|| private_section(AppRoute::Settings)/>
                    <Route
                        path=StaticSegment(AppRoute::Auth.segment())
                        view=|| view! { <AuthRoute><AuthPage/></AuthRoute> }
                    />
                </Routes>
            </Show>
            <ToastStack/>
        </Router>
    }
}
