//! Slide-out navigation listing the routed pages.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;
use crate::util::route_gate::AppRoute;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let links = AppRoute::NAV
        .into_iter()
        .map(|route| {
            let active = move || pathname.with(|path| AppRoute::from_path(path) == Some(route));
            view! {
                <a
                    href=route.path()
                    class=move || if active() { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
                    on:click=move |_| ui.update(UiState::close_all)
                >
                    {route.title()}
                </a>
            }
        })
        .collect_view();

    view! {
        <Show when=move || ui.get().sidebar_open>
            <div class="sidebar-backdrop" on:click=move |_| ui.update(UiState::close_all)></div>
        </Show>
        <aside class=move || if ui.get().sidebar_open { "sidebar sidebar--open" } else { "sidebar" }>
            <nav class="sidebar__nav">{links}</nav>
        </aside>
    }
}
