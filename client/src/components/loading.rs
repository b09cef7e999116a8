//! Spinners shown while the session or page data is loading.

use leptos::prelude::*;

/// Full-viewport centered spinner.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <Spinner/>
        </div>
    }
}

/// Inline spinner.
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <span class="spinner" role="status" aria-label="Loading"></span> }
}
