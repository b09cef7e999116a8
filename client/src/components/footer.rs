//! Site footer.

use leptos::prelude::*;

use crate::util::format::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();
    view! {
        <footer class="site-footer">
            <p>"© " {year} " Garbage Management System. All Rights Reserved."</p>
        </footer>
    }
}
