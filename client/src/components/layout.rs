//! Header + sidebar + footer frame shared by every page except `/auth`.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Header/>
            <div class="layout__body">
                <Sidebar/>
                <main class="layout__main">{children()}</main>
            </div>
            <Footer/>
        </div>
    }
}
