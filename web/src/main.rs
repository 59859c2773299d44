use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

mod api;
mod graph;
mod home;
mod results;
mod share;

use home::Home;
use results::Results;

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/results") view=Results />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container">
            <div class="terminal">
                <p class="error-text">"error: page not found"</p>
                <a class="submit-btn" href="/">"back"</a>
            </div>
        </div>
    }
}

fn main() {
    leptos::mount::mount_to_body(App)
}
