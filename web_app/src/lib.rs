use leptos::prelude::*;
use leptos::mount::mount_to_body;
use leptos_router::components::{Router, Routes, Route};
use leptos_router::path;
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod state;

use components::{DashboardPage, ToastContainer};
use state::DashboardState;

#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    let state = DashboardState::new();
    provide_context(state);

    view! {
        <Router>
            <Routes fallback=|| view! { <DashboardPage/> }>
                <Route path=path!("/*any") view=|| view! {
                    <DashboardPage/>
                    <ToastContainer/>
                } />
            </Routes>
        </Router>
    }
}
