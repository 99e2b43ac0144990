use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::PageBackground;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <PageBackground />
            <section style="position: relative; z-index: 10; min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 0 1.5rem;">
                <h1>{"404"}</h1>
                <p style="font-size: 1.25rem; color: rgba(236, 230, 241, 0.7);">{"This page doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes="nav-link">
                    {"Return home"}
                </Link<Route>>
            </section>
        </div>
    }
}
