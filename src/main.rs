use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;
mod viewport {
    pub mod browser;
    pub mod hook;
    pub mod state;
    pub mod tracker;
}
mod overlay {
    pub mod browser;
    pub mod resource;
    pub mod session;
}
mod components {
    pub mod grid;
    pub mod layout;
    pub mod service_detail_modal;
    pub mod spotlight_card;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod not_found;
    pub mod services;
}

use components::layout::Footer;
use pages::{about::About, home::Home, not_found::NotFound, services::Services};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        transition: background 0.3s ease, border-color 0.3s ease;
                        border-bottom: 1px solid transparent;
                    }
                    .top-nav.scrolled {
                        background: rgba(13, 10, 16, 0.85);
                        backdrop-filter: blur(8px);
                        border-bottom-color: rgba(138, 95, 176, 0.15);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1.25rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo { font-size: 1.25rem; font-weight: 600; text-decoration: none; }
                    .nav-right { display: flex; gap: 2rem; align-items: center; }
                    .nav-link { text-decoration: none; color: rgba(236, 230, 241, 0.8); }
                    .nav-link:hover { color: var(--primary); }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span { display: block; width: 22px; height: 2px; margin: 5px 0; background: var(--foreground); }
                    @media (max-width: 768px) {
                        .burger-menu { display: block; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: rgba(13, 10, 16, 0.95);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Mindstream Solutions"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">{"Services"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <a href="/#contact" class="nav-link">{"Contact"}</a>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("Logging unavailable: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
