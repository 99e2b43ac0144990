use yew::prelude::*;

use crate::components::grid::{Grid, GridDirection};

/// Scrolls the window to the top once, when the calling page mounts.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

/// Fixed animated grid behind page content.
#[function_component(PageBackground)]
pub fn page_background() -> Html {
    html! {
        <div class="page-background" style="position: fixed; inset: 0; z-index: 0;">
            <Grid direction={GridDirection::Diagonal} />
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        z-index: 10;
                        padding: 3rem 1.5rem;
                        text-align: center;
                        font-size: 0.875rem;
                        color: rgba(236, 230, 241, 0.5);
                        border-top: 1px solid rgba(138, 95, 176, 0.1);
                    }
                "#}
            </style>
            {"© Mindstream Solutions. Operational clarity, built properly."}
        </footer>
    }
}
