use yew::prelude::*;

use crate::components::layout::{use_scroll_to_top, PageBackground};
use crate::config::REVEAL_STAGGER_MS;
use crate::content::{TimelineEntry, TIMELINE};
use crate::viewport::hook::use_in_view_list;
use crate::viewport::tracker::ObserverOptions;

fn timeline_card(entry: &TimelineEntry, on_left: bool) -> Html {
    html! {
        <div class={classes!("timeline-card", on_left.then(|| "timeline-card-left"))}>
            <h3>{entry.title}</h3>
            <p>{entry.description}</p>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();
    let timeline = use_in_view_list(
        TIMELINE.len(),
        ObserverOptions {
            threshold: 0.3,
            root_margin: Some("0px 0px -10% 0px".to_string()),
        },
    );

    html! {
        <div class="about-page">
            <style>
                {r#"
                    .about-page section {
                        position: relative;
                        z-index: 10;
                        min-height: 100vh;
                        padding: 8rem 1.5rem 6rem;
                    }
                    .about-inner { max-width: 56rem; margin: 0 auto; }
                    .about-intro p { font-size: 1.15rem; color: rgba(236, 230, 241, 0.8); }
                    .timeline { position: relative; margin-top: 3rem; }
                    .timeline-spine {
                        position: absolute;
                        left: 50%;
                        top: 0;
                        bottom: 0;
                        width: 1px;
                        background: rgba(138, 95, 176, 0.3);
                    }
                    .timeline-row {
                        position: relative;
                        display: flex;
                        align-items: center;
                        margin-bottom: 3rem;
                        transition: opacity 0.7s ease-out, transform 0.7s ease-out, filter 0.7s ease-out;
                    }
                    .timeline-row.hidden { opacity: 0; filter: blur(2px); }
                    .timeline-row.hidden.from-left { transform: translateX(-2rem); }
                    .timeline-row.hidden.from-right { transform: translateX(2rem); }
                    .timeline-side { width: 41.6%; }
                    .timeline-side.left { padding-right: 2rem; }
                    .timeline-side.right { padding-left: 2rem; }
                    .timeline-dot-wrap { width: 16.8%; display: flex; justify-content: center; }
                    .timeline-dot {
                        width: 20px;
                        height: 20px;
                        border-radius: 50%;
                        border: 2px solid var(--primary);
                        background: rgba(138, 95, 176, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 10;
                    }
                    .timeline-dot::after {
                        content: "";
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: var(--primary);
                    }
                    .timeline-card {
                        padding: 2rem;
                        border-radius: 12px;
                        border: 1px solid rgba(138, 95, 176, 0.2);
                        background: rgba(13, 10, 16, 0.95);
                        transform-origin: left center;
                        transition: all 0.3s ease-out;
                    }
                    .timeline-card-left { text-align: right; transform-origin: right center; }
                    .timeline-card:hover {
                        transform: scale(1.02);
                        border-color: rgba(138, 95, 176, 0.5);
                        box-shadow: 0 0 20px rgba(81, 53, 101, 0.3);
                    }
                    .timeline-card h3 { margin: 0 0 0.5rem; font-size: 1.25rem; }
                    .timeline-card p { margin: 0; color: rgba(236, 230, 241, 0.7); }
                    .approach-card {
                        margin-top: 6rem;
                        padding: 3rem;
                        text-align: center;
                        border-radius: 12px;
                        border: 1px solid rgba(95, 127, 176, 0.2);
                        background: rgba(13, 10, 16, 0.95);
                    }
                "#}
            </style>
            <PageBackground />

            <section>
                <div class="about-inner">
                    <div class="about-intro fade-in">
                        <h1>{"Built for operational clarity. Engineered for performance."}</h1>
                        <p>
                            {"Mindstream Solutions exists to bring structure to complex operations. We design automated systems that support how your team actually works. Every workflow is rebuilt to reduce friction, improve reliability, and deliver measurable impact."}
                        </p>
                        <p>
                            {"Our philosophy is simple: remove friction, remove noise, and build processes that let smart people move faster. Tools should reduce busywork, not create more of it."}
                        </p>
                    </div>

                    <h2 style="text-align: center; margin-top: 6rem;">{"Our Journey"}</h2>
                    <div class="timeline">
                        <div class="timeline-spine"></div>
                        {
                            TIMELINE.iter().enumerate().map(|(index, entry)| {
                                let on_left = index % 2 == 0;
                                html! {
                                    <div
                                        key={entry.title}
                                        ref={timeline.bind(index)}
                                        data-index={index.to_string()}
                                        class={classes!(
                                            "timeline-row",
                                            (!timeline.is_visible(index)).then(|| "hidden"),
                                            if on_left { "from-left" } else { "from-right" },
                                        )}
                                        style={format!("transition-delay: {}ms;", index * REVEAL_STAGGER_MS)}
                                    >
                                        <div class="timeline-side left">
                                            { if on_left { timeline_card(entry, true) } else { html! {} } }
                                        </div>
                                        <div class="timeline-dot-wrap"><div class="timeline-dot"></div></div>
                                        <div class="timeline-side right">
                                            { if on_left { html! {} } else { timeline_card(entry, false) } }
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="approach-card">
                        <h3 style="font-size: 1.5rem;">{"Our Approach"}</h3>
                        <p style="font-size: 1.15rem; color: rgba(236, 230, 241, 0.7);">
                            {"Every project starts with understanding how work actually moves through your business. We map the workflow, find the friction, and redesign the system so it runs cleanly. The result: workflows that make sense, teams that move faster, and operations you can trust."}
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}
