use yew::prelude::*;

use crate::components::layout::{use_scroll_to_top, PageBackground};
use crate::config::{CONTACT_EMAIL, REVEAL_STAGGER_MS};
use crate::content::{badge_letters, contact_mailto, CORE_SYSTEMS, TESTIMONIALS};
use crate::viewport::hook::use_in_view_list;
use crate::viewport::tracker::ObserverOptions;

const STYLE: &str = r#"
    .home-page section {
        position: relative;
        z-index: 10;
        padding: 8rem 1.5rem;
        pointer-events: none;
    }
    .home-page .pointer { pointer-events: auto; }
    .home-hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
    }
    .home-inner { max-width: 72rem; margin: 0 auto; width: 100%; }
    .home-hero p { font-size: 1.5rem; max-width: 42rem; color: rgba(236, 230, 241, 0.8); }
    .home-button {
        display: inline-block;
        padding: 0.85rem 2rem;
        border-radius: 8px;
        background: var(--primary);
        color: #fff;
        text-decoration: none;
        font-weight: 500;
    }
    .eyebrow {
        display: flex;
        align-items: baseline;
        gap: 1.5rem;
        font-size: 0.85rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        color: var(--primary);
    }
    .eyebrow::after {
        content: "";
        flex: 1;
        height: 1px;
        background: linear-gradient(to right, rgba(138, 95, 176, 0.4), transparent);
    }
    .core-system {
        display: grid;
        grid-template-columns: 1fr 4fr 7fr;
        gap: 2rem;
        margin-top: 10rem;
        transition: opacity 0.7s ease-out, transform 0.7s ease-out;
    }
    .core-system.hidden { opacity: 0; transform: translateY(2rem); }
    .core-system.offset { margin-left: 5rem; }
    .core-number { font-size: 4.5rem; font-weight: 700; opacity: 0.1; }
    .core-body { border-left: 2px solid; padding-left: 2rem; padding-top: 3rem; }
    .core-body p:first-child { font-size: 1.25rem; color: rgba(236, 230, 241, 0.8); }
    .core-body p:last-child { color: rgba(236, 230, 241, 0.6); }
    .testimonials { display: grid; grid-template-columns: repeat(3, 1fr); gap: 3rem; }
    .testimonial { border-left: 4px solid; padding: 1rem 1.5rem; }
    .testimonial blockquote { margin: 0 0 2rem; font-size: 1.25rem; font-style: italic; }
    .testimonial-author { display: flex; align-items: center; gap: 0.75rem; }
    .testimonial-badge {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 0.85rem;
        font-weight: 600;
        background: rgba(138, 95, 176, 0.1);
    }
    .contact-card {
        max-width: 48rem;
        margin: 4rem auto 0;
        padding: 3rem;
        text-align: center;
        border-radius: 8px;
        border: 1px solid rgba(138, 95, 176, 0.2);
        background: rgba(13, 10, 16, 0.4);
        backdrop-filter: blur(8px);
    }
    @media (max-width: 768px) {
        .core-system, .testimonials { grid-template-columns: 1fr; }
        .core-system.offset { margin-left: 0; }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    let reveal = use_in_view_list(
        CORE_SYSTEMS.len(),
        ObserverOptions::default().with_root_margin("0px 0px -10% 0px"),
    );

    html! {
        <div class="home-page">
            <style>{STYLE}</style>
            <PageBackground />

            <section class="home-hero">
                <div class="home-inner fade-in">
                    <h1>{"Operational clarity, built properly"}</h1>
                    <p>
                        {"Mindstream Solutions builds systems that handle the busywork, so your team can focus on what actually matters."}
                    </p>
                    <a href="#contact" class="home-button pointer">{"Build with precision"}</a>
                </div>
            </section>

            <section>
                <div class="home-inner">
                    <span class="eyebrow">{"Core Systems"}</span>
                    <h2>{"Systems that do the heavy lifting"}</h2>
                    {
                        CORE_SYSTEMS.iter().enumerate().map(|(index, system)| {
                            let accent = system.accent.css_var();
                            html! {
                                <div
                                    key={system.number}
                                    ref={reveal.bind(index)}
                                    data-index={index.to_string()}
                                    class={classes!(
                                        "core-system",
                                        (!reveal.is_visible(index)).then(|| "hidden"),
                                        (index % 2 == 1).then(|| "offset"),
                                    )}
                                    style={format!("transition-delay: {}ms;", index * REVEAL_STAGGER_MS)}
                                >
                                    <div style={format!("width: 12px; height: 12px; border-radius: 50%; background: {}; margin-top: 0.5rem;", accent)}></div>
                                    <div>
                                        <div class="core-number" style={format!("color: {};", accent)}>{system.number}</div>
                                        <h3 style="font-size: 2rem;">{system.title}</h3>
                                    </div>
                                    <div class="core-body" style={format!("border-color: {};", accent)}>
                                        <p>{system.body}</p>
                                        <p>{system.aside}</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section>
                <div class="home-inner" style="text-align: center; max-width: 56rem;">
                    <h2>{"Built for clarity. Driven by precision."}</h2>
                    <p style="font-size: 1.35rem; color: rgba(236, 230, 241, 0.7);">
                        {"Mindstream Solutions exists to bring structure to complex operations. We design systems that replace fragmented processes with clear, reliable workflows built for real-world use."}
                    </p>
                    <p style="font-weight: 500;">{"Every workflow tells a story. We make sure yours is sharp."}</p>
                </div>
            </section>

            <section>
                <div class="home-inner">
                    <span class="eyebrow">{"Client Impact"}</span>
                    <h2>{"What clients say"}</h2>
                    <div class="testimonials">
                        { for TESTIMONIALS.iter().map(|testimonial| {
                            let accent = testimonial.accent.css_var();
                            html! {
                                <figure class="testimonial" style={format!("border-color: {};", accent)}>
                                    <blockquote>{format!("\"{}\"", testimonial.quote)}</blockquote>
                                    <figcaption class="testimonial-author">
                                        <span class="testimonial-badge" style={format!("color: {};", accent)}>
                                            {badge_letters(testimonial.initials)}
                                        </span>
                                        {testimonial.initials}
                                    </figcaption>
                                </figure>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section id="contact">
                <div class="home-inner" style="text-align: center;">
                    <span class="eyebrow" style="justify-content: center;">{"Let's Talk"}</span>
                    <h2>{"Ready to streamline your operations?"}</h2>
                    <p style="font-size: 1.25rem; color: rgba(236, 230, 241, 0.7);">
                        {"Send a short outline of what you're trying to fix and what you're currently using. We'll reply with next steps."}
                    </p>
                    <div class="contact-card">
                        <p>
                            {"If you're dealing with operational bottlenecks, messy systems, or workflows that don't scale, get in touch."}
                        </p>
                        <a href={contact_mailto()} class="home-button pointer">
                            {format!("Email {}", CONTACT_EMAIL)}
                        </a>
                        <p style="font-size: 0.85rem; color: rgba(236, 230, 241, 0.5);">
                            {"The email opens with a short template. Delete or change anything you don't need."}
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}
