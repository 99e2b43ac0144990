use log::info;
use yew::prelude::*;

use crate::components::layout::{use_scroll_to_top, PageBackground};
use crate::components::service_detail_modal::ServiceDetailModal;
use crate::components::spotlight_card::SpotlightCard;
use crate::content::{ServiceCard, PHASES, SERVICES};

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();
    let selected = use_state(|| None::<&'static ServiceCard>);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <div class="services-page">
            <style>
                {r#"
                    .services-page section {
                        position: relative;
                        z-index: 10;
                        min-height: 100vh;
                        padding: 8rem 1.5rem 6rem;
                    }
                    .services-inner { max-width: 72rem; margin: 0 auto; }
                    .services-intro { text-align: center; margin-bottom: 5rem; }
                    .services-intro p { max-width: 48rem; margin: 0 auto 1rem; font-size: 1.35rem; color: rgba(236, 230, 241, 0.8); }
                    .services-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                    .service-card { display: flex; flex-direction: column; min-height: 280px; }
                    .service-card h3 { font-size: 1.5rem; margin: 0 0 1rem; }
                    .service-card > p { color: rgba(236, 230, 241, 0.7); margin: 0 0 1.5rem; }
                    .service-bullets { list-style: none; padding: 0; margin: 0 0 1.5rem; flex-grow: 1; }
                    .service-bullets li {
                        display: flex;
                        gap: 0.75rem;
                        margin-bottom: 0.75rem;
                        font-size: 0.9rem;
                        color: rgba(236, 230, 241, 0.7);
                    }
                    .service-bullets li::before {
                        content: "";
                        width: 6px;
                        height: 6px;
                        margin-top: 0.5rem;
                        border-radius: 50%;
                        background: var(--primary);
                        flex-shrink: 0;
                    }
                    .service-hint {
                        margin-top: auto;
                        padding-top: 1rem;
                        font-size: 0.85rem;
                        font-weight: 500;
                        color: var(--primary);
                        border-top: 1px solid rgba(138, 95, 176, 0.1);
                    }
                    .how-we-work, .phase {
                        border-radius: 24px;
                        border: 1px solid rgba(138, 95, 176, 0.2);
                        background: rgba(13, 10, 16, 0.95);
                        text-align: center;
                        padding: 3rem;
                    }
                    .how-we-work { margin-top: 6rem; }
                    .phases { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-top: 1.5rem; }
                    .phase { padding: 2rem; }
                    .services-cta {
                        display: inline-block;
                        padding: 0.75rem 2rem;
                        border-radius: 8px;
                        background: var(--primary);
                        color: #fff;
                        text-decoration: none;
                        font-weight: 500;
                    }
                    @media (max-width: 768px) {
                        .services-grid, .phases { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <PageBackground />

            <section>
                <div class="services-inner">
                    <div class="services-intro fade-in">
                        <h1>{"Services"}</h1>
                        <p>
                            {"Systems-first automation, data flow, and AI-enabled workflows that remove manual work and improve operational reliability."}
                        </p>
                        <p style="font-size: 1.1rem; color: rgba(236, 230, 241, 0.6);">
                            {"Designed for teams that want clean architecture, predictable execution, and measurable outcomes."}
                        </p>
                    </div>

                    <div class="services-grid">
                        { for SERVICES.iter().map(|service| {
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_| {
                                    info!("Opening service details: {}", service.title);
                                    selected.set(Some(service));
                                })
                            };
                            html! {
                                <SpotlightCard key={service.id.to_string()} class="service-card" onclick={Some(onclick)}>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <ul class="service-bullets">
                                        { for service.bullets.iter().map(|bullet| html! { <li>{*bullet}</li> }) }
                                    </ul>
                                    <p class="service-hint">{"Click to view details"}</p>
                                </SpotlightCard>
                            }
                        }) }
                    </div>

                    <div class="how-we-work">
                        <h2>{"How We Work"}</h2>
                        <p style="max-width: 48rem; margin: 0 auto 2rem; font-size: 1.1rem; color: rgba(236, 230, 241, 0.7);">
                            {"Every engagement starts with understanding your systems, not selling you a tool. We take a structured, systems-first approach to ensure everything we build integrates cleanly and delivers lasting impact."}
                        </p>
                        <a href="/#contact" class="services-cta">{"Discuss your project"}</a>
                    </div>
                    <div class="phases">
                        { for PHASES.iter().map(|phase| html! {
                            <div class="phase">
                                <h3>{phase.title}</h3>
                                <p style="color: rgba(236, 230, 241, 0.7);">{phase.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <ServiceDetailModal
                is_open={selected.is_some()}
                on_close={on_close}
                service={selected.map(|service| &service.expanded)}
            />
        </div>
    }
}
