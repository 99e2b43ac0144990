use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::content::ServiceDetail;
use crate::overlay::browser::BrowserOverlay;
use crate::overlay::session::{should_render, OverlayController, OverlayPlatform};

#[derive(Clone, Debug, PartialEq)]
pub enum SectionBody {
    Text(&'static str),
    Bullets(&'static [&'static str]),
    Steps(&'static [&'static str]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailSection {
    pub heading: &'static str,
    pub body: SectionBody,
    /// Set on the closing section, which is drawn with a divider.
    pub emphasized: bool,
}

/// Headed sections of the detail view, in display order.
pub fn detail_sections(detail: &ServiceDetail) -> [DetailSection; 5] {
    let section = |heading: &'static str, body: SectionBody| DetailSection {
        heading,
        body,
        emphasized: false,
    };
    [
        section("Who this is for", SectionBody::Text(detail.who_for)),
        section("What we do", SectionBody::Text(detail.what_we_do)),
        section("Typical use cases", SectionBody::Bullets(detail.use_cases)),
        section("How it works", SectionBody::Steps(detail.how_it_works)),
        DetailSection {
            heading: "Outcome",
            body: SectionBody::Text(detail.outcome),
            emphasized: true,
        },
    ]
}

fn render_section(section: &DetailSection) -> Html {
    let body = match &section.body {
        SectionBody::Text(text) => html! { <p class="modal-text">{*text}</p> },
        SectionBody::Bullets(items) => html! {
            <ul class="modal-bullets">
                { for items.iter().map(|item| html! {
                    <li><span class="modal-dot"></span>{*item}</li>
                }) }
            </ul>
        },
        SectionBody::Steps(steps) => html! {
            <ol class="modal-steps">
                { for steps.iter().enumerate().map(|(index, step)| html! {
                    <li><span class="modal-step-number">{index + 1}</span>{*step}</li>
                }) }
            </ol>
        },
    };
    html! {
        <div class={classes!("modal-section", section.emphasized.then(|| "modal-outcome"))}>
            <h3>{section.heading}</h3>
            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub service: Option<&'static ServiceDetail>,
}

/// Applies one effect run to the overlay controller and returns its cleanup.
fn sync_overlay<P: OverlayPlatform>(
    controller: Rc<RefCell<OverlayController<P>>>,
    is_open: bool,
    has_service: bool,
    on_close: &Callback<()>,
) -> impl FnOnce() {
    // Shown without global claims if they fail; already logged.
    let _ = controller.borrow_mut().sync(is_open, has_service, on_close);
    move || controller.borrow_mut().teardown()
}

fn modal_view(is_open: bool, service: Option<&ServiceDetail>, on_close: &Callback<()>) -> Html {
    match service.filter(|service| should_render(is_open, Some(service))) {
        Some(service) => detail_view(service, on_close),
        None => html! {},
    }
}

fn detail_view(service: &ServiceDetail, on_close: &Callback<()>) -> Html {
    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-root">
            <style>
                {r#"
                    .modal-root {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                    }
                    .modal-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(236, 230, 241, 0.4);
                        backdrop-filter: blur(4px);
                    }
                    .modal-panel {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 48rem;
                        max-height: 90vh;
                        overflow-y: auto;
                        border-radius: 12px;
                        border: 1px solid rgba(138, 95, 176, 0.2);
                        background: rgba(13, 10, 16, 0.98);
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.5);
                        animation: fadeIn 0.3s ease-out both;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        width: 2.5rem;
                        height: 2.5rem;
                        border: none;
                        border-radius: 8px;
                        background: transparent;
                        color: inherit;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .modal-close:hover { background: rgba(138, 95, 176, 0.1); }
                    .modal-content { padding: 2.5rem; }
                    .modal-content h2 { margin: 0 0 2rem; padding-right: 2.5rem; font-size: 2.25rem; }
                    .modal-section { margin-bottom: 2rem; }
                    .modal-section h3 { color: var(--primary); font-size: 1.1rem; margin: 0 0 0.5rem; }
                    .modal-text { color: rgba(236, 230, 241, 0.8); margin: 0; }
                    .modal-bullets, .modal-steps { list-style: none; padding: 0; margin: 0; }
                    .modal-bullets li, .modal-steps li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        margin-bottom: 0.5rem;
                        color: rgba(236, 230, 241, 0.8);
                    }
                    .modal-dot {
                        width: 6px;
                        height: 6px;
                        margin-top: 0.6rem;
                        border-radius: 50%;
                        background: var(--primary);
                        flex-shrink: 0;
                    }
                    .modal-step-number {
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 50%;
                        background: rgba(138, 95, 176, 0.1);
                        color: var(--primary);
                        font-size: 0.85rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                    }
                    .modal-outcome {
                        padding-top: 1rem;
                        border-top: 1px solid rgba(138, 95, 176, 0.1);
                    }
                    .modal-outcome .modal-text { color: rgba(236, 230, 241, 0.9); font-weight: 500; }
                "#}
            </style>
            <div class="modal-backdrop" onclick={close.clone()} aria-hidden="true"></div>
            <div class="modal-panel" role="dialog" aria-modal="true" aria-label={service.title}>
                <button class="modal-close" onclick={close} aria-label="Close modal">{"✕"}</button>
                <div class="modal-content">
                    <h2>{service.title}</h2>
                    { for detail_sections(service).iter().map(render_section) }
                </div>
            </div>
        </div>
    }
}

/// Detail overlay for one service. Open state belongs to the caller; while
/// shown the modal closes on Escape and locks page scrolling.
#[function_component(ServiceDetailModal)]
pub fn service_detail_modal(props: &ServiceDetailModalProps) -> Html {
    let controller = use_mut_ref(|| OverlayController::new(BrowserOverlay));

    use_effect_with_deps(
        move |(is_open, has_service, on_close)| {
            sync_overlay(controller, *is_open, *has_service, on_close)
        },
        (props.is_open, props.service.is_some(), props.on_close.clone()),
    );

    modal_view(props.is_open, props.service, &props.on_close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::session::fake::{close_counter, Document, FakePlatform};
    use yew::virtual_dom::VNode;

    const SAMPLE: ServiceDetail = ServiceDetail {
        title: "X",
        who_for: "Y",
        what_we_do: "Z",
        use_cases: &["a", "b"],
        how_it_works: &["s1", "s2"],
        outcome: "done",
    };

    #[test]
    fn sections_carry_the_literal_content_in_order() {
        let sections = detail_sections(&SAMPLE);
        let headings: Vec<_> = sections.iter().map(|section| section.heading).collect();
        assert_eq!(
            headings,
            ["Who this is for", "What we do", "Typical use cases", "How it works", "Outcome"]
        );
        assert_eq!(sections[0].body, SectionBody::Text("Y"));
        assert_eq!(sections[1].body, SectionBody::Text("Z"));
        assert_eq!(sections[2].body, SectionBody::Bullets(&["a", "b"]));
        assert_eq!(sections[3].body, SectionBody::Steps(&["s1", "s2"]));
        assert_eq!(sections[4].body, SectionBody::Text("done"));
        assert!(sections[4].emphasized);
        assert!(sections[..4].iter().all(|section| !section.emphasized));
    }

    #[test]
    fn empty_fields_give_empty_sections() {
        let empty = ServiceDetail {
            title: "",
            who_for: "",
            what_we_do: "",
            use_cases: &[],
            how_it_works: &[],
            outcome: "",
        };
        let sections = detail_sections(&empty);
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[2].body, SectionBody::Bullets(&[]));
        assert_eq!(sections[3].body, SectionBody::Steps(&[]));
    }

    /// Visible text of a rendered tree, in document order, without style blocks.
    fn texts(node: &Html) -> Vec<String> {
        fn walk(node: &Html, out: &mut Vec<String>) {
            match node {
                VNode::VTag(tag) if tag.tag() != "style" => {
                    tag.children().iter().for_each(|child| walk(child, out))
                }
                VNode::VText(text) => out.push(text.text.to_string()),
                VNode::VList(list) => list.iter().for_each(|child| walk(child, out)),
                _ => {}
            }
        }
        let mut out = Vec::new();
        walk(node, &mut out);
        out
    }

    #[test]
    fn open_modal_shows_title_and_every_field() {
        let (on_close, _) = close_counter();
        let shown = texts(&modal_view(true, Some(&SAMPLE), &on_close));

        assert_eq!(shown.first().map(String::as_str), Some("✕"));
        assert_eq!(shown.get(1).map(String::as_str), Some("X"));
        let position = |text: &str| shown.iter().position(|shown| shown == text);
        let order: Vec<_> = ["Y", "Z", "a", "b", "s1", "s2", "done"]
            .into_iter()
            .map(|text| position(text).unwrap_or_else(|| panic!("{} not rendered", text)))
            .collect();
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(position("Who this is for") < position("Y"));
        assert!(position("Outcome") < position("done"));
    }

    #[test]
    fn closed_or_empty_modal_renders_nothing() {
        let (on_close, _) = close_counter();
        for view in [
            modal_view(false, Some(&SAMPLE), &on_close),
            modal_view(true, None, &on_close),
            modal_view(false, None, &on_close),
        ] {
            assert!(matches!(&view, VNode::VList(list) if list.is_empty()));
        }
    }

    #[test]
    fn effect_run_claims_and_cleanup_releases() {
        let platform = FakePlatform::default();
        platform.doc.borrow_mut().overflow = "auto".to_string();
        let doc = platform.doc.clone();
        let controller = Rc::new(RefCell::new(OverlayController::new(platform)));
        let (on_close, closes) = close_counter();

        let cleanup = sync_overlay(controller.clone(), true, true, &on_close);
        assert_eq!(doc.borrow().key_acquires, 1);
        assert_eq!(doc.borrow().overflow, "hidden");
        Document::press(&doc, "Escape");
        assert_eq!(*closes.borrow(), 1);

        cleanup();
        assert!(!controller.borrow().is_active());
        assert!(doc.borrow().listeners.is_empty());
        assert_eq!(doc.borrow().overflow, "auto");
    }

    #[test]
    fn closed_effect_run_claims_nothing() {
        let platform = FakePlatform::default();
        let doc = platform.doc.clone();
        let controller = Rc::new(RefCell::new(OverlayController::new(platform)));
        let (on_close, _) = close_counter();

        sync_overlay(controller, false, true, &on_close)();
        assert_eq!(doc.borrow().key_acquires, 0);
        assert_eq!(doc.borrow().scroll_acquires, 0);
    }
}
