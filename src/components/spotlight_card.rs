use std::rc::Rc;

use web_sys::{Element, FocusEvent, MouseEvent};
use yew::prelude::*;

const SPOTLIGHT_OPACITY: f64 = 0.4;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spotlight {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    focused: bool,
}

impl Spotlight {
    /// Moves the light to a card-relative position. Ignored while focused.
    pub fn moved(self, x: f64, y: f64) -> Self {
        if self.focused {
            return self;
        }
        Self { x, y, ..self }
    }

    pub fn entered(self) -> Self {
        Self {
            opacity: SPOTLIGHT_OPACITY,
            ..self
        }
    }

    pub fn left(self) -> Self {
        Self {
            opacity: 0.0,
            ..self
        }
    }

    pub fn focused(self) -> Self {
        Self {
            focused: true,
            opacity: SPOTLIGHT_OPACITY,
            ..self
        }
    }

    pub fn blurred(self) -> Self {
        Self {
            focused: false,
            opacity: 0.0,
            ..self
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {}; background: radial-gradient(circle at {}px {}px, hsla(280, 33%, 35%, 0.15), transparent 60%);",
            self.opacity, self.x, self.y
        )
    }
}

pub enum SpotlightAction {
    Moved { x: f64, y: f64 },
    Entered,
    Left,
    Focused,
    Blurred,
}

impl Reducible for Spotlight {
    type Action = SpotlightAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SpotlightAction::Moved { x, y } => self.moved(x, y),
            SpotlightAction::Entered => self.entered(),
            SpotlightAction::Left => self.left(),
            SpotlightAction::Focused => self.focused(),
            SpotlightAction::Blurred => self.blurred(),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SpotlightCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    pub children: Children,
}

#[function_component(SpotlightCard)]
pub fn spotlight_card(props: &SpotlightCardProps) -> Html {
    let card_ref = use_node_ref();
    let spotlight = use_reducer(Spotlight::default);

    let onmousemove = {
        let card_ref = card_ref.clone();
        let spotlight = spotlight.dispatcher();
        Callback::from(move |e: MouseEvent| {
            if let Some(card) = card_ref.cast::<Element>() {
                let rect = card.get_bounding_client_rect();
                spotlight.dispatch(SpotlightAction::Moved {
                    x: f64::from(e.client_x()) - rect.left(),
                    y: f64::from(e.client_y()) - rect.top(),
                });
            }
        })
    };
    let onmouseenter = {
        let spotlight = spotlight.dispatcher();
        Callback::from(move |_: MouseEvent| spotlight.dispatch(SpotlightAction::Entered))
    };
    let onmouseleave = {
        let spotlight = spotlight.dispatcher();
        Callback::from(move |_: MouseEvent| spotlight.dispatch(SpotlightAction::Left))
    };
    let onfocus = {
        let spotlight = spotlight.dispatcher();
        Callback::from(move |_: FocusEvent| spotlight.dispatch(SpotlightAction::Focused))
    };
    let onblur = {
        let spotlight = spotlight.dispatcher();
        Callback::from(move |_: FocusEvent| spotlight.dispatch(SpotlightAction::Blurred))
    };
    let onclick = props.onclick.clone().map(|onclick| {
        Callback::from(move |_: MouseEvent| onclick.emit(()))
    });

    html! {
        <div
            ref={card_ref}
            class={classes!("spotlight-card", props.class.clone())}
            tabindex="0"
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
            {onfocus}
            {onblur}
            {onclick}
        >
            <style>
                {r#"
                    .spotlight-card {
                        position: relative;
                        overflow: hidden;
                        padding: 2rem;
                        border-radius: 12px;
                        border: 1px solid rgba(138, 95, 176, 0.2);
                        background: rgba(13, 10, 16, 0.95);
                        backdrop-filter: blur(4px);
                        cursor: pointer;
                        transition: all 0.3s ease-out;
                    }
                    .spotlight-card:hover {
                        transform: scale(1.02);
                        border-color: rgba(138, 95, 176, 0.4);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.35);
                    }
                    .spotlight-glow {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        transition: opacity 0.5s ease-in-out;
                    }
                "#}
            </style>
            <div class="spotlight-glow" style={spotlight.style()}></div>
            { for props.children.iter() }
        </div>
    }
}
