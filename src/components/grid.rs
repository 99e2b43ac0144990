use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::error::PlatformError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GridDirection {
    Right,
    Left,
    Up,
    Down,
    #[default]
    Diagonal,
}

/// Scroll position of the grid, always kept inside one square.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridMotion {
    pub x: f64,
    pub y: f64,
}

impl GridMotion {
    pub fn advance(self, direction: GridDirection, speed: f64, square: f64) -> Self {
        let step = speed.max(0.1);
        let (dx, dy) = match direction {
            GridDirection::Right => (-step, 0.0),
            GridDirection::Left => (step, 0.0),
            GridDirection::Up => (0.0, step),
            GridDirection::Down => (0.0, -step),
            GridDirection::Diagonal => (-step, -step),
        };
        Self {
            x: (self.x + dx).rem_euclid(square),
            y: (self.y + dy).rem_euclid(square),
        }
    }

    /// Column and row of the square under a canvas-relative point.
    pub fn cell_at(&self, x: f64, y: f64, square: f64) -> (i64, i64) {
        (
            ((x + self.x) / square).floor() as i64,
            ((y + self.y) / square).floor() as i64,
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct GridProps {
    #[prop_or_default]
    pub direction: GridDirection,
    #[prop_or(config::GRID_SPEED)]
    pub speed: f64,
    #[prop_or(config::GRID_SQUARE_SIZE)]
    pub square_size: f64,
    #[prop_or(AttrValue::from(config::GRID_BORDER_COLOR))]
    pub border_color: AttrValue,
    #[prop_or(AttrValue::from(config::GRID_HOVER_FILL_COLOR))]
    pub hover_fill_color: AttrValue,
}

struct Frame {
    motion: GridMotion,
    hovered: Option<(i64, i64)>,
}

fn context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, PlatformError> {
    canvas
        .get_context("2d")
        .map_err(PlatformError::js("getContext"))?
        .ok_or(PlatformError::Js {
            api: "getContext",
            message: "2d context unavailable".to_string(),
        })?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(PlatformError::js("CanvasRenderingContext2d"))
}

fn draw(
    canvas: &HtmlCanvasElement,
    frame: &Frame,
    square: f64,
    border: &str,
    hover_fill: &str,
) -> Result<(), PlatformError> {
    if let Some(parent) = canvas.parent_element() {
        let (width, height) = (parent.client_width().max(0) as u32, parent.client_height().max(0) as u32);
        if canvas.width() != width || canvas.height() != height {
            canvas.set_width(width);
            canvas.set_height(height);
        }
    }
    let ctx = context(canvas)?;
    let (width, height) = (f64::from(canvas.width()), f64::from(canvas.height()));
    ctx.clear_rect(0.0, 0.0, width, height);

    let start_x = -frame.motion.x;
    let start_y = -frame.motion.y;
    let mut x = start_x;
    while x < width + square {
        let mut y = start_y;
        while y < height + square {
            let cell = frame.motion.cell_at(x + square / 2.0, y + square / 2.0, square);
            if frame.hovered == Some(cell) {
                ctx.set_fill_style_str(hover_fill);
                ctx.fill_rect(x, y, square, square);
            }
            ctx.set_stroke_style_str(border);
            ctx.stroke_rect(x, y, square, square);
            y += square;
        }
        x += square;
    }
    Ok(())
}

/// Canvas background of squares drifting in `direction`.
#[function_component(Grid)]
pub fn grid(props: &GridProps) -> Html {
    let canvas_ref = use_node_ref();
    let frame = use_mut_ref(|| Frame {
        motion: GridMotion::default(),
        hovered: None,
    });

    {
        let canvas_ref = canvas_ref.clone();
        let frame = frame.clone();
        use_effect_with_deps(
            move |(direction, speed, square, border, hover_fill)| {
                let (direction, speed, square) = (*direction, *speed, *square);
                let (border, hover_fill) = (border.clone(), hover_fill.clone());
                let mut warned = false;
                let interval = Interval::new(config::GRID_FRAME_MS, move || {
                    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                        return;
                    };
                    let mut frame = frame.borrow_mut();
                    frame.motion = frame.motion.advance(direction, speed, square);
                    if let Err(err) = draw(&canvas, &frame, square, &border, &hover_fill) {
                        if !std::mem::replace(&mut warned, true) {
                            warn!("Grid background not drawn: {}", err);
                        }
                    }
                });
                move || drop(interval)
            },
            (
                props.direction,
                props.speed,
                props.square_size,
                props.border_color.clone(),
                props.hover_fill_color.clone(),
            ),
        );
    }

    let onmousemove = {
        let canvas_ref = canvas_ref.clone();
        let frame = frame.clone();
        let square = props.square_size;
        Callback::from(move |e: MouseEvent| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let rect = canvas.get_bounding_client_rect();
                let (x, y) = (
                    f64::from(e.client_x()) - rect.left(),
                    f64::from(e.client_y()) - rect.top(),
                );
                let cell = frame.borrow().motion.cell_at(x, y, square);
                frame.borrow_mut().hovered = Some(cell);
            }
        })
    };
    let onmouseleave = {
        let frame = frame.clone();
        Callback::from(move |_: MouseEvent| frame.borrow_mut().hovered = None)
    };

    html! {
        <canvas
            ref={canvas_ref}
            class="grid-canvas"
            style="width: 100%; height: 100%; display: block;"
            {onmousemove}
            {onmouseleave}
        />
    }
}
