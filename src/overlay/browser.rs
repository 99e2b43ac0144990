use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::Callback;

use crate::error::{self, PlatformError};
use crate::overlay::resource::GlobalUiResource;
use crate::overlay::session::{is_dismiss_key, OverlayPlatform};

#[derive(Clone, Copy, Default)]
pub struct BrowserOverlay;

impl OverlayPlatform for BrowserOverlay {
    type KeyChannel = DismissKeyListener;
    type ScrollLock = ScrollLock;

    fn key_channel(&self, on_dismiss: Callback<()>) -> DismissKeyListener {
        DismissKeyListener {
            on_dismiss,
            listener: None,
        }
    }

    fn scroll_lock(&self) -> ScrollLock {
        ScrollLock { previous: None }
    }
}

/// Document `keydown` listener that fires `on_dismiss` for Escape.
pub struct DismissKeyListener {
    on_dismiss: Callback<()>,
    listener: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl GlobalUiResource for DismissKeyListener {
    fn acquire(&mut self) -> Result<(), PlatformError> {
        let on_dismiss = self.on_dismiss.clone();
        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if is_dismiss_key(&event.key()) {
                on_dismiss.emit(());
            }
        });
        error::document()?
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            .map_err(PlatformError::js("addEventListener"))?;
        self.listener = Some(listener);
        Ok(())
    }

    fn release(&mut self) {
        if let Some(listener) = self.listener.take() {
            if let Ok(document) = error::document() {
                let _ = document
                    .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            }
        }
    }
}

/// Hides body overflow, remembering the inline value it replaced.
pub struct ScrollLock {
    previous: Option<String>,
}

impl GlobalUiResource for ScrollLock {
    fn acquire(&mut self) -> Result<(), PlatformError> {
        let style = error::body()?.style();
        let previous = style
            .get_property_value("overflow")
            .map_err(PlatformError::js("getPropertyValue"))?;
        style
            .set_property("overflow", "hidden")
            .map_err(PlatformError::js("setProperty"))?;
        self.previous = Some(previous);
        Ok(())
    }

    fn release(&mut self) {
        let Some(previous) = self.previous.take() else {
            return;
        };
        if let Ok(body) = error::body() {
            let style = body.style();
            let _ = if previous.is_empty() {
                style.remove_property("overflow").map(|_| ())
            } else {
                style.set_property("overflow", &previous)
            };
        }
    }
}
