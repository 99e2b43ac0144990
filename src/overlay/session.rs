use log::{debug, warn};
use yew::Callback;

use crate::error::PlatformError;
use crate::overlay::resource::{Claim, GlobalUiResource};

pub const DISMISS_KEY: &str = "Escape";

pub fn is_dismiss_key(key: &str) -> bool {
    key == DISMISS_KEY
}

/// The overlay draws something only when it is open and has a payload.
pub fn should_render<T>(is_open: bool, payload: Option<&T>) -> bool {
    is_open && payload.is_some()
}

/// Provides the two document-wide resources an overlay claims.
pub trait OverlayPlatform {
    type KeyChannel: GlobalUiResource;
    type ScrollLock: GlobalUiResource;

    /// Key observer that calls `on_dismiss` for the dismiss key once acquired.
    fn key_channel(&self, on_dismiss: Callback<()>) -> Self::KeyChannel;
    fn scroll_lock(&self) -> Self::ScrollLock;
}

/// Both global claims of one shown overlay.
pub struct OverlaySession<P: OverlayPlatform> {
    keys: Claim<P::KeyChannel>,
    scroll: Claim<P::ScrollLock>,
}

impl<P: OverlayPlatform> OverlaySession<P> {
    /// Claims the key channel, then the scroll lock. If the scroll lock fails
    /// the key claim is dropped and so released.
    pub fn begin(platform: &P, on_dismiss: Callback<()>) -> Result<Self, PlatformError> {
        let keys = Claim::acquire(platform.key_channel(on_dismiss))?;
        let scroll = Claim::acquire(platform.scroll_lock())?;
        Ok(Self { keys, scroll })
    }

    pub fn end(mut self) {
        self.scroll.release();
        self.keys.release();
    }
}

/// Keeps the global side effects in step with `(is_open, payload)`. It holds
/// no open state of its own; the caller owns that.
pub struct OverlayController<P: OverlayPlatform> {
    platform: P,
    session: Option<(OverlaySession<P>, Callback<()>)>,
}

impl<P: OverlayPlatform> OverlayController<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            session: None,
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn sync(
        &mut self,
        is_open: bool,
        has_payload: bool,
        on_request_close: &Callback<()>,
    ) -> Result<(), PlatformError> {
        if !(is_open && has_payload) {
            self.teardown();
            return Ok(());
        }
        match &self.session {
            Some((_, current)) if current == on_request_close => Ok(()),
            _ => {
                self.teardown();
                let session = OverlaySession::begin(&self.platform, on_request_close.clone())
                    .map_err(|err| {
                        warn!("Overlay shown without global claims: {}", err);
                        err
                    })?;
                debug!("Overlay session started");
                self.session = Some((session, on_request_close.clone()));
                Ok(())
            }
        }
    }

    pub fn teardown(&mut self) {
        if let Some((session, _)) = self.session.take() {
            session.end();
            debug!("Overlay session ended");
        }
    }
}

impl<P: OverlayPlatform> Drop for OverlayController<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory stand-in for the document's key listeners and body style.
    #[derive(Default)]
    pub struct Document {
        pub listeners: Vec<(u32, Callback<()>)>,
        pub overflow: String,
        pub key_acquires: u32,
        pub scroll_acquires: u32,
        next_id: u32,
        pub fail_scroll: bool,
    }

    impl Document {
        pub fn press(doc: &Rc<RefCell<Document>>, key: &str) {
            let listeners: Vec<_> = doc.borrow().listeners.iter().map(|(_, cb)| cb.clone()).collect();
            if is_dismiss_key(key) {
                for listener in listeners {
                    listener.emit(());
                }
            }
        }
    }

    pub struct FakeKeys {
        doc: Rc<RefCell<Document>>,
        on_dismiss: Callback<()>,
        id: Option<u32>,
    }

    impl GlobalUiResource for FakeKeys {
        fn acquire(&mut self) -> Result<(), PlatformError> {
            let mut doc = self.doc.borrow_mut();
            doc.next_id += 1;
            doc.key_acquires += 1;
            let id = doc.next_id;
            doc.listeners.push((id, self.on_dismiss.clone()));
            self.id = Some(id);
            Ok(())
        }

        fn release(&mut self) {
            if let Some(id) = self.id.take() {
                self.doc.borrow_mut().listeners.retain(|(other, _)| *other != id);
            }
        }
    }

    pub struct FakeScroll {
        doc: Rc<RefCell<Document>>,
        previous: Option<String>,
    }

    impl GlobalUiResource for FakeScroll {
        fn acquire(&mut self) -> Result<(), PlatformError> {
            let mut doc = self.doc.borrow_mut();
            if doc.fail_scroll {
                return Err(PlatformError::NoBody);
            }
            doc.scroll_acquires += 1;
            self.previous = Some(std::mem::replace(&mut doc.overflow, "hidden".to_string()));
            Ok(())
        }

        fn release(&mut self) {
            if let Some(previous) = self.previous.take() {
                self.doc.borrow_mut().overflow = previous;
            }
        }
    }

    #[derive(Clone, Default)]
    pub struct FakePlatform {
        pub doc: Rc<RefCell<Document>>,
    }

    impl OverlayPlatform for FakePlatform {
        type KeyChannel = FakeKeys;
        type ScrollLock = FakeScroll;

        fn key_channel(&self, on_dismiss: Callback<()>) -> FakeKeys {
            FakeKeys {
                doc: self.doc.clone(),
                on_dismiss,
                id: None,
            }
        }

        fn scroll_lock(&self) -> FakeScroll {
            FakeScroll {
                doc: self.doc.clone(),
                previous: None,
            }
        }
    }

    pub fn close_counter() -> (Callback<()>, Rc<RefCell<u32>>) {
        let closes = Rc::new(RefCell::new(0));
        let callback = {
            let closes = closes.clone();
            Callback::from(move |_| *closes.borrow_mut() += 1)
        };
        (callback, closes)
    }
}

#[cfg(test)]
mod tests {
    use super::fake::{close_counter, Document, FakePlatform};
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller() -> (OverlayController<FakePlatform>, Rc<RefCell<Document>>) {
        let platform = FakePlatform::default();
        platform.doc.borrow_mut().overflow = "auto".to_string();
        let doc = platform.doc.clone();
        (OverlayController::new(platform), doc)
    }

    #[test]
    fn render_requires_open_and_payload() {
        assert!(should_render(true, Some(&"payload")));
        assert!(!should_render(false, Some(&"payload")));
        assert!(!should_render::<&str>(true, None));
        assert!(!should_render::<&str>(false, None));
    }

    #[test]
    fn closed_overlay_touches_nothing() {
        let (mut controller, doc) = controller();
        let (on_close, closes) = close_counter();
        controller.sync(false, true, &on_close).unwrap();
        controller.sync(true, false, &on_close).unwrap();

        assert!(!controller.is_active());
        let doc_state = doc.borrow();
        assert_eq!(doc_state.key_acquires, 0);
        assert_eq!(doc_state.scroll_acquires, 0);
        assert_eq!(doc_state.overflow, "auto");
        drop(doc_state);
        Document::press(&doc, "Escape");
        assert_eq!(*closes.borrow(), 0);
    }

    #[test]
    fn open_overlay_claims_once_and_escape_closes() {
        let (mut controller, doc) = controller();
        let (on_close, closes) = close_counter();
        controller.sync(true, true, &on_close).unwrap();
        controller.sync(true, true, &on_close).unwrap();

        assert_eq!(doc.borrow().key_acquires, 1);
        assert_eq!(doc.borrow().scroll_acquires, 1);
        assert_eq!(doc.borrow().overflow, "hidden");

        Document::press(&doc, "Enter");
        assert_eq!(*closes.borrow(), 0);
        Document::press(&doc, "Escape");
        assert_eq!(*closes.borrow(), 1);
    }

    #[test]
    fn every_exit_path_unwinds_side_effects() {
        let (on_close, closes) = close_counter();
        let exits: [fn(&mut OverlayController<FakePlatform>, &Callback<()>); 3] = [
            |controller, cb| controller.sync(false, true, cb).unwrap(),
            |controller, cb| controller.sync(true, false, cb).unwrap(),
            |controller, _| controller.teardown(),
        ];
        for exit in exits {
            let (mut controller, doc) = controller();
            controller.sync(true, true, &on_close).unwrap();
            exit(&mut controller, &on_close);

            assert!(!controller.is_active());
            assert!(doc.borrow().listeners.is_empty());
            assert_eq!(doc.borrow().overflow, "auto");
            Document::press(&doc, "Escape");
        }
        assert_eq!(*closes.borrow(), 0);
    }

    #[test]
    fn dropping_the_controller_unwinds_side_effects() {
        let (mut controller, doc) = controller();
        let (on_close, closes) = close_counter();
        controller.sync(true, true, &on_close).unwrap();
        drop(controller);

        assert!(doc.borrow().listeners.is_empty());
        assert_eq!(doc.borrow().overflow, "auto");
        Document::press(&doc, "Escape");
        assert_eq!(*closes.borrow(), 0);
    }

    #[test]
    fn new_close_callback_replaces_the_listener() {
        let (mut controller, doc) = controller();
        let (first, first_closes) = close_counter();
        let (second, second_closes) = close_counter();
        controller.sync(true, true, &first).unwrap();
        controller.sync(true, true, &second).unwrap();

        assert_eq!(doc.borrow().listeners.len(), 1);
        assert_eq!(doc.borrow().overflow, "hidden");
        Document::press(&doc, "Escape");
        assert_eq!(*first_closes.borrow(), 0);
        assert_eq!(*second_closes.borrow(), 1);

        controller.teardown();
        assert_eq!(doc.borrow().overflow, "auto");
    }

    #[test]
    fn failed_scroll_lock_releases_the_key_claim() {
        let (mut controller, doc) = controller();
        doc.borrow_mut().fail_scroll = true;
        let (on_close, _) = close_counter();

        assert!(controller.sync(true, true, &on_close).is_err());
        assert!(!controller.is_active());
        assert_eq!(doc.borrow().key_acquires, 1);
        assert!(doc.borrow().listeners.is_empty());
        assert_eq!(doc.borrow().overflow, "auto");
    }
}
