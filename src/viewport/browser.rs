use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use crate::error::PlatformError;
use crate::viewport::state::IntersectionEntry;
use crate::viewport::tracker::{ObservationService, ObserverOptions};

pub const INDEX_ATTRIBUTE: &str = "data-index";

/// `IntersectionObserver` backed observation.
#[derive(Clone, Copy, Default)]
pub struct BrowserObservation;

pub struct BrowserSession {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl ObservationService for BrowserObservation {
    type Target = Element;
    type Session = BrowserSession;

    fn open(
        &self,
        options: &ObserverOptions,
        targets: Vec<(usize, Element)>,
        on_batch: Callback<Vec<IntersectionEntry>>,
    ) -> Result<BrowserSession, PlatformError> {
        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionEntry {
                    index: entry.target().get_attribute(INDEX_ATTRIBUTE),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();
            on_batch.emit(batch);
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(PlatformError::js("IntersectionObserver"))?;
        let session = BrowserSession {
            observer,
            _callback: callback,
        };

        observe_tagged(
            &targets,
            |index, element| {
                if element.has_attribute(INDEX_ATTRIBUTE) {
                    return Ok(());
                }
                element
                    .set_attribute(INDEX_ATTRIBUTE, &index.to_string())
                    .map_err(PlatformError::js("setAttribute"))
            },
            |element| session.observer.observe(element),
        )?;
        Ok(session)
    }
}

/// Tags every target with its slot index, then observes them all. Nothing is
/// observed unless every target was tagged.
fn observe_tagged<T>(
    targets: &[(usize, T)],
    mut tag: impl FnMut(usize, &T) -> Result<(), PlatformError>,
    mut observe: impl FnMut(&T),
) -> Result<(), PlatformError> {
    for (index, target) in targets {
        tag(*index, target)?;
    }
    for (_, target) in targets {
        observe(target);
    }
    Ok(())
}
