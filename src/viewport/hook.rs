use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::viewport::browser::BrowserObservation;
use crate::viewport::state::VisibilityState;
use crate::viewport::tracker::{ObserverOptions, VisibilityTracker};

pub struct InViewList {
    /// Exactly one flag per slot, index-aligned with the slots.
    pub visibility: Vec<bool>,
    node_refs: Rc<Vec<NodeRef>>,
}

impl InViewList {
    pub fn is_visible(&self, index: usize) -> bool {
        self.visibility.get(index).copied().unwrap_or(false)
    }

    /// Ref for the element rendered in slot `index`. The same ref is handed
    /// out on every render.
    pub fn bind(&self, index: usize) -> NodeRef {
        self.node_refs.get(index).cloned().unwrap_or_default()
    }
}

/// Tracks which of `count` elements have scrolled into view. Flags reset
/// whenever `count` or `options` change.
#[hook]
pub fn use_in_view_list(count: usize, options: ObserverOptions) -> InViewList {
    let state = use_reducer(|| VisibilityState::new(count));
    let node_refs = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        count,
    );
    let tracker = {
        let dispatcher = state.dispatcher();
        use_mut_ref(move || {
            VisibilityTracker::new(
                BrowserObservation,
                Callback::from(move |action| dispatcher.dispatch(action)),
            )
        })
    };

    {
        let tracker = tracker.clone();
        let node_refs = node_refs.clone();
        use_effect_with_deps(
            move |(count, options)| {
                let targets = node_refs.iter().map(|node_ref| node_ref.cast::<Element>());
                // Failure already reveals every slot, nothing left to do.
                let _ = tracker.borrow_mut().restart(targets, *count, options);
                move || tracker.borrow_mut().release()
            },
            (count, options),
        );
    }

    InViewList {
        visibility: state.aligned(count),
        node_refs,
    }
}
