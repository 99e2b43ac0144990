use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use yew::Callback;

use crate::error::PlatformError;
use crate::viewport::state::{IntersectionEntry, VisibilityAction};

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible before it counts as seen.
    pub threshold: f64,
    pub root_margin: Option<String>,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            root_margin: None,
        }
    }
}

impl ObserverOptions {
    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = Some(margin.into());
        self
    }
}

/// Source of intersection events.
///
/// `open` starts one observation session over `targets` and delivers each
/// callback's entries to `on_batch` as a single batch. Dropping the returned
/// session must stop all further deliveries and release the targets.
pub trait ObservationService {
    type Target: Clone + 'static;
    type Session;

    fn open(
        &self,
        options: &ObserverOptions,
        targets: Vec<(usize, Self::Target)>,
        on_batch: Callback<Vec<IntersectionEntry>>,
    ) -> Result<Self::Session, PlatformError>;
}

/// Element handles bound to slots. Binding past the end grows the list,
/// binding `None` clears the slot.
#[derive(Debug)]
pub struct SlotRegistry<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for SlotRegistry<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> SlotRegistry<T> {
    pub fn bind(&mut self, index: usize, target: Option<T>) {
        if index >= self.slots.len() {
            if target.is_none() {
                return;
            }
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index] = target;
    }

    pub fn truncate(&mut self, count: usize) {
        self.slots.truncate(count);
    }

    pub fn bound(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|target| (index, target)))
    }
}

/// Drives one observation session per `start` call and reports into a
/// visibility reducer through `dispatch`.
pub struct VisibilityTracker<S: ObservationService> {
    service: S,
    slots: Rc<RefCell<SlotRegistry<S::Target>>>,
    dispatch: Callback<VisibilityAction>,
    epoch: u64,
    session: Option<S::Session>,
}

impl<S: ObservationService> VisibilityTracker<S> {
    pub fn new(service: S, dispatch: Callback<VisibilityAction>) -> Self {
        Self {
            service,
            slots: Rc::default(),
            dispatch,
            epoch: 0,
            session: None,
        }
    }

    /// Setter that stores an element handle in slot `index`. Safe to call on
    /// every render.
    pub fn bind(&self, index: usize) -> Callback<Option<S::Target>> {
        let slots = self.slots.clone();
        Callback::from(move |target| slots.borrow_mut().bind(index, target))
    }

    /// Releases any running session, resets all flags to unseen for `count`
    /// slots, and observes every currently bound slot below `count`.
    ///
    /// If the session cannot be opened every slot is revealed and the error
    /// is returned.
    pub fn start(&mut self, count: usize, options: &ObserverOptions) -> Result<(), PlatformError> {
        self.release();
        self.epoch += 1;
        let epoch = self.epoch;
        self.dispatch.emit(VisibilityAction::Reset { count, epoch });

        let targets: Vec<_> = {
            let mut slots = self.slots.borrow_mut();
            slots.truncate(count);
            slots
                .bound()
                .map(|(index, target)| (index, target.clone()))
                .collect()
        };

        let dispatch = self.dispatch.clone();
        let on_batch = Callback::from(move |entries| {
            dispatch.emit(VisibilityAction::Reveal { epoch, entries })
        });
        match self.service.open(options, targets, on_batch) {
            Ok(session) => {
                debug!("Observation session {} opened for {} slots", epoch, count);
                self.session = Some(session);
                Ok(())
            }
            Err(err) => {
                warn!("Could not observe slots, revealing all: {}", err);
                self.dispatch.emit(VisibilityAction::RevealAll { epoch });
                Err(err)
            }
        }
    }

    /// Rebinds slot `i` to the `i`-th handle, then starts a new epoch. Handles
    /// that are `None` clear their slot.
    pub fn restart(
        &mut self,
        targets: impl IntoIterator<Item = Option<S::Target>>,
        count: usize,
        options: &ObserverOptions,
    ) -> Result<(), PlatformError> {
        for (index, target) in targets.into_iter().enumerate() {
            self.bind(index).emit(target);
        }
        self.start(count, options)
    }

    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        self.session.is_some()
    }

    pub fn release(&mut self) {
        if self.session.take().is_some() {
            debug!("Observation session {} released", self.epoch);
        }
    }
}

impl<S: ObservationService> Drop for VisibilityTracker<S> {
    fn drop(&mut self) {
        self.release();
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeObservation;
    use super::*;
    use crate::viewport::state::VisibilityState;
    use yew::Reducible;

    fn tracker() -> (
        VisibilityTracker<FakeObservation>,
        FakeObservation,
        Rc<RefCell<Rc<VisibilityState>>>,
    ) {
        let service = FakeObservation::default();
        let state = Rc::new(RefCell::new(Rc::new(VisibilityState::default())));
        let dispatch = {
            let state = state.clone();
            Callback::from(move |action| {
                let current = state.borrow().clone();
                *state.borrow_mut() = current.reduce(action);
            })
        };
        (VisibilityTracker::new(service.clone(), dispatch), service, state)
    }

    fn visible(state: &Rc<RefCell<Rc<VisibilityState>>>) -> Vec<bool> {
        state.borrow().visible().to_vec()
    }

    #[test]
    fn start_resets_to_count_unseen_slots() {
        let (mut tracker, _, state) = tracker();
        tracker.start(3, &ObserverOptions::default()).unwrap();
        assert_eq!(visible(&state), vec![false; 3]);

        tracker.start(0, &ObserverOptions::default()).unwrap();
        assert!(visible(&state).is_empty());
    }

    #[test]
    fn bound_slots_are_revealed_by_intersection() {
        let (mut tracker, service, state) = tracker();
        tracker.bind(0).emit(Some("a"));
        tracker.bind(2).emit(Some("c"));
        tracker.start(4, &ObserverOptions::default()).unwrap();
        assert_eq!(service.log.borrow().observed, vec![0, 2]);

        service.deliver(&[("0", true), ("2", true)]);
        assert_eq!(visible(&state), vec![true, false, true, false]);

        tracker.bind(1).emit(Some("b"));
        service.deliver(&[("1", true)]);
        assert_eq!(visible(&state), vec![true, true, true, false]);

        service.deliver(&[("1", true)]);
        assert_eq!(visible(&state), vec![true, true, true, false]);
    }

    #[test]
    fn out_of_range_events_leave_state_alone() {
        let (mut tracker, service, state) = tracker();
        tracker.start(2, &ObserverOptions::default()).unwrap();
        service.deliver(&[("2", true), ("99", true), ("x", true)]);
        assert_eq!(visible(&state), vec![false, false]);
    }

    #[test]
    fn unbinding_skips_the_slot_next_epoch() {
        let (mut tracker, service, _) = tracker();
        tracker.bind(0).emit(Some("a"));
        tracker.bind(1).emit(Some("b"));
        tracker.bind(0).emit(None);
        tracker.start(2, &ObserverOptions::default()).unwrap();
        assert_eq!(service.log.borrow().observed, vec![1]);
    }

    #[test]
    fn count_change_resets_flags_and_truncates_slots() {
        let (mut tracker, service, state) = tracker();
        for (index, name) in ["a", "b", "c", "d"].into_iter().enumerate() {
            tracker.bind(index).emit(Some(name));
        }
        tracker.start(4, &ObserverOptions::default()).unwrap();
        service.deliver(&[("0", true), ("3", true)]);

        tracker.start(2, &ObserverOptions::default()).unwrap();
        assert_eq!(visible(&state), vec![false, false]);
        assert_eq!(service.log.borrow().observed, vec![0, 1]);

        tracker.start(5, &ObserverOptions::default()).unwrap();
        assert_eq!(visible(&state), vec![false; 5]);
        assert_eq!(service.log.borrow().observed, vec![0, 1]);
    }

    #[test]
    fn each_start_replaces_the_previous_session() {
        let (mut tracker, service, _) = tracker();
        tracker.start(1, &ObserverOptions::default()).unwrap();
        let options = ObserverOptions::default().with_root_margin("0px 0px -10% 0px");
        tracker.start(1, &options).unwrap();

        let log = service.log.borrow();
        assert_eq!(log.opened, 2);
        assert_eq!(log.released, 1);
        assert_eq!(log.options.as_ref(), Some(&options));
    }

    #[test]
    fn release_stops_deliveries() {
        let (mut tracker, service, state) = tracker();
        tracker.bind(0).emit(Some("a"));
        tracker.start(1, &ObserverOptions::default()).unwrap();
        tracker.release();

        assert!(!tracker.is_observing());
        assert!(!service.deliver(&[("0", true)]));
        assert_eq!(visible(&state), vec![false]);
    }

    #[test]
    fn dropping_the_tracker_releases_the_session() {
        let (mut tracker, service, _) = tracker();
        tracker.start(1, &ObserverOptions::default()).unwrap();
        drop(tracker);
        assert_eq!(service.log.borrow().released, 1);
    }

    #[test]
    fn failed_session_reveals_everything() {
        let (mut tracker, service, state) = tracker();
        service.log.borrow_mut().fail_next = true;
        assert!(tracker.start(3, &ObserverOptions::default()).is_err());
        assert!(!tracker.is_observing());
        assert_eq!(visible(&state), vec![true; 3]);
    }

    #[test]
    fn restart_picks_up_the_current_handles() {
        let (mut tracker, service, state) = tracker();
        let options = ObserverOptions::default();
        tracker.restart([Some("a"), None], 2, &options).unwrap();
        assert_eq!(service.log.borrow().observed, vec![0]);

        service.deliver(&[("0", true)]);
        tracker.restart([Some("a"), Some("b")], 2, &options).unwrap();
        assert_eq!(service.log.borrow().observed, vec![0, 1]);
        assert_eq!(visible(&state), vec![false, false]);

        tracker.restart([None, Some("b")], 2, &options).unwrap();
        assert_eq!(service.log.borrow().observed, vec![1]);
        assert_eq!(service.log.borrow().released, 2);
    }
}
