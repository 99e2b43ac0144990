use std::rc::Rc;
use yew::Reducible;

/// One observation report for a single target.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    /// Raw `data-index` attribute of the target, if it has one.
    pub index: Option<String>,
    pub is_intersecting: bool,
}

#[cfg(test)]
impl IntersectionEntry {
    pub fn entering(index: impl Into<String>) -> Self {
        Self {
            index: Some(index.into()),
            is_intersecting: true,
        }
    }

    pub fn leaving(index: impl Into<String>) -> Self {
        Self {
            index: Some(index.into()),
            is_intersecting: false,
        }
    }
}

/// Parses a slot index reported by the observer. Anything that is not an
/// unsigned integer below `count` is rejected.
pub fn parse_slot_index(raw: Option<&str>, count: usize) -> Option<usize> {
    raw?.trim()
        .parse::<usize>()
        .ok()
        .filter(|index| *index < count)
}

pub enum VisibilityAction {
    /// Starts a new epoch with `count` unseen slots.
    Reset { count: usize, epoch: u64 },
    /// One observer callback worth of entries, applied as a single step.
    Reveal {
        epoch: u64,
        entries: Vec<IntersectionEntry>,
    },
    /// Marks every slot seen. Used when observation is unavailable.
    RevealAll { epoch: u64 },
}

/// "Has been seen" flags for the slots of the current epoch. Flags only
/// ever go from false to true until the next reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilityState {
    epoch: u64,
    visible: Vec<bool>,
}

impl VisibilityState {
    pub fn new(count: usize) -> Self {
        Self {
            epoch: 0,
            visible: vec![false; count],
        }
    }

    /// Visibility for `count` slots. A length mismatch means a reset for the
    /// new count is still pending, so every slot reads as unseen.
    pub fn aligned(&self, count: usize) -> Vec<bool> {
        if self.visible.len() == count {
            self.visible.clone()
        } else {
            vec![false; count]
        }
    }
}

#[cfg(test)]
impl VisibilityState {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn visible(&self) -> &[bool] {
        &self.visible
    }
}

impl Reducible for VisibilityState {
    type Action = VisibilityAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            VisibilityAction::Reset { count, epoch } => Rc::new(Self {
                epoch,
                visible: vec![false; count],
            }),
            VisibilityAction::Reveal { epoch, entries } => {
                if epoch != self.epoch {
                    return self;
                }
                let mut next = self.visible.clone();
                let mut changed = false;
                for entry in entries.iter().filter(|entry| entry.is_intersecting) {
                    if let Some(index) = parse_slot_index(entry.index.as_deref(), next.len()) {
                        changed |= !next[index];
                        next[index] = true;
                    }
                }
                if changed {
                    Rc::new(Self {
                        epoch,
                        visible: next,
                    })
                } else {
                    self
                }
            }
            VisibilityAction::RevealAll { epoch } => {
                if epoch != self.epoch || self.visible.iter().all(|seen| *seen) {
                    return self;
                }
                Rc::new(Self {
                    epoch,
                    visible: vec![true; self.visible.len()],
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reset(count: usize) -> Rc<VisibilityState> {
        Rc::new(VisibilityState::default()).reduce(VisibilityAction::Reset { count, epoch: 1 })
    }

    fn reveal(state: Rc<VisibilityState>, entries: Vec<IntersectionEntry>) -> Rc<VisibilityState> {
        let epoch = state.epoch();
        state.reduce(VisibilityAction::Reveal { epoch, entries })
    }

    #[test]
    fn new_state_has_count_unseen_slots() {
        for count in [0, 1, 4, 17] {
            let state = VisibilityState::new(count);
            assert_eq!(state.visible(), vec![false; count].as_slice());
        }
    }

    #[test]
    fn reveal_sets_only_the_reported_slot() {
        let state = reveal(reset(4), vec![IntersectionEntry::entering("2")]);
        assert_eq!(state.visible(), &[false, false, true, false]);

        let again = reveal(state.clone(), vec![IntersectionEntry::entering("2")]);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn batch_is_applied_in_one_step() {
        let state = reveal(
            reset(4),
            vec![
                IntersectionEntry::entering("0"),
                IntersectionEntry::leaving("1"),
                IntersectionEntry::entering("2"),
            ],
        );
        assert_eq!(state.visible(), &[true, false, true, false]);

        let state = reveal(state, vec![IntersectionEntry::entering("1")]);
        assert_eq!(state.visible(), &[true, true, true, false]);
    }

    #[test]
    fn leaving_never_clears_a_flag() {
        let state = reveal(reset(2), vec![IntersectionEntry::entering("0")]);
        let state = reveal(state, vec![IntersectionEntry::leaving("0")]);
        assert_eq!(state.visible(), &[true, false]);
    }

    #[test]
    fn invalid_indices_are_ignored() {
        let start = reset(3);
        let entries = vec![
            IntersectionEntry::entering("3"),
            IntersectionEntry::entering("-1"),
            IntersectionEntry::entering("1.5"),
            IntersectionEntry::entering(""),
            IntersectionEntry::entering("abc"),
            IntersectionEntry {
                index: None,
                is_intersecting: true,
            },
        ];
        let state = reveal(start.clone(), entries);
        assert!(Rc::ptr_eq(&start, &state));
        assert_eq!(state.visible(), &[false, false, false]);
    }

    #[test]
    fn index_parsing_trims_whitespace() {
        assert_eq!(parse_slot_index(Some(" 1 "), 2), Some(1));
        assert_eq!(parse_slot_index(Some("2"), 2), None);
        assert_eq!(parse_slot_index(None, 2), None);
    }

    #[test]
    fn reset_discards_previous_flags() {
        let state = reveal(reset(4), vec![IntersectionEntry::entering("0")]);
        let state = state.reduce(VisibilityAction::Reset { count: 2, epoch: 2 });
        assert_eq!(state.visible(), &[false, false]);
        assert_eq!(state.epoch(), 2);
    }

    #[test]
    fn stale_epoch_batches_are_dropped() {
        let state = reset(2).reduce(VisibilityAction::Reset { count: 2, epoch: 2 });
        let state = state.reduce(VisibilityAction::Reveal {
            epoch: 1,
            entries: vec![IntersectionEntry::entering("0")],
        });
        assert_eq!(state.visible(), &[false, false]);
    }

    #[test]
    fn reveal_all_marks_every_slot() {
        let state = reset(3).reduce(VisibilityAction::RevealAll { epoch: 1 });
        assert_eq!(state.visible(), &[true, true, true]);
    }

    #[test]
    fn aligned_pads_pending_count_changes() {
        let state = reveal(reset(2), vec![IntersectionEntry::entering("1")]);
        assert_eq!(state.aligned(2), vec![false, true]);
        assert_eq!(state.aligned(3), vec![false, false, false]);
    }
}
