// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility evaluation.
//!
//! A pass walks the registry from the most recently registered entry to the
//! earliest and, for each entry, reads its bounding rectangle fresh and runs
//! two independent checks:
//!
//! 1. **Enter**, for entries not yet visible. If the viewport
//!    [admits](crate::viewport::Viewport::admits) the rectangle, invoke the
//!    enter callback, then mark the entry visible.
//! 2. **Leave**, for visible entries. If the viewport
//!    [excludes](crate::viewport::Viewport::excludes) the rectangle, invoke
//!    the leave callback, mark the entry not visible and, unless it persists,
//!    remove it from the registry on the spot.
//!
//! The back-to-front walk keeps index-based removal valid: removing index
//! `i` only shifts entries the pass has already visited.

use alloc::vec::Vec;

use super::registry::Registry;
use crate::backend::Target;
use crate::trace::{EvictEvent, PassStamp, PassSummary, Tracer, Transition, TransitionEvent};
use crate::tracked::TrackedId;
use crate::viewport::Viewport;

/// The transitions produced by a single evaluation pass.
///
/// Ids appear in emission order, which is reverse registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityChanges {
    /// Entries whose enter callback fired.
    pub entered: Vec<TrackedId>,
    /// Entries whose leave callback fired.
    pub left: Vec<TrackedId>,
    /// Entries removed after leaving (non-persistent).
    pub evicted: Vec<TrackedId>,
}

impl VisibilityChanges {
    /// Returns `true` if the pass fired no callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.left.is_empty()
    }

    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.entered.clear();
        self.left.clear();
        self.evicted.clear();
    }
}

impl<T: Target> Registry<T> {
    /// Runs one evaluation pass against `viewport`.
    pub fn evaluate(&mut self, viewport: &Viewport) -> VisibilityChanges {
        let mut changes = VisibilityChanges::default();
        self.evaluate_into(viewport, PassStamp::default(), &mut Tracer::none(), &mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reports every transition to
    /// `tracer` and reuses a caller-provided buffer.
    pub fn evaluate_into(
        &mut self,
        viewport: &Viewport,
        stamp: PassStamp,
        tracer: &mut Tracer<'_>,
        changes: &mut VisibilityChanges,
    ) {
        changes.clear();
        let examined = self.entries.len();

        let mut idx = self.entries.len();
        while idx > 0 {
            idx -= 1;
            let entry = &mut self.entries[idx];
            let rect = entry.target.bounding_rect();

            if !entry.visible && viewport.admits(rect, entry.offset) {
                (entry.on_enter)(&*entry);
                entry.visible = true;
                changes.entered.push(entry.id);
                tracer.transition(&TransitionEvent {
                    stamp,
                    id: entry.id,
                    transition: Transition::Enter,
                    top: rect.y0,
                    height: rect.height(),
                    offset: entry.offset,
                    viewport_height: viewport.height(),
                });
            }

            if entry.visible && viewport.excludes(rect, entry.offset) {
                (entry.on_leave)(&*entry);
                entry.visible = false;
                changes.left.push(entry.id);
                tracer.transition(&TransitionEvent {
                    stamp,
                    id: entry.id,
                    transition: Transition::Leave,
                    top: rect.y0,
                    height: rect.height(),
                    offset: entry.offset,
                    viewport_height: viewport.height(),
                });

                if !entry.persist {
                    let id = entry.id;
                    self.entries.remove(idx);
                    changes.evicted.push(id);
                    tracer.evict(&EvictEvent { stamp, id });
                }
            }
        }

        tracer.pass_summary(&PassSummary {
            stamp,
            examined,
            entered: changes.entered.len(),
            left: changes.left.len(),
            evicted: changes.evicted.len(),
            remaining: self.entries.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;
    use crate::config::HuntConfig;
    use crate::testing::FakeTarget;
    use crate::tracked::Tracked;

    fn log_config(log: &Rc<RefCell<Vec<(char, u64)>>>) -> HuntConfig<FakeTarget> {
        let enter_log = Rc::clone(log);
        let leave_log = Rc::clone(log);
        HuntConfig::new()
            .on_enter(move |e| enter_log.borrow_mut().push(('+', e.id().get())))
            .on_leave(move |e| leave_log.borrow_mut().push(('-', e.id().get())))
    }

    #[test]
    fn empty_registry_is_a_no_op() {
        let mut reg = Registry::<FakeTarget>::new();
        let changes = reg.evaluate(&Viewport::new(800.0));
        assert!(changes.is_empty());
        assert!(reg.is_empty());
    }

    #[test]
    fn walks_newest_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut reg = Registry::new();
        let config = log_config(&log);
        for top in [10.0, 20.0, 30.0] {
            reg.insert(FakeTarget::new(top, 50.0), &config);
        }
        let changes = reg.evaluate(&Viewport::new(800.0));
        assert_eq!(*log.borrow(), vec![('+', 2), ('+', 1), ('+', 0)]);
        assert_eq!(changes.entered.len(), 3);
    }

    #[test]
    fn callback_observes_state_before_the_flag_flips() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in = Rc::clone(&seen);
        let mut reg = Registry::new();
        let target = FakeTarget::new(100.0, 20.0);
        reg.insert(
            target.clone(),
            &HuntConfig::new()
                .persist(true)
                .on_enter(move |e| seen_in.borrow_mut().push(e.is_visible())),
        );
        reg.evaluate(&Viewport::new(800.0));
        assert_eq!(*seen.borrow(), vec![false]);
        assert!(reg.iter().all(Tracked::is_visible));
    }

    #[test]
    fn non_persistent_entry_is_evicted_after_leaving() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut reg = Registry::new();
        let target = FakeTarget::new(100.0, 20.0);
        let id = reg.insert(target.clone(), &log_config(&log));
        let vp = Viewport::new(800.0);

        reg.evaluate(&vp);
        target.move_to(-500.0);
        let changes = reg.evaluate(&vp);

        assert_eq!(changes.left, vec![id]);
        assert_eq!(changes.evicted, vec![id]);
        assert!(!reg.contains(id));

        target.move_to(100.0);
        assert!(reg.evaluate(&vp).is_empty(), "evicted entries never re-fire");
        assert_eq!(*log.borrow(), vec![('+', 0), ('-', 0)]);
    }

    #[test]
    fn removal_mid_walk_keeps_remaining_entries_intact() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut reg = Registry::new();
        let config = log_config(&log);
        let targets: Vec<_> = (0..4).map(|_| FakeTarget::new(100.0, 20.0)).collect();
        let ids: Vec<_> = targets.iter().map(|t| reg.insert(t.clone(), &config)).collect();
        let vp = Viewport::new(800.0);
        reg.evaluate(&vp);

        targets[1].move_to(2000.0);
        targets[2].move_to(-2000.0);
        let changes = reg.evaluate(&vp);

        assert_eq!(changes.evicted, vec![ids[2], ids[1]]);
        let left: Vec<_> = reg.iter().map(Tracked::id).collect();
        assert_eq!(left, vec![ids[0], ids[3]]);
        assert!(reg.iter().all(Tracked::is_visible));
    }

    #[test]
    fn offset_widens_the_band() {
        let mut reg = Registry::new();
        let target = FakeTarget::new(820.0, 20.0);
        let narrow = reg.insert(target.clone(), &HuntConfig::new());
        let wide = reg.insert(target.clone(), &HuntConfig::new().offset(50.0));
        let changes = reg.evaluate(&Viewport::new(800.0));
        assert_eq!(changes.entered, vec![wide]);
        assert!(!reg.get(narrow).is_some_and(Tracked::is_visible));
    }

    #[test]
    fn enter_and_leave_can_fire_in_one_pass_for_different_entries() {
        let mut reg = Registry::new();
        let leaving = FakeTarget::new(100.0, 20.0);
        let entering = FakeTarget::new(1200.0, 20.0);
        let config = HuntConfig::new().persist(true);
        let out_id = reg.insert(leaving.clone(), &config);
        let in_id = reg.insert(entering.clone(), &config);
        let vp = Viewport::new(800.0);
        reg.evaluate(&vp);

        leaving.move_to(-100.0);
        entering.move_to(400.0);
        let changes = reg.evaluate(&vp);
        assert_eq!(changes.entered, vec![in_id]);
        assert_eq!(changes.left, vec![out_id]);
        assert!(changes.evicted.is_empty());
        assert_eq!(reg.len(), 2);
    }
}
