use tracing::debug;

use crate::section::SectionId;

// inputs to the active-section reducer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerEvent {
    // the geometric observer saw a section enter the observation band
    GeometryChanged(SectionId),
    // a nav link or the back-to-top control asked for a section
    NavigationRequested(SectionId),
    // scrolling has stopped for the configured quiet period
    ScrollSettled,
}

// single owner of the active section
//
// navigation writes take effect immediately and then hold the highlight: while a
// navigation target is pending, geometry events for other sections (the ones the
// smooth scroll passes through) are dropped.  the hold ends when the observer
// reports the target itself or when scrolling settles, whichever happens first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSectionTracker {
    active: SectionId,
    pending: Option<SectionId>,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        ActiveSectionTracker {
            active: SectionId::Home,
            pending: None,
        }
    }
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn pending(&self) -> Option<SectionId> {
        self.pending
    }

    // returns true if the active section changed
    pub fn apply(&mut self, event: TrackerEvent) -> bool {
        let before = self.active;

        match event {
            TrackerEvent::NavigationRequested(target) => {
                self.active = target;
                self.pending = Some(target);
            }
            TrackerEvent::GeometryChanged(seen) => match self.pending {
                Some(target) if target == seen => self.pending = None,
                Some(target) => {
                    debug!({ seen = %seen, target = %target }, "geometry ignored during navigation");
                }
                None => self.active = seen,
            },
            TrackerEvent::ScrollSettled => self.pending = None,
        }

        if before != self.active {
            debug!({ from = %before, to = %self.active, event = ?event }, "active section changed");
        }

        before != self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use TrackerEvent::*;

    #[test]
    fn starts_on_home() {
        let tracker = ActiveSectionTracker::new();
        assert_eq!(tracker.active(), SectionId::Home);
        assert_eq!(tracker.pending(), None);
    }

    #[test]
    fn geometry_drives_active_when_idle() {
        let mut tracker = ActiveSectionTracker::new();

        assert!(tracker.apply(GeometryChanged(SectionId::About)));
        assert!(tracker.apply(GeometryChanged(SectionId::Skills)));
        assert!(!tracker.apply(GeometryChanged(SectionId::Skills)));
        assert_eq!(tracker.active(), SectionId::Skills);
    }

    #[test]
    fn navigation_overrides_last_geometry() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.apply(GeometryChanged(SectionId::Contact));

        assert!(tracker.apply(NavigationRequested(SectionId::Skills)));
        assert_eq!(tracker.active(), SectionId::Skills);
    }

    #[test]
    fn navigation_holds_until_target_confirmed() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.apply(NavigationRequested(SectionId::Project));

        // sections passed on the way down do not steal the highlight
        assert!(!tracker.apply(GeometryChanged(SectionId::About)));
        assert!(!tracker.apply(GeometryChanged(SectionId::Skills)));
        assert_eq!(tracker.active(), SectionId::Project);

        assert!(!tracker.apply(GeometryChanged(SectionId::Project)));
        assert_eq!(tracker.pending(), None);

        // after arrival the observer is back in charge
        assert!(tracker.apply(GeometryChanged(SectionId::Contact)));
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn settle_releases_unconfirmed_navigation() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.apply(NavigationRequested(SectionId::Contact));

        assert!(!tracker.apply(ScrollSettled));
        assert_eq!(tracker.active(), SectionId::Contact);
        assert_eq!(tracker.pending(), None);

        assert!(tracker.apply(GeometryChanged(SectionId::Project)));
    }

    #[test]
    fn later_navigation_retargets() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.apply(NavigationRequested(SectionId::Contact));
        tracker.apply(NavigationRequested(SectionId::About));

        assert!(!tracker.apply(GeometryChanged(SectionId::Contact)));
        assert_eq!(tracker.active(), SectionId::About);
        assert_eq!(tracker.pending(), Some(SectionId::About));
    }

    #[test]
    fn active_is_always_a_known_section() {
        let mut tracker = ActiveSectionTracker::new();
        let events = [
            GeometryChanged(SectionId::About),
            NavigationRequested(SectionId::Home),
            ScrollSettled,
            GeometryChanged(SectionId::Contact),
            ScrollSettled,
            NavigationRequested(SectionId::Project),
            GeometryChanged(SectionId::Skills),
        ];

        for event in events {
            tracker.apply(event);
            assert!(SectionId::ALL.contains(&tracker.active()));
        }
    }
}
