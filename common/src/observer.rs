use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{
    config::ObserverConfig,
    section::{SectionGeometry, SectionId, SectionRegistry},
};

// the visible window, in document coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Viewport { scroll_y, height }
    }
}

// whether a section currently sits inside the observation band
//
// the band is the viewport minus the configured top and bottom margins.  the ratio
// is taken against the smaller of the section and the band, so a section taller
// than the band can still fill it completely
pub fn satisfies(options: &ObserverConfig, geometry: SectionGeometry, viewport: Viewport) -> bool {
    let band_top = viewport.scroll_y + viewport.height * options.top_margin;
    let band_bottom = viewport.scroll_y + viewport.height - viewport.height * options.bottom_margin;
    let band_height = band_bottom - band_top;

    if band_height <= 0.0 || geometry.height <= 0.0 {
        return false;
    }

    let overlap = geometry.bottom().min(band_bottom) - geometry.top.max(band_top);
    if overlap <= 0.0 {
        return false;
    }

    overlap / geometry.height.min(band_height) >= options.threshold
}

// the continuous half of active-section tracking
//
// every evaluation compares the set of sections satisfying the predicate against
// the previous evaluation, and reports a section only on its not-satisfied ->
// satisfied edge.  if several sections cross in the same evaluation the topmost
// one is reported
#[derive(Clone, Debug)]
pub struct GeometricObserver {
    options: ObserverConfig,
    connected: bool,
    satisfied: BTreeSet<SectionId>,
}

impl GeometricObserver {
    pub fn new(options: ObserverConfig) -> Self {
        GeometricObserver {
            options,
            connected: false,
            satisfied: BTreeSet::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn connect(&mut self) {
        if !self.connected {
            debug!("geometric observer connected");
        }
        self.connected = true;
        self.satisfied.clear();
    }

    pub fn disconnect(&mut self) {
        if self.connected {
            debug!("geometric observer disconnected");
        }
        self.connected = false;
        self.satisfied.clear();
    }

    pub fn evaluate(&mut self, registry: &SectionRegistry, viewport: Viewport) -> Option<SectionId> {
        if !self.connected {
            return None;
        }

        let now: BTreeSet<SectionId> = registry
            .iter()
            .filter(|(_, geometry)| satisfies(&self.options, *geometry, viewport))
            .map(|(section, _)| section)
            .collect();

        let entered = registry
            .iter()
            .filter(|(section, _)| now.contains(section) && !self.satisfied.contains(section))
            .min_by(|(_, a), (_, b)| a.top.total_cmp(&b.top))
            .map(|(section, _)| section);

        trace!({ satisfied = ?now, entered = ?entered }, "observer evaluated");

        self.satisfied = now;
        entered
    }

    // as of the last evaluation; always false while disconnected
    pub fn is_satisfied(&self, section: SectionId) -> bool {
        self.satisfied.contains(&section)
    }

    pub fn topmost_satisfied(&self, registry: &SectionRegistry) -> Option<SectionId> {
        registry
            .iter()
            .filter(|(section, _)| self.satisfied.contains(section))
            .min_by(|(_, a), (_, b)| a.top.total_cmp(&b.top))
            .map(|(section, _)| section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // five stacked sections, each one viewport (1000px) tall
    fn stacked() -> SectionRegistry {
        let mut registry = SectionRegistry::new();
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            registry.update(section, Some(SectionGeometry::new(i as f64 * 1000.0, 1000.0)));
        }
        registry
    }

    fn connected() -> GeometricObserver {
        let mut observer = GeometricObserver::new(ObserverConfig::default());
        observer.connect();
        observer
    }

    #[test]
    fn predicate_respects_margins() {
        let options = ObserverConfig::default();
        let viewport = Viewport::new(0.0, 1000.0);

        // band is [100, 300]
        assert!(satisfies(&options, SectionGeometry::new(0.0, 1000.0), viewport));
        assert!(!satisfies(&options, SectionGeometry::new(300.0, 500.0), viewport));
        assert!(!satisfies(&options, SectionGeometry::new(0.0, 100.0), viewport));

        // 40px of a 200px band is exactly the threshold
        assert!(satisfies(&options, SectionGeometry::new(260.0, 1000.0), viewport));
        assert!(!satisfies(&options, SectionGeometry::new(261.0, 1000.0), viewport));
    }

    #[test]
    fn zero_height_sections_never_satisfy() {
        let options = ObserverConfig::default();
        assert!(!satisfies(
            &options,
            SectionGeometry::new(150.0, 0.0),
            Viewport::new(0.0, 1000.0)
        ));
    }

    #[test]
    fn reports_only_entering_sections() {
        let registry = stacked();
        let mut observer = connected();

        assert_eq!(observer.evaluate(&registry, Viewport::new(0.0, 1000.0)), Some(SectionId::Home));
        assert_eq!(observer.evaluate(&registry, Viewport::new(10.0, 1000.0)), None);

        // band [900, 1100] straddles home and about; only about is new
        assert_eq!(observer.evaluate(&registry, Viewport::new(800.0, 1000.0)), Some(SectionId::About));
        assert_eq!(observer.evaluate(&registry, Viewport::new(1000.0, 1000.0)), None);

        // scrolling back up re-enters home
        assert_eq!(observer.evaluate(&registry, Viewport::new(0.0, 1000.0)), Some(SectionId::Home));
    }

    #[test]
    fn topmost_wins_when_several_enter_together() {
        let registry = stacked();
        let mut observer = connected();

        // first evaluation at the home/about seam: both enter at once
        assert_eq!(observer.evaluate(&registry, Viewport::new(800.0, 1000.0)), Some(SectionId::Home));
    }

    #[test]
    fn disconnected_observer_is_silent() {
        let registry = stacked();
        let mut observer = GeometricObserver::new(ObserverConfig::default());

        assert_eq!(observer.evaluate(&registry, Viewport::new(0.0, 1000.0)), None);

        observer.connect();
        assert!(observer.evaluate(&registry, Viewport::new(0.0, 1000.0)).is_some());

        observer.disconnect();
        assert!(!observer.is_connected());
        assert_eq!(observer.evaluate(&registry, Viewport::new(2000.0, 1000.0)), None);
    }

    #[test]
    fn topmost_satisfied_tracks_last_evaluation() {
        let registry = stacked();
        let mut observer = connected();
        assert_eq!(observer.topmost_satisfied(&registry), None);

        // band [1850, 2050] straddles about and skills
        observer.evaluate(&registry, Viewport::new(1750.0, 1000.0));
        assert!(observer.is_satisfied(SectionId::About));
        assert!(observer.is_satisfied(SectionId::Skills));
        assert_eq!(observer.topmost_satisfied(&registry), Some(SectionId::About));

        observer.disconnect();
        assert!(!observer.is_satisfied(SectionId::About));
        assert_eq!(observer.topmost_satisfied(&registry), None);
    }

    #[test]
    fn unregistered_sections_are_never_reported() {
        let mut registry = stacked();
        registry.update(SectionId::Skills, None);
        let mut observer = connected();

        for step in 0..50 {
            let found = observer.evaluate(&registry, Viewport::new(step as f64 * 100.0, 1000.0));
            assert_ne!(found, Some(SectionId::Skills));
        }
    }

    #[test]
    fn short_page_never_reaches_trailing_sections() {
        let mut registry = SectionRegistry::new();
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            registry.update(section, Some(SectionGeometry::new(i as f64 * 120.0, 120.0)));
        }
        let mut observer = connected();

        // the page fits in the viewport, so scroll_y is pinned at zero and the
        // band [100, 300] only ever covers about and skills
        assert_eq!(observer.evaluate(&registry, Viewport::new(0.0, 1000.0)), Some(SectionId::About));
        assert_eq!(observer.evaluate(&registry, Viewport::new(0.0, 1000.0)), None);
    }
}
