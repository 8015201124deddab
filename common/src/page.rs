use tracing::{debug, info};

use crate::{
    config::SiteConfig,
    navigator::{ScrollNavigator, ScrollRequest},
    observer::{GeometricObserver, Viewport},
    section::{SectionGeometry, SectionId, SectionRegistry},
    theme::{Theme, ThemePreference},
    tracker::{ActiveSectionTracker, TrackerEvent},
    ui::{LaunchTicket, ScrollLock, TransientUiState},
};

// root controller of the page
//
// the webapp keeps exactly one of these in a context signal.  every user gesture
// and every platform callback funnels through the methods below; whatever has to
// happen outside (scrolling, timers) is handed back to the caller as a value
pub struct PageState<L: ScrollLock> {
    config: SiteConfig,
    registry: SectionRegistry,
    observer: GeometricObserver,
    tracker: ActiveSectionTracker,
    navigator: ScrollNavigator,
    theme: ThemePreference,
    ui: TransientUiState<L>,
}

impl<L: ScrollLock> PageState<L> {
    pub fn new(config: SiteConfig, lock: L) -> Self {
        PageState {
            registry: SectionRegistry::new(),
            observer: GeometricObserver::new(config.observer),
            tracker: ActiveSectionTracker::new(),
            navigator: ScrollNavigator::new(&config),
            theme: ThemePreference::new(config.default_theme),
            ui: TransientUiState::new(lock),
            config,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn theme_marker(&self) -> Option<&'static str> {
        self.theme.marker()
    }

    pub fn menu_open(&self) -> bool {
        self.ui.menu.is_open()
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.ui.back_to_top_visible
    }

    pub fn launch_in_progress(&self) -> bool {
        self.ui.launch.in_progress()
    }

    pub fn observing(&self) -> bool {
        self.observer.is_connected()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    pub fn open_menu(&mut self) {
        self.ui.menu.open();
    }

    pub fn close_menu(&mut self) {
        self.ui.menu.close();
    }

    pub fn navigate_to(&mut self, target: &str) -> Option<ScrollRequest> {
        self.navigator
            .navigate_to(target, &self.registry, &mut self.tracker, &mut self.ui)
    }

    pub fn return_to_top(&mut self) -> (ScrollRequest, LaunchTicket) {
        self.navigator.return_to_top(&mut self.tracker, &mut self.ui)
    }

    pub fn finish_launch(&mut self, ticket: LaunchTicket) -> bool {
        self.ui.launch.finish(ticket)
    }

    // layout provider callback; the observer starts once every section is measured
    pub fn update_layout(&mut self, section: SectionId, geometry: Option<SectionGeometry>) {
        self.registry.update(section, geometry);

        if self.registry.is_complete() && !self.observer.is_connected() {
            info!("all sections registered");
            self.observer.connect();
        }
    }

    // scroll event callback: back-to-top visibility, then the geometric signal
    pub fn on_scroll(&mut self, viewport: Viewport) {
        if let Some(home) = self.registry.get(SectionId::Home) {
            let buffer = self.config.back_to_top_buffer;
            if self.ui.recompute_back_to_top(viewport.scroll_y, home, buffer) {
                debug!({ visible = self.ui.back_to_top_visible }, "back-to-top visibility changed");
            }
        }

        if let Some(section) = self.observer.evaluate(&self.registry, viewport) {
            self.tracker.apply(TrackerEvent::GeometryChanged(section));
        }
    }

    // releases any navigation hold, then catches up with sections that entered
    // the band while the hold dropped their events
    pub fn scroll_settled(&mut self) {
        self.tracker.apply(TrackerEvent::ScrollSettled);

        if self.observer.is_satisfied(self.tracker.active()) {
            return;
        }

        if let Some(section) = self.observer.topmost_satisfied(&self.registry) {
            debug!({ section = %section }, "resynced active section after settle");
            self.tracker.apply(TrackerEvent::GeometryChanged(section));
        }
    }

    // stops observation and releases the scroll lock whatever the menu state
    pub fn teardown(&mut self) {
        self.observer.disconnect();
        self.registry.clear();
        self.ui.menu.release();
        debug!("page state torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_helpers::RecordingLock;

    const SECTION_HEIGHT: f64 = 1500.0;

    fn mounted() -> (PageState<RecordingLock>, RecordingLock) {
        let lock = RecordingLock::default();
        let mut page = PageState::new(SiteConfig::default(), lock.clone());

        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            page.update_layout(
                section,
                Some(SectionGeometry::new(i as f64 * SECTION_HEIGHT, SECTION_HEIGHT)),
            );
        }
        page.on_scroll(Viewport::new(0.0, 1000.0));

        (page, lock)
    }

    #[test]
    fn observer_waits_for_every_section() {
        let mut page = PageState::new(SiteConfig::default(), RecordingLock::default());

        for section in &SectionId::ALL[..4] {
            page.update_layout(*section, Some(SectionGeometry::new(0.0, 10.0)));
            assert!(!page.observing());
        }

        page.update_layout(SectionId::Contact, Some(SectionGeometry::new(0.0, 10.0)));
        assert!(page.observing());
    }

    #[test]
    fn scrolling_moves_active_section() {
        let (mut page, _) = mounted();
        assert_eq!(page.active_section(), SectionId::Home);

        page.on_scroll(Viewport::new(2.0 * SECTION_HEIGHT, 1000.0));
        assert_eq!(page.active_section(), SectionId::Skills);
    }

    #[test]
    fn navigation_is_eager() {
        let (mut page, _) = mounted();
        page.on_scroll(Viewport::new(4.0 * SECTION_HEIGHT, 1000.0));
        assert_eq!(page.active_section(), SectionId::Contact);

        let request = page.navigate_to("skills");

        // nothing has scrolled yet, the highlight already moved
        assert!(request.is_some());
        assert_eq!(page.active_section(), SectionId::Skills);
    }

    #[test]
    fn smooth_scroll_passing_sections_keeps_target_highlighted() {
        let (mut page, _) = mounted();
        page.navigate_to("#contact").unwrap();

        let mut y = 0.0;
        while y < 4.0 * SECTION_HEIGHT {
            page.on_scroll(Viewport::new(y, 1000.0));
            assert_eq!(page.active_section(), SectionId::Contact);
            y += 250.0;
        }

        page.scroll_settled();
        page.on_scroll(Viewport::new(SECTION_HEIGHT, 1000.0));
        assert_eq!(page.active_section(), SectionId::About);
    }

    #[test]
    fn settle_without_scroll_releases_navigation_hold() {
        let (mut page, _) = mounted();

        // already at the top, so this navigation never produces a scroll event
        let request = page.navigate_to("home").unwrap();
        assert_eq!(request.top, 0.0);

        page.scroll_settled();
        assert_eq!(page.active_section(), SectionId::Home);

        page.on_scroll(Viewport::new(SECTION_HEIGHT, 1000.0));
        assert_eq!(page.active_section(), SectionId::About);
    }

    #[test]
    fn settle_catches_up_with_sections_entered_during_hold() {
        let (mut page, _) = mounted();
        page.navigate_to("home").unwrap();

        // hand scroll into about while the hold is still in place
        let mut y = 0.0;
        while y <= SECTION_HEIGHT {
            page.on_scroll(Viewport::new(y, 1000.0));
            y += 100.0;
        }
        assert_eq!(page.active_section(), SectionId::Home);

        page.scroll_settled();
        assert_eq!(page.active_section(), SectionId::About);

        page.on_scroll(Viewport::new(SECTION_HEIGHT, 1000.0));
        assert_eq!(page.active_section(), SectionId::About);
    }

    #[test]
    fn settle_keeps_active_section_that_is_still_in_band() {
        let (mut page, _) = mounted();
        page.on_scroll(Viewport::new(2.0 * SECTION_HEIGHT, 1000.0));
        page.navigate_to("skills").unwrap();

        page.scroll_settled();
        assert_eq!(page.active_section(), SectionId::Skills);
    }

    #[test]
    fn invalid_target_changes_nothing() {
        let (mut page, lock) = mounted();
        page.on_scroll(Viewport::new(SECTION_HEIGHT, 1000.0));
        page.open_menu();
        let calls = lock.calls();

        assert_eq!(page.navigate_to("doesnotexist"), None);
        assert_eq!(page.active_section(), SectionId::About);
        assert!(page.menu_open());
        assert_eq!(lock.calls(), calls);
    }

    #[test]
    fn unregistered_target_is_ignored() {
        let (mut page, _) = mounted();
        page.update_layout(SectionId::Project, None);

        assert_eq!(page.navigate_to("project"), None);
        assert_eq!(page.active_section(), SectionId::Home);
    }

    #[test]
    fn navigation_closes_menu() {
        let (mut page, lock) = mounted();
        page.open_menu();
        assert!(lock.is_locked());

        let request = page.navigate_to("about").unwrap();
        assert!(!page.menu_open());
        assert!(!lock.is_locked());
        assert_eq!(request.top, SECTION_HEIGHT - page.config().nav_height);
        assert_eq!(request.delay, page.config().menu_close_delay());
    }

    #[test]
    fn back_to_top_boundary() {
        let (mut page, _) = mounted();
        let h = SECTION_HEIGHT;

        page.on_scroll(Viewport::new(h - 100.0, 1000.0));
        assert!(!page.back_to_top_visible());

        page.on_scroll(Viewport::new(h + 1.0, 1000.0));
        assert!(page.back_to_top_visible());
    }

    #[test]
    fn theme_double_toggle() {
        let (mut page, _) = mounted();
        let theme = page.theme();
        let marker = page.theme_marker();

        page.toggle_theme();
        assert_ne!(page.theme(), theme);
        page.toggle_theme();

        assert_eq!(page.theme(), theme);
        assert_eq!(page.theme_marker(), marker);
    }

    #[test]
    fn return_to_top_scenario() {
        let (mut page, _) = mounted();
        page.on_scroll(Viewport::new(3.0 * SECTION_HEIGHT + 500.0, 1000.0));
        assert_eq!(page.active_section(), SectionId::Project);

        let (request, ticket) = page.return_to_top();
        assert_eq!(page.active_section(), SectionId::Home);
        assert!(page.launch_in_progress());
        assert_eq!(request.top, 0.0);
        assert_eq!(ticket.delay, page.config().launch_duration());

        // the timer fires while the viewport is still far down the page
        page.on_scroll(Viewport::new(3.0 * SECTION_HEIGHT, 1000.0));
        assert!(page.finish_launch(ticket));
        assert!(!page.launch_in_progress());
    }

    #[test]
    fn repeated_return_to_top_keeps_launch_until_last_timer() {
        let (mut page, _) = mounted();

        let (_, first) = page.return_to_top();
        let (_, second) = page.return_to_top();

        assert!(!page.finish_launch(first));
        assert!(page.launch_in_progress());
        assert!(page.finish_launch(second));
        assert!(!page.launch_in_progress());
    }

    #[test]
    fn teardown_releases_lock_and_observer() {
        let (mut page, lock) = mounted();
        page.open_menu();

        page.teardown();
        assert!(!lock.is_locked());
        assert!(!page.observing());

        let active = page.active_section();
        page.on_scroll(Viewport::new(4.0 * SECTION_HEIGHT, 1000.0));
        assert_eq!(page.active_section(), active);
    }

    #[test]
    fn dropping_page_releases_lock() {
        let (mut page, lock) = mounted();
        page.open_menu();

        drop(page);
        assert!(!lock.is_locked());
    }
}
