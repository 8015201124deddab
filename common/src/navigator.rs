use std::time::Duration;

use tracing::{debug, instrument};

use crate::{
    config::SiteConfig,
    section::{SectionId, SectionRegistry},
    tracker::{ActiveSectionTracker, TrackerEvent},
    ui::{LaunchTicket, ScrollLock, TransientUiState},
};

// a smooth scroll the platform should start after `delay`
//
// requests are fire-and-forget: issuing a new one while the previous animation is
// still running simply retargets the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub delay: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollNavigator {
    nav_height: f64,
    menu_close_delay: Duration,
    launch_duration: Duration,
}

impl ScrollNavigator {
    pub fn new(config: &SiteConfig) -> Self {
        ScrollNavigator {
            nav_height: config.nav_height,
            menu_close_delay: config.menu_close_delay(),
            launch_duration: config.launch_duration(),
        }
    }

    // unknown or unregistered targets are ignored without touching any state
    #[instrument(level = "debug", skip(self, registry, tracker, ui))]
    pub fn navigate_to<L: ScrollLock>(
        &self,
        target: &str,
        registry: &SectionRegistry,
        tracker: &mut ActiveSectionTracker,
        ui: &mut TransientUiState<L>,
    ) -> Option<ScrollRequest> {
        let section = match target.parse::<SectionId>() {
            Ok(section) => section,
            Err(err) => {
                debug!("ignoring navigation: {err}");
                return None;
            }
        };

        let Some(geometry) = registry.get(section) else {
            debug!("ignoring navigation to unregistered section {section}");
            return None;
        };

        let top = (geometry.top - self.nav_height).max(0.0);

        // let the sidebar slide out before the page starts moving
        let delay = if ui.menu.close() {
            self.menu_close_delay
        } else {
            Duration::ZERO
        };

        tracker.apply(TrackerEvent::NavigationRequested(section));

        Some(ScrollRequest { top, delay })
    }

    #[instrument(level = "debug", skip_all)]
    pub fn return_to_top<L: ScrollLock>(
        &self,
        tracker: &mut ActiveSectionTracker,
        ui: &mut TransientUiState<L>,
    ) -> (ScrollRequest, LaunchTicket) {
        let ticket = ui.launch.start(self.launch_duration);
        tracker.apply(TrackerEvent::NavigationRequested(SectionId::Home));

        let request = ScrollRequest {
            top: 0.0,
            delay: Duration::ZERO,
        };

        (request, ticket)
    }
}
