use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::debug;

use folio_common::{PageState, ScrollRequest, SectionId, SiteConfig, Theme};

use crate::common::{millis, platform, platform::BodyScrollLock};

// the page state plus the timers that act on it
//
// provided once by the Portfolio root and fetched with use_context everywhere
// else.  each timer slot holds at most one pending Timeout; replacing it drops
// (and thereby cancels) the previous one
#[derive(Clone, Copy)]
pub struct PageHandle {
    state: Signal<PageState<BodyScrollLock>>,
    scroll_timer: Signal<Option<Timeout>>,
    launch_timer: Signal<Option<Timeout>>,
    settle_timer: Signal<Option<Timeout>>,
}

impl PageHandle {
    pub fn new(config: SiteConfig) -> Self {
        PageHandle {
            state: Signal::new(PageState::new(config, BodyScrollLock)),
            scroll_timer: Signal::new(None),
            launch_timer: Signal::new(None),
            settle_timer: Signal::new(None),
        }
    }

    pub fn active_section(&self) -> SectionId {
        self.state.read().active_section()
    }

    pub fn theme(&self) -> Theme {
        self.state.read().theme()
    }

    pub fn theme_marker(&self) -> Option<&'static str> {
        self.state.read().theme_marker()
    }

    pub fn menu_open(&self) -> bool {
        self.state.read().menu_open()
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.state.read().back_to_top_visible()
    }

    pub fn launch_in_progress(&self) -> bool {
        self.state.read().launch_in_progress()
    }

    pub fn toggle_theme(mut self) {
        self.state.write().toggle_theme();
    }

    pub fn open_menu(mut self) {
        self.state.write().open_menu();
    }

    pub fn close_menu(mut self) {
        self.state.write().close_menu();
    }

    pub fn navigate(mut self, target: &str) {
        let Some(request) = self.state.write().navigate_to(target) else {
            return;
        };

        self.schedule_scroll(request);
    }

    pub fn return_to_top(mut self) {
        let (request, ticket) = self.state.write().return_to_top();
        self.schedule_scroll(request);

        let mut state = self.state;
        let timer = Timeout::new(millis(ticket.delay), move || {
            if state.write().finish_launch(ticket) {
                debug!("launch finished");
            }
        });
        self.launch_timer.set(Some(timer));
    }

    // re-measure every section and feed the current viewport to the page state
    pub fn refresh(mut self) {
        let Some(viewport) = platform::viewport() else {
            return;
        };

        let mut state = self.state.write();
        for section in SectionId::ALL {
            state.update_layout(section, platform::measure_section(section));
        }
        state.on_scroll(viewport);
    }

    pub fn on_scroll(mut self) {
        self.refresh();
        self.arm_settle(Duration::ZERO);
    }

    // the signals may already be gone when the owning scope is dropped
    pub fn teardown(mut self) {
        for mut slot in [self.scroll_timer, self.launch_timer, self.settle_timer] {
            if let Ok(mut timer) = slot.try_write() {
                timer.take();
            }
        }

        if let Ok(mut state) = self.state.try_write() {
            state.teardown();
        }
    }

    // a request for the current offset produces no scroll events, so the settle
    // timer is armed here as well; real scrolling re-arms it from on_scroll
    fn schedule_scroll(&mut self, request: ScrollRequest) {
        if request.delay.is_zero() {
            self.scroll_timer.set(None);
            platform::scroll_now(request);
        } else {
            let timer = Timeout::new(millis(request.delay), move || platform::scroll_now(request));
            self.scroll_timer.set(Some(timer));
        }

        self.arm_settle(request.delay);
    }

    fn arm_settle(&mut self, after: Duration) {
        let quiet = self.state.peek().config().settle_delay();
        let mut state = self.state;
        let timer = Timeout::new(millis(after + quiet), move || state.write().scroll_settled());
        self.settle_timer.set(Some(timer));
    }
}
