use std::time::Duration;

use tracing::debug;

use crate::section::SectionGeometry;

// page-wide scroll suspension while an overlay is open
//
// the webapp implements this against the document body; both calls must be safe
// to repeat
pub trait ScrollLock {
    fn lock(&mut self);
    fn unlock(&mut self);
}

// mobile menu flag coupled to the scroll lock
//
// the lock is released whenever the menu closes and, unconditionally, when the
// state is dropped
pub struct MenuState<L: ScrollLock> {
    open: bool,
    lock: L,
}

impl<L: ScrollLock> MenuState<L> {
    pub fn new(lock: L) -> Self {
        MenuState { open: false, lock }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.lock.lock();
        debug!("menu opened, page scroll locked");
    }

    // returns whether the menu was open
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        self.lock.unlock();
        if was_open {
            debug!("menu closed, page scroll unlocked");
        }
        was_open
    }

    pub fn release(&mut self) {
        self.open = false;
        self.lock.unlock();
    }
}

impl<L: ScrollLock> Drop for MenuState<L> {
    fn drop(&mut self) {
        self.release();
    }
}

// handed out by each back-to-top activation; only the newest one may end the launch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchTicket {
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchState {
    in_progress: bool,
    generation: u64,
}

impl LaunchState {
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn start(&mut self, delay: Duration) -> LaunchTicket {
        self.generation += 1;
        self.in_progress = true;

        LaunchTicket {
            generation: self.generation,
            delay,
        }
    }

    // a superseded ticket is ignored so a second activation is not cut short by
    // the first one's timer
    pub fn finish(&mut self, ticket: LaunchTicket) -> bool {
        if ticket.generation != self.generation {
            debug!({ ticket = ticket.generation, current = self.generation }, "stale launch ticket");
            return false;
        }

        let was = self.in_progress;
        self.in_progress = false;
        was
    }
}

pub fn back_to_top_visible(scroll_y: f64, home: SectionGeometry, buffer: f64) -> bool {
    scroll_y > home.bottom() - buffer
}

// short-lived flags read by the presentation layer every render
pub struct TransientUiState<L: ScrollLock> {
    pub menu: MenuState<L>,
    pub back_to_top_visible: bool,
    pub launch: LaunchState,
}

impl<L: ScrollLock> TransientUiState<L> {
    pub fn new(lock: L) -> Self {
        TransientUiState {
            menu: MenuState::new(lock),
            back_to_top_visible: false,
            launch: LaunchState::default(),
        }
    }

    // returns true if visibility changed
    pub fn recompute_back_to_top(&mut self, scroll_y: f64, home: SectionGeometry, buffer: f64) -> bool {
        let visible = back_to_top_visible(scroll_y, home, buffer);
        let changed = visible != self.back_to_top_visible;
        self.back_to_top_visible = visible;
        changed
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::{cell::RefCell, rc::Rc};

    use super::ScrollLock;

    // records every lock/unlock so tests can inspect the final state
    #[derive(Clone, Debug, Default)]
    pub struct RecordingLock {
        calls: Rc<RefCell<Vec<bool>>>,
    }

    impl RecordingLock {
        pub fn is_locked(&self) -> bool {
            self.calls.borrow().last().copied().unwrap_or(false)
        }

        pub fn calls(&self) -> Vec<bool> {
            self.calls.borrow().clone()
        }
    }

    impl ScrollLock for RecordingLock {
        fn lock(&mut self) {
            self.calls.borrow_mut().push(true);
        }

        fn unlock(&mut self) {
            self.calls.borrow_mut().push(false);
        }
    }
}
