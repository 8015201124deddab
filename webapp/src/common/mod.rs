pub mod controller;
pub mod listener;
pub mod platform;
pub mod site;
pub mod style;

use std::time::Duration;

// gloo timers take u32 milliseconds
pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
