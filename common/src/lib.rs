// page state for the portfolio webapp
//
// nothing in this crate touches the dom: the webapp measures sections, forwards
// events, and executes the scroll requests and timers handed back from here.
// that keeps every state transition testable on the host

pub mod config;
pub mod navigator;
pub mod observer;
pub mod page;
pub mod profile;
pub mod section;
pub mod theme;
pub mod tracker;
pub mod typewriter;
pub mod ui;

pub use config::{SiteConfig, parse_config};
pub use navigator::ScrollRequest;
pub use observer::Viewport;
pub use page::PageState;
pub use profile::{Profile, parse_profile};
pub use section::{SectionGeometry, SectionId};
pub use theme::Theme;
pub use ui::{LaunchTicket, ScrollLock};
