use std::rc::Rc;

use chrono::Datelike;
use dioxus::prelude::*;

use crate::{
    about::AboutSection,
    common::{controller::PageHandle, listener::WindowListener, platform, site::Site},
    components::{back_to_top::BackToTop, navigation::NavBar, sidebar::MobileSidebar},
    contact::ContactSection,
    home::HomeSection,
    project::ProjectSection,
    skills::SkillsSection,
};

// listeners that must go away with the page
struct PageListeners {
    _scroll: Option<WindowListener>,
    _resize: Option<WindowListener>,
}

#[component]
pub fn Portfolio(site: Rc<Site>) -> Element {
    let config = site.config.clone();
    let handle = use_context_provider(|| PageHandle::new(config));
    use_context_provider(|| site.clone());

    // mirror the theme onto the document root
    use_effect(move || {
        platform::apply_theme_marker(handle.theme_marker());
    });

    let _listeners = use_hook(move || {
        Rc::new(PageListeners {
            _scroll: WindowListener::new("scroll", move |_| handle.on_scroll()),
            _resize: WindowListener::new("resize", move |_| handle.refresh()),
        })
    });

    // all five sections are in the dom once the first render has been applied
    use_effect(move || {
        handle.refresh();
    });

    use_drop(move || handle.teardown());

    let year = chrono::Local::now().year();
    let footer = site.profile.footer.clone();

    rsx! {
        div { class: "page",
            NavBar {}
            MobileSidebar {}

            main { class: "container",
                HomeSection {}
                AboutSection {}
                SkillsSection {}
                ProjectSection {}
                ContactSection {}
            }

            footer { class: "page-footer",
                div { class: "container footer-inner",
                    p { class: "footer-line", "{footer}" }
                    span { class: "footer-rule" }
                    p { class: "footer-copy", "© {year} • Built with Rust & Dioxus" }
                }
            }

            BackToTop {}
        }
    }
}
