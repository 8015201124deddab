use dioxus::prelude::*;

use folio_common::SectionId;

use crate::{
    common::controller::PageHandle,
    components::{
        icons::{Icon, IconKind},
        navigation::{NavLink, NavLinkStyle, SocialLinks},
    },
};

// mobile navigation drawer
//
// always mounted so the slide transition runs in both directions; the open class
// is the only thing that changes
#[component]
pub fn MobileSidebar() -> Element {
    let handle = use_context::<PageHandle>();
    let open = handle.menu_open();

    rsx! {
        div {
            class: if open { "sidebar-overlay open" } else { "sidebar-overlay" },
            onclick: move |_| handle.close_menu(),
        }
        aside { class: if open { "sidebar open" } else { "sidebar" },
            div { class: "sidebar-content",
                div { class: "sidebar-header",
                    button {
                        class: "sidebar-close",
                        title: "Close menu",
                        onclick: move |_| handle.close_menu(),
                        Icon { kind: IconKind::X, size: 24 }
                    }
                }

                div { class: "sidebar-body",
                    for section in SectionId::ALL {
                        NavLink {
                            key: "{section}",
                            section,
                            style: NavLinkStyle::Sidebar,
                        }
                    }
                }

                div { class: "sidebar-footer",
                    p { class: "sidebar-caption", "Let's Connect" }
                    div { class: "sidebar-socials",
                        SocialLinks { size: 24 }
                    }
                }
            }
        }
    }
}
