use std::rc::Rc;

use dioxus::prelude::*;

use folio_common::SectionId;

use crate::{
    common::{controller::PageHandle, site::Site},
    components::{
        icons::{Icon, IconKind},
        typewriter::TypingText,
    },
};

#[component]
pub fn HomeSection() -> Element {
    let handle = use_context::<PageHandle>();
    let site = use_context::<Rc<Site>>();
    let profile = &site.profile;

    rsx! {
        section { id: SectionId::Home.as_str(), class: "section hero zoom-in",
            div { class: "hero-grid",
                // left column
                div { class: "hero-content fade-left",
                    div { class: "badge", "{profile.badge}" }
                    p { class: "hero-greeting", "{profile.greeting}" }
                    h1 { class: "hero-title",
                        span { class: "gradient-text", "{profile.name}" }
                    }
                    div { class: "hero-roles",
                        TypingText {
                            phrases: profile.roles.clone(),
                            timing: site.config.typewriter,
                        }
                    }
                    p { class: "hero-intro", "{profile.intro}" }
                    div { class: "hero-actions",
                        a {
                            class: "btn btn-primary btn-lg",
                            href: SectionId::Contact.href(),
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                handle.navigate(SectionId::Contact.as_str());
                            },
                            span { "Let’s Talk" }
                            span { class: "btn-bubble nudge",
                                Icon { kind: IconKind::ArrowRight }
                            }
                        }
                        a {
                            class: "btn-link",
                            href: "{profile.cv}",
                            target: "_blank",
                            Icon { kind: IconKind::Download, size: 18 }
                            span { "Download CV" }
                        }
                    }
                }

                // right column
                div { class: "hero-portrait",
                    div { class: "portrait-glow pulse" }
                    div { class: "portrait-ring float",
                        img {
                            src: "{profile.avatar}",
                            alt: "Profile",
                            loading: "lazy",
                            decoding: "async",
                        }
                    }
                }
            }
        }
    }
}
