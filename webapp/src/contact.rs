use std::rc::Rc;

use dioxus::prelude::*;

use folio_common::SectionId;

use crate::{
    common::site::Site,
    components::icons::{Icon, IconKind},
};

#[component]
pub fn ContactSection() -> Element {
    let site = use_context::<Rc<Site>>();
    let contact = &site.profile.contact;

    rsx! {
        section { id: SectionId::Contact.as_str(), class: "section contact",
            div { class: "contact-backdrop",
                div { class: "contact-blob blue pulse" }
                div { class: "contact-blob cyan pulse slow" }
            }
            div { class: "contact-inner",
                h2 { class: "section-title gradient-text contact-title rise", "{contact.title}" }
                p { class: "section-blurb centered rise delay-1", "{contact.blurb}" }

                div { class: "contact-cards rise delay-2",
                    div { class: "card contact-card",
                        p { class: "contact-label", "Role" }
                        p { class: "contact-value", "{contact.role}" }
                    }
                    div { class: "card contact-card",
                        p { class: "contact-label cyan", "Focus" }
                        p { class: "contact-value", "{contact.focus}" }
                    }
                }

                div { class: "contact-actions rise delay-3",
                    a {
                        class: "btn btn-primary btn-lg",
                        href: "mailto:{contact.email}",
                        Icon { kind: IconKind::Mail, size: 18 }
                        span { "Contact Me" }
                        span { class: "btn-bubble nudge",
                            Icon { kind: IconKind::ArrowRight, size: 18 }
                        }
                    }
                }
            }
        }
    }
}
