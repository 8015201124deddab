use std::rc::Rc;

use dioxus::prelude::*;

use folio_common::SectionId;

use crate::common::site::Site;

#[component]
pub fn AboutSection() -> Element {
    let site = use_context::<Rc<Site>>();
    let about = &site.profile.about;
    let headings = &site.profile.headings;

    rsx! {
        section { id: SectionId::About.as_str(), class: "section about fade-left",
            div { class: "about-grid",
                div { class: "about-image",
                    div { class: "about-image-glow" }
                    div { class: "about-image-frame",
                        img {
                            src: "{about.image}",
                            alt: "{about.image_alt}",
                            loading: "lazy",
                            decoding: "async",
                        }
                    }
                }
                div {
                    h2 { class: "section-title gradient-text", "{about.title}" }
                    for (i, paragraph) in about.paragraphs.iter().enumerate() {
                        p { key: "{i}", class: "about-text", "{paragraph}" }
                    }
                }
            }

            div { class: "timeline-block",
                h3 { class: "timeline-heading",
                    span { class: "timeline-bar" }
                    "{headings.education}"
                }
                div { class: "timeline",
                    for entry in site.profile.education.iter() {
                        div { key: "{entry.school}", class: "timeline-item",
                            div { class: "timeline-dot" }
                            div { class: "card timeline-card",
                                div { class: "timeline-card-header",
                                    div {
                                        h4 { class: "timeline-title", "{entry.school}" }
                                        p { class: "timeline-subtitle", "{entry.program}" }
                                    }
                                    div { class: "timeline-meta",
                                        span { class: "pill", "{entry.period}" }
                                        span { class: "timeline-status", "{entry.status}" }
                                    }
                                }
                                if !entry.skills.is_empty() {
                                    div { class: "timeline-tags",
                                        p { class: "tag-caption", "{headings.education_tags}" }
                                        div { class: "tag-list",
                                            for skill in entry.skills.iter() {
                                                span { key: "{skill}", class: "tag", "{skill}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
