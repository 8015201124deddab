use std::rc::Rc;

use dioxus::prelude::*;

use folio_common::SectionId;

use crate::common::site::Site;

// cards rise in one after another
const STAGGER_MS: usize = 80;

#[component]
pub fn SkillsSection() -> Element {
    let site = use_context::<Rc<Site>>();
    let profile = &site.profile;
    let headings = &profile.headings;

    rsx! {
        section { id: SectionId::Skills.as_str(), class: "section skills",
            h2 { class: "section-title gradient-text centered", "{headings.skills}" }
            p { class: "section-blurb centered", "{headings.skills_blurb}" }

            div { class: "skills-grid",
                for (i, skill) in profile.skills.iter().enumerate() {
                    div {
                        key: "{skill.name}",
                        class: "card skill-card rise",
                        style: "--accent-from: {skill.accent[0]}; --accent-to: {skill.accent[1]}; animation-delay: {i * STAGGER_MS}ms;",
                        div { class: "skill-glow" }
                        div { class: "skill-icon",
                            img { src: "{skill.icon}", alt: "{skill.name}" }
                        }
                        span { class: "skill-name", "{skill.name}" }
                        div { class: "skill-bar" }
                    }
                }
            }

            div { class: "timeline-block",
                h3 { class: "timeline-heading",
                    span { class: "timeline-bar accent" }
                    "{headings.internships}"
                }
                div { class: "timeline",
                    for internship in profile.internships.iter() {
                        div { key: "{internship.company}", class: "timeline-item",
                            div { class: "timeline-dot accent" }
                            div { class: "card timeline-card",
                                div { class: "timeline-card-header",
                                    div {
                                        h4 { class: "timeline-title", "{internship.company}" }
                                        p { class: "timeline-subtitle", "{internship.role}" }
                                    }
                                    div { class: "timeline-meta",
                                        span { class: "pill accent", "{internship.period}" }
                                        span { class: "timeline-status", "{internship.duration}" }
                                    }
                                }
                                if !internship.highlights.is_empty() {
                                    div { class: "timeline-tags",
                                        p { class: "tag-caption", "{headings.internship_tags}" }
                                        div { class: "tag-list",
                                            for item in internship.highlights.iter() {
                                                span { key: "{item}", class: "tag", "{item}" }
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
