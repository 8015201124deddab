use std::rc::Rc;

use dioxus::prelude::*;

use folio_common::{SectionId, profile::Project};

use crate::{
    common::site::Site,
    components::icons::{Icon, IconKind},
};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let link = project.link.clone().unwrap_or_else(|| String::from("#project"));

    rsx! {
        div { class: "card project-card lift",
            div { class: "project-wash" }
            div { class: "project-body",
                div { class: "project-header",
                    div { class: "project-logo",
                        img { src: "{project.logo}", alt: "Project Type" }
                    }
                    div { class: "tag-list end",
                        for tag in project.tags.iter() {
                            span { key: "{tag}", class: "tag small", "{tag}" }
                        }
                    }
                }
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-desc", "{project.description}" }
                div { class: "project-footer",
                    a { class: "btn-link primary", href: "{link}", target: "_blank",
                        "View Project"
                        Icon { kind: IconKind::ArrowRight, size: 16 }
                    }
                    div { class: "project-rule" }
                    Icon { kind: IconKind::Github, size: 18 }
                }
            }
        }
    }
}

#[component]
pub fn ProjectSection() -> Element {
    let site = use_context::<Rc<Site>>();
    let headings = &site.profile.headings;

    rsx! {
        section { id: SectionId::Project.as_str(), class: "section projects rise",
            div { class: "projects-header",
                div {
                    h2 { class: "section-title gradient-text", "{headings.projects}" }
                    p { class: "section-blurb", "{headings.projects_blurb}" }
                }
                div { class: "projects-rule" }
            }
            div { class: "projects-grid",
                for project in site.profile.projects.iter() {
                    ProjectCard { key: "{project.title}", project: project.clone() }
                }
            }
        }
    }
}
