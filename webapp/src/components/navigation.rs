use std::rc::Rc;

use dioxus::prelude::*;

use folio_common::SectionId;

use crate::{
    common::{controller::PageHandle, site::Site},
    components::icons::{Icon, IconKind},
};

#[derive(Clone, Copy, Default, PartialEq)]
pub enum NavLinkStyle {
    #[default]
    Bar,
    Sidebar,
}

#[derive(Clone, PartialEq, Props)]
pub struct NavLinkProps {
    section: SectionId,
    #[props(default)]
    style: NavLinkStyle,
}

#[component]
pub fn NavLink(props: NavLinkProps) -> Element {
    let handle = use_context::<PageHandle>();
    let section = props.section;
    let active = handle.active_section() == section;

    let class = match (props.style, active) {
        (NavLinkStyle::Bar, true) => "nav-link active",
        (NavLinkStyle::Bar, false) => "nav-link",
        (NavLinkStyle::Sidebar, true) => "sidebar-link active",
        (NavLinkStyle::Sidebar, false) => "sidebar-link",
    };

    rsx! {
        a {
            class,
            href: section.href(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                handle.navigate(section.as_str());
            },
            "{section.label()}"
            if props.style == NavLinkStyle::Bar {
                span { class: if active { "nav-underline active" } else { "nav-underline" } }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SocialLinksProps {
    #[props(default = 20)]
    size: u32,
}

#[component]
pub fn SocialLinks(props: SocialLinksProps) -> Element {
    let site = use_context::<Rc<Site>>();

    rsx! {
        for social in site.profile.socials.iter() {
            a {
                key: "{social.url}",
                class: "social-link social-{social.kind:?}",
                href: "{social.url}",
                target: "_blank",
                rel: "noreferrer",
                Icon { kind: IconKind::from(social.kind), size: props.size }
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let handle = use_context::<PageHandle>();

    rsx! {
        button {
            class: "theme-toggle",
            title: "Toggle theme",
            onclick: move |_| handle.toggle_theme(),
            if handle.theme().is_dark() {
                Icon { kind: IconKind::Sun }
            } else {
                Icon { kind: IconKind::Moon }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let handle = use_context::<PageHandle>();
    let site = use_context::<Rc<Site>>();

    rsx! {
        nav { class: "app-header",
            div { class: "container nav-container",
                a {
                    class: "logo",
                    href: SectionId::Home.href(),
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        handle.navigate(SectionId::Home.as_str());
                    },
                    img { src: "{site.profile.logo}", alt: "Logo" }
                }

                div { class: "nav-desktop",
                    div { class: "nav-links",
                        for section in SectionId::ALL {
                            NavLink { key: "{section}", section }
                        }
                    }
                    div { class: "nav-actions",
                        SocialLinks {}
                        ThemeToggle {}
                    }
                }

                div { class: "nav-mobile",
                    ThemeToggle {}
                    button {
                        class: "menu-button",
                        title: "Open menu",
                        onclick: move |_| handle.open_menu(),
                        Icon { kind: IconKind::Menu, size: 28 }
                    }
                }
            }
        }
    }
}
