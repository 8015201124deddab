use dioxus::prelude::*;

use folio_common::profile::SocialKind;

// stroke icons on a 24x24 grid, drawn as single paths
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconKind {
    ArrowRight,
    Download,
    Github,
    Instagram,
    Linkedin,
    Mail,
    Menu,
    MessageCircle,
    Moon,
    Rocket,
    Sun,
    X,
}

impl IconKind {
    fn path(self) -> &'static str {
        match self {
            IconKind::ArrowRight => "M5 12h14M12 5l7 7-7 7",
            IconKind::Download => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3",
            IconKind::Github => {
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4M9 18c-4.51 2-5-2-7-2"
            }
            IconKind::Instagram => {
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zM16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37zM17.5 6.5h.01"
            }
            IconKind::Linkedin => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 1 0 4 2 2 0 1 1 0-4z"
            }
            IconKind::Mail => "M22 6 12 13 2 6M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            IconKind::Menu => "M4 6h16M4 12h16M4 18h16",
            IconKind::MessageCircle => "M7.9 20A9 9 0 1 0 4 16.1L2 22Z",
            IconKind::Moon => "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z",
            IconKind::Rocket => {
                "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09zM12 15l-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2zM9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"
            }
            IconKind::Sun => {
                "M12 8a4 4 0 1 0 0 8 4 4 0 1 0 0-8zM12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41"
            }
            IconKind::X => "M18 6 6 18M6 6l12 12",
        }
    }
}

impl From<SocialKind> for IconKind {
    fn from(kind: SocialKind) -> Self {
        match kind {
            SocialKind::Linkedin => IconKind::Linkedin,
            SocialKind::Instagram => IconKind::Instagram,
            SocialKind::Whatsapp => IconKind::MessageCircle,
            SocialKind::Github => IconKind::Github,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    kind: IconKind,
    #[props(default = 20)]
    size: u32,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: props.kind.path() }
        }
    }
}
