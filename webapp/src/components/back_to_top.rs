use dioxus::prelude::*;

use crate::{
    common::controller::PageHandle,
    components::icons::{Icon, IconKind},
};

#[component]
pub fn BackToTop() -> Element {
    let handle = use_context::<PageHandle>();

    let class = match (handle.back_to_top_visible(), handle.launch_in_progress()) {
        (_, true) => "back-to-top visible launching",
        (true, false) => "back-to-top visible",
        (false, false) => "back-to-top",
    };

    rsx! {
        button {
            class,
            title: "Back to top",
            onclick: move |_| handle.return_to_top(),
            Icon { kind: IconKind::Rocket, size: 24 }
        }
    }
}
