#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;

use tracing::Level;

mod common;
use common::site::Site;

mod components;

mod about;
mod contact;
mod home;
mod portfolio;
mod project;
mod skills;

use portfolio::Portfolio;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    // the site definition is compiled in, so a failure here is a packaging
    // mistake; show it rather than panicking inside the renderer
    let site = use_hook(|| {
        Site::load().map(Rc::new).map_err(|err| {
            tracing::error!("failed to load site definition: {err:#}");
            format!("{err:#}")
        })
    });

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        match site {
            Ok(site) => rsx! {
                Portfolio { site }
            },
            Err(err) => rsx! {
                div { class: "load-error", "{err}" }
            },
        }
    }
}
