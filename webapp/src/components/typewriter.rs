use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use folio_common::{config::TypewriterConfig, typewriter::Typewriter};

use crate::common::millis;

#[derive(Clone, PartialEq, Props)]
pub struct TypingTextProps {
    phrases: Vec<String>,
    timing: TypewriterConfig,
}

#[component]
pub fn TypingText(props: TypingTextProps) -> Element {
    let mut text = use_signal(String::new);

    use_future(move || {
        let phrases = props.phrases.clone();
        let timing = props.timing;
        async move {
            let mut typewriter = Typewriter::new(phrases, timing);
            loop {
                let delay = typewriter.tick();
                text.set(typewriter.text().to_owned());
                TimeoutFuture::new(millis(delay)).await;
            }
        }
    });

    rsx! {
        span { class: "typing",
            "{text}"
            span { class: "typing-caret", "|" }
        }
    }
}
