// thin adapters between the page state and the browser
//
// every function here is best effort: a missing window/document or a failed dom
// call is logged and otherwise ignored
use gloo_console::error as console_error;
use web_sys::{ScrollBehavior, ScrollToOptions};

use folio_common::{ScrollLock, ScrollRequest, SectionGeometry, SectionId, Viewport};

// suspends page scroll by hiding overflow on <body>
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn set_overflow(value: Option<&str>) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };

        let style = body.style();
        let result = match value {
            Some(value) => style.set_property("overflow", value),
            None => style.remove_property("overflow").map(|_| ()),
        };

        if let Err(err) = result {
            console_error!(format!("failed to update body overflow: {err:?}"));
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&mut self) {
        Self::set_overflow(Some("hidden"));
    }

    fn unlock(&mut self) {
        Self::set_overflow(None);
    }
}

// adds or removes the theme class on <html>
pub fn apply_theme_marker(marker: Option<&str>) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let result = match marker {
        Some(marker) => classes.add_1(marker),
        None => classes.remove_1(folio_common::theme::DARK_MARKER),
    };

    if let Err(err) = result {
        console_error!(format!("failed to apply theme marker: {err:?}"));
    }
}

pub fn viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let height = window.inner_height().ok()?.as_f64()?;

    Some(Viewport::new(scroll_y, height))
}

// document-space position of the section's anchor element, if it is mounted
pub fn measure_section(section: SectionId) -> Option<SectionGeometry> {
    let window = web_sys::window()?;
    let element = window.document()?.get_element_by_id(section.as_str())?;

    let rect = element.get_bounding_client_rect();
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    Some(SectionGeometry::new(rect.top() + scroll_y, rect.height()))
}

pub fn smooth_scroll(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_now(request: ScrollRequest) {
    tracing::debug!({ top = request.top }, "smooth scroll");
    smooth_scroll(request.top);
}
