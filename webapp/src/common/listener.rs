use gloo_console::error as console_error;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::Event;

// a window event listener that is removed again when dropped
//
// keep it in a hook so the listener lives exactly as long as the component
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(callback);

        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            console_error!(format!("failed to add {event} listener: {err:?}"));
            return None;
        }

        tracing::debug!("registered window {event} listener");
        Some(WindowListener { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        if let Err(err) = window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            console_error!(format!("failed to remove {} listener: {err:?}", self.event));
        }
    }
}
