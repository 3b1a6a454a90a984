use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent,
};

use crate::presentation::PresentationCore;

pub(crate) const REGION_MARKER_SELECTOR: &str = "[data-animate]";
pub(crate) const REGION_VISIBLE_THRESHOLD: f64 = 0.1;
pub(crate) const REGION_ROOT_MARGIN: &str = "50px";

// Global listeners for the two high-frequency streams. No throttling; the
// core drops writes that change nothing.
pub(crate) struct ViewportTracker {
    listeners: Vec<EventListener>,
}

impl ViewportTracker {
    pub(crate) fn install(core: &Rc<PresentationCore>) -> Option<Self> {
        let window = web_sys::window()?;
        let mut listeners = Vec::new();

        let core_for_scroll = Rc::clone(core);
        let window_for_scroll = window.clone();
        let listener = EventListener::new(&window, "scroll", move |_event: &Event| {
            let offset = window_for_scroll.scroll_y().unwrap_or(0.0);
            core_for_scroll.set_scroll(offset);
        });
        listeners.push(listener);

        let core_for_move = Rc::clone(core);
        let listener = EventListener::new(&window, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            core_for_move.set_pointer(event.client_x(), event.client_y());
        });
        listeners.push(listener);

        gloo::console::log!("trackers: viewport listeners installed");
        Some(Self { listeners })
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

// Marks a region the first time it intersects the viewport. Regions are
// discovered, never created, here; anything carrying the marker attribute
// and an id participates.
pub(crate) struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Vec<IntersectionObserverEntry>)>,
    observed: usize,
}

impl SectionObserver {
    pub(crate) fn connect(core: &Rc<PresentationCore>) -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let core_for_entries = Rc::clone(core);
        let callback = Closure::wrap(Box::new(move |entries: Vec<IntersectionObserverEntry>| {
            for entry in entries {
                if entry.is_intersecting() {
                    core_for_entries.mark_section_visible(&entry.target().id());
                }
            }
        }) as Box<dyn FnMut(Vec<IntersectionObserverEntry>)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REGION_VISIBLE_THRESHOLD));
        options.set_root_margin(REGION_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        let regions = document.query_selector_all(REGION_MARKER_SELECTOR).ok()?;
        let mut observed = 0;
        for index in 0..regions.length() {
            let Some(node) = regions.get(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<Element>() else {
                continue;
            };
            observer.observe(&element);
            observed += 1;
        }

        gloo::console::log!(format!("trackers: observing {observed} regions"));
        Some(Self {
            observer,
            _callback: callback,
            observed,
        })
    }

    pub(crate) fn observed_regions(&self) -> usize {
        self.observed
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
