use std::cell::RefCell;
use std::rc::Rc;

use elfolio_core::{
    particle_field, splitmix64, ContactForm, FormField, ParticleSpec, VisibilitySet, PARTICLE_COUNT,
};

pub(crate) type PageSubscriber = Rc<dyn Fn()>;

// One owner for every mutable page value. Each value has a single writer
// path (its mutator below); the view only ever reads snapshots.
pub(crate) struct PresentationCore {
    particles: Vec<ParticleSpec>,
    state: RefCell<PageState>,
    subscribers: Rc<RefCell<Vec<PageSubscriber>>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PointerState {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

struct PageState {
    pointer: PointerState,
    scroll_y: f64,
    visibility: VisibilitySet,
    form: ContactForm,
    preview: Option<String>,
}

impl PageState {
    fn new() -> Self {
        Self {
            pointer: PointerState::default(),
            scroll_y: 0.0,
            visibility: VisibilitySet::new(),
            form: ContactForm::new(),
            preview: None,
        }
    }
}

#[derive(Clone)]
pub(crate) struct PageSnapshot {
    pub(crate) pointer: PointerState,
    pub(crate) scroll_y: f64,
    pub(crate) visibility: VisibilitySet,
    pub(crate) form: ContactForm,
    pub(crate) preview: Option<String>,
}

impl PresentationCore {
    pub(crate) fn new() -> Rc<Self> {
        Self::with_seed(seed_nonce(0))
    }

    pub(crate) fn with_seed(seed: u64) -> Rc<Self> {
        Rc::new(Self {
            particles: particle_field(PARTICLE_COUNT, seed),
            state: RefCell::new(PageState::new()),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    // The field is generated once per page view and never reseeded.
    pub(crate) fn particles(&self) -> &[ParticleSpec] {
        &self.particles
    }

    pub(crate) fn subscribe(&self, subscriber: PageSubscriber) -> PageSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        PageSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    pub(crate) fn snapshot(&self) -> PageSnapshot {
        let state = self.state.borrow();
        PageSnapshot {
            pointer: state.pointer,
            scroll_y: state.scroll_y,
            visibility: state.visibility.clone(),
            form: state.form.clone(),
            preview: state.preview.clone(),
        }
    }

    pub(crate) fn set_pointer(&self, x: i32, y: i32) {
        let mut state = self.state.borrow_mut();
        let pointer = PointerState { x, y };
        if state.pointer == pointer {
            return;
        }
        state.pointer = pointer;
        drop(state);
        self.notify();
    }

    pub(crate) fn set_scroll(&self, offset: f64) {
        let mut state = self.state.borrow_mut();
        if (state.scroll_y - offset).abs() <= f64::EPSILON {
            return;
        }
        state.scroll_y = offset;
        drop(state);
        self.notify();
    }

    pub(crate) fn mark_section_visible(&self, region_id: &str) {
        let mut state = self.state.borrow_mut();
        if !state.visibility.mark(region_id) {
            return;
        }
        drop(state);
        self.notify();
    }

    pub(crate) fn set_form_field(&self, field: FormField, value: String) {
        let mut state = self.state.borrow_mut();
        if state.form.field(field) == value {
            return;
        }
        state.form = state.form.with_field(field, value);
        drop(state);
        self.notify();
    }

    pub(crate) fn form(&self) -> ContactForm {
        self.state.borrow().form.clone()
    }

    pub(crate) fn open_preview(&self, src: String) {
        let mut state = self.state.borrow_mut();
        if state.preview.as_deref() == Some(src.as_str()) {
            return;
        }
        state.preview = Some(src);
        drop(state);
        self.notify();
    }

    pub(crate) fn close_preview(&self) {
        let mut state = self.state.borrow_mut();
        if state.preview.is_none() {
            return;
        }
        state.preview = None;
        drop(state);
        self.notify();
    }
}

pub(crate) struct PageSubscription {
    subscriber: PageSubscriber,
    subscribers: Rc<RefCell<Vec<PageSubscriber>>>,
}

impl Drop for PageSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

fn seed_nonce(previous: u64) -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now() as u64;
        return splitmix64(now ^ previous.wrapping_add(0x9e37_79b9_7f4a_7c15));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|duration| duration.as_millis() as u64)
            .unwrap_or(0);
        return splitmix64(now ^ previous.wrapping_add(0x9e37_79b9_7f4a_7c15));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn notifies_each_live_subscriber_once_per_change() {
        let core = PresentationCore::with_seed(1);
        let count = Rc::new(Cell::new(0u32));
        let count_in_cb = count.clone();
        let subscription = core.subscribe(Rc::new(move || {
            count_in_cb.set(count_in_cb.get() + 1);
        }));

        core.set_scroll(120.0);
        assert_eq!(count.get(), 1);
        core.set_scroll(120.0);
        assert_eq!(count.get(), 1, "unchanged write must not notify");

        drop(subscription);
        core.set_scroll(240.0);
        assert_eq!(count.get(), 1, "dropped subscription must not fire");
        assert_eq!(core.snapshot().scroll_y, 240.0);
    }

    #[wasm_bindgen_test]
    fn pointer_and_scroll_are_last_write_wins() {
        let core = PresentationCore::with_seed(1);
        core.set_pointer(10, 20);
        core.set_pointer(300, 400);
        core.set_scroll(55.0);
        let snapshot = core.snapshot();
        assert_eq!(snapshot.pointer, PointerState { x: 300, y: 400 });
        assert_eq!(snapshot.scroll_y, 55.0);
    }

    #[wasm_bindgen_test]
    fn visibility_marks_are_monotonic_and_silent_when_repeated() {
        let core = PresentationCore::with_seed(1);
        let count = Rc::new(Cell::new(0u32));
        let count_in_cb = count.clone();
        let _subscription = core.subscribe(Rc::new(move || {
            count_in_cb.set(count_in_cb.get() + 1);
        }));

        core.mark_section_visible("about");
        core.mark_section_visible("about");
        core.mark_section_visible("contact");
        let snapshot = core.snapshot();
        assert!(snapshot.visibility.contains("about"));
        assert!(snapshot.visibility.contains("contact"));
        assert_eq!(snapshot.visibility.len(), 2);
        assert_eq!(count.get(), 2);
    }

    #[wasm_bindgen_test]
    fn form_field_writes_go_through_snapshots() {
        let core = PresentationCore::with_seed(1);
        core.set_form_field(FormField::Name, "Ada".to_string());
        core.set_form_field(FormField::Message, "Hi".to_string());
        let form = core.form();
        assert_eq!(form.name, "Ada");
        assert_eq!(form.message, "Hi");
        assert_eq!(form.email, "");
        assert_eq!(form.company, "");
        assert_eq!(form.inquiry_type, "");
    }

    #[wasm_bindgen_test]
    fn preview_replaces_without_stacking() {
        let core = PresentationCore::with_seed(1);
        core.open_preview("/iosh-certificate.jpg".to_string());
        core.open_preview("/certificate.jpg".to_string());
        assert_eq!(
            core.snapshot().preview.as_deref(),
            Some("/certificate.jpg")
        );
        core.close_preview();
        assert_eq!(core.snapshot().preview, None);
        core.close_preview();
        assert_eq!(core.snapshot().preview, None);
    }

    #[wasm_bindgen_test]
    fn particle_field_is_fixed_for_the_core_lifetime() {
        let core = PresentationCore::with_seed(9);
        assert_eq!(core.particles().len(), PARTICLE_COUNT);
        let first: Vec<ParticleSpec> = core.particles().to_vec();
        core.set_scroll(999.0);
        assert_eq!(core.particles(), first.as_slice());
    }

    #[wasm_bindgen_test]
    fn seed_nonce_varies_between_calls() {
        let first = seed_nonce(0);
        let second = seed_nonce(first);
        assert_ne!(first, second);
    }
}
