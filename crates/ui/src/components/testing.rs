//! Headless rendering and event helpers shared by the component tests

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use dioxus::dioxus_core::{AttributeValue, ElementId, Mutation, Mutations};
use dioxus::html::{
    PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData, set_event_converter,
};
use dioxus::prelude::*;

thread_local! {
    static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

/// Record a callback by name
pub fn record(name: &'static str) {
    CALLS.with(|calls| calls.borrow_mut().push(name));
}

/// Callbacks recorded on this thread since the last call, oldest first
pub fn take_calls() -> Vec<&'static str> {
    CALLS.with(|calls| std::mem::take(&mut *calls.borrow_mut()))
}

/// Render `app` to HTML
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// A live dom plus the edits of its first build
pub struct Mounted {
    pub dom: VirtualDom,
    pub edits: Vec<Mutation>,
}

impl Mounted {
    pub fn new(app: fn() -> Element) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        take_calls();

        let mut dom = VirtualDom::new(app);
        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);
        Self {
            dom,
            edits: mutations.edits,
        }
    }

    /// Element whose `attr` holds `token` as one of its whitespace-separated words
    pub fn element(&self, attr: &str, token: &str) -> ElementId {
        self.edits
            .iter()
            .find_map(|edit| match edit {
                Mutation::SetAttribute {
                    name,
                    value: AttributeValue::Text(text),
                    id,
                    ..
                } if *name == attr && text.split_whitespace().any(|word| word == token) => {
                    Some(*id)
                }
                _ => None,
            })
            .unwrap_or_else(|| panic!("no element with {attr} containing {token}"))
    }

    /// Whether `id` registered a listener for `event`
    pub fn listens(&self, id: ElementId, event: &str) -> bool {
        self.edits.iter().any(|edit| {
            matches!(
                edit,
                Mutation::NewEventListener { name, id: target } if name == event && *target == id
            )
        })
    }

    /// Deliver a bubbling mouse event of type `name` to `id`
    pub fn mouse(&mut self, name: &str, id: ElementId) {
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event(name, event, id);
        self.dom.render_immediate(&mut Mutations::default());
    }

    pub fn click(&mut self, id: ElementId) {
        self.mouse("click", id);
    }
}
