//! Browser bindings: discovers `data-carousel` roots and drives one [`Controller`] per root.
//!
//! Listener closures live as long as the page (`Closure::forget`); carousels have no teardown.

use std::cell::RefCell;
use std::rc::Rc;

use carousel::{Bounds, Input, Key, Layout, RESIZE_DEBOUNCE_MS, Response};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent,
    MouseEvent, TouchEvent, Window,
};

use crate::markup::{
    ACTIVE_CLASS, INDICATOR_CLASS, Selectors, track_transform, track_transition,
};
use crate::{Controller, Mounted, RootParts, attach_all};


struct Instance {
    mounted: Mounted<HtmlElement>,
    indicators: Vec<HtmlElement>,
    resize_timer: Option<i32>,
}

type Shared = Rc<RefCell<Instance>>;

struct DomLayout<'a> {
    viewport: &'a HtmlElement,
    slides: &'a [HtmlElement],
}

impl Layout for DomLayout<'_> {
    fn viewport(&self) -> Bounds {
        bounds(self.viewport)
    }

    fn slide(&self, index: usize) -> Option<Bounds> {
        self.slides.get(index).map(|s| bounds(s))
    }
}

fn bounds(el: &Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds::new(rect.left() as f32, rect.width() as f32)
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn now_ms() -> u64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() as u64)
        .unwrap_or(0)
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        awarn!(error = ?err, "carousel DOM update failed");
        web_sys::console::warn_1(&err);
    }
}

/// Runs the module's start-up: attach once the document's structure has been parsed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let document = document()?;
    if document.ready_state() != "loading" {
        return attach().map(|_| ());
    }
    let on_ready = Closure::once_into_js(|| report(attach().map(|_| ())));
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

/// Mounts every carousel root in the document. Returns how many were wired.
#[wasm_bindgen]
pub fn attach() -> Result<usize, JsValue> {
    attach_with(&Selectors::default())
}

/// Like [`attach`], with custom selectors.
pub fn attach_with(selectors: &Selectors) -> Result<usize, JsValue> {
    attach_in(&document()?, selectors).map(|wired| wired.len())
}

fn attach_in(document: &Document, selectors: &Selectors) -> Result<Vec<Shared>, JsValue> {
    let nodes = document.query_selector_all(selectors.root)?;
    let roots = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|root| find_parts(selectors, root))
        .collect::<Result<Vec<_>, JsValue>>()?;

    let wired = attach_all(roots, |options| options)
        .into_iter()
        .filter_map(|mounted| wire(document, mounted).map_err(|err| report(Err(err))).ok())
        .collect();
    Ok(wired)
}

fn find_parts(selectors: &Selectors, root: HtmlElement) -> Result<RootParts<HtmlElement>, JsValue> {
    let find = |selector: &str| -> Result<Option<HtmlElement>, JsValue> {
        Ok(root
            .query_selector(selector)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
    };
    let nodes = root.query_selector_all(selectors.slide)?;
    let slides = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();

    Ok(RootParts {
        track: find(selectors.track)?,
        viewport: find(selectors.viewport)?,
        slides,
        prev_button: find(selectors.prev_button)?,
        next_button: find(selectors.next_button)?,
        indicator_container: find(selectors.indicator_container)?,
        root,
    })
}

fn wire(document: &Document, mut mounted: Mounted<HtmlElement>) -> Result<Shared, JsValue> {
    let window = window()?;
    let indicators = match &mounted.indicator_container {
        Some(container) => build_indicators(document, container, &mounted.controller)?,
        None => Vec::new(),
    };
    let start = mounted.controller.start();

    let root: EventTarget = mounted.root.clone().into();
    let viewport: EventTarget = mounted.viewport.clone().into();
    let prev_button = mounted.prev_button.clone();
    let next_button = mounted.next_button.clone();
    let instance: Shared = Rc::new(RefCell::new(Instance {
        mounted,
        indicators: indicators.clone(),
        resize_timer: None,
    }));

    let mut listeners = Listeners::default();
    if let Some(button) = &prev_button {
        let inst = Rc::clone(&instance);
        listeners.on(button, "click", move |_| {
            dispatch(&inst, |c| c.on_input(Input::Prev))
        });
    }
    if let Some(button) = &next_button {
        let inst = Rc::clone(&instance);
        listeners.on(button, "click", move |_| {
            dispatch(&inst, |c| c.on_input(Input::Next))
        });
    }
    for (i, dot) in indicators.iter().enumerate() {
        let inst = Rc::clone(&instance);
        listeners.on(dot, "click", move |_| dispatch(&inst, |c| c.on_indicator(i)));
    }

    {
        let inst = Rc::clone(&instance);
        listeners.on(&root, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = Key::from_name(&event.key());
            dispatch(&inst, |c| c.on_key(key));
        });
    }

    {
        let inst = Rc::clone(&instance);
        listeners.on(&viewport, "mousedown", move |event| {
            if let Some(x) = mouse_x(&event) {
                dispatch(&inst, |c| c.on_input(Input::DragStart(x)));
            }
        });
    }
    {
        let inst = Rc::clone(&instance);
        listeners.on(&viewport, "mousemove", move |event| {
            if let Some(x) = mouse_x(&event) {
                dispatch(&inst, |c| c.on_input(Input::DragMove(x)));
            }
        });
    }
    {
        // Released anywhere in the window, so a drag ends even outside the viewport.
        let inst = Rc::clone(&instance);
        listeners.on(&window, "mouseup", move |event| {
            if let Some(x) = mouse_x(&event) {
                dispatch(&inst, |c| c.on_input(Input::DragEnd(x)));
            }
        });
    }

    {
        let inst = Rc::clone(&instance);
        listeners.on_passive(&viewport, "touchstart", move |event| {
            if let Some(x) = touch_x(&event, false) {
                dispatch(&inst, |c| c.on_input(Input::DragStart(x)));
            }
        });
    }
    {
        let inst = Rc::clone(&instance);
        listeners.on_passive(&viewport, "touchmove", move |event| {
            if let Some(x) = touch_x(&event, false) {
                dispatch(&inst, |c| c.on_input(Input::DragMove(x)));
            }
        });
    }
    {
        let inst = Rc::clone(&instance);
        listeners.on(&viewport, "touchend", move |event| {
            if let Some(x) = touch_x(&event, true) {
                dispatch(&inst, |c| c.on_input(Input::DragEnd(x)));
            }
        });
    }

    {
        let inst = Rc::clone(&instance);
        listeners.on(&window, "resize", move |_| {
            let now_ms = now_ms();
            dispatch(&inst, |c| c.on_input(Input::Resize { now_ms }));
        });
    }

    // A root is either fully wired or left as it was found.
    if let Err(err) = listeners.register().and_then(|()| apply(&instance, start)) {
        listeners.unregister();
        for dot in &indicators {
            dot.remove();
        }
        return Err(err);
    }
    listeners.forget();
    Ok(instance)
}

fn build_indicators(
    document: &Document,
    container: &HtmlElement,
    controller: &Controller,
) -> Result<Vec<HtmlElement>, JsValue> {
    container.set_inner_html("");
    let indicators = controller.carousel().indicators();
    (0..indicators.len())
        .map(|i| build_indicator(document, container, indicators.label(i).unwrap_or_default()))
        .collect()
}

fn build_indicator(
    document: &Document,
    container: &HtmlElement,
    label: &str,
) -> Result<HtmlElement, JsValue> {
    let button = document
        .create_element("button")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("button is not an HtmlElement"))?;
    button.set_attribute("type", "button")?;
    button.set_class_name(INDICATOR_CLASS);
    button.set_attribute("aria-label", label)?;
    container.append_child(&button)?;
    Ok(button)
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    passive: bool,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn add(&self) -> Result<(), JsValue> {
        let callback = self.closure.as_ref().unchecked_ref();
        if self.passive {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            self.target
                .add_event_listener_with_callback_and_add_event_listener_options(
                    self.kind, callback, &options,
                )
        } else {
            self.target
                .add_event_listener_with_callback(self.kind, callback)
        }
    }

    fn remove(&self) {
        let callback = self.closure.as_ref().unchecked_ref();
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, callback);
    }
}

/// Listeners for one root, built up front and registered together.
#[derive(Default)]
struct Listeners {
    pending: Vec<Listener>,
    registered: usize,
}

impl Listeners {
    fn on(&mut self, target: &EventTarget, kind: &'static str, handler: impl FnMut(Event) + 'static) {
        self.push(target, kind, false, handler);
    }

    fn on_passive(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) {
        self.push(target, kind, true, handler);
    }

    fn push(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) {
        self.pending.push(Listener {
            target: target.clone(),
            kind,
            passive,
            closure: Closure::<dyn FnMut(Event)>::new(handler),
        });
    }

    fn register(&mut self) -> Result<(), JsValue> {
        while let Some(listener) = self.pending.get(self.registered) {
            listener.add()?;
            self.registered += 1;
        }
        Ok(())
    }

    fn unregister(&mut self) {
        for listener in &self.pending[..self.registered] {
            listener.remove();
        }
        self.registered = 0;
    }

    /// Keeps every closure alive for the rest of the page.
    fn forget(self) {
        for listener in self.pending {
            listener.closure.forget();
        }
    }
}

fn mouse_x(event: &Event) -> Option<f32> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|e| e.client_x() as f32)
}

/// `changed` reads `changedTouches` (needed on `touchend`, where `touches` is empty).
fn touch_x(event: &Event, changed: bool) -> Option<f32> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let list = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    list.get(0).map(|t| t.client_x() as f32)
}

fn dispatch(instance: &Shared, f: impl FnOnce(&mut Controller) -> Response) {
    let response = f(&mut instance.borrow_mut().mounted.controller);
    report(apply(instance, response));
}

fn apply(instance: &Shared, response: Response) -> Result<(), JsValue> {
    if response.is_empty() {
        return Ok(());
    }
    {
        let inst = instance.borrow();
        let carousel = inst.mounted.controller.carousel();
        if response.active.is_some() {
            for (i, slide) in inst.mounted.slides.iter().enumerate() {
                slide
                    .class_list()
                    .toggle_with_force(ACTIVE_CLASS, carousel.is_slide_active(i))?;
            }
            for (i, dot) in inst.indicators.iter().enumerate() {
                dot.class_list()
                    .toggle_with_force(ACTIVE_CLASS, carousel.indicators().is_active(i))?;
            }
        }
        let style = inst.mounted.track.style();
        if let Some(offset) = response.offset {
            style.set_property("transform", &track_transform(offset))?;
        }
        if let Some(enabled) = response.transition {
            style.set_property("transition", track_transition(enabled))?;
        }
    }
    if response.request_frame {
        request_frame(instance)?;
    }
    if response.arm_resize_timer {
        arm_resize_timer(instance)?;
    }
    Ok(())
}

fn request_frame(instance: &Shared) -> Result<(), JsValue> {
    let inst = Rc::clone(instance);
    let on_frame = Closure::once_into_js(move || {
        let response = {
            let mut guard = inst.borrow_mut();
            let state = &mut *guard;
            let layout = DomLayout {
                viewport: &state.mounted.viewport,
                slides: &state.mounted.slides,
            };
            state.mounted.controller.on_frame(&layout)
        };
        report(apply(&inst, response));
    });
    window()?.request_animation_frame(on_frame.unchecked_ref())?;
    Ok(())
}

fn arm_resize_timer(instance: &Shared) -> Result<(), JsValue> {
    let window = window()?;
    if let Some(handle) = instance.borrow_mut().resize_timer.take() {
        window.clear_timeout_with_handle(handle);
    }
    let inst = Rc::clone(instance);
    let on_timeout = Closure::once_into_js(move || {
        let response = {
            let mut guard = inst.borrow_mut();
            guard.resize_timer = None;
            guard.mounted.controller.on_resize_timer()
        };
        report(apply(&inst, response));
    });
    let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        on_timeout.unchecked_ref(),
        RESIZE_DEBOUNCE_MS as i32,
    )?;
    instance.borrow_mut().resize_timer = Some(handle);
    Ok(())
}
