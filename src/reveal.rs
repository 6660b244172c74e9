// Scroll-triggered reveal: elements marked `.animate-on-scroll` get the
// `visible` class once a tenth of them has entered the viewport. The css
// transition does the rest.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[wasm_bindgen]
pub struct RevealObserver {
    observer: IntersectionObserver,
    // kept alive for as long as the observer may call it
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

#[wasm_bindgen]
impl RevealObserver {
    /// Starts watching every element currently matching `.animate-on-scroll`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<RevealObserver, JsValue> {
        let callback = Closure::wrap(Box::new(|entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    if let Err(err) = entry.target().class_list().add_1(VISIBLE_CLASS) {
                        console::warn_2(&"reveal: could not add class".into(), &err);
                    }
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let reveal = RevealObserver {
            observer,
            _callback: callback,
        };
        reveal.observe_all()?;
        Ok(reveal)
    }

    /// Picks up elements added to the page after construction.
    #[wasm_bindgen(js_name = observeAll)]
    pub fn observe_all(&self) -> Result<u32, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
        let mut observed = 0;
        for idx in 0..nodes.length() {
            let element = nodes.item(idx).and_then(|node| node.dyn_into::<Element>().ok());
            if let Some(element) = element {
                self.observer.observe(&element);
                observed += 1;
            }
        }
        Ok(observed)
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
