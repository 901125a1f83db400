use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::tracker::{
    EntrySink, IntersectionSample, RevealError, RevealOptions, SectionId, Viewport, ViewportObserver,
};

type Targets = Rc<RefCell<HashMap<SectionId, Element>>>;

fn js_error(err: JsValue) -> RevealError {
    RevealError::Observe(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// The browser window, observed through `IntersectionObserver`.
pub struct DomViewport;

impl Viewport for DomViewport {
    type Observer = DomObserver;

    fn observe(&self, options: &RevealOptions, sink: EntrySink) -> Result<DomObserver, RevealError> {
        let window = web_sys::window().ok_or(RevealError::Unsupported)?;
        let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            return Err(RevealError::Unsupported);
        }

        let targets: Targets = Rc::new(RefCell::new(HashMap::new()));
        let callback = {
            let targets = targets.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let target = entry.target();
                        // Look the id up first so the borrow ends before the sink runs.
                        let id = targets
                            .borrow()
                            .iter()
                            .find(|(_, element)| **element == target)
                            .map(|(id, _)| id.clone());
                        if let Some(id) = id {
                            sink(IntersectionSample {
                                id,
                                is_intersecting: entry.is_intersecting(),
                                ratio: entry.intersection_ratio(),
                            });
                        }
                    }
                },
            )
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_error)?;

        Ok(DomObserver {
            observer,
            targets,
            _callback: callback,
            connected: true,
        })
    }
}

pub struct DomObserver {
    observer: IntersectionObserver,
    targets: Targets,
    // Must outlive every callback the browser may still deliver.
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    connected: bool,
}

impl ViewportObserver for DomObserver {
    type Region = Element;

    fn watch(&mut self, id: &str, region: Element) -> Result<(), RevealError> {
        if !self.connected {
            return Err(RevealError::Observe(format!("observer for #{} already disconnected", id)));
        }
        self.observer.observe(&region);
        self.targets.borrow_mut().insert(id.to_string(), region);
        Ok(())
    }

    fn unwatch(&mut self, id: &str) {
        if let Some(element) = self.targets.borrow_mut().remove(id) {
            self.observer.unobserve(&element);
        }
    }

    fn disconnect(&mut self) {
        if !self.connected {
            return;
        }
        self.connected = false;
        self.observer.disconnect();
        self.targets.borrow_mut().clear();
    }
}

impl Drop for DomObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
