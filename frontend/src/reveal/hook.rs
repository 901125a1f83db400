use log::{debug, warn};
use yew::prelude::*;

use super::dom::DomViewport;
use super::tracker::{RevealHandle, RevealTracker};
use crate::config;

#[derive(Clone)]
pub struct ScrollReveal {
    handle: RevealHandle,
    degraded: bool,
}

impl ScrollReveal {
    pub fn is_revealed(&self, id: &str) -> bool {
        self.handle.is_revealed(id)
    }

    /// Set when the browser cannot observe intersections and nothing animates.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

/// Tracks the sections with the given DOM ids for the lifetime of the calling component.
#[hook]
pub fn use_scroll_reveal(sections: &'static [&'static str]) -> ScrollReveal {
    let force_update = use_force_update();
    let tracker = use_mut_ref(move || {
        RevealTracker::with_listener(DomViewport, config::reveal_options(), move |_| {
            force_update.force_update()
        })
    });

    {
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|window| window.document());
                let regions: Vec<_> = sections
                    .iter()
                    .filter_map(|id| match document.as_ref().and_then(|doc| doc.get_element_by_id(id)) {
                        Some(element) => Some((*id, element)),
                        None => {
                            warn!("section #{} is not on the page, nothing to reveal", id);
                            None
                        }
                    })
                    .collect();

                {
                    let mut tracker = tracker.borrow_mut();
                    tracker.register(regions);
                    debug!(
                        "watching {} sections, {} already revealed",
                        sections.len(),
                        tracker.revealed().len()
                    );
                }

                move || tracker.borrow_mut().teardown()
            },
            (),
        );
    }

    let tracker = tracker.borrow();
    ScrollReveal {
        handle: tracker.handle(),
        degraded: tracker.is_degraded(),
    }
}
