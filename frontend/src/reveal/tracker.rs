use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;

pub type SectionId = String;

/// Browsers report intersection ratios with float noise around the threshold.
const RATIO_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Minimum visible fraction of a section's box, `0.0..=1.0`.
    pub threshold: f64,
    /// Share of the viewport height cut off the bottom edge before measuring.
    pub bottom_margin: f64,
}

impl RevealOptions {
    /// CSS margin string in the form `IntersectionObserver` expects.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}% 0px", (self.bottom_margin * 100.0).round())
    }

    fn latches(&self, sample: &IntersectionSample) -> bool {
        sample.is_intersecting && sample.ratio + RATIO_TOLERANCE >= self.threshold
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSample {
    pub id: SectionId,
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RevealError {
    #[error("viewport observation is not supported here")]
    Unsupported,
    #[error("could not observe section: {0}")]
    Observe(String),
}

pub type EntrySink = Rc<dyn Fn(IntersectionSample)>;

/// One live observation of a set of page regions.
pub trait ViewportObserver {
    type Region;

    fn watch(&mut self, id: &str, region: Self::Region) -> Result<(), RevealError>;
    fn unwatch(&mut self, id: &str);
    fn disconnect(&mut self);
}

/// Host capability that can start observing regions.
pub trait Viewport {
    type Observer: ViewportObserver;

    fn observe(&self, options: &RevealOptions, sink: EntrySink) -> Result<Self::Observer, RevealError>;
}

pub type RegionOf<V> = <<V as Viewport>::Observer as ViewportObserver>::Region;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RevealedSet(HashSet<SectionId>);

impl RevealedSet {
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, id: &str) -> bool {
        if self.0.contains(id) {
            return false;
        }
        self.0.insert(id.to_string())
    }
}

struct Latch {
    revealed: RefCell<RevealedSet>,
    active: Cell<bool>,
    listener: Option<Box<dyn Fn(&str)>>,
}

impl Latch {
    fn reveal(&self, id: &str) {
        if !self.active.get() {
            return;
        }
        let inserted = self.revealed.borrow_mut().insert(id);
        if inserted {
            debug!("section #{} revealed", id);
            if let Some(listener) = &self.listener {
                listener(id);
            }
        }
    }
}

/// Read side of a tracker, cheap to clone into render code.
#[derive(Clone)]
pub struct RevealHandle(Rc<Latch>);

impl RevealHandle {
    pub fn is_revealed(&self, id: &str) -> bool {
        self.0.revealed.borrow().contains(id)
    }
}

pub struct RevealTracker<V: Viewport> {
    viewport: V,
    options: RevealOptions,
    latch: Rc<Latch>,
    observer: Option<V::Observer>,
    watched: HashSet<SectionId>,
    degraded: bool,
    torn_down: bool,
}

impl<V: Viewport> RevealTracker<V> {
    pub fn new(viewport: V, options: RevealOptions) -> Self {
        Self::build(viewport, options, None)
    }

    /// Like [`RevealTracker::new`], calling `listener` once per newly revealed section.
    pub fn with_listener(viewport: V, options: RevealOptions, listener: impl Fn(&str) + 'static) -> Self {
        Self::build(viewport, options, Some(Box::new(listener)))
    }

    fn build(viewport: V, options: RevealOptions, listener: Option<Box<dyn Fn(&str)>>) -> Self {
        Self {
            viewport,
            options,
            latch: Rc::new(Latch {
                revealed: RefCell::new(RevealedSet::default()),
                active: Cell::new(true),
                listener,
            }),
            observer: None,
            watched: HashSet::new(),
            degraded: false,
            torn_down: false,
        }
    }

    /// Starts observing every `(id, region)` pair.
    ///
    /// Registering an id again replaces its previous region. When the host cannot
    /// observe at all, every registered section is revealed on the spot; a region
    /// that fails to be watched is revealed on its own.
    pub fn register<S, I>(&mut self, elements: I)
    where
        S: Into<SectionId>,
        I: IntoIterator<Item = (S, RegionOf<V>)>,
    {
        if self.torn_down {
            debug!("reveal tracker already torn down, ignoring register");
            return;
        }
        let elements: Vec<(SectionId, RegionOf<V>)> =
            elements.into_iter().map(|(id, region)| (id.into(), region)).collect();
        if elements.is_empty() {
            return;
        }

        if self.observer.is_none() && !self.degraded {
            let latch = self.latch.clone();
            let options = self.options;
            let sink: EntrySink = Rc::new(move |sample: IntersectionSample| {
                if options.latches(&sample) {
                    latch.reveal(&sample.id);
                }
            });
            match self.viewport.observe(&self.options, sink) {
                Ok(observer) => self.observer = Some(observer),
                Err(err) => {
                    warn!("{}; showing all sections without animation", err);
                    self.degraded = true;
                }
            }
        }

        let Some(observer) = self.observer.as_mut() else {
            for (id, _) in &elements {
                self.latch.reveal(id);
            }
            return;
        };

        for (id, region) in elements {
            if self.watched.remove(&id) {
                debug!("section #{} registered again, replacing its region", id);
                observer.unwatch(&id);
            }
            match observer.watch(&id, region) {
                Ok(()) => {
                    self.watched.insert(id);
                }
                Err(err) => {
                    warn!("{}; showing section #{} without animation", err, id);
                    self.latch.reveal(&id);
                }
            }
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.latch.revealed.borrow().contains(id)
    }

    pub fn revealed(&self) -> RevealedSet {
        self.latch.revealed.borrow().clone()
    }

    pub fn handle(&self) -> RevealHandle {
        RevealHandle(self.latch.clone())
    }

    /// True once the host turned out to have no observation primitive.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Stops observing for good. Later host events are dropped.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.latch.active.set(false);
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
        self.watched.clear();
        debug!("reveal tracker torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REJECTED: u32 = 0;

    #[derive(Default)]
    struct Host {
        sink: RefCell<Option<EntrySink>>,
        watched: RefCell<Vec<(String, u32)>>,
        unwatched: RefCell<Vec<String>>,
        disconnects: Cell<usize>,
    }

    impl Host {
        fn fire(&self, id: &str, ratio: f64) {
            let sink = self.sink.borrow().clone();
            if let Some(sink) = sink {
                sink(IntersectionSample {
                    id: id.to_string(),
                    is_intersecting: ratio > 0.0,
                    ratio,
                });
            }
        }
    }

    struct FakeViewport {
        host: Rc<Host>,
        supported: bool,
    }

    struct FakeObserver {
        host: Rc<Host>,
    }

    impl Viewport for FakeViewport {
        type Observer = FakeObserver;

        fn observe(&self, _options: &RevealOptions, sink: EntrySink) -> Result<FakeObserver, RevealError> {
            if !self.supported {
                return Err(RevealError::Unsupported);
            }
            *self.host.sink.borrow_mut() = Some(sink);
            Ok(FakeObserver { host: self.host.clone() })
        }
    }

    impl ViewportObserver for FakeObserver {
        type Region = u32;

        fn watch(&mut self, id: &str, region: u32) -> Result<(), RevealError> {
            if region == REJECTED {
                return Err(RevealError::Observe("detached element".to_string()));
            }
            self.host.watched.borrow_mut().push((id.to_string(), region));
            Ok(())
        }

        fn unwatch(&mut self, id: &str) {
            self.host.unwatched.borrow_mut().push(id.to_string());
        }

        fn disconnect(&mut self) {
            self.host.disconnects.set(self.host.disconnects.get() + 1);
        }
    }

    fn options() -> RevealOptions {
        RevealOptions { threshold: 0.15, bottom_margin: 0.10 }
    }

    fn fake_tracker(supported: bool) -> (RevealTracker<FakeViewport>, Rc<Host>) {
        let host = Rc::new(Host::default());
        let viewport = FakeViewport { host: host.clone(), supported };
        (RevealTracker::new(viewport, options()), host)
    }

    #[test]
    fn unregistered_sections_are_hidden() {
        let (mut tracker, host) = fake_tracker(true);
        assert!(!tracker.is_revealed("pricing"));
        tracker.register(vec![("programs", 1)]);
        host.fire("programs", 1.0);
        assert!(!tracker.is_revealed("pricing"));
    }

    #[test]
    fn reveal_latches_after_section_leaves() {
        let (mut tracker, host) = fake_tracker(true);
        tracker.register(vec![("contact", 1)]);
        host.fire("contact", 0.4);
        host.fire("contact", 0.0);
        host.fire("contact", 0.0);
        assert!(tracker.is_revealed("contact"));
    }

    #[test]
    fn empty_register_is_a_noop() {
        let (mut tracker, host) = fake_tracker(true);
        tracker.register(Vec::<(String, u32)>::new());
        assert!(!tracker.is_revealed("footer"));
        assert!(host.sink.borrow().is_none());
    }

    #[test]
    fn teardown_is_idempotent() {
        let (mut tracker, host) = fake_tracker(true);
        tracker.teardown();
        tracker.teardown();
        assert_eq!(host.disconnects.get(), 0);

        let (mut tracker, host) = fake_tracker(true);
        tracker.register(vec![("footer", 1)]);
        tracker.teardown();
        tracker.teardown();
        assert_eq!(host.disconnects.get(), 1);
    }

    #[test]
    fn events_after_teardown_are_dropped() {
        let (mut tracker, host) = fake_tracker(true);
        tracker.register(vec![("programs", 1), ("pricing", 2)]);
        host.fire("pricing", 0.5);
        tracker.teardown();
        host.fire("programs", 0.9);
        assert!(tracker.is_revealed("pricing"));
        assert!(!tracker.is_revealed("programs"));
        assert_eq!(tracker.revealed().len(), 1);
    }

    #[test]
    fn register_after_teardown_is_ignored() {
        let (mut tracker, host) = fake_tracker(false);
        tracker.teardown();
        tracker.register(vec![("programs", 1)]);
        assert!(!tracker.is_revealed("programs"));
        assert!(host.watched.borrow().is_empty());
    }

    #[test]
    fn threshold_scenario() {
        let (mut tracker, host) = fake_tracker(true);
        tracker.register(vec![("programs", 1), ("pricing", 2)]);

        host.fire("pricing", 0.5);
        assert!(tracker.is_revealed("pricing"));
        assert!(!tracker.is_revealed("programs"));

        host.fire("programs", 0.05);
        assert!(!tracker.is_revealed("programs"));

        host.fire("programs", 0.2);
        assert!(tracker.is_revealed("programs"));
    }

    #[test]
    fn exact_threshold_counts() {
        let (mut tracker, host) = fake_tracker(true);
        tracker.register(vec![("timetable", 1)]);
        host.fire("timetable", 0.15);
        assert!(tracker.is_revealed("timetable"));
    }

    #[test]
    fn unsupported_viewport_reveals_everything() {
        let (mut tracker, _host) = fake_tracker(false);
        tracker.register(vec![("programs", 1), ("pricing", 2)]);
        assert!(tracker.is_degraded());
        assert!(tracker.is_revealed("programs"));
        assert!(tracker.is_revealed("pricing"));
        assert!(!tracker.is_revealed("contact"));
    }

    #[test]
    fn failed_watch_reveals_only_that_section() {
        let (mut tracker, host) = fake_tracker(true);
        tracker.register(vec![("nutrition", REJECTED), ("footer", 3)]);
        assert!(tracker.is_revealed("nutrition"));
        assert!(!tracker.is_revealed("footer"));
        assert!(!tracker.is_degraded());
        assert_eq!(host.watched.borrow().as_slice(), &[("footer".to_string(), 3)]);
    }

    #[test]
    fn duplicate_registration_replaces_region() {
        let (mut tracker, host) = fake_tracker(true);
        tracker.register(vec![("pricing", 1)]);
        tracker.register(vec![("pricing", 7)]);
        assert_eq!(host.unwatched.borrow().as_slice(), &["pricing".to_string()]);
        assert_eq!(
            host.watched.borrow().as_slice(),
            &[("pricing".to_string(), 1), ("pricing".to_string(), 7)]
        );
    }

    #[test]
    fn listener_fires_once_per_section() {
        let host = Rc::new(Host::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut tracker = {
            let seen = seen.clone();
            RevealTracker::with_listener(
                FakeViewport { host: host.clone(), supported: true },
                options(),
                move |id| seen.borrow_mut().push(id.to_string()),
            )
        };
        tracker.register(vec![("programs", 1), ("pricing", 2)]);
        host.fire("programs", 0.3);
        host.fire("programs", 0.8);
        host.fire("pricing", 0.1);
        host.fire("pricing", 0.6);
        assert_eq!(seen.borrow().as_slice(), &["programs".to_string(), "pricing".to_string()]);
    }

    #[test]
    fn handle_sees_later_reveals() {
        let (mut tracker, host) = fake_tracker(true);
        let handle = tracker.handle();
        tracker.register(vec![("motivation", 1)]);
        assert!(!handle.is_revealed("motivation"));
        host.fire("motivation", 1.0);
        assert!(handle.is_revealed("motivation"));
    }

    #[test]
    fn root_margin_trims_bottom() {
        assert_eq!(options().root_margin(), "0px 0px -10% 0px");
    }
}
