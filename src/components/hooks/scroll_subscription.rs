use leptos_dom::helpers::WindowListenerHandle;

/// A registered event listener that can be detached.
pub trait ListenerHandle {
    fn remove(self);
}

impl ListenerHandle for WindowListenerHandle {
    fn remove(self) {
        WindowListenerHandle::remove(self)
    }
}

/// Owns the listener registrations of one mounted view and detaches them once.
///
/// Dropping the guard releases every listener, so every exit path of the owning
/// view (normal unmount, early return, panic unwinding) detaches them.
pub struct ScrollSubscription<H: ListenerHandle> {
    handles: Vec<H>,
}

impl<H: ListenerHandle> ScrollSubscription<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handles: vec![handle],
        }
    }

    /// Adds another listener released together with the first one.
    pub fn with(mut self, handle: H) -> Self {
        self.handles.push(handle);
        self
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        !self.handles.is_empty()
    }

    /// Detaches all listeners. Later calls are no-ops.
    pub fn release(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}

impl<H: ListenerHandle> Drop for ScrollSubscription<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::{ScrollProximityDetector, ScrollSample};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Callback = Box<dyn Fn(ScrollSample)>;

    /// In-memory stand-in for `window` scroll events.
    #[derive(Default)]
    struct FakeScrollEvents {
        slots: RefCell<Vec<Option<Callback>>>,
        removals: Cell<usize>,
    }

    impl FakeScrollEvents {
        fn subscribe(self: &Rc<Self>, cb: impl Fn(ScrollSample) + 'static) -> FakeHandle {
            let mut slots = self.slots.borrow_mut();
            slots.push(Some(Box::new(cb)));
            FakeHandle {
                events: Rc::clone(self),
                slot: slots.len() - 1,
            }
        }

        fn emit(&self, sample: ScrollSample) {
            for cb in self.slots.borrow().iter().flatten() {
                cb(sample);
            }
        }

        fn active(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.is_some()).count()
        }
    }

    struct FakeHandle {
        events: Rc<FakeScrollEvents>,
        slot: usize,
    }

    impl ListenerHandle for FakeHandle {
        fn remove(self) {
            self.events.slots.borrow_mut()[self.slot] = None;
            self.events.removals.set(self.events.removals.get() + 1);
        }
    }

    fn mount(
        events: &Rc<FakeScrollEvents>,
        calls: &Rc<Cell<usize>>,
        near: &Rc<Cell<bool>>,
    ) -> ScrollSubscription<FakeHandle> {
        let detector = ScrollProximityDetector::new(50.0);
        let calls = Rc::clone(calls);
        let near = Rc::clone(near);
        ScrollSubscription::new(events.subscribe(move |s| {
            calls.set(calls.get() + 1);
            near.set(detector.on_sample(s));
        }))
    }

    #[test]
    fn test_samples_reach_detector_while_active() {
        let events = Rc::new(FakeScrollEvents::default());
        let calls = Rc::new(Cell::new(0));
        let near = Rc::new(Cell::new(false));
        let sub = mount(&events, &calls, &near);

        assert!(sub.is_active());
        events.emit(ScrollSample::new(149.0, 800.0, 1000.0));
        assert!(!near.get());
        events.emit(ScrollSample::new(150.0, 800.0, 1000.0));
        assert!(near.get());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_no_callback_after_release() {
        let events = Rc::new(FakeScrollEvents::default());
        let calls = Rc::new(Cell::new(0));
        let near = Rc::new(Cell::new(false));
        let mut sub = mount(&events, &calls, &near);

        sub.release();
        assert!(!sub.is_active());
        events.emit(ScrollSample::new(900.0, 800.0, 1000.0));
        assert_eq!(calls.get(), 0);
        assert!(!near.get());
    }

    #[test]
    fn test_drop_releases_exactly_once() {
        let events = Rc::new(FakeScrollEvents::default());
        let calls = Rc::new(Cell::new(0));
        let near = Rc::new(Cell::new(false));
        {
            let mut sub = mount(&events, &calls, &near);
            assert_eq!(events.active(), 1);
            sub.release();
            sub.release();
        }
        assert_eq!(events.removals.get(), 1);
        assert_eq!(events.active(), 0);

        {
            let _sub = mount(&events, &calls, &near);
        }
        assert_eq!(events.removals.get(), 2);
        assert_eq!(events.active(), 0);
    }

    #[test]
    fn test_release_on_unwind() {
        let events = Rc::new(FakeScrollEvents::default());
        let calls = Rc::new(Cell::new(0));
        let near = Rc::new(Cell::new(false));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _sub = mount(&events, &calls, &near);
            panic!("teardown failed");
        }));

        assert!(result.is_err());
        assert_eq!(events.active(), 0);
        events.emit(ScrollSample::new(900.0, 800.0, 1000.0));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_instances_are_independent() {
        let events = Rc::new(FakeScrollEvents::default());
        let calls_a = Rc::new(Cell::new(0));
        let calls_b = Rc::new(Cell::new(0));
        let near_a = Rc::new(Cell::new(false));
        let near_b = Rc::new(Cell::new(false));
        let mut a = mount(&events, &calls_a, &near_a);
        let _b = mount(&events, &calls_b, &near_b);

        a.release();
        events.emit(ScrollSample::new(150.0, 800.0, 1000.0));
        assert_eq!(calls_a.get(), 0);
        assert_eq!(calls_b.get(), 1);
        assert!(near_b.get());
    }

    #[test]
    fn test_grouped_listeners_release_together_once() {
        let events = Rc::new(FakeScrollEvents::default());
        let calls = Rc::new(Cell::new(0));
        let on_scroll = {
            let calls = Rc::clone(&calls);
            move |_: ScrollSample| calls.set(calls.get() + 1)
        };
        let on_resize = {
            let calls = Rc::clone(&calls);
            move |_: ScrollSample| calls.set(calls.get() + 1)
        };
        let mut sub =
            ScrollSubscription::new(events.subscribe(on_scroll)).with(events.subscribe(on_resize));

        events.emit(ScrollSample::new(0.0, 800.0, 1000.0));
        assert_eq!(calls.get(), 2);

        sub.release();
        drop(sub);
        assert_eq!(events.removals.get(), 2);
        assert_eq!(events.active(), 0);
        events.emit(ScrollSample::new(0.0, 800.0, 1000.0));
        assert_eq!(calls.get(), 2);
    }
}
