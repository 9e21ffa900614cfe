//! Observable parameter store: holds mask + optical params + view params and
//! collapses bursts of setter calls into one coalesced notification per
//! display-refresh tick.
//!
//! Single-threaded cooperative model (see module-level concurrency notes in
//! the pipeline): `Rc<RefCell<..>>`, not `Arc<Mutex<..>>` — there is no
//! internal locking and no cross-thread handoff.

use std::cell::RefCell;
use std::rc::Rc;

use crate::mask::{self, Mask};
use crate::pipeline::config::{ParamKey, PupilParams, ViewParamKey, ViewParams, ZernikeKey};

/// A host-provided "run this once on the next display refresh" abstraction.
/// The store uses it purely to coalesce bursts of edits to one tick.
pub trait DisplayTickScheduler {
    fn schedule(&self, callback: Box<dyn FnOnce()>);
}

/// A single-slot mailbox scheduler: `schedule` replaces any pending callback,
/// `tick` drains and runs it. Intended for tests and headless drivers; a UI
/// host would instead schedule via its own repaint/animation-frame hook.
#[derive(Default)]
pub struct ManualTickScheduler {
    pending: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl ManualTickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and runs the pending callback, if any. A no-op if nothing is pending.
    pub fn tick(&self) {
        let callback = self.pending.borrow_mut().take();
        if let Some(callback) = callback {
            callback();
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl DisplayTickScheduler for ManualTickScheduler {
    fn schedule(&self, callback: Box<dyn FnOnce()>) {
        *self.pending.borrow_mut() = Some(callback);
    }
}

/// A consistent, read-only snapshot of store state as of a tick boundary.
#[derive(Clone)]
pub struct StoreSnapshot {
    pub mask: Rc<Mask>,
    pub params: PupilParams,
    pub view: ViewParams,
}

struct Inner {
    mask: Rc<Mask>,
    params: PupilParams,
    view: ViewParams,
    listeners: Vec<Rc<dyn Fn(&StoreSnapshot)>>,
    dirty: bool,
}

/// Process-wide mutable state: `{ mask, params, viewParams }`, plus
/// coalesced-notification bookkeeping.
pub struct ParameterStore<S: DisplayTickScheduler> {
    inner: Rc<RefCell<Inner>>,
    scheduler: S,
}

impl<S: DisplayTickScheduler> ParameterStore<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                mask: Rc::new(mask::blank()),
                params: PupilParams::default(),
                view: ViewParams::default(),
                listeners: Vec::new(),
                dirty: false,
            })),
            scheduler,
        }
    }

    /// Access to the underlying scheduler, e.g. to drive a `ManualTickScheduler`
    /// from a test or a headless driver loop.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn get_state(&self) -> StoreSnapshot {
        let inner = self.inner.borrow();
        StoreSnapshot {
            mask: inner.mask.clone(),
            params: inner.params,
            view: inner.view,
        }
    }

    pub fn subscribe(&self, listener: Rc<dyn Fn(&StoreSnapshot)>) {
        self.inner.borrow_mut().listeners.push(listener);
    }

    pub fn set_mask(&self, new_mask: Mask) {
        self.inner.borrow_mut().mask = Rc::new(new_mask);
        self.mark_dirty();
    }

    pub fn set_param(&self, key: ParamKey, value: f64) {
        {
            let mut inner = self.inner.borrow_mut();
            match key {
                ParamKey::Wavelength => inner.params.wavelength_nm = value,
                ParamKey::Na => inner.params.na = value,
                ParamKey::Sigma => inner.params.sigma = value,
                ParamKey::Defocus => inner.params.defocus_um = value,
            }
        }
        self.mark_dirty();
    }

    pub fn set_zernike_coeff(&self, key: ZernikeKey, value: f64) {
        self.inner.borrow_mut().params.zernike.set(key, value);
        self.mark_dirty();
    }

    pub fn set_view_param(&self, key: ViewParamKey, value: f64) {
        {
            let mut inner = self.inner.borrow_mut();
            match key {
                ViewParamKey::Threshold => inner.view.threshold = value,
                ViewParamKey::CrossSectionRow => inner.view.cross_section_row = value as usize,
            }
        }
        self.mark_dirty();
    }

    pub fn reset_params(&self) {
        self.inner.borrow_mut().params = PupilParams::default();
        self.mark_dirty();
    }

    /// Synchronously invokes every subscriber with the current state,
    /// bypassing the tick scheduler. Intended for initial publication.
    pub fn notify_now(&self) {
        Self::fire(&self.inner);
    }

    /// Marks state dirty and, if no tick is already pending, schedules one.
    /// Re-entrancy-safe: a listener that mutates the store during its own
    /// invocation observes `dirty == false` (cleared at the top of `fire`)
    /// and so schedules exactly one further tick, rather than re-entering
    /// the in-progress dispatch.
    fn mark_dirty(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.dirty {
            return;
        }
        inner.dirty = true;
        drop(inner);

        let inner_rc = self.inner.clone();
        self.scheduler.schedule(Box::new(move || {
            Self::fire(&inner_rc);
        }));
    }

    fn fire(inner_rc: &Rc<RefCell<Inner>>) {
        let (snapshot, listeners) = {
            let mut inner = inner_rc.borrow_mut();
            inner.dirty = false;
            let snapshot = StoreSnapshot {
                mask: inner.mask.clone(),
                params: inner.params,
                view: inner.view,
            };
            (snapshot, inner.listeners.clone())
        };
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
