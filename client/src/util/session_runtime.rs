//! Browser runtime for the inactivity session monitor.
//!
//! ARCHITECTURE
//! ============
//! `widgets::session::SessionMonitor` decides; this module executes. Each
//! input (document activity, a timer firing, a dialog button) is fed to the
//! monitor and the returned effects are applied in order against
//! gloo-timers handles, the dialog's view signal, and `window.location`.
//!
//! The runtime exclusively owns its timer handles. Dropping a handle
//! cancels the timer, so `CancelTimers` is simply a reset of the handle
//! set. Callbacks hold only weak references back to the runtime, and
//! dropping the runtime detaches its document listeners.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use widgets::session::{COUNTDOWN_TICK, SessionConfig, SessionEffect, SessionMonitor, timer_millis};

use crate::components::session_warning_modal::SESSION_MODAL_ID;
use crate::state::session::SessionView;

/// Events that count as user activity. Registered on `document` in the
/// capture phase so nested handlers cannot hide them.
pub const ACTIVITY_EVENTS: [&str; 6] = ["mousedown", "mousemove", "keypress", "scroll", "touchstart", "click"];

type ActivityListener = Closure<dyn FnMut(web_sys::Event)>;

#[derive(Default)]
struct SessionTimers {
    warning: Option<Timeout>,
    logout: Option<Timeout>,
    countdown: Option<Interval>,
}

pub struct SessionRuntime {
    monitor: RefCell<SessionMonitor>,
    timers: RefCell<SessionTimers>,
    listeners: RefCell<Vec<(&'static str, ActivityListener)>>,
    view: RwSignal<SessionView>,
}

impl SessionRuntime {
    /// Attach activity listeners and arm the first idle period.
    pub fn install(config: SessionConfig, view: RwSignal<SessionView>) -> Rc<Self> {
        log::debug!(
            "session monitor armed: limit {}s, warning lead {}s",
            config.idle_limit_secs(),
            config.warning_lead_secs()
        );
        let runtime = Rc::new(Self {
            monitor: RefCell::new(SessionMonitor::new(config)),
            timers: RefCell::new(SessionTimers::default()),
            listeners: RefCell::new(Vec::new()),
            view,
        });
        runtime.listen_for_activity();
        let effects = runtime.monitor.borrow_mut().start();
        runtime.apply(effects);
        runtime
    }

    pub fn stay_active(self: &Rc<Self>) {
        let effects = self.monitor.borrow_mut().stay_active();
        self.apply(effects);
    }

    pub fn logout_now(self: &Rc<Self>) {
        let effects = self.monitor.borrow_mut().logout_now();
        self.apply(effects);
    }

    fn activity(self: &Rc<Self>) {
        let effects = self.monitor.borrow_mut().activity();
        self.apply(effects);
    }

    fn listen_for_activity(self: &Rc<Self>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let selector = format!("#{SESSION_MODAL_ID}");
        for name in ACTIVITY_EVENTS {
            let weak = Rc::downgrade(self);
            let selector = selector.clone();
            let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                // Interaction with the dialog itself goes through its buttons.
                if event_inside(&ev, &selector) {
                    return;
                }
                if let Some(runtime) = weak.upgrade() {
                    runtime.activity();
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            if document
                .add_event_listener_with_callback_and_bool(name, cb.as_ref().unchecked_ref(), true)
                .is_ok()
            {
                self.listeners.borrow_mut().push((name, cb));
            }
        }
    }

    fn apply(self: &Rc<Self>, effects: Vec<SessionEffect>) {
        for effect in effects {
            match effect {
                SessionEffect::CancelTimers => {
                    *self.timers.borrow_mut() = SessionTimers::default();
                }
                SessionEffect::ScheduleWarning { epoch, after } => {
                    let weak = Rc::downgrade(self);
                    let timer = Timeout::new(timer_millis(after), move || {
                        with_runtime(&weak, |rt| {
                            let effects = rt.monitor.borrow_mut().warning_due(epoch);
                            rt.apply(effects);
                        });
                    });
                    self.timers.borrow_mut().warning = Some(timer);
                }
                SessionEffect::ScheduleLogout { epoch, after } => {
                    let weak = Rc::downgrade(self);
                    let timer = Timeout::new(timer_millis(after), move || {
                        with_runtime(&weak, |rt| {
                            let effects = rt.monitor.borrow_mut().logout_due(epoch);
                            rt.apply(effects);
                        });
                    });
                    self.timers.borrow_mut().logout = Some(timer);
                }
                SessionEffect::StartCountdown { epoch } => {
                    let weak = Rc::downgrade(self);
                    let timer = Interval::new(timer_millis(COUNTDOWN_TICK), move || {
                        with_runtime(&weak, |rt| {
                            let effects = rt.monitor.borrow_mut().countdown_tick(epoch);
                            rt.apply(effects);
                        });
                    });
                    self.timers.borrow_mut().countdown = Some(timer);
                }
                SessionEffect::ShowWarning { remaining_secs } => {
                    log::debug!("session warning shown, {remaining_secs}s left");
                    self.view.set(SessionView { visible: true, remaining_secs });
                }
                SessionEffect::UpdateCountdown { remaining_secs } => {
                    self.view.update(|v| v.remaining_secs = remaining_secs);
                }
                SessionEffect::HideWarning => {
                    self.view.update(|v| v.visible = false);
                }
                SessionEffect::Redirect { path } => {
                    log::info!("session expired, redirecting to {path}");
                    if let Some(w) = web_sys::window() {
                        let _ = w.location().set_href(&path);
                    }
                }
            }
        }
    }
}

impl Drop for SessionRuntime {
    fn drop(&mut self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for (name, cb) in self.listeners.get_mut().drain(..) {
            let _ = document.remove_event_listener_with_callback_and_bool(name, cb.as_ref().unchecked_ref(), true);
        }
    }
}

fn with_runtime(weak: &Weak<SessionRuntime>, f: impl FnOnce(&Rc<SessionRuntime>)) {
    if let Some(runtime) = weak.upgrade() {
        f(&runtime);
    }
}

fn event_inside(ev: &web_sys::Event, selector: &str) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}
