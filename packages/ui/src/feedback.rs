use cache::QueryKey;
use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::effects::{self, Effect, EffectSink, Toast};
use crate::session::{use_query_client, QueryClient};
use crate::toast::{push_toast, use_toasts, Toasts};

/// Applies submission effects to the running app: toasts, the query cache and
/// the router.
#[derive(Clone, Copy)]
pub struct Feedback {
    toasts: Signal<Toasts>,
    queries: QueryClient,
    nav: Navigator,
}

pub fn use_feedback() -> Feedback {
    Feedback {
        toasts: use_toasts(),
        queries: use_query_client(),
        nav: use_navigator(),
    }
}

impl Feedback {
    /// Run `effects` in order. `reset` clears the submitting form's fields.
    pub fn apply(&self, effects: Vec<Effect>, reset: impl FnMut()) {
        let mut sink = AppSink {
            feedback: *self,
            reset,
        };
        effects::apply(effects, &mut sink);
    }

    pub fn toast(&self, toast: Toast) {
        let mut toasts = self.toasts;
        push_toast(&mut toasts, toast);
    }
}

struct AppSink<R> {
    feedback: Feedback,
    reset: R,
}

impl<R: FnMut()> EffectSink for AppSink<R> {
    fn toast(&mut self, toast: Toast) {
        self.feedback.toast(toast);
    }

    fn invalidate(&mut self, key: &QueryKey) {
        self.feedback.queries.invalidate(key);
    }

    fn forget(&mut self, key: &QueryKey) {
        self.feedback.queries.remove(key);
    }

    fn navigate(&mut self, to: &'static str) {
        self.feedback.nav.push(to);
    }

    fn reset(&mut self) {
        (self.reset)();
    }
}
