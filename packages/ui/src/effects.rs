//! # UI side effects of a finished submission
//!
//! Flows in [`crate::submit`] never touch the UI directly. They return a list
//! of [`Effect`]s in the order they must happen, and the component hands that
//! list to an [`EffectSink`] via [`apply`]. The app's sink shows toasts,
//! invalidates the query cache, navigates and resets fields; tests use a
//! recording sink.

use cache::QueryKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Toast(Toast),
    /// Mark a cached query stale.
    Invalidate(QueryKey),
    /// Drop a cached query outright, e.g. when the session changes hands.
    Forget(QueryKey),
    /// Go to one of the paths in [`crate::routes`].
    Navigate(&'static str),
    /// Put the form's fields back to their initial values.
    ResetForm,
}

/// Receiver of [`Effect`]s.
pub trait EffectSink {
    fn toast(&mut self, toast: Toast);
    fn invalidate(&mut self, key: &QueryKey);
    fn forget(&mut self, key: &QueryKey);
    fn navigate(&mut self, to: &'static str);
    fn reset(&mut self);
}

/// Run `effects` against `sink` in order.
pub fn apply(effects: Vec<Effect>, sink: &mut impl EffectSink) {
    for effect in effects {
        match effect {
            Effect::Toast(toast) => sink.toast(toast),
            Effect::Invalidate(key) => sink.invalidate(&key),
            Effect::Forget(key) => sink.forget(&key),
            Effect::Navigate(to) => sink.navigate(to),
            Effect::ResetForm => sink.reset(),
        }
    }
}
