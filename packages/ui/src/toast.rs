//! Transient notifications.
//!
//! The app provides a `Signal<Toasts>` through context; [`push_toast`] adds an
//! entry and schedules its dismissal, [`ToastContainer`] renders the stack.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::effects::{Toast, ToastLevel};

/// How long a toast stays on screen unless clicked away.
pub const TOAST_DURATION_MS: u64 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<ToastEntry>,
    next_id: u64,
}

impl Toasts {
    /// Append a toast and return its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry { id, toast });
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show `toast` and dismiss it after [`TOAST_DURATION_MS`].
///
/// The timer lives in the root scope, so it still fires after the component
/// that raised the toast has unmounted, e.g. when the effects navigated away.
pub fn push_toast(toasts: &mut Signal<Toasts>, toast: Toast) {
    let id = toasts.write().push(toast);
    let mut toasts = *toasts;
    spawn_forever(async move {
        sleep_ms(TOAST_DURATION_MS).await;
        toasts.write().dismiss(id);
    });
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Stack of active toasts, newest at the bottom. Clicking one dismisses it.
#[component]
pub fn ToastContainer() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts().entries.clone();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80",
            role: "status",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: match entry.toast.level {
                        ToastLevel::Success => "px-4 py-3 rounded shadow bg-green-50 border border-green-200 text-green-700 text-sm cursor-pointer",
                        ToastLevel::Error => "px-4 py-3 rounded shadow bg-red-50 border border-red-200 text-red-600 text-sm cursor-pointer",
                    },
                    onclick: move |_| {
                        toasts.write().dismiss(entry.id);
                    },
                    "{entry.toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    static PEAK: AtomicUsize = AtomicUsize::new(0);
    static LAST: AtomicUsize = AtomicUsize::new(usize::MAX);

    #[component]
    fn Raiser() -> Element {
        let mut toasts = use_toasts();
        use_hook(|| spawn(async move { push_toast(&mut toasts, Toast::success("Saved")) }));
        rsx! { p { "Saving" } }
    }

    /// Raises a toast from a child, then unmounts the child after 100ms.
    fn raise_then_leave() -> Element {
        let toasts = use_context_provider(|| Signal::new(Toasts::default()));
        let mut shown = use_signal(|| true);
        use_hook(|| {
            spawn(async move {
                sleep_ms(100).await;
                shown.set(false);
            })
        });

        let count = toasts.read().entries.len();
        PEAK.fetch_max(count, Ordering::SeqCst);
        LAST.store(count, Ordering::SeqCst);

        rsx! {
            if shown() {
                Raiser {}
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_dismissed_after_raiser_unmounts() {
        let mut dom = VirtualDom::new(raise_then_leave);
        dom.rebuild_in_place();

        let deadline =
            tokio::time::Instant::now() + Duration::from_millis(TOAST_DURATION_MS + 600);
        while tokio::time::Instant::now() < deadline {
            let _ = tokio::time::timeout_at(deadline, dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
        }

        assert_eq!(PEAK.load(Ordering::SeqCst), 1);
        assert_eq!(LAST.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = Toasts::default();
        let first = toasts.push(Toast::success("Saved"));
        let second = toasts.push(Toast::error("Failed"));
        assert_ne!(first, second);
        assert_eq!(toasts.entries.len(), 2);

        assert!(toasts.dismiss(first));
        assert!(!toasts.dismiss(first));
        assert_eq!(toasts.entries[0].toast, Toast::error("Failed"));
    }
}
