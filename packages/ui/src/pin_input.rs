//! One-time code entry.
//!
//! [`PinCode`] holds the code typed so far and decides when it is complete;
//! [`PinInput`] renders one box per digit on top of it, moving focus forward as
//! digits arrive and back on backspace.

use dioxus::prelude::*;

/// Number of digits in an emailed code.
pub const CODE_LEN: usize = 6;

/// In-progress one-time code, one slot per box.
///
/// Only ASCII digits are kept. Clearing a box empties that slot alone, so the
/// digits after it stay put. Every update returns `Some(code)` exactly when all
/// slots become filled; staying complete does not fire again, but emptying a
/// slot and filling it again does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinCode {
    slots: [Option<char>; CODE_LEN],
    completed: bool,
}

impl PinCode {
    /// Filled digits in box order.
    pub fn value(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn digit(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Replace the whole code.
    pub fn set(&mut self, input: &str) -> Option<String> {
        self.slots = [None; CODE_LEN];
        for (slot, c) in self
            .slots
            .iter_mut()
            .zip(input.chars().filter(char::is_ascii_digit))
        {
            *slot = Some(c);
        }
        self.settle()
    }

    /// Apply the raw value of box `index` after an input event.
    pub fn input_at(&mut self, index: usize, raw: &str) -> Option<String> {
        if index >= CODE_LEN {
            return None;
        }
        let typed: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();

        match (self.slots[index], typed.as_slice()) {
            // Box cleared.
            (_, []) => self.slots[index] = None,
            // Typed into a filled box: the browser keeps the old digit too.
            (Some(old), [first, new]) if *first == old => self.slots[index] = Some(*new),
            // One digit, or a paste spreading over the following boxes.
            _ => {
                for (slot, c) in self.slots[index..].iter_mut().zip(typed) {
                    *slot = Some(c);
                }
            }
        }
        self.settle()
    }

    /// Backspace on box `index`. Clears the previous box when this one is
    /// empty and returns the box that should take focus.
    pub fn backspace_at(&mut self, index: usize) -> Option<usize> {
        if index == 0 || index >= CODE_LEN || self.slots[index].is_some() {
            return None;
        }
        self.slots[index - 1] = None;
        self.settle();
        Some(index - 1)
    }

    /// Box that should have focus next: the first empty one.
    pub fn focus_index(&self) -> usize {
        self.slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(CODE_LEN - 1)
    }

    fn settle(&mut self) -> Option<String> {
        if self.slots.iter().any(Option::is_none) {
            self.completed = false;
            return None;
        }
        if self.completed {
            return None;
        }
        self.completed = true;
        Some(self.value())
    }
}

fn focus_box(id: &str, index: usize) {
    document::eval(&format!(
        "document.getElementById('{id}-{index}')?.focus();"
    ));
}

/// Six single-digit boxes bound to a [`PinCode`] signal.
///
/// `on_complete` fires with the full code when the last digit arrives.
#[component]
pub fn PinInput(
    mut code: Signal<PinCode>,
    on_complete: EventHandler<String>,
    #[props(default = "pin".to_string())] id: String,
    #[props(default)] disabled: bool,
) -> Element {
    let boxes = (0..CODE_LEN).map(|index| {
        let id = id.clone();
        let box_id = format!("{id}-{index}");
        let value = code.read().digit(index).map(String::from).unwrap_or_default();
        let key_id = id.clone();
        rsx! {
            input {
                key: "{box_id}",
                id: "{box_id}",
                class: "w-10 h-10 p-3 text-center rounded-lg border border-neutral-300",
                r#type: "text",
                inputmode: "numeric",
                autocomplete: "one-time-code",
                disabled,
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    let completed = code.write().input_at(index, &evt.value());
                    focus_box(&id, code.read().focus_index());
                    if let Some(token) = completed {
                        on_complete.call(token);
                    }
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Backspace {
                        if let Some(prev) = code.write().backspace_at(index) {
                            evt.prevent_default();
                            focus_box(&key_id, prev);
                        }
                    }
                },
            }
        }
    });

    rsx! {
        div {
            class: "flex justify-center gap-5",
            {boxes}
        }
    }
}
