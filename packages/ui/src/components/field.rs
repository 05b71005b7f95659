use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: "text-sm font-normal text-neutral-700",
            {children}
        }
    }
}

/// Inline validation message under a field. Renders nothing without a message.
#[component]
pub fn ErrorMessage(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p {
                class: "px-2 py-1.5 bg-red-50 text-red-600 text-[0.8125rem] font-bold uppercase",
                "{message}"
            }
        },
        None => rsx! {},
    }
}

/// Label, input and error message stacked.
#[component]
pub fn FormField(
    id: String,
    label: String,
    error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-2",
            Label { html_for: id, "{label}" }
            {children}
            ErrorMessage { message: error }
        }
    }
}
