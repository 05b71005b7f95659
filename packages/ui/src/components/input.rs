use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] invalid: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let kind = r#type;
    let border = if invalid {
        "border-red-400"
    } else {
        "border-neutral-300"
    };
    rsx! {
        input {
            id: "{id}",
            class: "px-3 py-2.5 rounded border bg-neutral-50 text-sm {border} {class}",
            r#type: "{kind}",
            placeholder: "{placeholder}",
            "aria-invalid": "{invalid}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
