use dioxus::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-fuchsia-600 hover:bg-fuchsia-700 text-white font-bold uppercase"
            }
            ButtonVariant::Secondary => {
                "bg-white border border-neutral-300 text-neutral-700 hover:bg-neutral-50"
            }
            ButtonVariant::Ghost => "bg-transparent text-neutral-600 hover:text-neutral-900",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    let kind = r#type;
    rsx! {
        button {
            class: "px-4 py-2.5 rounded cursor-pointer transition-colors disabled:opacity-50 disabled:cursor-not-allowed {variant_class} {class}",
            r#type: "{kind}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
