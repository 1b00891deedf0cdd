use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
    Warning,
    Plain,
}

pub fn button_style(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => {
            "border: 1px solid #0d6efd; background: #0d6efd; color: #fff; padding: 4px 12px; border-radius: 4px; cursor: pointer;"
        }
        ButtonVariant::Outline => {
            "border: 1px solid #0d6efd; background: #fff; color: #0d6efd; padding: 4px 12px; border-radius: 4px; cursor: pointer;"
        }
        ButtonVariant::Danger => {
            "border: 1px solid #dc3545; background: #dc3545; color: #fff; padding: 2px 8px; border-radius: 4px; cursor: pointer; font-size: 12px;"
        }
        ButtonVariant::Warning => {
            "border: 1px solid #ffc107; background: #ffc107; color: #212529; padding: 2px 8px; border-radius: 4px; cursor: pointer; font-size: 12px;"
        }
        ButtonVariant::Plain => {
            "border: 1px solid #bbb; background: #fff; color: #212529; padding: 4px 12px; border-radius: 4px; cursor: pointer;"
        }
    }
}

#[component]
pub fn ActionButton(
    label: String,
    #[props(default)] variant: ButtonVariant,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            style: "{button_style(variant)}",
            onclick: move |event| onclick.call(event),
            "{label}"
        }
    }
}
