use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

#[component]
pub fn FormItem(title: String, value: FieldValue, onchange: EventHandler<FieldValue>) -> Element {
    let input = match value {
        FieldValue::Text(text) => rsx! {
            input {
                r#type: "text",
                style: "border: 1px solid #bbb; padding: 4px 8px; border-radius: 4px; min-width: 320px;",
                value: "{text}",
                oninput: move |event| onchange.call(FieldValue::Text(event.value())),
            }
        },
        FieldValue::Checked(checked) => rsx! {
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |event| onchange.call(FieldValue::Checked(event.checked())),
            }
        },
    };

    rsx! {
        div { style: "display: grid; grid-template-columns: 120px 1fr; gap: 6px; align-items: center; margin-bottom: 8px;",
            label { "{title}" }
            {input}
        }
    }
}
