//! Controls rendered from the selected model's schema

use crate::form::{FormEngine, FormField};
use crate::types::schema::FieldKind;
use dioxus::prelude::*;

/// One control per schema property, in schema order
#[component]
pub fn SchemaForm(form: Signal<FormEngine>) -> Element {
    let mut form = form;
    let fields = form.read().fields();

    rsx! {
        div {
            class: "schema-form",
            {fields.into_iter().map(|field| {
                let key = field.name.clone();
                let name = field.name.clone();
                rsx! {
                    FieldInput {
                        key: "{key}",
                        field,
                        on_input: move |value: String| {
                            form.write().set_value(&name, value);
                        },
                    }
                }
            })}
        }
    }
}

#[component]
fn FieldInput(field: FormField, on_input: EventHandler<String>) -> Element {
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };
    let step = match field.kind {
        FieldKind::Integer => Some("1"),
        FieldKind::Number => Some("any"),
        _ => None,
    };
    let input_class = if field.error.is_some() { "input invalid" } else { "input" };

    rsx! {
        div {
            class: "field",
            label { class: "field-label", "{label}" }
            input {
                id: "{field.name}",
                class: input_class,
                r#type: field.input_type(),
                placeholder: "{field.placeholder}",
                value: "{field.value}",
                min: field.minimum.map(|min| min.to_string()),
                max: field.maximum.map(|max| max.to_string()),
                step: step,
                required: field.required,
                oninput: move |evt| on_input.call(evt.value()),
            }
            if let Some(error) = &field.error {
                span { class: "field-error", "{error}" }
            }
        }
    }
}
