use advisor_core::model::PayloadField;
use dioxus::prelude::*;

use crate::vm::{COUNTRIES, FieldInput, FormVm, field_input};

#[component]
pub fn FormPanel(
    form: FormVm,
    on_change: Callback<(PayloadField, String)>,
    on_submit: Callback<()>,
) -> Element {
    let control = |field: PayloadField| {
        rsx! {
            FieldControl {
                field,
                value: form.value(field).to_string(),
                on_change,
            }
        }
    };

    rsx! {
        div { class: "advisor-form",
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                {control(PayloadField::FieldOfStudy)}
                div { class: "field-row",
                    {control(PayloadField::PrimaryHobby)}
                    {control(PayloadField::SecondaryHobby)}
                }
                {control(PayloadField::DesiredCareerField)}
                {control(PayloadField::Gender)}
                {control(PayloadField::CountryOfOrigin)}

                div { class: "divider" }

                button { class: "btn-submit", r#type: "submit", "Get recommendations →" }
            }
        }
    }
}

#[component]
fn FieldControl(
    field: PayloadField,
    value: String,
    on_change: Callback<(PayloadField, String)>,
) -> Element {
    let id = field.key();
    let control = match field_input(field) {
        FieldInput::Text { placeholder } => rsx! {
            input {
                id: id,
                name: id,
                r#type: "text",
                placeholder: placeholder,
                value: "{value}",
                oninput: move |evt| on_change.call((field, evt.value())),
            }
        },
        FieldInput::Select { options } => rsx! {
            select {
                id: id,
                name: id,
                value: "{value}",
                onchange: move |evt| on_change.call((field, evt.value())),
                for (option_value, option_label) in options.iter().copied() {
                    option {
                        key: "{option_value}",
                        value: option_value,
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
        },
        FieldInput::Country => rsx! {
            select {
                id: id,
                name: id,
                value: "{value}",
                onchange: move |evt| on_change.call((field, evt.value())),
                for country in COUNTRIES.iter().copied() {
                    option {
                        key: "{country}",
                        value: country,
                        selected: country == value,
                        "{country}"
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "field",
            label { r#for: id, "{field.label()}" }
            {control}
        }
    }
}
