use advisor_core::model::{PayloadField, SubmissionPayload};

use super::countries::COUNTRIES;

pub const GENDER_OPTIONS: [(&str, &str); 2] = [("male", "Male"), ("female", "Female")];

/// How a field is edited on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldInput {
    Text { placeholder: &'static str },
    Select { options: &'static [(&'static str, &'static str)] },
    Country,
}

#[must_use]
pub fn field_input(field: PayloadField) -> FieldInput {
    match field {
        PayloadField::FieldOfStudy => FieldInput::Text {
            placeholder: "Computer Science",
        },
        PayloadField::PrimaryHobby => FieldInput::Text {
            placeholder: "Reading books",
        },
        PayloadField::SecondaryHobby => FieldInput::Text {
            placeholder: "Cycling",
        },
        PayloadField::DesiredCareerField => FieldInput::Text {
            placeholder: "Applied Machine Learning Engineer",
        },
        PayloadField::Gender => FieldInput::Select {
            options: &GENDER_OPTIONS,
        },
        PayloadField::CountryOfOrigin => FieldInput::Country,
    }
}

/// Raw, untrimmed form state. Selects start on their first option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormVm {
    values: [String; 6],
}

impl Default for FormVm {
    fn default() -> Self {
        let mut form = Self {
            values: Default::default(),
        };
        form.set(PayloadField::Gender, GENDER_OPTIONS[0].0);
        form.set(PayloadField::CountryOfOrigin, COUNTRIES[0]);
        form
    }
}

impl FormVm {
    #[must_use]
    pub fn value(&self, field: PayloadField) -> &str {
        &self.values[slot(field)]
    }

    pub fn set(&mut self, field: PayloadField, value: impl Into<String>) {
        self.values[slot(field)] = value.into();
    }

    #[must_use]
    pub fn to_payload(&self) -> SubmissionPayload {
        PayloadField::ALL
            .into_iter()
            .fold(SubmissionPayload::builder(), |builder, field| {
                builder.field(field, self.value(field))
            })
            .build()
    }
}

fn slot(field: PayloadField) -> usize {
    match field {
        PayloadField::FieldOfStudy => 0,
        PayloadField::PrimaryHobby => 1,
        PayloadField::SecondaryHobby => 2,
        PayloadField::DesiredCareerField => 3,
        PayloadField::Gender => 4,
        PayloadField::CountryOfOrigin => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_first_options() {
        let form = FormVm::default();
        assert_eq!(form.value(PayloadField::Gender), "male");
        assert_eq!(form.value(PayloadField::CountryOfOrigin), "Afghanistan");
        assert_eq!(form.value(PayloadField::FieldOfStudy), "");
    }

    #[test]
    fn payload_is_trimmed() {
        let mut form = FormVm::default();
        form.set(PayloadField::FieldOfStudy, "  Statistics ");
        form.set(PayloadField::Gender, "female");

        let payload = form.to_payload();
        assert_eq!(payload.get(PayloadField::FieldOfStudy), "Statistics");
        assert_eq!(payload.get(PayloadField::Gender), "female");
        assert_eq!(payload.get(PayloadField::CountryOfOrigin), "Afghanistan");
        // Untouched form keeps the raw text.
        assert_eq!(form.value(PayloadField::FieldOfStudy), "  Statistics ");
    }

    #[test]
    fn text_fields_have_placeholders() {
        assert_eq!(
            field_input(PayloadField::SecondaryHobby),
            FieldInput::Text {
                placeholder: "Cycling"
            }
        );
        assert_eq!(field_input(PayloadField::CountryOfOrigin), FieldInput::Country);
    }
}
