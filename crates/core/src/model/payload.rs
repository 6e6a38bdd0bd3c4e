use serde::Serialize;

/// The six named fields a recommendation request carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PayloadField {
    FieldOfStudy,
    PrimaryHobby,
    SecondaryHobby,
    DesiredCareerField,
    Gender,
    CountryOfOrigin,
}

impl PayloadField {
    /// All fields, in wire order.
    pub const ALL: [Self; 6] = [
        Self::FieldOfStudy,
        Self::PrimaryHobby,
        Self::SecondaryHobby,
        Self::DesiredCareerField,
        Self::Gender,
        Self::CountryOfOrigin,
    ];

    /// JSON key used on the wire.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FieldOfStudy => "field_of_study",
            Self::PrimaryHobby => "primary_hobby",
            Self::SecondaryHobby => "secondary_hobby",
            Self::DesiredCareerField => "desired_career_field",
            Self::Gender => "gender",
            Self::CountryOfOrigin => "country_of_origin",
        }
    }

    /// Human readable label for forms.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FieldOfStudy => "Field of study",
            Self::PrimaryHobby => "Hobby (primary)",
            Self::SecondaryHobby => "Hobby (secondary)",
            Self::DesiredCareerField => "Desired career",
            Self::Gender => "Gender",
            Self::CountryOfOrigin => "Country of origin",
        }
    }
}

/// Immutable request body for one submission.
///
/// Every value is stored trimmed. Missing values are empty strings, never absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    field_of_study: String,
    primary_hobby: String,
    secondary_hobby: String,
    desired_career_field: String,
    gender: String,
    country_of_origin: String,
}

impl SubmissionPayload {
    #[must_use]
    pub fn builder() -> SubmissionPayloadBuilder {
        SubmissionPayloadBuilder::default()
    }

    #[must_use]
    pub fn get(&self, field: PayloadField) -> &str {
        match field {
            PayloadField::FieldOfStudy => &self.field_of_study,
            PayloadField::PrimaryHobby => &self.primary_hobby,
            PayloadField::SecondaryHobby => &self.secondary_hobby,
            PayloadField::DesiredCareerField => &self.desired_career_field,
            PayloadField::Gender => &self.gender,
            PayloadField::CountryOfOrigin => &self.country_of_origin,
        }
    }

    /// Iterates `(field, value)` pairs in wire order.
    pub fn fields(&self) -> impl Iterator<Item = (PayloadField, &str)> + '_ {
        PayloadField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct SubmissionPayloadBuilder {
    payload: SubmissionPayload,
}

impl SubmissionPayloadBuilder {
    #[must_use]
    pub fn field(mut self, field: PayloadField, value: impl AsRef<str>) -> Self {
        let value = value.as_ref().trim().to_string();
        let slot = match field {
            PayloadField::FieldOfStudy => &mut self.payload.field_of_study,
            PayloadField::PrimaryHobby => &mut self.payload.primary_hobby,
            PayloadField::SecondaryHobby => &mut self.payload.secondary_hobby,
            PayloadField::DesiredCareerField => &mut self.payload.desired_career_field,
            PayloadField::Gender => &mut self.payload.gender,
            PayloadField::CountryOfOrigin => &mut self.payload.country_of_origin,
        };
        *slot = value;
        self
    }

    #[must_use]
    pub fn build(self) -> SubmissionPayload {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_trims_values_and_defaults_missing_to_empty() {
        let payload = SubmissionPayload::builder()
            .field(PayloadField::FieldOfStudy, "  Computer Science \n")
            .field(PayloadField::Gender, "female")
            .build();

        assert_eq!(payload.get(PayloadField::FieldOfStudy), "Computer Science");
        assert_eq!(payload.get(PayloadField::Gender), "female");
        assert_eq!(payload.get(PayloadField::PrimaryHobby), "");
        assert_eq!(payload.get(PayloadField::CountryOfOrigin), "");
    }

    #[test]
    fn serializes_all_six_keys_in_order() {
        let payload = SubmissionPayload::builder()
            .field(PayloadField::PrimaryHobby, "Reading books")
            .build();
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"field_of_study":"","primary_hobby":"Reading books","secondary_hobby":"","desired_career_field":"","gender":"","country_of_origin":""}"#
        );
    }

    #[test]
    fn fields_follow_wire_order() {
        let payload = SubmissionPayload::default();
        let keys: Vec<_> = payload.fields().map(|(field, _)| field.key()).collect();
        assert_eq!(
            keys,
            [
                "field_of_study",
                "primary_hobby",
                "secondary_hobby",
                "desired_career_field",
                "gender",
                "country_of_origin",
            ]
        );
    }
}
