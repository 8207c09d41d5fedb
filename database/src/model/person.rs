use serde::{Deserialize, Serialize};

use crate::{
    consts::consts::EntityId,
    error::DatabaseResult,
    validation::validate_person,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: EntityId,
    pub name: String,
    pub number: String,
}

impl Person {
    pub fn from_data(id: EntityId, data: PersonData) -> Self {
        Person {
            id,
            name: data.name,
            number: data.number,
        }
    }
}

/// The document body of a person, everything except the id
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PersonData {
    pub name: String,
    pub number: String,
}

impl PersonData {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        PersonData {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Re-checks the values, stores call this before every write
    pub fn validate(&self) -> DatabaseResult<()> {
        validate_person(Some(&self.name), Some(&self.number))
    }
}

/// Inbound request body. Fields are optional so a missing field is reported by validation
/// rather than by the deserializer.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PersonPayload {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl PersonPayload {
    pub fn into_person_data(self) -> DatabaseResult<PersonData> {
        validate_person(self.name.as_deref(), self.number.as_deref())?;

        // Validation guarantees both are present
        Ok(PersonData {
            name: self.name.unwrap_or_default(),
            number: self.number.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DatabaseError;

    #[test]
    fn person_serializes_with_string_id() {
        let person = Person::from_data(EntityId::new(), PersonData::new("Arto Hellas", "040-1234567"));

        let json = serde_json::to_value(&person).unwrap();

        assert_eq!(json["id"], serde_json::Value::String(person.id.to_string()));
        assert_eq!(json["name"], "Arto Hellas");
        assert_eq!(json["number"], "040-1234567");
    }

    #[test]
    fn payload_ignores_unknown_fields_and_tolerates_missing_ones() {
        let payload: PersonPayload =
            serde_json::from_str(r#"{"name": "Dan Abramov", "important": true}"#).unwrap();

        assert_eq!(payload.name.as_deref(), Some("Dan Abramov"));
        assert_eq!(payload.number, None);
    }

    #[test]
    fn payload_missing_number_is_a_validation_error() {
        let payload = PersonPayload {
            name: Some("Dan Abramov".to_string()),
            number: None,
        };

        let err = payload.into_person_data().err().expect("should error");

        assert!(matches!(err, DatabaseError::Validation(ref m) if m.contains("number")));
    }

    #[test]
    fn valid_payload_becomes_person_data() {
        let payload = PersonPayload {
            name: Some("Mary Poppendieck".to_string()),
            number: Some("39-23-6423122".to_string()),
        };

        let data = payload.into_person_data().expect("should be valid");

        assert_eq!(data, PersonData::new("Mary Poppendieck", "39-23-6423122"));
        assert_eq!(data.validate(), Ok(()));
    }
}
