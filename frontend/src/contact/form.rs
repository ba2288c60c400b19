use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    NewConstruction,
    Renovation,
    Restoration,
    LandDevelopment,
    Consultation,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::NewConstruction,
        Service::Renovation,
        Service::Restoration,
        Service::LandDevelopment,
        Service::Consultation,
    ];

    /// Wire value used by the select element and the submission mapping.
    pub fn value(self) -> &'static str {
        match self {
            Service::NewConstruction => "new-construction",
            Service::Renovation => "renovation",
            Service::Restoration => "restoration",
            Service::LandDevelopment => "land-development",
            Service::Consultation => "consultation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Service::NewConstruction => "New Construction",
            Service::Renovation => "Renovation",
            Service::Restoration => "Restoration",
            Service::LandDevelopment => "Land Development",
            Service::Consultation => "Consultation",
        }
    }

    pub fn from_value(value: &str) -> Option<Service> {
        Service::ALL.into_iter().find(|service| service.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Option<Service>,
    pub message: String,
}

/// What the form hands off on submit: every field as a string.
pub type Submission = BTreeMap<&'static str, String>;

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            // Anything outside the enumerated set clears the selection.
            Field::Service => self.service = Service::from_value(&value),
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => self.service.map_or("", Service::value),
            Field::Message => &self.message,
        }
    }

    /// Required fields left empty or whitespace-only.
    pub fn missing_required(&self) -> Vec<Field> {
        [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn submission(&self) -> Submission {
        [Field::Name, Field::Email, Field::Phone, Field::Service, Field::Message]
            .into_iter()
            .map(|field| (field.key(), self.get(field).to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada Builder".into());
        form.set(Field::Email, "ada@example.com".into());
        form.set(Field::Message, "Two storey addition".into());
        form
    }

    #[test]
    fn service_values_round_trip_through_serde() {
        for service in Service::ALL {
            let json = serde_json::to_string(&service).unwrap();
            assert_eq!(json, format!("\"{}\"", service.value()));
            assert_eq!(Service::from_value(service.value()), Some(service));
        }
    }

    #[test]
    fn unknown_service_clears_selection() {
        let mut form = ContactForm::default();
        form.set(Field::Service, "renovation".into());
        assert_eq!(form.service, Some(Service::Renovation));
        form.set(Field::Service, "demolition".into());
        assert_eq!(form.service, None);
    }

    #[test]
    fn required_fields_are_name_email_and_message() {
        assert_eq!(
            ContactForm::default().missing_required(),
            vec![Field::Name, Field::Email, Field::Message]
        );
        let mut form = filled();
        assert!(form.missing_required().is_empty());
        form.set(Field::Email, "   ".into());
        assert_eq!(form.missing_required(), vec![Field::Email]);
    }

    #[test]
    fn submission_is_a_flat_string_mapping() {
        let mut form = filled();
        form.set(Field::Service, "land-development".into());
        let submission = form.submission();
        let keys: Vec<&str> = submission.keys().copied().collect();
        assert_eq!(keys, vec!["email", "message", "name", "phone", "service"]);
        assert_eq!(submission["service"], "land-development");
        assert_eq!(submission["phone"], "");
    }
}
