use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// The input control a field is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Password,
    Dropdown(Vec<String>),
}

impl FieldKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Password => "password",
            Self::Dropdown(_) => "dropdown",
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            Self::Dropdown(options) => options,
            Self::Text | Self::Number | Self::Date | Self::Password => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormTemplate {
    pub type_name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl FormTemplate {
    pub fn new(type_name: &str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            type_name: type_name.to_string(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate form type: {0}")]
    DuplicateType(String),
    #[error("duplicate field {field} in form type {type_name}")]
    DuplicateField { type_name: String, field: String },
    #[error("dropdown {field} in form type {type_name} has no options")]
    EmptyDropdown { type_name: String, field: String },
}

/// Fixed set of form templates, keyed by type name and kept in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateRegistry {
    templates: Vec<FormTemplate>,
}

impl TemplateRegistry {
    pub fn from_templates(templates: Vec<FormTemplate>) -> Result<Self, RegistryError> {
        let mut type_names = HashSet::new();
        for template in &templates {
            if !type_names.insert(template.type_name.as_str()) {
                return Err(RegistryError::DuplicateType(template.type_name.clone()));
            }

            let mut field_names = HashSet::new();
            for field in &template.fields {
                if !field_names.insert(field.name.as_str()) {
                    return Err(RegistryError::DuplicateField {
                        type_name: template.type_name.clone(),
                        field: field.name.clone(),
                    });
                }
                if matches!(&field.kind, FieldKind::Dropdown(options) if options.is_empty()) {
                    return Err(RegistryError::EmptyDropdown {
                        type_name: template.type_name.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }

        Ok(Self { templates })
    }

    /// The three templates the widget ships with.
    pub fn builtin() -> Self {
        let states = ["California", "Texas", "New York"]
            .iter()
            .map(ToString::to_string)
            .collect();

        Self {
            templates: vec![
                FormTemplate::new(
                    "User Information",
                    vec![
                        FieldDescriptor::new("firstName", "First Name", FieldKind::Text, true),
                        FieldDescriptor::new("lastName", "Last Name", FieldKind::Text, true),
                        FieldDescriptor::new("age", "Age", FieldKind::Number, false),
                    ],
                ),
                FormTemplate::new(
                    "Address Information",
                    vec![
                        FieldDescriptor::new("street", "Street", FieldKind::Text, true),
                        FieldDescriptor::new("city", "City", FieldKind::Text, true),
                        FieldDescriptor::new("state", "State", FieldKind::Dropdown(states), true),
                        FieldDescriptor::new("zipCode", "Zip Code", FieldKind::Text, false),
                    ],
                ),
                FormTemplate::new(
                    "Payment Information",
                    vec![
                        FieldDescriptor::new("cardNumber", "Card Number", FieldKind::Text, true),
                        FieldDescriptor::new("expiryDate", "Expiry Date", FieldKind::Date, true),
                        FieldDescriptor::new("cvv", "CVV", FieldKind::Password, true),
                        FieldDescriptor::new(
                            "cardholderName",
                            "Cardholder Name",
                            FieldKind::Text,
                            true,
                        ),
                    ],
                ),
            ],
        }
    }

    pub fn lookup(&self, type_name: &str) -> Option<&FormTemplate> {
        self.templates
            .iter()
            .find(|template| template.type_name == type_name)
    }

    /// Fields of a template; an unknown type has no fields.
    pub fn fields_for(&self, type_name: &str) -> &[FieldDescriptor] {
        self.lookup(type_name)
            .map_or(&[][..], |template| template.fields.as_slice())
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.templates
            .iter()
            .map(|template| template.type_name.as_str())
    }

    pub fn templates(&self) -> &[FormTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
