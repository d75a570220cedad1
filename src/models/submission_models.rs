use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// The three backdrops a generated photo can be composed onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Casual,
    Official,
    Patriot,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Casual, Scenario::Official, Scenario::Patriot];

    pub fn id(&self) -> &'static str {
        match self {
            Scenario::Casual => "casual",
            Scenario::Official => "official",
            Scenario::Patriot => "patriot",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Casual => "Opção 1: Encontro Casual",
            Scenario::Official => "Opção 2: Compromisso Oficial",
            Scenario::Patriot => "Opção 3: Apoio Patriota",
        }
    }

    pub fn thumbnail(&self) -> &'static str {
        match self {
            Scenario::Casual => "/encontro-casual.webp",
            Scenario::Official => "/encontro-oficial.webp",
            Scenario::Patriot => "/encontro-patriota.webp",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScenario(pub String);

impl fmt::Display for UnknownScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scenario: {}", self.0)
    }
}

impl std::error::Error for UnknownScenario {}

impl FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.id() == s)
            .ok_or_else(|| UnknownScenario(s.to_string()))
    }
}

/// Free-text inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Height,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Email => f.write_str("email"),
            FormField::Height => f.write_str("height"),
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(FormField::Email),
            "height" => Ok(FormField::Height),
            other => Err(format!("unknown form field: {}", other)),
        }
    }
}

/// A photo picked by the user, held in memory until it is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub media_type: String, // as declared by the browser, e.g. "image/jpeg"
    pub data: Bytes,
}

impl SelectedImage {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub email: String,
    pub height: String, // centimeters, accepted as typed
    pub scenario: Option<Scenario>,
    pub image: Option<SelectedImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Succeeded(msg) | SubmissionStatus::Failed(msg) => Some(msg),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

/// Body posted to the image generation webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub name: String, // no input populates this, the receiver still expects the key
    pub email: String,
    pub height: String,
    pub scenario: Scenario,
    pub image: String, // raw base64, no data-URI prefix
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}
