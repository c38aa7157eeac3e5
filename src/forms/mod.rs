use serde::Deserialize;

use crate::models::NewNote;

pub const TITLE_MAX_CHARS: usize = 200;

/// Submitted note fields, straight from an HTML form or an admin request
/// body. Missing fields deserialize as empty strings, matching how browsers
/// submit blank inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Vec<String>,
    pub content: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

impl NoteForm {
    /// Trims both fields and checks the constraints: title non-empty and at
    /// most [`TITLE_MAX_CHARS`] characters, content non-empty. Returns the
    /// cleaned data on success.
    pub fn validate(&self) -> Result<NewNote, FieldErrors> {
        let title = self.title.trim();
        let content = self.content.trim();

        let mut errors = FieldErrors::default();

        if title.is_empty() {
            errors.title.push("This field is required.".to_string());
        } else {
            let len = title.chars().count();
            if len > TITLE_MAX_CHARS {
                errors.title.push(format!(
                    "Ensure this value has at most {TITLE_MAX_CHARS} characters (it has {len})."
                ));
            }
        }

        if content.is_empty() {
            errors.content.push("This field is required.".to_string());
        }

        if errors.is_empty() {
            Ok(NewNote {
                title: title.to_string(),
                content: content.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}
