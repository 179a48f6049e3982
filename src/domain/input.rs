use serde::Deserialize;
use thiserror::Error;

/// Caller-supplied content to moderate. Empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModerationInput {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid request body: text or imageUrl is required.")]
    MissingContent,
}

impl ModerationInput {
    pub fn new(text: Option<String>, image_reference: Option<String>) -> Self {
        Self {
            text,
            image_reference,
        }
    }

    pub fn text(&self) -> Option<&str> {
        non_empty(self.text.as_deref())
    }

    pub fn image_reference(&self) -> Option<&str> {
        non_empty(self.image_reference.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_none() && self.image_reference().is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_count_as_absent() {
        let input = ModerationInput::new(Some(String::new()), Some(String::new()));
        assert!(input.is_empty());
        assert_eq!(input.text(), None);
    }

    #[test]
    fn deserializes_camel_case_image_url() {
        let input: ModerationInput =
            serde_json::from_str(r#"{"imageUrl":"http://x/y.png","text":null}"#).unwrap();
        assert_eq!(input.image_reference(), Some("http://x/y.png"));
        assert_eq!(input.text(), None);
    }
}
