use serde::Serialize;

use super::input::{InputError, ModerationInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    ModerateText,
    ModerateImage,
}

impl TaskType {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::ModerateText => "moderate_text",
            TaskType::ModerateImage => "moderate_image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TaskPayload {
    Image {
        #[serde(rename = "imageUrl")]
        image_reference: String,
        #[serde(rename = "textContext", skip_serializing_if = "Option::is_none")]
        text_context: Option<String>,
    },
    Text {
        text: String,
    },
}

/// Normalized unit of work sent to the coordinator. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescriptor {
    task_type: TaskType,
    payload: TaskPayload,
}

impl TaskDescriptor {
    /// An image always wins over text; text then rides along as context.
    pub fn build(input: &ModerationInput) -> Result<Self, InputError> {
        match (input.image_reference(), input.text()) {
            (Some(image), text) => Ok(Self {
                task_type: TaskType::ModerateImage,
                payload: TaskPayload::Image {
                    image_reference: image.to_string(),
                    text_context: text.map(str::to_string),
                },
            }),
            (None, Some(text)) => Ok(Self {
                task_type: TaskType::ModerateText,
                payload: TaskPayload::Text {
                    text: text.to_string(),
                },
            }),
            (None, None) => Err(InputError::MissingContent),
        }
    }

    pub fn task_type(&self) -> TaskType {
        self.task_type
    }

    pub fn payload(&self) -> &TaskPayload {
        &self.payload
    }
}
