use serde::{Deserialize, Serialize};

/// Body of a `POST /responses` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseRequest {
    pub model: String,
    pub input: Vec<InputMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "input_image")]
    InputImage { image_base64: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Option<Vec<OutputItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub content: Option<Vec<OutputContent>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputContent {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl ResponseRequest {
    /// One user turn: the prompt as a text part followed by the image.
    pub fn single_turn(
        model: impl Into<String>,
        prompt: impl Into<String>,
        image_base64: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            input: vec![InputMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: prompt.into(),
                    },
                    ContentPart::InputImage {
                        image_base64: image_base64.into(),
                    },
                ],
            }],
        }
    }
}

impl ProviderResponse {
    /// The response's text output.
    ///
    /// Some compatible providers send a ready-made `output_text`; otherwise
    /// the `output_text` parts of every `message` item are concatenated.
    pub fn aggregated_text(&self) -> String {
        if let Some(text) = self.output_text.as_deref().filter(|t| !t.is_empty()) {
            return text.to_string();
        }

        self.output
            .iter()
            .flatten()
            .filter(|item| item.item_type == "message")
            .flat_map(|item| item.content.iter().flatten())
            .filter(|part| part.content_type == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}
