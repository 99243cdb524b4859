// src/workload/payload.rs

use serde::Serialize;

/// JSON body sent to the generation endpoint. Built fresh for every
/// iteration and discarded after the request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(rename = "modelVersion")]
    pub model_version: String,
}

impl GenerateRequest {
    pub fn new(prompt: &str, model_version: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            model_version: model_version.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn serializes_with_camel_case_model_version() {
        let request = GenerateRequest::new("Tell me a joke.", "gemini-2.0-flash");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["prompt"], "Tell me a joke.");
        assert_eq!(json["modelVersion"], "gemini-2.0-flash");
        assert!(json.get("model_version").is_none());
    }

    proptest! {
        #[test]
        fn payload_always_carries_the_model_version(prompt in ".{0,200}") {
            let request = GenerateRequest::new(&prompt, "gemini-2.0-flash");
            let json = serde_json::to_value(&request).unwrap();

            prop_assert_eq!(json["modelVersion"].as_str(), Some("gemini-2.0-flash"));
            prop_assert_eq!(json["prompt"].as_str(), Some(prompt.as_str()));
        }
    }
}
