//! Prompt construction and the canned quick prompts.

use serde_json::Value;

/// System instruction framing the assistant role.
pub const SYSTEM_PROMPT: &str = "You are an expert API designer assistant. Help the user design their OpenAPI specification. When suggesting changes, provide the full updated JSON structure for the relevant part of the specification.";

/// A canned prompt offered in the quick-prompt list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickPrompt {
    pub title: &'static str,
    pub prompt: &'static str,
}

pub const QUICK_PROMPTS: [QuickPrompt; 5] = [
    QuickPrompt {
        title: "Add Authentication",
        prompt: "Add OAuth2 authentication to the API specification with JWT tokens.",
    },
    QuickPrompt {
        title: "Add Error Responses",
        prompt: "Add standard error responses (400, 401, 403, 404, 500) to all endpoints.",
    },
    QuickPrompt {
        title: "Add CRUD Endpoint",
        prompt: "Add CRUD operations for a new resource to the API.",
    },
    QuickPrompt {
        title: "Add Pagination",
        prompt: "Add pagination parameters and response structure to GET endpoints.",
    },
    QuickPrompt {
        title: "Add Search",
        prompt: "Add search functionality with filtering and sorting parameters.",
    },
];

/// User message: the whole document as 2-space JSON, then the question.
pub fn user_message(document: &Value, question: &str) -> String {
    let spec = serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string());
    format!(
        "Given this API specification: {}\n\nUser question: {}",
        spec, question
    )
}
