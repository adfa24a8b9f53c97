//! The document a fresh session starts with.

use serde_json::{json, Value};

/// A small "Hello World" API used as the initial document.
pub fn sample_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "My API",
            "version": "1.0.0",
            "description": "A sample API specification"
        },
        "paths": {
            "/hello": {
                "get": {
                    "summary": "Hello World endpoint",
                    "description": "Returns a greeting message",
                    "operationId": "getHello",
                    "responses": {
                        "200": {
                            "description": "Successful response",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "message": {
                                                "type": "string",
                                                "example": "Hello, World!"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
