#![allow(dead_code)]

use content_blocks::{
    clients::content_workflow::ContentWorkflowClient, config::ClientConfig,
    models::template::Template,
};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const EMAIL: &str = "editor@example.com";
pub const API_KEY: &str = "secret-key";
/// base64("editor@example.com:secret-key")
pub const BASIC_AUTH: &str = "Basic ZWRpdG9yQGV4YW1wbGUuY29tOnNlY3JldC1rZXk=";

pub const PROJECT_ID: u64 = 393102;
pub const PRODUCT_TEMPLATE_ID: u64 = 3240083;
pub const MASTER_TEMPLATE_ID: u64 = 3263673;

/// Target template: fields spread over two groups, `Summary` repeated.
pub fn product_template_json() -> Value {
    json!({
        "data": {
            "id": PRODUCT_TEMPLATE_ID,
            "name": "Product",
            "project_id": PROJECT_ID
        },
        "related": {
            "structure": {
                "uuid": "structure-1",
                "groups": [
                    {
                        "uuid": "group-a",
                        "name": "Content",
                        "fields": [
                            { "uuid": "uuid-title", "label": "Title", "field_type": "text", "instructions": "" },
                            { "uuid": "uuid-summary-old", "label": "Summary", "field_type": "text" }
                        ]
                    },
                    {
                        "uuid": "group-b",
                        "name": "Details",
                        "fields": [
                            { "uuid": "uuid-summary", "label": "Summary", "field_type": "text" },
                            { "uuid": "uuid-warranty", "label": "Warranty", "field_type": "text" }
                        ]
                    }
                ]
            }
        }
    })
}

/// Master template holding the reusable blocks.
pub fn master_template_json() -> Value {
    json!({
        "data": { "id": MASTER_TEMPLATE_ID, "name": "Master" },
        "related": {
            "structure": {
                "groups": [
                    {
                        "name": "Content",
                        "fields": [
                            { "uuid": "m-1", "label": "Summary", "instructions": "Generic summary" }
                        ]
                    },
                    {
                        "name": "Product One",
                        "fields": [
                            { "uuid": "m-2", "label": "Summary", "instructions": "&lt;p&gt;Fast &amp; light&lt;/p&gt;" },
                            { "uuid": "m-3", "label": "Warranty", "instructions": "Two years&#39; cover" },
                            { "uuid": "m-4", "label": "Shipping", "instructions": "Ships in &quot;3-5&quot; days" },
                            { "uuid": "m-5", "label": "Notes" }
                        ]
                    }
                ]
            }
        }
    })
}

pub fn product_template() -> Template {
    serde_json::from_value(product_template_json()).expect("product fixture parses")
}

pub fn master_template() -> Template {
    serde_json::from_value(master_template_json()).expect("master fixture parses")
}

pub fn client_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        project_id: Some(PROJECT_ID),
        master_template_id: Some(MASTER_TEMPLATE_ID),
        ..ClientConfig::default()
    }
}

pub fn client(server: &MockServer) -> ContentWorkflowClient {
    ContentWorkflowClient::new(EMAIL, API_KEY, client_config(server)).expect("client builds")
}
