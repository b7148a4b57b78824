use std::collections::HashMap;

use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    config::ClientConfig,
    error::ClientError,
    models::{
        item::Item,
        template::{ContentBlocks, Field, Template},
    },
    utils::{basic_auth_token, timestamped_name},
};

pub const ACCEPT_V2: &str = "application/vnd.gathercontent.v2+json";

pub struct ContentWorkflowClient {
    http_client: Client,
    base_url: String,
    config: ClientConfig,
}

impl ContentWorkflowClient {
    pub fn new(email: &str, api_key: &str, config: ClientConfig) -> Result<Self, ClientError> {
        if email.is_empty() || api_key.is_empty() {
            return Err(ClientError::Authentication(
                "Email and API Key are required".to_string(),
            ));
        }

        let token = basic_auth_token(email, api_key);
        let mut auth = HeaderValue::from_str(&format!("Basic {}", token)).map_err(|_| {
            ClientError::Authentication("Credentials are not a valid header value".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V2));

        let http_client = Client::builder().default_headers(headers).build()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        info!(base_url = %base_url, "Content Workflow client initialized");

        Ok(Self {
            http_client,
            base_url,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `name` (or the configured default item name) followed by a millisecond timestamp.
    pub fn unique_item_name(&self, name: Option<&str>) -> String {
        timestamped_name(name.unwrap_or(&self.config.default_item_name))
    }

    pub async fn get_template(&self, template_id: u64) -> Result<Template, ClientError> {
        if template_id == 0 {
            return Err(ClientError::MissingInput("Template ID"));
        }

        let url = format!("{}/templates/{}", self.base_url, template_id);

        debug!(template_id, "Fetching template");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();

        match status {
            StatusCode::OK => Ok(response.json::<Template>().await?),
            StatusCode::NOT_FOUND => {
                warn!(template_id, "Template not found");
                Err(ClientError::TemplateNotFound { template_id })
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                warn!(template_id, status = %status, "Unexpected status fetching template");
                Err(ClientError::UnexpectedStatus {
                    context: "getting template",
                    status,
                    body,
                })
            }
        }
    }

    /// Decoded instructions for every field in `group_name` of the master template.
    pub async fn get_content_blocks(
        &self,
        group_name: &str,
        master_template_id: Option<u64>,
    ) -> Result<ContentBlocks, ClientError> {
        self.fetch_content_blocks(group_name, master_template_id, |_| true)
            .await
    }

    /// Like [`Self::get_content_blocks`], restricted to the given field labels.
    pub async fn get_content_blocks_for_fields<S: AsRef<str>>(
        &self,
        group_name: &str,
        master_template_id: Option<u64>,
        labels: &[S],
    ) -> Result<ContentBlocks, ClientError> {
        self.fetch_content_blocks(group_name, master_template_id, |f| {
            labels.iter().any(|l| l.as_ref() == f.label)
        })
        .await
    }

    /// Pulls content blocks from the item's master group for the fields the
    /// item knows about, merges them into the item and returns them.
    pub async fn fill_item_content_blocks(
        &self,
        item: &mut Item,
        master_template_id: Option<u64>,
    ) -> Result<ContentBlocks, ClientError> {
        let group_name = item.master_group().to_string();
        let blocks = {
            let known: &Item = item;
            self.fetch_content_blocks(&group_name, master_template_id, |f| {
                known.has_field(&f.label)
            })
            .await?
        };

        item.add_content(blocks.clone());

        Ok(blocks)
    }

    async fn fetch_content_blocks<F>(
        &self,
        group_name: &str,
        master_template_id: Option<u64>,
        filter: F,
    ) -> Result<ContentBlocks, ClientError>
    where
        F: Fn(&Field) -> bool,
    {
        let master_id = master_template_id
            .or(self.config.master_template_id)
            .ok_or(ClientError::MissingInput("Master Template ID"))?;

        let master = self.get_template(master_id).await?;

        let blocks = master.content_blocks(group_name, filter).inspect_err(|_| {
            warn!(
                group = group_name,
                master_template_id = master_id,
                "Group missing from master template"
            );
        })?;

        debug!(
            group = group_name,
            master_template_id = master_id,
            field_count = blocks.len(),
            "Content blocks extracted"
        );

        Ok(blocks)
    }

    /// Builds an item from `template_id`, fills it from the master template's
    /// `group_name` group, layers `extra_content` on top and creates it.
    pub async fn create_item(
        &self,
        name: &str,
        template_id: u64,
        group_name: Option<&str>,
        extra_content: HashMap<String, Value>,
    ) -> Result<Value, ClientError> {
        let project_id = self
            .config
            .project_id
            .filter(|id| *id != 0)
            .ok_or(ClientError::MissingInput("Project ID"))?;

        if name.is_empty() {
            return Err(ClientError::MissingInput("Item name"));
        }

        if template_id == 0 {
            return Err(ClientError::MissingInput("Template ID"));
        }

        let template = self.get_template(template_id).await?;

        let mut item = Item::new(name, project_id, &template, group_name);
        self.fill_item_content_blocks(&mut item, None).await?;
        item.add_content(extra_content);

        self.create(&item).await
    }

    pub async fn create(&self, item: &Item) -> Result<Value, ClientError> {
        let url = format!("{}/projects/{}/items", self.base_url, item.project_id());

        debug!(
            name = item.name(),
            project_id = item.project_id(),
            template_id = item.template_id(),
            "Creating item"
        );

        let response = self
            .http_client
            .post(&url)
            .json(&item.to_api())
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::CREATED {
            // An empty body or one without `data` yields `Value::Null`.
            let body = response.text().await?;
            let created = if body.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str::<Value>(&body)?
                    .get_mut("data")
                    .map(Value::take)
                    .unwrap_or(Value::Null)
            };

            info!(
                name = item.name(),
                project_id = item.project_id(),
                "Item created"
            );

            return Ok(created);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, name = item.name(), "Item creation failed");

        if status.is_client_error() {
            Err(ClientError::ItemRejected {
                status,
                message: error_message(&body),
            })
        } else {
            Err(ClientError::UnexpectedStatus {
                context: "creating item",
                status,
                body,
            })
        }
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
