use std::collections::HashMap;

use anyhow::{Error, Result, anyhow};
use content_blocks::{clients::content_workflow::ContentWorkflowClient, config::Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::load()?;
    let client_config = config.client_config();

    let template_name = config
        .item_template
        .as_deref()
        .ok_or_else(|| anyhow!("ITEM_TEMPLATE must name a template or give its id"))?;
    let template_id = client_config
        .template(template_name)
        .or_else(|| template_name.parse().ok())
        .ok_or_else(|| anyhow!("Unknown template: {}", template_name))?;

    let group_name = config
        .item_group
        .as_deref()
        .map(|g| client_config.group(g).unwrap_or(g).to_string());

    let client = ContentWorkflowClient::new(&config.email, &config.api_key, client_config)?;
    let name = client.unique_item_name(None);

    let created = client
        .create_item(&name, template_id, group_name.as_deref(), HashMap::new())
        .await?;

    info!(name = %name, template_id, item = %created, "Item created");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if std::env::var("LOG_FORMAT").is_ok_and(|f| f == "json") {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
