mod common;

use anyhow::Result;
use content_blocks::{error::ClientError, models::template::Template};
use serde_json::json;

/// Test: Template keeps keys it does not model
#[test]
fn test_template_round_trips_unmodified() -> Result<()> {
    let raw = common::product_template_json();
    let template: Template = serde_json::from_value(raw.clone())?;

    assert_eq!(template.id(), common::PRODUCT_TEMPLATE_ID);
    assert_eq!(template.groups().len(), 2);
    assert_eq!(template.data.name(), Some("Product"));
    assert_eq!(serde_json::to_value(&template)?, raw);

    Ok(())
}

/// Test: Content blocks decode HTML entities and default missing instructions to empty
#[test]
fn test_content_blocks_decode_entities() -> Result<()> {
    let blocks = common::master_template().content_blocks("Product One", |_| true)?;

    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks["Summary"], "<p>Fast & light</p>");
    assert_eq!(blocks["Warranty"], "Two years' cover");
    assert_eq!(blocks["Shipping"], "Ships in \"3-5\" days");
    assert_eq!(blocks["Notes"], "");

    Ok(())
}

/// Test: Filter restricts which fields are collected
#[test]
fn test_content_blocks_respect_filter() -> Result<()> {
    let blocks = common::master_template()
        .content_blocks("Product One", |f| f.label == "Warranty")?;

    assert_eq!(blocks.len(), 1);
    assert!(blocks.contains_key("Warranty"));

    Ok(())
}

/// Test: Missing group is reported by name
#[test]
fn test_content_blocks_missing_group() -> Result<()> {
    let err = common::master_template()
        .content_blocks("Product Nine", |_| true)
        .unwrap_err();

    assert!(matches!(err, ClientError::GroupNotFound(ref g) if g == "Product Nine"));
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Group: Product Nine not found");

    Ok(())
}

/// Test: Keys sent as null survive a round trip and read as absent
#[test]
fn test_null_keys_round_trip() -> Result<()> {
    let raw = json!({
        "data": { "id": 11, "name": null },
        "related": {
            "structure": {
                "groups": [
                    {
                        "name": "Content",
                        "fields": [
                            { "uuid": "u1", "label": "Title", "instructions": null },
                            { "uuid": "u2", "label": "Body" }
                        ]
                    }
                ]
            }
        }
    });
    let template: Template = serde_json::from_value(raw.clone())?;

    assert_eq!(serde_json::to_value(&template)?, raw);
    assert_eq!(template.data.name(), None);

    let blocks = template.content_blocks("Content", |_| true)?;
    assert_eq!(blocks["Title"], "");
    assert_eq!(blocks["Body"], "");

    Ok(())
}

/// Test: Entities without a terminating semicolon are left as written
#[test]
fn test_unterminated_entities_left_as_written() -> Result<()> {
    let template: Template = serde_json::from_value(json!({
        "data": { "id": 12 },
        "related": {
            "structure": {
                "groups": [
                    {
                        "name": "Content",
                        "fields": [
                            { "uuid": "u1", "label": "Menu", "instructions": "Fish &amp chips &amp; peas" }
                        ]
                    }
                ]
            }
        }
    }))?;

    let blocks = template.content_blocks("Content", |_| true)?;
    assert_eq!(blocks["Menu"], "Fish &amp chips & peas");

    Ok(())
}
