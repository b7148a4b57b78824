use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClientError;

/// Field label to decoded instructions, as pulled from a master template group.
pub type ContentBlocks = HashMap<String, String>;

/// Template as returned by `GET /templates/{id}`.
///
/// Keys this crate does not use are kept in the `extra` maps so the value
/// serializes back to the response it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub data: TemplateData,

    #[serde(default)]
    pub related: TemplateRelated,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateData {
    pub id: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateRelated {
    #[serde(default)]
    pub structure: Structure,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    #[serde(default)]
    pub groups: Vec<Group>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub uuid: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TemplateData {
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}

impl Field {
    /// Raw instructions text; `None` when absent, null or not a string.
    pub fn instructions(&self) -> Option<&str> {
        self.extra.get("instructions").and_then(Value::as_str)
    }

    /// Entities are decoded in their terminated form (`&amp;`, `&#39;`);
    /// legacy forms without the trailing `;` are left as written.
    pub fn decoded_instructions(&self) -> String {
        self.instructions()
            .map(|text| html_escape::decode_html_entities(text).into_owned())
            .unwrap_or_default()
    }
}

impl Template {
    pub fn id(&self) -> u64 {
        self.data.id
    }

    pub fn groups(&self) -> &[Group] {
        &self.related.structure.groups
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups().iter().find(|g| g.name == name)
    }

    /// Every field of every group, in document order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.groups().iter().flat_map(|g| g.fields.iter())
    }

    /// Collects decoded instructions for the fields of `group_name` accepted by `filter`.
    pub fn content_blocks<F>(&self, group_name: &str, filter: F) -> Result<ContentBlocks, ClientError>
    where
        F: Fn(&Field) -> bool,
    {
        let group = self
            .group(group_name)
            .ok_or_else(|| ClientError::GroupNotFound(group_name.to_string()))?;

        Ok(group
            .fields
            .iter()
            .filter(|f| filter(f))
            .map(|f| (f.label.clone(), f.decoded_instructions()))
            .collect())
    }
}
