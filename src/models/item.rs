use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::template::Template;

pub const DEFAULT_MASTER_GROUP: &str = "Content";

/// Body of `POST /projects/{project_id}/items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub project_id: u64,
    pub template_id: u64,
    pub content: Map<String, Value>,
}

/// A content item waiting to be created.
///
/// Content is stored by field label and only for labels the template knows;
/// anything else handed to [`Item::add_content`] or [`Item::set`] is dropped.
/// The uuid-keyed form the API expects is rebuilt from the labels every time
/// it is asked for.
#[derive(Debug, Clone)]
pub struct Item {
    name: String,
    project_id: u64,
    template_id: u64,
    master_group: String,
    fields: HashMap<String, String>,
    content: HashMap<String, Value>,
}

impl Item {
    pub fn new(name: &str, project_id: u64, template: &Template, master_group: Option<&str>) -> Self {
        // Labels repeated across groups resolve to the last one seen.
        let fields = template
            .fields()
            .map(|f| (f.label.clone(), f.uuid.clone()))
            .collect();

        Self {
            name: name.to_string(),
            project_id,
            template_id: template.id(),
            master_group: master_group.unwrap_or(DEFAULT_MASTER_GROUP).to_string(),
            fields,
            content: HashMap::new(),
        }
    }

    pub fn with_content<I, K, V>(mut self, content: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.add_content(content);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_id(&self) -> u64 {
        self.project_id
    }

    pub fn template_id(&self) -> u64 {
        self.template_id
    }

    pub fn master_group(&self) -> &str {
        &self.master_group
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    pub fn has_field(&self, label: &str) -> bool {
        self.fields.contains_key(label)
    }

    pub fn field_uuid(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    pub fn content(&self) -> &HashMap<String, Value> {
        &self.content
    }

    /// Merges `content` by label, overwriting existing values.
    pub fn add_content<I, K, V>(&mut self, content: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in content {
            self.set(key, value);
        }
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        if self.fields.contains_key(&key) {
            self.content.insert(key, value.into());
        }
        self
    }

    /// Stored value for `label`. Unknown labels are not an error.
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.content.get(label)
    }

    pub fn get_many<S: AsRef<str>>(&self, labels: &[S]) -> Vec<Option<&Value>> {
        labels.iter().map(|l| self.get(l.as_ref())).collect()
    }

    pub fn content_by_uuid(&self) -> Map<String, Value> {
        self.content
            .iter()
            .filter_map(|(label, value)| {
                self.fields
                    .get(label)
                    .map(|uuid| (uuid.clone(), value.clone()))
            })
            .collect()
    }

    pub fn to_api(&self) -> ItemPayload {
        ItemPayload {
            name: self.name.clone(),
            project_id: self.project_id,
            template_id: self.template_id,
            content: self.content_by_uuid(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_api())
    }
}
