use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "my super video channel";
pub const DEFAULT_DESCRIPTION: &str = "my super channel description";
pub const DEFAULT_SUPPORT: &str = "my super channel support";

/// Writable attributes of a video channel. Every field is optional; unset
/// fields are left out of the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoChannelAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,
}

impl VideoChannelAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn support(mut self, support: impl Into<String>) -> Self {
        self.support = Some(support.into());
        self
    }

    /// The attributes used when creating a channel and the caller leaves a
    /// field unset.
    pub fn defaults() -> Self {
        Self {
            name: Some(DEFAULT_NAME.to_string()),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            support: Some(DEFAULT_SUPPORT.to_string()),
        }
    }

    /// Body for a create request: every field set here wins over the
    /// defaults, including empty strings.
    pub fn merged_over_defaults(&self) -> Self {
        let defaults = Self::defaults();
        Self {
            name: self.name.clone().or(defaults.name),
            description: self.description.clone().or(defaults.description),
            support: self.support.clone().or(defaults.support),
        }
    }

    /// Body for an update request: only fields that are set and non-empty.
    pub fn sparse(&self) -> Self {
        fn keep(field: &Option<String>) -> Option<String> {
            field.as_ref().filter(|v| !v.is_empty()).cloned()
        }

        Self {
            name: keep(&self.name),
            description: keep(&self.description),
            support: keep(&self.support),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.support.is_none()
    }
}
