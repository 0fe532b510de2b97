//! `RunInstances` request.

use std::collections::BTreeSet;

use serde_json::{Map, Value, json};
use uuid::Uuid;

use super::{OperationRequest, RequestError, check_not_blank, check_resource_id};
use crate::instance_type::InstanceType;
use crate::transport::Operation;

const MAX_USER_DATA_BYTES: usize = 16 * 1024;
const MAX_CLIENT_TOKEN_LEN: usize = 64;
const MAX_TAG_KEY_LEN: usize = 128;
const MAX_TAG_VALUE_LEN: usize = 256;
const RESERVED_TAG_PREFIX: &str = "aws:";

/// Key/value tag applied to launched instances.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tag {
    /// Tag key.
    pub key: String,
    /// Tag value; may be empty.
    pub value: String,
}

impl Tag {
    fn validate(&self, seen: &mut BTreeSet<String>) -> Result<(), RequestError> {
        if self.key.trim().is_empty() || self.key.chars().count() > MAX_TAG_KEY_LEN {
            return Err(RequestError::invalid_field(
                "TagSpecifications",
                self.key.as_str(),
                format!("tag keys must be 1 to {MAX_TAG_KEY_LEN} characters"),
            ));
        }
        if self.key.starts_with(RESERVED_TAG_PREFIX) {
            return Err(RequestError::invalid_field(
                "TagSpecifications",
                self.key.as_str(),
                format!("tag keys must not start with '{RESERVED_TAG_PREFIX}'"),
            ));
        }
        if self.value.chars().count() > MAX_TAG_VALUE_LEN {
            return Err(RequestError::invalid_field(
                "TagSpecifications",
                self.key.as_str(),
                format!("tag values must be at most {MAX_TAG_VALUE_LEN} characters"),
            ));
        }
        if !seen.insert(self.key.clone()) {
            return Err(RequestError::invalid_field(
                "TagSpecifications",
                self.key.as_str(),
                "tag keys must be unique",
            ));
        }
        Ok(())
    }
}

/// Launches on-demand instances from an image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunInstances {
    /// Machine size of every launched instance.
    pub instance_type: InstanceType,
    /// Image to boot (`ami-...`).
    pub image_id: String,
    /// Number of instances that must launch.
    pub min_count: u32,
    /// Upper bound on instances to launch. Defaults to `min_count`.
    pub max_count: Option<u32>,
    /// SSH key pair installed on the instances.
    pub key_name: Option<String>,
    /// Security groups (`sg-...`) attached to the primary interface.
    pub security_group_ids: Vec<String>,
    /// Subnet (`subnet-...`) to launch into.
    pub subnet_id: Option<String>,
    /// User data passed to the instance on first boot.
    pub user_data: Option<String>,
    /// Tags applied to every launched instance.
    pub tags: Vec<Tag>,
    /// Idempotency token.
    pub client_token: Option<String>,
}

impl RunInstances {
    /// Creates a request launching exactly `count` instances.
    #[must_use]
    pub fn new(instance_type: InstanceType, image_id: impl Into<String>, count: u32) -> Self {
        Self {
            instance_type,
            image_id: image_id.into(),
            min_count: count,
            max_count: None,
            key_name: None,
            security_group_ids: Vec::new(),
            subnet_id: None,
            user_data: None,
            tags: Vec::new(),
            client_token: None,
        }
    }

    /// Allows the provider to launch up to `value` instances.
    #[must_use]
    pub const fn max_count(mut self, value: u32) -> Self {
        self.max_count = Some(value);
        self
    }

    /// Sets the key pair name.
    #[must_use]
    pub fn key_name(mut self, value: impl Into<String>) -> Self {
        self.key_name = Some(value.into());
        self
    }

    /// Adds a security group.
    #[must_use]
    pub fn security_group_id(mut self, value: impl Into<String>) -> Self {
        self.security_group_ids.push(value.into());
        self
    }

    /// Sets the subnet.
    #[must_use]
    pub fn subnet_id(mut self, value: impl Into<String>) -> Self {
        self.subnet_id = Some(value.into());
        self
    }

    /// Sets the user data payload.
    #[must_use]
    pub fn user_data(mut self, value: Option<String>) -> Self {
        self.user_data = value;
        self
    }

    /// Adds a tag.
    #[must_use]
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Sets the idempotency token.
    #[must_use]
    pub fn client_token(mut self, value: impl Into<String>) -> Self {
        self.client_token = Some(value.into());
        self
    }

    /// Sets a fresh random idempotency token.
    #[must_use]
    pub fn generated_client_token(self) -> Self {
        self.client_token(Uuid::new_v4().to_string())
    }

    /// Number of instances the provider may launch.
    #[must_use]
    pub fn effective_max_count(&self) -> u32 {
        self.max_count.unwrap_or(self.min_count)
    }

    fn validate_counts(&self) -> Result<(), RequestError> {
        if self.min_count < 1 {
            return Err(RequestError::InvalidCount {
                field: "MinCount",
                value: self.min_count,
                min: 1,
            });
        }
        if let Some(max) = self.max_count {
            if max < self.min_count {
                return Err(RequestError::InvalidCount {
                    field: "MaxCount",
                    value: max,
                    min: self.min_count,
                });
            }
        }
        Ok(())
    }

    fn validate_optional_fields(&self) -> Result<(), RequestError> {
        if let Some(key_name) = &self.key_name {
            check_not_blank("KeyName", key_name)?;
        }
        for group in &self.security_group_ids {
            check_resource_id("SecurityGroupIds", group, "sg-")?;
        }
        if let Some(subnet) = &self.subnet_id {
            check_resource_id("SubnetId", subnet, "subnet-")?;
        }
        if let Some(user_data) = &self.user_data {
            check_not_blank("UserData", user_data)?;
            if user_data.len() > MAX_USER_DATA_BYTES {
                return Err(RequestError::invalid_field(
                    "UserData",
                    format!("{} bytes", user_data.len()),
                    format!("must be at most {MAX_USER_DATA_BYTES} bytes"),
                ));
            }
        }
        if let Some(token) = &self.client_token {
            let printable = token.chars().all(|ch| ch.is_ascii() && !ch.is_ascii_control());
            if token.is_empty() || token.len() > MAX_CLIENT_TOKEN_LEN || !printable {
                return Err(RequestError::invalid_field(
                    "ClientToken",
                    token.as_str(),
                    format!("must be 1 to {MAX_CLIENT_TOKEN_LEN} printable ASCII characters"),
                ));
            }
        }
        let mut seen = BTreeSet::new();
        for tag in &self.tags {
            tag.validate(&mut seen)?;
        }
        Ok(())
    }
}

impl OperationRequest for RunInstances {
    const OPERATION: Operation = Operation::RunInstances;

    fn validate(&self) -> Result<(), RequestError> {
        check_resource_id("ImageId", &self.image_id, "ami-")?;
        self.validate_counts()?;
        self.validate_optional_fields()
    }

    fn parameters(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert(String::from("ImageId"), json!(self.image_id));
        params.insert(
            String::from("InstanceType"),
            json!(self.instance_type.as_str()),
        );
        params.insert(String::from("MinCount"), json!(self.min_count));
        params.insert(String::from("MaxCount"), json!(self.effective_max_count()));
        if let Some(key_name) = &self.key_name {
            params.insert(String::from("KeyName"), json!(key_name));
        }
        if !self.security_group_ids.is_empty() {
            params.insert(
                String::from("SecurityGroupIds"),
                json!(self.security_group_ids),
            );
        }
        if let Some(subnet) = &self.subnet_id {
            params.insert(String::from("SubnetId"), json!(subnet));
        }
        if let Some(user_data) = &self.user_data {
            params.insert(String::from("UserData"), json!(user_data));
        }
        if let Some(token) = &self.client_token {
            params.insert(String::from("ClientToken"), json!(token));
        }
        if !self.tags.is_empty() {
            let tags = self
                .tags
                .iter()
                .map(|tag| json!({ "Key": tag.key, "Value": tag.value }))
                .collect::<Vec<_>>();
            params.insert(
                String::from("TagSpecifications"),
                json!([{ "ResourceType": "instance", "Tags": tags }]),
            );
        }
        params
    }
}
