use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// top-level fixture document, a single `service:` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceDocument {
    pub service: ServiceRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceRecord {
    pub name: String,
    pub identifier: String,
    pub org_identifier: String,
    pub service_definition: ServiceDefinition,
}

impl ServiceRecord {
    /// record whose identifier mirrors its name
    pub fn new(name: String, org_identifier: String, service_type: String) -> Self {
        Self {
            identifier: name.clone(),
            name,
            org_identifier,
            service_definition: ServiceDefinition {
                spec: ServiceSpec {},
                service_type,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceDefinition {
    pub spec: ServiceSpec,
    #[serde(rename = "type")]
    pub service_type: String,
}

// always rendered as an empty mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSpec {}

/// outcome of a fixture generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureReport {
    pub services_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

impl FixtureReport {
    pub fn new(services_dir: PathBuf) -> Self {
        Self {
            services_dir,
            files: Vec::new(),
        }
    }
}
