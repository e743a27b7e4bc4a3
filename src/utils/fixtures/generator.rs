use super::types::{FixtureReport, ServiceDocument, ServiceRecord};
use crate::error::{Error, Result};
use crate::utils::config::FixtureConfig;
use crate::utils::random::RandomSource;
use std::fs;
use std::path::Path;
use tracing::info;

/// writes one service fixture per index under `.harness/orgs/<org>/services`
pub struct FixtureGenerator<'a> {
    config: &'a FixtureConfig,
}

impl<'a> FixtureGenerator<'a> {
    pub fn new(config: &'a FixtureConfig) -> Self {
        Self { config }
    }

    /// build a record with a fresh random name
    pub fn record(&self, rng: &mut dyn RandomSource) -> ServiceRecord {
        ServiceRecord::new(
            rng.lowercase_string(self.config.name_length),
            self.config.org_identifier.clone(),
            self.config.service_type.clone(),
        )
    }

    /// render a record as a yaml document
    pub fn render(record: &ServiceRecord) -> Result<String> {
        let document = ServiceDocument {
            service: record.clone(),
        };
        Ok(serde_yaml::to_string(&document)?)
    }

    /// generate `config.count` fixtures below `root`
    ///
    /// stops at the first directory or write failure, files already
    /// written are left in place
    pub fn generate(&self, root: &Path, rng: &mut dyn RandomSource) -> Result<FixtureReport> {
        let services_dir = self.config.services_dir(root);
        fs::create_dir_all(&services_dir)
            .map_err(|e| Error::directory_create(&services_dir, e))?;

        info!(
            "Generating {} fixture files in {}...",
            self.config.count,
            services_dir.display()
        );

        let mut report = FixtureReport::new(services_dir.clone());

        for index in 1..=self.config.count {
            // the index suffix keeps names unique even if the stem repeats
            let file_name = format!(
                "{}_{}.{}",
                rng.lowercase_string(self.config.stem_length),
                index,
                self.config.extension
            );
            let file_path = services_dir.join(file_name);

            let content = Self::render(&self.record(rng))?;
            write_fixture(&file_path, &content)?;
            report.files.push(file_path);

            if self.config.progress_interval > 0 && index % self.config.progress_interval == 0 {
                info!("Generated {} files...", index);
            }
        }

        info!(
            "Successfully generated {} fixture files in {}",
            report.files.len(),
            services_dir.display()
        );

        Ok(report)
    }
}

fn write_fixture(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::directory_create(parent, e))?;
    }

    fs::write(path, content).map_err(|e| Error::file_write(path, e))
}
