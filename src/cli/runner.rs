//! CLI runner - resolves configuration, fetches events and renders them

use crate::cli::commands::Cli;
use crate::config::{MeetupConfig, MeetupConfigBuilder};
use crate::error::Result;
use crate::event::CanonicalEvent;
use crate::http::GraphqlTransport;
use crate::source::MeetupSource;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI: fetch every event of the group and print them
    pub async fn run(&self) -> Result<()> {
        let config = self.build_config()?;
        let source = MeetupSource::new(config)?;

        let events = self.fetch(&source).await?;
        println!("{}", self.render(&events)?);

        Ok(())
    }

    /// Resolve the configuration: YAML file first, flags on top
    pub fn build_config(&self) -> Result<MeetupConfig> {
        let builder = match &self.cli.config {
            Some(path) => MeetupConfig::builder_from_yaml_file(path)?,
            None => MeetupConfig::builder(),
        };

        self.apply_flags(builder).build()
    }

    fn apply_flags(&self, mut builder: MeetupConfigBuilder) -> MeetupConfigBuilder {
        if let Some(group) = &self.cli.group {
            builder = builder.group_urlname(group);
        }
        if let Some(token) = &self.cli.token {
            builder = builder.token(token);
        }
        if let Some(url) = &self.cli.base_url {
            builder = builder.base_url(url);
        }
        if let Some(size) = self.cli.page_size {
            builder = builder.page_size(size);
        }
        if let Some(max_pages) = self.cli.max_pages {
            builder = builder.max_pages(max_pages);
        }
        if let Some(stall) = self.cli.stall {
            builder = builder.on_stall(stall.into());
        }
        builder
    }

    /// Fetch events for the configured group, dropping invalid ones if asked
    pub async fn fetch<T: GraphqlTransport>(
        &self,
        source: &MeetupSource<T>,
    ) -> Result<Vec<CanonicalEvent>> {
        let mut events = source.list_configured_events().await?;

        if self.cli.only_valid {
            let before = events.len();
            events.retain(|event| {
                let errors = event.validation_errors();
                if !errors.is_empty() {
                    warn!(
                        "Skipping event '{}': {}",
                        event.metadata.uid,
                        errors.join(", ")
                    );
                }
                errors.is_empty()
            });
            info!("Kept {} of {} events", events.len(), before);
        }

        Ok(events)
    }

    /// Render events as a JSON array
    pub fn render(&self, events: &[CanonicalEvent]) -> Result<String> {
        let output = if self.cli.pretty {
            serde_json::to_string_pretty(events)?
        } else {
            serde_json::to_string(events)?
        };
        Ok(output)
    }
}
