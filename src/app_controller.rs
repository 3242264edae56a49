use anyhow::{Context, Result};
use log::{debug, info};

use crate::app_config::Config;
use crate::publication::Publication;
use crate::renderer;
use crate::zotero::PublicationSource;

// @module: Application controller for the fetch-render-write pipeline

/// Main application controller for publication rendering
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let controller = Self {
            config,
        };

        Ok(controller)
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.zotero.user_id.is_empty() && !self.config.render.output_path.is_empty()
    }

    /// Access the active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the main workflow against the given item source
    ///
    /// Fetches the publication list, optionally re-orders it by parsed
    /// date, and writes the citation document, fully overwriting the
    /// output file. One outbound request, one file written.
    pub async fn run(&self, source: &dyn PublicationSource) -> Result<()> {
        let start_time = std::time::Instant::now();

        let records = source.fetch()
            .await
            .context("Failed to fetch publication items")?;
        info!("Fetched {} publication item(s)", records.len());

        let records = self.order_records(records);

        let output_path = &self.config.render.output_path;
        let written = renderer::write_document(output_path, &records, &self.config.render)
            .with_context(|| format!("Failed to render citation list to {}", output_path))?;

        info!("Wrote {} citation line(s) to {} in {:.2}s",
            written, output_path, start_time.elapsed().as_secs_f64());

        Ok(())
    }

    /// Apply the configured record ordering
    ///
    /// Default is the API response order (date descending, as requested in
    /// the query). With `sort_by_date` the records are re-sorted ascending
    /// by parsed date; records without a date sort first, ties keep their
    /// relative order.
    fn order_records(&self, mut records: Vec<Publication>) -> Vec<Publication> {
        if self.config.render.sort_by_date {
            debug!("Sorting {} record(s) by parsed date", records.len());
            records.sort_by(|a, b| a.meta.parsed_date.cmp(&b.meta.parsed_date));
        }

        records
    }
}
