use crate::core::comparison::{compare_options, resolve_port};
use crate::core::{ConfigProvider, Pipeline, QuoteOutcome, QuoteRequest, Storage};
use crate::domain::report::ComparisonReport;
use crate::utils::error::{QuoteError, Result};
use std::path::Path;

pub const JSON_REPORT_FILE: &str = "quote_report.json";
pub const CSV_REPORT_FILE: &str = "quote_report.csv";

pub struct ComparisonPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ComparisonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_path())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ComparisonPipeline<S, C> {
    fn extract(&self) -> Result<QuoteRequest> {
        tracing::debug!("Reading quote request from: {}", self.config.input_file());
        let raw = self.storage.read_file(self.config.input_file())?;
        let request: QuoteRequest = serde_json::from_slice(&raw)?;

        let present = request.options.present().count();
        tracing::debug!(
            "Request holds {} option(s), {} port(s)",
            present,
            request.ports.len()
        );

        if present == 0 && request.location.is_none() {
            return Err(QuoteError::ProcessingError {
                message: "request has neither pricing options nor a location".to_string(),
            });
        }

        if let Some(location) = &request.location {
            if !location.coordinate().is_finite() {
                tracing::warn!(
                    "Location '{}' has non-finite coordinates, only name matching applies",
                    location.city
                );
            }
            if request.ports.is_empty() {
                tracing::warn!("Location '{}' given without a port catalog", location.city);
            }
        }

        Ok(request)
    }

    fn transform(&self, request: QuoteRequest) -> Result<QuoteOutcome> {
        let comparison = compare_options(&request.options);
        tracing::debug!(
            "Compared {} dimension(s), overall best index {}",
            comparison.dimensions.len(),
            comparison.overall_best
        );

        let port = request.location.as_ref().map(|location| {
            let resolution =
                resolve_port(location, &request.ports, self.config.suggestion_count());
            match &resolution.matched {
                Some(port) => tracing::debug!(
                    "Matched '{}' to port {} ({:?})",
                    location.city,
                    port.name,
                    resolution.matched_by
                ),
                None => tracing::warn!("No port could be matched for '{}'", location.city),
            }
            resolution
        });

        Ok(QuoteOutcome {
            generated_at: chrono::Utc::now(),
            comparison,
            port,
        })
    }

    fn load(&self, outcome: QuoteOutcome) -> Result<String> {
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let (name, data) = match format.as_str() {
                "json" => (JSON_REPORT_FILE, serde_json::to_vec_pretty(&outcome)?),
                "csv" => (CSV_REPORT_FILE, render_csv(&outcome.comparison)?),
                other => {
                    return Err(QuoteError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format".to_string(),
                    })
                }
            };

            let path = self.output_file(name);
            tracing::debug!("Writing {} report ({} bytes) to {}", format, data.len(), path);
            self.storage.write_file(&path, &data)?;
            written.push(path);
        }

        Ok(written.join(", "))
    }
}

/// One row per dimension plus an `overall` row of grand totals.
pub fn render_csv(report: &ComparisonReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["dimension", "option_1", "option_2", "option_3", "best_index"])?;

    let cell = |value: Option<f64>| value.map(|v| format!("{:.2}", v)).unwrap_or_default();

    for result in &report.dimensions {
        writer.write_record([
            result.dimension.label().to_string(),
            cell(result.values[0]),
            cell(result.values[1]),
            cell(result.values[2]),
            result.best_index.to_string(),
        ])?;
    }

    let grand = |index: usize| report.totals[index].map(|totals| totals.grand_total());
    writer.write_record([
        "overall".to_string(),
        cell(grand(0)),
        cell(grand(1)),
        cell(grand(2)),
        report.overall_best.to_string(),
    ])?;

    writer
        .into_inner()
        .map_err(|e| QuoteError::ProcessingError {
            message: format!("failed to flush CSV report: {}", e),
        })
}
