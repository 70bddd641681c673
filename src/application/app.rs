use crate::application::localization::Localization;
use crate::config::Settings;
use crate::domain::config_types::LocaleTag;
use crate::domain::metrics::{calculate_trend, ColorCode, NumberLike, TrendOutcome, TrendPolicy};
use crate::infrastructure::key_value::KeyValueStore;
use crate::infrastructure::log_messages::{application, trends};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

/// One metric comparison to evaluate
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRequest {
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub current: NumberLike,
    #[serde(default)]
    pub previous: NumberLike,
    /// Falls back to the configured default policy
    #[serde(default)]
    pub policy: Option<TrendPolicy>,
    #[serde(default)]
    pub neutral_on_decrease: Option<bool>,
}

/// A trend outcome together with the tokens needed to draw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(flatten)]
    pub outcome: TrendOutcome,
    pub color: ColorCode,
    pub indicator: &'static str,
}

/// Counts from one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Requests that produced a report, including unavailable ones
    pub evaluated: usize,
    /// Reports whose readings were missing or unparseable
    pub unavailable: usize,
    /// Lines that were not valid trend requests
    pub skipped: usize,
}

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    store: Arc<dyn KeyValueStore>,
    localization: Localization,
}

impl Application {
    #[instrument(skip_all, fields(environment = %settings.application.environment))]
    pub async fn new(settings: Settings, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        info!("{}", application::STARTING);

        let localization =
            Localization::bootstrap(&settings.localization, store.as_ref()).await?;

        info!(
            locale = %localization.active(),
            supported = ?localization.supported(),
            "{}",
            application::STARTED_SUCCESSFULLY
        );
        Ok(Self {
            settings,
            store,
            localization,
        })
    }

    /// Evaluate a single request using the configured defaults
    pub fn evaluate(&self, request: &TrendRequest) -> TrendReport {
        let policy = request
            .policy
            .unwrap_or(self.settings.trends.default_policy);
        let neutral_on_decrease = request
            .neutral_on_decrease
            .unwrap_or(self.settings.trends.neutral_on_decrease);

        let outcome = calculate_trend(
            &request.current,
            &request.previous,
            policy,
            neutral_on_decrease,
        );

        if outcome.is_unavailable() {
            debug!(metric = ?request.metric, "{}", trends::UNAVAILABLE);
        } else {
            debug!(
                metric = ?request.metric,
                %policy,
                delta = %outcome.formatted_delta,
                classification = %outcome.classification,
                direction = %outcome.direction,
                "{}",
                trends::EVALUATED
            );
        }

        TrendReport {
            metric: request.metric.clone(),
            color: outcome.classification.color(),
            indicator: outcome.direction.indicator(),
            outcome,
        }
    }

    /// Evaluate newline-delimited JSON requests from `input`, writing one
    /// JSON report per line to `output`
    ///
    /// Blank lines are ignored and malformed lines are logged and skipped.
    #[instrument(skip_all)]
    pub async fn run<R, W>(&self, input: R, mut output: W) -> Result<BatchSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut summary = BatchSummary::default();
        let mut lines = input.lines();
        let mut line_number = 0usize;

        while let Some(line) = lines.next_line().await? {
            line_number += 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let request: TrendRequest = match serde_json::from_str(line) {
                Ok(request) => request,
                Err(err) => {
                    warn!(line = line_number, error = %err, "{}", trends::SKIPPED_LINE);
                    summary.skipped += 1;
                    continue;
                }
            };

            let report = self.evaluate(&request);
            summary.evaluated += 1;
            if report.outcome.is_unavailable() {
                summary.unavailable += 1;
            }

            let mut bytes = serde_json::to_vec(&report)?;
            bytes.push(b'\n');
            output.write_all(&bytes).await?;
        }

        output.flush().await?;
        info!(
            evaluated = summary.evaluated,
            unavailable = summary.unavailable,
            skipped = summary.skipped,
            "{}",
            application::BATCH_FINISHED
        );

        Ok(summary)
    }

    /// Switch the active locale and persist the choice
    pub async fn change_locale(&mut self, locale: LocaleTag) -> Result<()> {
        self.localization
            .change_locale(locale, self.store.as_ref())
            .await
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn localization(&self) -> &Localization {
        &self.localization
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }
}
