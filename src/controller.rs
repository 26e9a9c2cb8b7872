//! Reactive update controller.
//!
//! Owns the published chart state and maps each input event to the one
//! transformer + builder pair that regenerates its chart. No event ever
//! touches another chart; that locality is the point of the design.
//!
//! Events are handled synchronously to completion (`&mut self`), so there
//! is never concurrent in-flight recomputation and the shared dataset needs
//! no locking.

use crate::chart::{
    build_choropleth, build_ranked_bar, build_source_pie, build_source_trend, build_trend_line,
    ChartSpec,
};
use crate::constants::{
    DEFAULT_TREND_COUNTRY, INPUT_BAR_SORT, INPUT_CHOOSE_COUNTRY, RANKING_SIZE, SNAPSHOT_YEAR,
    YEAR_MIN,
};
use crate::data::DataResult;
use crate::transform::{
    global_trend_by_country, per_capita_choropleth_series, source_breakdown_for_year,
    source_breakdown_over_time, top_n_by_per_capita,
};
use crate::types::{DashboardConfig, Dataset, InputEvent, SortDirection};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{debug, warn};

/// The five visual slots the shell renders into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ChartSlot {
    Choropleth,
    Trend,
    Ranking,
    SourceTrend,
    SourcePie,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 5] = [
        ChartSlot::Choropleth,
        ChartSlot::Trend,
        ChartSlot::Ranking,
        ChartSlot::SourceTrend,
        ChartSlot::SourcePie,
    ];

    /// Stable identifier the shell keys its layout on
    pub fn id(&self) -> &'static str {
        match self {
            ChartSlot::Choropleth => "choropleth",
            ChartSlot::Trend => "line_chart",
            ChartSlot::Ranking => "bar_plot",
            ChartSlot::SourceTrend => "source_trend",
            ChartSlot::SourcePie => "pie_plot",
        }
    }
}

/// Shell-facing table of input id → affected chart slot. Each event
/// regenerates exactly one chart.
pub const BINDINGS: [(&str, ChartSlot); 2] = [
    (INPUT_CHOOSE_COUNTRY, ChartSlot::Trend),
    (INPUT_BAR_SORT, ChartSlot::Ranking),
];

/// The slot an event is bound to
pub fn affected_slot(event: &InputEvent) -> ChartSlot {
    match event {
        InputEvent::CountrySelectionChanged(_) => ChartSlot::Trend,
        InputEvent::SortDirectionChanged(_) => ChartSlot::Ranking,
    }
}

/// The complete published dashboard: one current spec per slot
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub choropleth: ChartSpec,
    pub trend: ChartSpec,
    pub ranking: ChartSpec,
    pub source_trend: ChartSpec,
    pub source_pie: ChartSpec,
}

impl Dashboard {
    /// The current spec for a slot
    pub fn get(&self, slot: ChartSlot) -> &ChartSpec {
        match slot {
            ChartSlot::Choropleth => &self.choropleth,
            ChartSlot::Trend => &self.trend,
            ChartSlot::Ranking => &self.ranking,
            ChartSlot::SourceTrend => &self.source_trend,
            ChartSlot::SourcePie => &self.source_pie,
        }
    }
}

/// Handles input events by re-running one transformer + builder pair and
/// republishing that chart; all other charts keep their previous spec.
pub struct Controller {
    dataset: Arc<Dataset>,
    config: DashboardConfig,
    dashboard: Dashboard,
    /// Per-direction memo for the ranking chart; bounded at two entries
    ranking_memo: HashMap<SortDirection, ChartSpec>,
}

impl Controller {
    /// Run the initial pass: every transformer + builder once.
    ///
    /// The trend chart starts on `{"World"}` and the ranking on `Highest`.
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> DataResult<Self> {
        let initial_selection: BTreeSet<String> =
            BTreeSet::from([DEFAULT_TREND_COUNTRY.to_string()]);

        let trend = if dataset.contains_country(DEFAULT_TREND_COUNTRY) || dataset.is_empty() {
            let points = global_trend_by_country(&dataset, &initial_selection)?;
            build_trend_line(&points, &config)
        } else {
            // Dataset without a "World" aggregate: start the trend empty
            build_trend_line(&[], &config)
        };

        let ranking_rows =
            top_n_by_per_capita(&dataset, SNAPSHOT_YEAR, SortDirection::Highest, RANKING_SIZE);
        let ranking = build_ranked_bar(&ranking_rows, SortDirection::Highest, &config);

        let dashboard = Dashboard {
            choropleth: build_choropleth(&per_capita_choropleth_series(&dataset), &config),
            trend,
            ranking: ranking.clone(),
            source_trend: build_source_trend(
                &source_breakdown_over_time(&dataset, YEAR_MIN),
                &config,
            ),
            source_pie: build_source_pie(
                &source_breakdown_for_year(&dataset, SNAPSHOT_YEAR),
                &config,
            ),
        };

        debug!(rows = dataset.len(), "built initial dashboard");
        Ok(Self {
            dataset,
            config,
            dashboard,
            ranking_memo: HashMap::from([(SortDirection::Highest, ranking)]),
        })
    }

    /// The currently published dashboard
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// The currently published spec for one slot
    pub fn current(&self, slot: ChartSlot) -> &ChartSpec {
        self.dashboard.get(slot)
    }

    /// Handle one input event to completion and return the republished spec.
    ///
    /// On a recoverable selection error the affected chart keeps its
    /// previous spec and the error is returned to the shell.
    pub fn handle(&mut self, event: InputEvent) -> DataResult<&ChartSpec> {
        let slot = affected_slot(&event);
        debug!(input = event.input_id(), slot = slot.id(), "handling input event");

        match event {
            InputEvent::CountrySelectionChanged(selection) => {
                let points = match global_trend_by_country(&self.dataset, &selection) {
                    Ok(points) => points,
                    Err(err) => {
                        warn!(error = %err, "rejected country selection, keeping previous chart");
                        return Err(err);
                    }
                };
                self.dashboard.trend = build_trend_line(&points, &self.config);
                Ok(&self.dashboard.trend)
            }
            InputEvent::SortDirectionChanged(direction) => {
                let spec = self.ranking_memo.entry(direction).or_insert_with(|| {
                    let rows = top_n_by_per_capita(
                        &self.dataset,
                        SNAPSHOT_YEAR,
                        direction,
                        RANKING_SIZE,
                    );
                    build_ranked_bar(&rows, direction, &self.config)
                });
                self.dashboard.ranking = spec.clone();
                Ok(&self.dashboard.ranking)
            }
        }
    }
}
