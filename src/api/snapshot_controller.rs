use indexmap::IndexMap;

use crate::core::{DensityCurve, MarginalSide, RECORD_DATE_FORMAT};
use crate::error::ScatterResult;
use crate::render::RenderSurface;

use super::axis_scene_builder::AXIS_TICK_COUNT;
use super::scene_builder::MARGINAL_SIDES;
use super::{BrushSnapshot, CurveSummary, EngineSnapshot, ScatterEngine};

impl<R: RenderSurface> ScatterEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let model = &self.core.model;
        let runtime = &self.core.runtime;
        let (first_date, last_date) = model.dataset.date_extent();

        let mut curves = IndexMap::new();
        for side in MARGINAL_SIDES {
            curves.insert(
                format!("global.{}", side_key(side)),
                summarize(model.global_curve(side)),
            );
        }
        if let Some(brush) = &runtime.brush {
            for side in MARGINAL_SIDES {
                curves.insert(
                    format!("brushed.{}", side_key(side)),
                    summarize(brush.curve(side)),
                );
            }
        }

        let brush = runtime
            .interaction
            .brush()
            .range()
            .map(|range| BrushSnapshot {
                start: range.start().format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
                end: range.end().format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
                label: range.label(),
                selected: runtime
                    .brush
                    .as_ref()
                    .map_or(0, |brush| brush.selection.selected_count()),
            });

        EngineSnapshot {
            layout: model.config.layout,
            point_count: model.dataset.len(),
            cell_count: (0..model.dataset.len())
                .filter(|index| model.tessellation.cell_boundary(*index).is_some())
                .count(),
            date_extent: (
                first_date.format(RECORD_DATE_FORMAT).to_string(),
                last_date.format(RECORD_DATE_FORMAT).to_string(),
            ),
            x_domain: model.scales.x().domain(),
            y_domain: model.scales.y().domain(),
            x_ticks: model.scales.x().ticks(AXIS_TICK_COUNT),
            y_ticks: model.scales.y().ticks(AXIS_TICK_COUNT),
            legend_active_extent: model.legend_scale.active_extent(),
            hover: runtime.interaction.hover(),
            brush,
            curves,
            metadata: runtime.metadata.clone(),
            frames_emitted: runtime.frames_emitted,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ScatterResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

fn side_key(side: MarginalSide) -> &'static str {
    match side {
        MarginalSide::Top => "top",
        MarginalSide::Right => "right",
    }
}

fn summarize(curve: &DensityCurve) -> CurveSummary {
    CurveSummary {
        samples: curve.len(),
        peak_density: curve.max_density(),
    }
}
