mod axis_scene_builder;
mod brush_controller;
mod chart_model;
mod chart_runtime;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod event_dispatch;
mod hover_controller;
mod json_contract;
mod label_format;
mod plugin_dispatch;
mod plugin_registry;
mod scene_builder;
mod snapshot_controller;
mod validation;

pub use axis_scene_builder::{AXIS_TICK_COUNT, X_AXIS_TITLE, Y_AXIS_TITLE};
pub use engine::ScatterEngine;
pub use engine_config::{ScatterEngineConfig, TooltipOffset};
pub use engine_snapshot::{BrushSnapshot, CurveSummary, EngineSnapshot};
pub use event_dispatch::PointerEvent;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use label_format::{
    LEGEND_TICK_FORMAT, TOOLTIP_DATE_FORMAT, format_axis_tick, format_legend_tick,
    format_temperature, format_tooltip_date,
};
