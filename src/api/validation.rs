use crate::error::{ScatterError, ScatterResult};

use super::ScatterEngineConfig;

pub(super) fn validate_engine_config(config: &ScatterEngineConfig) -> ScatterResult<()> {
    config.layout.validate()?;

    if config.grid_size < 2 {
        return Err(ScatterError::InvalidConfig(
            "grid size must be >= 2".to_owned(),
        ));
    }
    if config.brush_window_days <= 0 {
        return Err(ScatterError::InvalidConfig(
            "brush window must be at least one day".to_owned(),
        ));
    }

    for (name, value) in [
        ("bandwidth", config.bandwidth),
        ("density_domain_max", config.density_domain_max),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ScatterError::InvalidConfig(format!(
                "`{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("brushed_density_extent_px", config.brushed_density_extent_px),
        ("point_radius", config.point_radius),
        ("hover_dot_radius", config.hover_dot_radius),
        ("hover_marker_thickness", config.hover_marker_thickness),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ScatterError::InvalidConfig(format!(
                "`{name}` must be finite and >= 0"
            )));
        }
    }

    for (name, value) in [
        ("hover_marker_opacity", config.hover_marker_opacity),
        ("global_curve_opacity", config.global_curve_opacity),
        ("brushed_curve_opacity", config.brushed_curve_opacity),
        ("dimmed_point_opacity", config.dimmed_point_opacity),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ScatterError::InvalidConfig(format!(
                "`{name}` must be in [0, 1]"
            )));
        }
    }

    if !config.tooltip_offset.dx.is_finite() || !config.tooltip_offset.dy.is_finite() {
        return Err(ScatterError::InvalidConfig(
            "tooltip offset must be finite".to_owned(),
        ));
    }
    if !config.highlight_bar_ratio.is_finite()
        || !(0.0..1.0).contains(&config.highlight_bar_ratio)
    {
        return Err(ScatterError::InvalidConfig(
            "highlight bar ratio must be in [0, 1)".to_owned(),
        ));
    }

    Ok(())
}
