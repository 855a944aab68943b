use crate::extensions::{InteractionEvent, PluginContext};
use crate::render::RenderSurface;

use super::ScatterEngine;

impl<R: RenderSurface> ScatterEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            layout: self.core.model.config.layout,
            point_count: self.core.model.dataset.len(),
            hover: self.core.runtime.interaction.hover(),
            selected_count: self
                .core
                .runtime
                .brush
                .as_ref()
                .map(|brush| brush.selection.selected_count()),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: InteractionEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(event, context);
        }
    }
}
