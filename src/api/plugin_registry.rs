use tracing::debug;

use crate::error::{ScatterError, ScatterResult};
use crate::extensions::ScatterPlugin;
use crate::render::RenderSurface;

use super::ScatterEngine;

impl<R: RenderSurface> ScatterEngine<R> {
    /// Adds a plugin that observes hover, brush and render events from now on.
    ///
    /// Ids must be non-blank and unique among registered plugins; events
    /// already handled are not replayed.
    pub fn register_plugin(&mut self, plugin: Box<dyn ScatterPlugin>) -> ScatterResult<()> {
        let plugin_id = plugin.id();
        if plugin_id.trim().is_empty() {
            return Err(ScatterError::InvalidConfig(
                "plugin id must not be blank".to_owned(),
            ));
        }
        if self.has_plugin(plugin_id) {
            return Err(ScatterError::InvalidConfig(format!(
                "plugin `{plugin_id}` is already observing this chart"
            )));
        }

        debug!(
            plugin = plugin_id,
            points = self.core.model.dataset.len(),
            "plugin registered"
        );
        self.core.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Detaches the plugin with `plugin_id`. Returns `false` when none matched.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let plugins = &mut self.core.runtime.plugins;
        let Some(position) = plugins.iter().position(|plugin| plugin.id() == plugin_id) else {
            return false;
        };
        plugins.remove(position);
        debug!(plugin = plugin_id, remaining = plugins.len(), "plugin unregistered");
        true
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core
            .runtime
            .plugins
            .iter()
            .any(|plugin| plugin.id() == plugin_id)
    }
}
