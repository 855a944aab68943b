use serde::{Deserialize, Serialize};

/// Paint order of the scatter scene, back to front.
///
/// Group nodes live in `Scaffold` so that they always exist before their
/// children once a frame is ordered by layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SceneLayer {
    Scaffold,
    Density,
    Points,
    Legend,
    HitRegions,
    HoverOverlay,
    BrushOverlay,
}

impl SceneLayer {
    #[must_use]
    pub fn canonical_order() -> [SceneLayer; 7] {
        [
            SceneLayer::Scaffold,
            SceneLayer::Density,
            SceneLayer::Points,
            SceneLayer::Legend,
            SceneLayer::HitRegions,
            SceneLayer::HoverOverlay,
            SceneLayer::BrushOverlay,
        ]
    }
}
