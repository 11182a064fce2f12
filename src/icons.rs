use serde::{Deserialize, Serialize};

/// Closed set of icon identities used across the product.
///
/// Data modules carry the tag only; resolving a tag to an actual glyph or
/// image happens at the UI boundary, keeping the model free of UI types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconKind {
    TrendingUp,
    Zap,
    Target,
    Crosshair,
    Ruler,
    Calendar,
    Filter,
}
