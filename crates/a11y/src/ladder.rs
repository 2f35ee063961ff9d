//! Minimal compliant opacity search over a discrete opacity ladder.

use crate::contrast::{AA_CONTRAST, blend_over, contrast_ratio_rgb};
use recursica_types::{OpacityToken, hex_to_rgb};

/// Ascending, de-duplicated opacity values in `(0, 1]`. Always contains `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct OpacityLadder {
    values: Vec<f64>,
}

impl Default for OpacityLadder {
    fn default() -> Self {
        Self { values: vec![1.0] }
    }
}

impl OpacityLadder {
    /// Builds a ladder, dropping values outside `(0, 1]`.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = values
            .into_iter()
            .filter(|v| v.is_finite() && *v > 0.0 && *v <= 1.0)
            .chain(std::iter::once(1.0))
            .collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        Self { values }
    }

    pub fn from_tokens(tokens: &[OpacityToken]) -> Self {
        Self::new(tokens.iter().map(|t| t.value))
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// The smallest ladder opacity at which `dot` blended over `tone` reaches AA
/// against `tone`. Falls back to `1.0` when nothing qualifies or a color is invalid.
pub fn pick_min_alpha_for_aa(tone: &str, dot: &str, ladder: &OpacityLadder) -> f64 {
    let (Some(tone), Some(dot)) = (hex_to_rgb(tone), hex_to_rgb(dot)) else {
        return 1.0;
    };
    ladder
        .values()
        .iter()
        .copied()
        .find(|alpha| contrast_ratio_rgb(blend_over(dot, tone, *alpha), tone) >= AA_CONTRAST)
        .unwrap_or(1.0)
}
