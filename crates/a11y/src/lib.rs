//! WCAG contrast math and the accessibility selector.
//!
//! ```text
//! hex strings ─► contrast.rs: luminance, contrast ratio, alpha blend-over
//!                     │
//!                     ▼
//!               selector.rs: on-tone choice (plain and emphasis-aware),
//!                            family step choice
//!                     │
//!                     ▼
//!               ladder.rs:   minimal compliant opacity on an opacity ladder
//! ```
//!
//! Nothing here fails: invalid colors measure a contrast of `0.0` and the
//! selectors always return a best-effort answer.

// Single-char channel names are standard in color math.
#![allow(clippy::many_single_char_names)]

pub mod contrast;
pub mod ladder;
pub mod selector;

pub use contrast::{
    AA_CONTRAST, blend_over, blend_over_hex, contrast_ratio, contrast_ratio_rgb, meets_aa,
    relative_luminance,
};
pub use ladder::{OpacityLadder, pick_min_alpha_for_aa};
pub use selector::{
    CoreColors, EmphasisOpacity, pick_aa_color_step_in_family, pick_aa_on_tone,
    pick_on_tone_with_opacity,
};
