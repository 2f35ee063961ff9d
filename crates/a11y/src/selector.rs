//! Chooses accessible foregrounds for tones.
//!
//! The on-tone selectors never fail: when no candidate reaches AA they still
//! return the highest-contrast option, since a non-compliant palette is a
//! valid design state that the UI reports separately.

use crate::contrast::{AA_CONTRAST, blend_over, contrast_ratio, contrast_ratio_rgb};
use log::debug;
use recursica_types::{OnTone, Rgb, hex_to_rgb};

/// Baseline contrast gap under which the low-emphasis contrast decides.
const BASELINE_MARGIN: f64 = 1.0;

/// The theme's black and white core colors used as on-tone candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreColors {
    pub black: Rgb,
    pub white: Rgb,
}

impl Default for CoreColors {
    fn default() -> Self {
        Self {
            black: Rgb::BLACK,
            white: Rgb::WHITE,
        }
    }
}

impl CoreColors {
    pub fn color(&self, on_tone: OnTone) -> Rgb {
        match on_tone {
            OnTone::Black => self.black,
            OnTone::White => self.white,
        }
    }
}

/// Text emphasis opacities from `text-emphasis.high` / `text-emphasis.low`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmphasisOpacity {
    pub high: f64,
    pub low: f64,
}

impl Default for EmphasisOpacity {
    fn default() -> Self {
        Self { high: 1.0, low: 0.7 }
    }
}

fn higher_contrast(black: f64, white: f64) -> OnTone {
    if white > black { OnTone::White } else { OnTone::Black }
}

/// Returns the single passing side, if exactly one passes.
fn sole_pass(black: bool, white: bool) -> Option<OnTone> {
    match (black, white) {
        (true, false) => Some(OnTone::Black),
        (false, true) => Some(OnTone::White),
        _ => None,
    }
}

/// Picks pure black or white for text on `tone`.
///
/// Exactly one compliant candidate wins outright; otherwise the higher
/// contrast wins. Ties (including an invalid tone) resolve to black.
pub fn pick_aa_on_tone(tone: &str) -> OnTone {
    let black = contrast_ratio(tone, "#000000");
    let white = contrast_ratio(tone, "#ffffff");
    sole_pass(black >= AA_CONTRAST, white >= AA_CONTRAST)
        .unwrap_or_else(|| higher_contrast(black, white))
}

struct Candidate {
    baseline: f64,
    high: f64,
    low: f64,
}

impl Candidate {
    fn measure(fg: Rgb, tone: Rgb, emphasis: EmphasisOpacity) -> Self {
        Self {
            baseline: contrast_ratio_rgb(fg, tone),
            high: contrast_ratio_rgb(blend_over(fg, tone, emphasis.high), tone),
            low: contrast_ratio_rgb(blend_over(fg, tone, emphasis.low), tone),
        }
    }

    fn passes_high(&self) -> bool {
        self.high >= AA_CONTRAST
    }

    fn passes_low(&self) -> bool {
        self.low >= AA_CONTRAST
    }

    fn passes_both(&self) -> bool {
        self.passes_high() && self.passes_low()
    }
}

/// Picks the on-tone for `tone` when text is rendered at both emphasis opacities.
///
/// Low emphasis is the binding constraint: a candidate passing both levels is
/// preferred outright, then one passing low, then one passing high, then the
/// higher baseline contrast. When both pass everything, a clear baseline gap
/// decides, otherwise the low-emphasis contrast does.
pub fn pick_on_tone_with_opacity(
    tone: &str,
    core: &CoreColors,
    emphasis: EmphasisOpacity,
) -> OnTone {
    let Some(tone_rgb) = hex_to_rgb(tone) else {
        debug!("On-tone requested for invalid tone '{}'", tone);
        return pick_aa_on_tone(tone);
    };

    let black = Candidate::measure(core.black, tone_rgb, emphasis);
    let white = Candidate::measure(core.white, tone_rgb, emphasis);

    if black.passes_both() && white.passes_both() {
        return if (black.baseline - white.baseline).abs() >= BASELINE_MARGIN {
            higher_contrast(black.baseline, white.baseline)
        } else {
            higher_contrast(black.low, white.low)
        };
    }

    sole_pass(black.passes_both(), white.passes_both())
        .or_else(|| sole_pass(black.passes_low(), white.passes_low()))
        .or_else(|| sole_pass(black.passes_high(), white.passes_high()))
        .unwrap_or_else(|| {
            debug!("No on-tone meets AA on {}; using baseline contrast", tone);
            higher_contrast(black.baseline, white.baseline)
        })
}

/// Picks a level from a family's `(level, hex)` ladder for use on `bg`.
///
/// `preferred` wins if it is compliant, then the first compliant step in list
/// order, then the step with the highest contrast. `None` only for an empty ladder.
pub fn pick_aa_color_step_in_family<'a>(
    bg: &str,
    steps: &[(&'a str, &'a str)],
    preferred: Option<&str>,
) -> Option<&'a str> {
    if let Some(preferred) = preferred {
        let hit = steps
            .iter()
            .find(|(level, hex)| *level == preferred && contrast_ratio(bg, hex) >= AA_CONTRAST);
        if let Some((level, _)) = hit {
            return Some(*level);
        }
    }

    if let Some((level, _)) = steps
        .iter()
        .find(|(_, hex)| contrast_ratio(bg, hex) >= AA_CONTRAST)
    {
        return Some(*level);
    }

    steps
        .iter()
        .map(|(level, hex)| (*level, contrast_ratio(bg, hex)))
        .fold(None, |best: Option<(&'a str, f64)>, (level, ratio)| match best {
            Some((_, best_ratio)) if best_ratio >= ratio => best,
            _ => Some((level, ratio)),
        })
        .map(|(level, _)| level)
}
