//! Static mapping from parsed references to CSS custom property names.
//!
//! Brand paths are matched against an ordered set of known sub-structures;
//! the first shape that matches names the variable. No document is read.

use recursica_reference::{ParsedReference, ReferenceKind};
use recursica_types::Mode;

/// Prefix shared by every generated custom property.
pub const CSS_VAR_PREFIX: &str = "--recursica";

/// Foreground/background role of a palette level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneRole {
    Tone,
    OnTone,
}

impl ToneRole {
    fn as_str(&self) -> &'static str {
        match self {
            ToneRole::Tone => "tone",
            ToneRole::OnTone => "on-tone",
        }
    }
}

/// The brand sub-structures that have a variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandShape<'a> {
    Dimension { path: &'a [&'a str] },
    Typography { style: &'a str, property: &'a str },
    LayerProperty { layer: &'a str, property: &'a str },
    LayerElement { layer: &'a str, element: &'a str, rest: &'a [&'a str] },
    PaletteCore { color: &'a str, state: &'a [&'a str] },
    PaletteLevel { family: &'a str, level: &'a str, role: ToneRole },
    Elevation { elevation: &'a str },
    ElevationProperty { elevation: &'a str, property: &'a str },
    State { path: &'a [&'a str] },
    TextEmphasis { level: &'a str },
}

fn role(segment: &str) -> Option<ToneRole> {
    match segment {
        "tone" => Some(ToneRole::Tone),
        "on-tone" => Some(ToneRole::OnTone),
        _ => None,
    }
}

fn level_alias(level: &str) -> &str {
    if level == "default" { "primary" } else { level }
}

impl<'a> BrandShape<'a> {
    /// Matches a brand path (theme qualifier already removed). First match wins.
    pub fn classify(segments: &'a [&'a str]) -> Option<Self> {
        let shape = match segments {
            ["dimensions", path @ ..] if !path.is_empty() => BrandShape::Dimension { path },
            ["typography", style, property] => BrandShape::Typography {
                style: *style,
                property: *property,
            },
            ["layers" | "layer", layer, "property" | "properties", property] => {
                BrandShape::LayerProperty {
                    layer: *layer,
                    property: *property,
                }
            }
            ["layers" | "layer", layer, "elements" | "element", element, rest @ ..] => {
                BrandShape::LayerElement {
                    layer: *layer,
                    element: *element,
                    rest,
                }
            }
            ["palettes", "core" | "core-colors", color, state @ ..] => BrandShape::PaletteCore {
                color: *color,
                state,
            },
            ["palettes", family, level, "color", tone] | ["palettes", family, level, tone] => {
                BrandShape::PaletteLevel {
                    family: *family,
                    level: level_alias(*level),
                    role: role(tone)?,
                }
            }
            ["elevations", elevation] => BrandShape::Elevation {
                elevation: *elevation,
            },
            ["elevations", elevation, property] => BrandShape::ElevationProperty {
                elevation: *elevation,
                property: *property,
            },
            ["state", path @ ..] if !path.is_empty() => BrandShape::State { path },
            ["text-emphasis", level] => BrandShape::TextEmphasis { level: *level },
            _ => return None,
        };
        Some(shape)
    }

    /// The name suffix after `--recursica-brand-themes-{mode}-`.
    pub fn name_suffix(&self) -> String {
        match self {
            BrandShape::Dimension { path } => format!("dimensions-{}", path.join("-")),
            BrandShape::Typography { style, property } => {
                format!("typography-{}-{}", style, property)
            }
            BrandShape::LayerProperty { layer, property } => {
                format!("layer-{}-property-{}", layer, property)
            }
            BrandShape::LayerElement { layer, element, rest } => {
                let element = if *element == "interactive" && rest.is_empty() {
                    "interactive-color".to_string()
                } else {
                    std::iter::once(*element)
                        .chain(rest.iter().copied())
                        .collect::<Vec<_>>()
                        .join("-")
                };
                format!("layer-{}-property-element-{}", layer, element)
            }
            BrandShape::PaletteCore { color, state } => {
                let mut name = format!("palettes-core-{}", color);
                for part in state.iter() {
                    name.push('-');
                    name.push_str(part);
                }
                name
            }
            BrandShape::PaletteLevel { family, level, role } => {
                format!("palettes-{}-{}-{}", family, level, role.as_str())
            }
            BrandShape::Elevation { elevation } => format!("elevations-{}", elevation),
            BrandShape::ElevationProperty {
                elevation,
                property,
            } => format!("elevations-{}-{}", elevation, property),
            BrandShape::State { path } => format!("state-{}", path.join("-")),
            BrandShape::TextEmphasis { level } => format!("text-emphasis-{}", level),
        }
    }
}

/// Name of a brand variable for a given shape and mode.
pub fn brand_css_var(shape: &BrandShape<'_>, mode: Mode) -> String {
    format!("{}-brand-themes-{}-{}", CSS_VAR_PREFIX, mode, shape.name_suffix())
}

/// Maps a parsed reference to its CSS custom property name.
///
/// Tokens join their path; UI-kit references drop a leading mode index;
/// brand references go through [`BrandShape::classify`]. Unknown references
/// and unrecognized brand paths have no name.
pub fn resolve_token_reference_to_css_var(reference: &ParsedReference) -> Option<String> {
    let segments: Vec<&str> = reference.path.iter().map(String::as_str).collect();
    match reference.kind {
        ReferenceKind::Token if !segments.is_empty() => {
            Some(format!("{}-tokens-{}", CSS_VAR_PREFIX, segments.join("-")))
        }
        ReferenceKind::UiKit => {
            let rest = match segments.split_first() {
                Some((index, rest)) if is_mode_index(index) => rest,
                _ => &segments[..],
            };
            (!rest.is_empty()).then(|| format!("{}-ui-kit-{}", CSS_VAR_PREFIX, rest.join("-")))
        }
        ReferenceKind::Brand => {
            let shape = BrandShape::classify(&segments)?;
            Some(brand_css_var(&shape, reference.mode.unwrap_or_default()))
        }
        _ => None,
    }
}

pub(crate) fn is_mode_index(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
}
