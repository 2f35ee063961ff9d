//! Recomputes palette on-tones and writes the choices back to the theme.

use recursica_a11y::{
    AA_CONTRAST, CoreColors, EmphasisOpacity, OpacityLadder, blend_over, contrast_ratio_rgb,
    pick_min_alpha_for_aa, pick_on_tone_with_opacity,
};
use recursica_resolver::{BrandShape, Resolver, ToneRole, brand_css_var};
use recursica_types::{Level, Mode, OnTone, PaletteLevel, Rgb, hex_to_rgb};
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::fmt;

const CORE_KEYS: [&str; 2] = ["core", "core-colors"];

/// What changed and therefore which palette levels need a new on-tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecheckTrigger {
    FamilyChanged(String),
    CoreColorChanged,
    OpacityChanged,
}

impl RecheckTrigger {
    pub fn family(&self) -> Option<&str> {
        match self {
            RecheckTrigger::FamilyChanged(family) => Some(family.as_str()),
            _ => None,
        }
    }
}

/// The outcome for one palette level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRecheck {
    #[serde(flatten)]
    pub level: PaletteLevel,
    /// The level's key in the theme document (`default` stays `default`).
    #[serde(skip)]
    pub key: String,
    pub meets_aa_high: bool,
    pub meets_aa_low: bool,
    /// Smallest ladder opacity at which the on-tone dot reaches AA on the tone.
    pub min_dot_opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecheckReport {
    pub mode: Mode,
    pub levels: Vec<LevelRecheck>,
    /// Bindings whose value changed, as `(name, value)`.
    pub changed_bindings: Vec<(String, String)>,
}

impl RecheckReport {
    pub fn failing(&self) -> impl Iterator<Item = &LevelRecheck> {
        self.levels.iter().filter(|l| !(l.meets_aa_high && l.meets_aa_low))
    }
}

impl fmt::Display for RecheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Palette recheck ({}): {} levels", self.mode, self.levels.len())?;
        for l in &self.levels {
            writeln!(
                f,
                "  {}-{} {} on-tone={} high={} low={} min-dot-opacity={}",
                l.level.family,
                l.level.level,
                l.level.tone,
                l.level.on_tone,
                if l.meets_aa_high { "AA" } else { "fail" },
                if l.meets_aa_low { "AA" } else { "fail" },
                l.min_dot_opacity
            )?;
        }
        if !self.changed_bindings.is_empty() {
            writeln!(f, "{} bindings changed", self.changed_bindings.len())?;
        }
        Ok(())
    }
}

fn as_opacity(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn palettes(theme_mode: &Value) -> Option<&Map<String, Value>> {
    theme_mode.get("palettes")?.as_object()
}

/// The key the theme keeps its core colors under; `core` when it has none.
fn core_key(theme_mode: &Value) -> &'static str {
    palettes(theme_mode)
        .and_then(|p| CORE_KEYS.into_iter().find(|key| p.contains_key(*key)))
        .unwrap_or(CORE_KEYS[0])
}

fn core_palette(theme_mode: &Value) -> Option<&Value> {
    palettes(theme_mode)?.get(core_key(theme_mode))
}

/// `color.tone` of a level, or a bare `tone`.
fn level_tone(level: &Value) -> Option<&Value> {
    level.get("color").and_then(|c| c.get("tone")).or_else(|| level.get("tone"))
}

/// Reads the inputs of a recheck from one resolved theme mode.
pub(crate) struct RecheckInputs {
    pub core: CoreColors,
    pub emphasis: EmphasisOpacity,
    pub ladder: OpacityLadder,
}

impl RecheckInputs {
    pub fn read(resolver: &Resolver, theme_mode: &Value, mode: Mode) -> Self {
        let color = |node: Option<&Value>| -> Option<Rgb> {
            let resolved = resolver.value(node?, mode)?;
            hex_to_rgb(resolved.as_str()?)
        };
        let opacity = |key: &str| -> Option<f64> {
            let node = theme_mode.get("text-emphasis")?.get(key)?;
            as_opacity(&resolver.value(node, mode)?)
        };

        let core_node = core_palette(theme_mode);
        let defaults = (CoreColors::default(), EmphasisOpacity::default());
        let core = CoreColors {
            black: color(core_node.and_then(|c| c.get("black"))).unwrap_or(defaults.0.black),
            white: color(core_node.and_then(|c| c.get("white"))).unwrap_or(defaults.0.white),
        };
        let emphasis = EmphasisOpacity {
            high: opacity("high").unwrap_or(defaults.1.high),
            low: opacity("low").unwrap_or(defaults.1.low),
        };
        let ladder = resolver
            .token_index()
            .map(|index| OpacityLadder::from_tokens(&index.opacity_tokens()))
            .unwrap_or_default();

        Self { core, emphasis, ladder }
    }
}

/// Families touched by `trigger`, in key order.
pub(crate) fn affected_families(theme_mode: &Value, trigger: &RecheckTrigger) -> Vec<String> {
    match trigger.family() {
        Some(family) => vec![family.to_string()],
        None => palettes(theme_mode)
            .map(|p| p.keys().filter(|k| !CORE_KEYS.contains(&k.as_str())).cloned().collect())
            .unwrap_or_default(),
    }
}

/// Evaluates every level of `family`.
pub(crate) fn evaluate_family(
    resolver: &Resolver,
    theme_mode: &Value,
    family: &str,
    inputs: &RecheckInputs,
    mode: Mode,
) -> Vec<LevelRecheck> {
    let Some(levels) = palettes(theme_mode).and_then(|p| p.get(family)).and_then(Value::as_object) else {
        log::debug!("Palette family '{}' not found in {} theme", family, mode);
        return Vec::new();
    };

    let mut out = Vec::new();
    for (key, node) in levels {
        let Ok(level) = key.parse::<Level>() else {
            continue;
        };
        let tone = level_tone(node)
            .and_then(|t| resolver.value(t, mode))
            .and_then(|v| v.as_str().and_then(hex_to_rgb));
        let Some(tone) = tone else {
            log::debug!("Skipping {}-{}: tone does not resolve to a color", family, key);
            continue;
        };

        let tone_hex = tone.to_hex();
        let on_tone = pick_on_tone_with_opacity(&tone_hex, &inputs.core, inputs.emphasis);
        let fg = inputs.core.color(on_tone);
        let passes = |alpha: f64| contrast_ratio_rgb(blend_over(fg, tone, alpha), tone) >= AA_CONTRAST;
        let meets_aa_high = passes(inputs.emphasis.high);
        let meets_aa_low = passes(inputs.emphasis.low);
        if !meets_aa_high {
            log::debug!("{}-{} ({}) has no AA on-tone; using {}", family, key, tone_hex, on_tone);
        }

        out.push(LevelRecheck {
            level: PaletteLevel {
                family: family.to_string(),
                level,
                tone,
                on_tone,
            },
            key: key.clone(),
            meets_aa_high,
            meets_aa_low,
            min_dot_opacity: pick_min_alpha_for_aa(&tone_hex, &fg.to_hex(), &inputs.ladder),
        });
    }
    out
}

/// The brace reference stored in a level's `on-tone`, pointing into the
/// core palette under `core_key`.
pub fn on_tone_reference(core_key: &str, on_tone: OnTone) -> String {
    format!("{{brand.palettes.{}.{}}}", core_key, on_tone)
}

/// `(name, value)` of the CSS binding for a level's on-tone.
pub fn on_tone_binding(family: &str, level: Level, on_tone: OnTone, mode: Mode) -> (String, String) {
    let name = brand_css_var(
        &BrandShape::PaletteLevel {
            family,
            level: level.as_str(),
            role: ToneRole::OnTone,
        },
        mode,
    );
    let core = brand_css_var(
        &BrandShape::PaletteCore {
            color: on_tone.as_str(),
            state: &[],
        },
        mode,
    );
    (name, format!("var({})", core))
}

/// Writes the chosen on-tone reference into `level.color.on-tone` (or `level.on-tone`).
pub(crate) fn write_on_tone(theme_mode: &mut Value, family: &str, key: &str, on_tone: OnTone) -> bool {
    let reference = Value::String(on_tone_reference(core_key(theme_mode), on_tone));
    let Some(level) = theme_mode
        .get_mut("palettes")
        .and_then(|p| p.get_mut(family))
        .and_then(|f| f.get_mut(key))
    else {
        return false;
    };
    let target = if level.get("color").is_some_and(Value::is_object) {
        level.get_mut("color")
    } else {
        Some(level)
    };
    let Some(target) = target.and_then(Value::as_object_mut) else {
        return false;
    };

    match target.get_mut("on-tone") {
        Some(Value::Object(existing)) => {
            existing.insert("$value".to_string(), reference);
        }
        _ => {
            target.insert("on-tone".to_string(), json!({ "$value": reference }));
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_names_follow_brand_naming() {
        let (name, value) = on_tone_binding("neutral", Level::Primary, OnTone::White, Mode::Dark);
        assert_eq!(name, "--recursica-brand-themes-dark-palettes-neutral-primary-on-tone");
        assert_eq!(value, "var(--recursica-brand-themes-dark-palettes-core-white)");
    }

    #[test]
    fn write_back_keeps_sibling_keys() {
        let mut theme = json!({
            "palettes": { "neutral": { "500": { "color": {
                "tone": { "$value": "#808080" },
                "on-tone": { "$type": "color", "$value": "{brand.palettes.core.white}" }
            } } } }
        });
        assert!(write_on_tone(&mut theme, "neutral", "500", OnTone::Black));
        assert_eq!(
            theme["palettes"]["neutral"]["500"]["color"]["on-tone"],
            json!({ "$type": "color", "$value": "{brand.palettes.core.black}" })
        );
        assert!(!write_on_tone(&mut theme, "neutral", "900", OnTone::Black));
    }

    #[test]
    fn write_back_creates_missing_on_tone() {
        let mut theme = json!({ "palettes": { "blue": { "default": { "tone": "#0000ff" } } } });
        assert!(write_on_tone(&mut theme, "blue", "default", OnTone::White));
        assert_eq!(
            theme["palettes"]["blue"]["default"]["on-tone"],
            json!({ "$value": "{brand.palettes.core.white}" })
        );
    }

    #[test]
    fn write_back_points_at_the_core_key_in_use() {
        let mut theme = json!({ "palettes": {
            "core-colors": { "black": { "$value": "#000000" }, "white": { "$value": "#ffffff" } },
            "neutral": { "900": { "color": { "tone": { "$value": "#1a1a1a" } } } }
        } });
        assert!(write_on_tone(&mut theme, "neutral", "900", OnTone::White));
        assert_eq!(
            theme["palettes"]["neutral"]["900"]["color"]["on-tone"],
            json!({ "$value": "{brand.palettes.core-colors.white}" })
        );
        assert_eq!(core_key(&json!({ "palettes": {} })), "core");
    }

    #[test]
    fn core_families_are_not_rechecked() {
        let theme = json!({ "palettes": { "core": {}, "neutral": {}, "blue": {} } });
        let families = affected_families(&theme, &RecheckTrigger::CoreColorChanged);
        assert_eq!(families, vec!["blue".to_string(), "neutral".to_string()]);
        let one = affected_families(&theme, &RecheckTrigger::FamilyChanged("blue".into()));
        assert_eq!(one, vec!["blue".to_string()]);
    }
}
