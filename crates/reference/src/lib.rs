//! Brace-notation reference language.
//!
//! A reference is `{` + namespace + dotted path + `}`, for example
//! `{tokens.color.neutral.500}` or `{brand.palettes.neutral.500.color.tone}`.
//! Parsing never fails loudly: anything that is not a reference yields `None`,
//! and unrecognized prefixes come back as [`ReferenceKind::Unknown`].

pub mod ast;
pub mod error;
mod parser;

// --- Public API ---
pub use ast::{ParsedReference, ReferenceKind};
pub use error::ReferenceError;
pub use parser::{is_brace_notation, parse_reference, parse_reference_str, parse_reference_strict};
pub use recursica_types::Mode;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_token_reference() {
        let parsed = parse_reference(&json!("{tokens.color.neutral.500}"), Mode::Light).unwrap();
        assert_eq!(parsed.kind, ReferenceKind::Token);
        assert_eq!(parsed.path, vec!["color", "neutral", "500"]);
        assert_eq!(parsed.mode, None);
        assert_eq!(parsed.normalized_path, "tokens.color.neutral.500");
    }

    #[test]
    fn test_singular_token_prefix_and_case() {
        let parsed = parse_reference_str("{Token.size.4}", Mode::Light).unwrap();
        assert_eq!(parsed.kind, ReferenceKind::Token);
        assert_eq!(parsed.path, vec!["size", "4"]);
    }

    #[test]
    fn test_unwraps_value_object() {
        let parsed = parse_reference(&json!({ "$value": "{tokens.opacity.solid}" }), Mode::Light)
            .unwrap();
        assert_eq!(parsed.normalized_path, "tokens.opacity.solid");
        assert!(parse_reference(&json!({ "$value": 0.5 }), Mode::Light).is_none());
    }

    #[test]
    fn test_brand_reference_takes_caller_mode() {
        let parsed =
            parse_reference_str("{brand.palettes.neutral.500.color.tone}", Mode::Dark).unwrap();
        assert_eq!(parsed.kind, ReferenceKind::Brand);
        assert_eq!(parsed.mode, Some(Mode::Dark));
        assert_eq!(parsed.path, vec!["palettes", "neutral", "500", "color", "tone"]);
        assert_eq!(
            parsed.normalized_path,
            "brand.themes.dark.palettes.neutral.500.color.tone"
        );
    }

    #[test]
    fn test_embedded_theme_is_stripped() {
        let explicit = parse_reference_str("{brand.themes.dark.layers.layer-0}", Mode::Light).unwrap();
        let short = parse_reference_str("{theme.light.layers.layer-0}", Mode::Light).unwrap();
        let plain = parse_reference_str("{brand.layers.layer-0}", Mode::Light).unwrap();
        assert_eq!(explicit, plain);
        assert_eq!(short, plain);
        assert_eq!(plain.normalized_path, "brand.themes.light.layers.layer-0");
    }

    #[test]
    fn test_forgiving_whitespace() {
        let parsed =
            parse_reference_str("{ brand themes light palettes neutral .100 }", Mode::Light).unwrap();
        assert_eq!(parsed.kind, ReferenceKind::Brand);
        assert_eq!(parsed.path, vec!["palettes", "neutral", "100"]);
    }

    #[test]
    fn test_ui_kit_reference() {
        let parsed = parse_reference_str("{ui-kit.0.button.color.background}", Mode::Light).unwrap();
        assert_eq!(parsed.kind, ReferenceKind::UiKit);
        assert_eq!(parsed.path, vec!["0", "button", "color", "background"]);
        assert_eq!(parsed.mode, None);

        let malformed = parse_reference_str("{ui-kit0.button.color.background}", Mode::Light).unwrap();
        assert_eq!(malformed, parsed);
    }

    #[test]
    fn test_unknown_prefix_falls_through() {
        let parsed = parse_reference_str("{colors.primary}", Mode::Light).unwrap();
        assert_eq!(parsed.kind, ReferenceKind::Unknown);
        assert_eq!(parsed.path, vec!["colors", "primary"]);
        assert_eq!(parsed.normalized_path, "colors.primary");

        let bare = parse_reference_str("{tokens}", Mode::Light).unwrap();
        assert_eq!(bare.kind, ReferenceKind::Unknown);
    }

    #[test]
    fn test_non_references() {
        assert!(parse_reference_str("#808080", Mode::Light).is_none());
        assert!(parse_reference_str("{}", Mode::Light).is_none());
        assert!(parse_reference_str("{   }", Mode::Light).is_none());
        assert!(parse_reference_str("{tokens.color", Mode::Light).is_none());
        assert!(parse_reference(&json!(null), Mode::Light).is_none());
        assert!(parse_reference(&json!(["{tokens.x}"]), Mode::Light).is_none());
    }

    #[test]
    fn test_normalizing_twice_is_stable() {
        let inputs = [
            "{ tokens . color  neutral.500 }",
            "{theme.themes.dark.palettes..core.black}",
            "{ui-kit3.button}",
            "{something else}",
        ];
        for input in inputs {
            let first = parse_reference_str(input, Mode::Dark).unwrap();
            let second = parse_reference_str(&first.to_reference_string(), Mode::Dark).unwrap();
            assert_eq!(first, second, "{input}");
        }
    }

    #[test]
    fn test_mode_named_brand_segments_survive_round_trip() {
        for input in ["{brand.dark.light.x}", "{brand.light.themes.dark.y}"] {
            let first = parse_reference_str(input, Mode::Light).unwrap();
            let rendered = first.to_reference_string();
            assert!(rendered.starts_with("{brand.themes.light."), "{rendered}");
            let second = parse_reference_str(&rendered, Mode::Light).unwrap();
            assert_eq!(first, second, "{input}");
        }
        let parsed = parse_reference_str("{brand.dark.light.x}", Mode::Light).unwrap();
        assert_eq!(parsed.path, vec!["light", "x"]);
    }

    #[test]
    fn test_canonical_brace_form() {
        let parsed = parse_reference_str("{theme.dark.state.hover}", Mode::Dark).unwrap();
        assert_eq!(parsed.to_reference_string(), "{brand.state.hover}");
    }
}
