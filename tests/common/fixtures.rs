use serde_json::{Value, json};

/// Token document with gray and blue color ramps, opacities, and sizes.
pub fn tokens() -> Value {
    json!({
        "tokens": {
            "color": {
                "gray": {
                    "000": { "$value": "#ffffff", "$type": "color" },
                    "500": { "$value": "#808080", "$type": "color" },
                    "900": { "$value": "#1a1a1a", "$type": "color" },
                    "1000": { "$value": "#000000", "$type": "color" }
                },
                "neutral": {
                    "500": { "$value": "#808080", "$type": "color" }
                },
                "blue": {
                    "100": { "$value": "#dbeafe", "$type": "color" },
                    "500": { "$value": "#2563eb", "$type": "color" },
                    "900": { "$value": "#1e3a8a", "$type": "color" }
                }
            },
            "opacity": {
                "veiled": { "$value": 0.24 },
                "smoky": { "$value": 0.64 },
                "solid": { "$value": 1 }
            },
            "size": {
                "spacer": { "4": { "$value": "16px" } }
            }
        }
    })
}

fn level(tone: &str, on_tone: &str) -> Value {
    json!({
        "color": {
            "tone": { "$value": tone, "$type": "color" },
            "on-tone": { "$value": on_tone, "$type": "color" }
        }
    })
}

/// A light/dark brand document. On-tones start deliberately wrong in places.
pub fn theme() -> Value {
    let core = json!({
        "black": { "$value": "{tokens.color.gray.1000}" },
        "white": { "$value": "{tokens.color.gray.000}" }
    });
    let emphasis = json!({
        "high": { "$value": "{tokens.opacity.solid}" },
        "low": { "$value": "{tokens.opacity.smoky}" }
    });
    json!({
        "brand": {
            "themes": {
                "light": {
                    "palettes": {
                        "core": core.clone(),
                        "neutral": {
                            "000": level("{tokens.color.gray.000}", "{brand.palettes.core.white}"),
                            "500": level("{tokens.color.gray.500}", "{brand.palettes.core.white}"),
                            "900": level("{tokens.color.gray.900}", "{brand.palettes.core.black}")
                        },
                        "blue": {
                            "100": level("{tokens.color.blue.100}", "{brand.palettes.core.black}"),
                            "500": level("{tokens.color.blue.500}", "{brand.palettes.core.white}"),
                            "900": level("{tokens.color.blue.900}", "{brand.palettes.core.white}"),
                            "default": level("{brand.palettes.blue.900.color.tone}", "{brand.palettes.core.white}")
                        }
                    },
                    "text-emphasis": emphasis.clone(),
                    "layers": {
                        "layer-0": {
                            "property": {
                                "surface": { "$value": "{brand.palettes.neutral.000.color.tone}" },
                                "padding": { "$value": "{tokens.size.spacer.4}" }
                            }
                        }
                    },
                    "elevations": {
                        "elevation-2": { "x-axis": { "$value": "2px" } }
                    }
                },
                "dark": {
                    "palettes": {
                        "core": core,
                        "neutral": {
                            "000": level("{tokens.color.gray.1000}", "{brand.palettes.core.black}")
                        }
                    },
                    "text-emphasis": emphasis,
                    "layers": {
                        "layer-0": {
                            "property": {
                                "surface": { "$value": "{brand.palettes.neutral.000.color.tone}" }
                            }
                        }
                    }
                }
            }
        }
    })
}

pub fn ui_kit() -> Value {
    json!({
        "ui-kit": {
            "button": {
                "variant": {
                    "solid": {
                        "background": { "$value": "{brand.palettes.blue.500.color.tone}" },
                        "text": { "$value": "{brand.palettes.blue.500.color.on-tone}" }
                    }
                }
            }
        }
    })
}

/// A captured style environment with one fault of each kind.
pub fn faulty_snapshot() -> &'static str {
    r##"{
        "root": {
            "inline": {
                "--recursica-tokens-color-gray-500": "#808080",
                "--recursica-brand-themes-light-layer-layer-0-property-surface": "var(--recursica-tokens-color-gray-500)",
                "--recursica-loop-a": "var(--recursica-loop-b)",
                "--recursica-loop-b": "var(--recursica-loop-a)",
                "--recursica-unresolved": "{tokens.color.neutral.500}"
            },
            "computed": {
                "--recursica-tokens-color-gray-500": "rgb(128, 128, 128)"
            }
        },
        "elements": [
            {
                "selector": "button.primary",
                "inline": { "--button-bg": "var(--recursica-ui-kit-button-variant-solid-background)" }
            }
        ],
        "stylesheets": [
            {
                "href": "https://fonts.example/remote.css",
                "crossOrigin": true
            },
            {
                "href": "app.css",
                "rules": [
                    {
                        "selector": ".card",
                        "properties": {
                            "background": "var(--recursica-brand-themes-light-layer-layer-0-property-surface)",
                            "color": "var(--recursica-missing)",
                            "margin": "var( 4px)",
                            "border-color": "var(--chip-border, var(--recursica-optional))",
                            "width": "var(--recursica-instance-width)"
                        }
                    }
                ]
            }
        ]
    }"##
}
