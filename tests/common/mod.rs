pub mod fixtures;

use recursica::{Mode, Recursica, RecursicaBuilder, RecursicaError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Engine over the token, theme, and UI-kit fixtures.
pub fn engine(mode: Mode) -> Result<Recursica, RecursicaError> {
    RecursicaBuilder::new()
        .with_tokens(fixtures::tokens())
        .with_theme(fixtures::theme())
        .with_ui_kit(fixtures::ui_kit())
        .with_mode(mode)
        .build()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}
