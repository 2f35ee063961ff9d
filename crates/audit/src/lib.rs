//! Audits a style environment for CSS custom property references that cannot
//! work: variables used but defined nowhere, reference cycles, malformed
//! `var(` calls, and `{...}` references that were never resolved.
//!
//! ```text
//! StyleEnvironment ──► collect bindings ──► scan usages ──► AuditReport
//!   root / sheets /      (inline wins)       not-defined
//!   elements                                 circular
//!                                            invalid-syntax
//!                                            brace-notation
//! ```

pub mod auditor;
pub mod config;
pub mod environment;
pub mod error;
pub mod model;
pub mod report;
pub mod scan;

pub use auditor::{Auditor, find_broken_references};
pub use config::AuditConfig;
pub use environment::{
    ElementScope, Properties, RootScope, SnapshotEnvironment, StyleEnvironment, StyleRule, StyleSheet,
    UnavailableEnvironment,
};
pub use error::{AuditError, EnvironmentError};
pub use model::{Binding, BrokenReason, BrokenReference, Location};
pub use report::AuditReport;

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> Properties {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn sheet(selector: &str, pairs: &[(&str, &str)]) -> StyleSheet {
        StyleSheet {
            href: Some("app.css".into()),
            rules: vec![StyleRule { selector: selector.into(), properties: props(pairs) }],
            cross_origin: false,
        }
    }

    fn audit(env: &SnapshotEnvironment) -> AuditReport {
        find_broken_references(env, &AuditConfig::default())
    }

    #[test]
    fn clean_environment_has_no_faults() {
        let env = SnapshotEnvironment::new()
            .with_root_inline("--recursica-tokens-color-gray-500", "#808080")
            .with_root_inline("--recursica-brand-x", "var(--recursica-tokens-color-gray-500)")
            .with_stylesheet(sheet(".btn", &[("color", "var(--recursica-brand-x)")]));
        let report = audit(&env);
        assert!(report.is_clean(), "{}", report);
        assert_eq!(report.bindings, 2);
        assert_eq!(report.usages, 2);
    }

    #[test]
    fn detects_undefined_variable() {
        let env = SnapshotEnvironment::new()
            .with_stylesheet(sheet(".btn", &[("color", "var(--recursica-missing)")]));
        let report = audit(&env);
        let broken: Vec<_> = report.by_reason(BrokenReason::NotDefined).collect();
        assert_eq!(broken.len(), 1);
        assert_eq!(broken[0].variable, "color");
        assert_eq!(broken[0].referenced_var.as_deref(), Some("--recursica-missing"));
        assert_eq!(broken[0].location, Location::Stylesheet);
        assert_eq!(broken[0].element.as_deref(), Some(".btn"));
    }

    #[test]
    fn detects_two_variable_cycle() {
        let env = SnapshotEnvironment::new()
            .with_root_inline("--recursica-a", "var(--recursica-b)")
            .with_root_inline("--recursica-b", "var(--recursica-a)");
        let report = audit(&env);
        assert_eq!(report.count(BrokenReason::Circular), 2);
        assert_eq!(report.count(BrokenReason::NotDefined), 0);
    }

    #[test]
    fn long_acyclic_chain_is_not_circular() {
        let mut env = SnapshotEnvironment::new().with_root_inline("--recursica-c0", "#000000");
        for i in 1..15 {
            env = env.with_root_inline(&format!("--recursica-c{}", i), &format!("var(--recursica-c{})", i - 1));
        }
        assert!(audit(&env).is_clean());
    }

    #[test]
    fn detects_brace_notation() {
        let env = SnapshotEnvironment::new()
            .with_root_inline("--recursica-brand-x", "{tokens.color.neutral.500}");
        let report = audit(&env);
        let broken: Vec<_> = report.by_reason(BrokenReason::BraceNotation).collect();
        assert_eq!(broken.len(), 1);
        assert_eq!(broken[0].variable, "--recursica-brand-x");
        assert_eq!(broken[0].referenced_var, None);
    }

    #[test]
    fn detects_invalid_syntax() {
        let env = SnapshotEnvironment::new().with_stylesheet(sheet(".a", &[("margin", "var( 12px)")]));
        assert_eq!(audit(&env).count(BrokenReason::InvalidSyntax), 1);
    }

    #[test]
    fn instance_variables_are_exempt() {
        let env = SnapshotEnvironment::new()
            .with_stylesheet(sheet(".slider", &[("width", "calc(var(--recursica-slider-fill-percent) * 1%)")]));
        assert!(audit(&env).is_clean());
    }

    #[test]
    fn component_fallbacks_are_exempt() {
        let env = SnapshotEnvironment::new().with_stylesheet(sheet(
            ".btn",
            &[
                ("background", "var(--button-bg, var(--recursica-missing-a))"),
                ("color", "var(--other-fg, var(--recursica-missing-b))"),
            ],
        ));
        let report = audit(&env);
        let broken: Vec<_> = report.by_reason(BrokenReason::NotDefined).collect();
        assert_eq!(broken.len(), 1);
        assert_eq!(broken[0].referenced_var.as_deref(), Some("--recursica-missing-b"));
    }

    #[test]
    fn variables_defined_on_elements_count_as_defined() {
        let env = SnapshotEnvironment::new()
            .with_element(ElementScope {
                selector: "div.card".into(),
                computed: props(&[("--recursica-card-bg", "#ffffff")]),
                ..Default::default()
            })
            .with_stylesheet(sheet(".card", &[("background", "var(--recursica-card-bg)")]));
        assert!(audit(&env).is_clean());
    }

    #[test]
    fn cross_origin_sheets_are_skipped() {
        let mut blocked = sheet(".x", &[("color", "var(--recursica-missing)")]);
        blocked.cross_origin = true;
        let env = SnapshotEnvironment::new().with_stylesheet(blocked);
        assert!(audit(&env).is_clean());
    }

    #[test]
    fn duplicate_faults_are_reported_once() {
        let env = SnapshotEnvironment::new()
            .with_stylesheet(sheet(".a", &[("color", "var(--recursica-missing)")]))
            .with_stylesheet(sheet(".b", &[("color", "var(--recursica-missing)")]));
        assert_eq!(audit(&env).broken.len(), 1);
    }

    #[test]
    fn unavailable_environment_yields_empty_report() {
        let report = Auditor::default().audit(&UnavailableEnvironment::default());
        assert_eq!(report, AuditReport::default());
    }

    #[test]
    fn inline_value_wins_over_computed() {
        let env = SnapshotEnvironment::new()
            .with_root_computed("--recursica-x", "computed")
            .with_root_inline("--recursica-x", "inline");
        let bindings = Auditor::default().bindings(&env);
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].value, "inline");
        assert!(bindings[0].locations.contains(&Location::RootComputed));
        assert!(bindings[0].has_inline());
    }

    #[test]
    fn report_display_groups_by_reason() {
        let env = SnapshotEnvironment::new()
            .with_root_inline("--recursica-brand-x", "{tokens.a}")
            .with_stylesheet(sheet(".btn", &[("color", "var(--recursica-missing)")]));
        let text = audit(&env).to_string();
        assert!(text.contains("not-defined (1):"));
        assert!(text.contains("brace-notation (1):"));
        assert!(text.contains("-> --recursica-missing"));
    }
}
