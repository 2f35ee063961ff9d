//! The broken-reference scan.
//!
//! Every observed property is collected first so that existence checks see
//! the complete set of bindings regardless of where a usage appears.

use crate::config::AuditConfig;
use crate::environment::StyleEnvironment;
use crate::model::{Binding, BrokenReason, BrokenReference, Location};
use crate::report::AuditReport;
use crate::scan::{fallback_pairs, has_malformed_var, is_brace_notation, referenced_vars};
use log::{debug, warn};
use std::collections::{BTreeMap, HashMap, HashSet};

/// One `name: value` pair as seen in the environment.
#[derive(Debug, Clone, Copy)]
struct Observed<'e> {
    name: &'e str,
    value: &'e str,
    location: Location,
    element: Option<&'e str>,
}

#[derive(Debug, Clone, Default)]
pub struct Auditor {
    config: AuditConfig,
}

impl Auditor {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Prefixed custom property bindings materialized in `env`, sorted by name.
    pub fn bindings(&self, env: &dyn StyleEnvironment) -> Vec<Binding> {
        self.collect_bindings(&observe(env)).into_values().collect()
    }

    pub fn audit(&self, env: &dyn StyleEnvironment) -> AuditReport {
        if !env.is_available() {
            debug!("Style environment '{}' unavailable; skipping audit", env.name());
            return AuditReport::default();
        }

        let observed = observe(env);
        let bindings = self.collect_bindings(&observed);
        let mut faults = Faults::default();

        for prop in observed.iter().filter(|p| p.name.starts_with(&self.config.prefix)) {
            if is_brace_notation(prop.value) {
                faults.push(prop, None, BrokenReason::BraceNotation);
            }
        }

        let value_of = |name: &str| -> Option<String> {
            bindings.get(name).map(|b| b.value.clone()).or_else(|| env.lookup(name))
        };
        let mut circular: HashMap<String, bool> = HashMap::new();
        let mut usages = 0;

        for prop in &observed {
            if has_malformed_var(prop.value) {
                faults.push(prop, None, BrokenReason::InvalidSyntax);
            }
            for name in referenced_vars(prop.value, &self.config.prefix) {
                usages += 1;
                let defined = bindings.contains_key(name) || env.lookup(name).is_some();
                if !defined {
                    if self.is_exempt(prop.value, name) {
                        continue;
                    }
                    faults.push(prop, Some(name), BrokenReason::NotDefined);
                    continue;
                }
                let is_circular = *circular
                    .entry(name.to_string())
                    .or_insert_with(|| self.leads_to_cycle(name, &value_of));
                if is_circular {
                    faults.push(prop, Some(name), BrokenReason::Circular);
                }
            }
        }

        debug!(
            "Audited '{}': {} bindings, {} usages, {} broken references",
            env.name(),
            bindings.len(),
            usages,
            faults.broken.len()
        );
        AuditReport { broken: faults.broken, bindings: bindings.len(), usages }
    }

    fn collect_bindings(&self, observed: &[Observed<'_>]) -> BTreeMap<String, Binding> {
        let mut bindings: BTreeMap<String, Binding> = BTreeMap::new();
        for prop in observed.iter().filter(|p| p.name.starts_with(&self.config.prefix)) {
            match bindings.get_mut(prop.name) {
                Some(binding) => {
                    if prop.location.is_inline() && !binding.has_inline() {
                        binding.value = prop.value.to_string();
                    }
                    binding.locations.insert(prop.location);
                }
                None => {
                    bindings.insert(
                        prop.name.to_string(),
                        Binding {
                            name: prop.name.to_string(),
                            value: prop.value.to_string(),
                            locations: [prop.location].into(),
                        },
                    );
                }
            }
        }
        bindings
    }

    fn is_exempt(&self, value: &str, name: &str) -> bool {
        if self.config.instance_variables.iter().any(|v| v == name) {
            return true;
        }
        fallback_pairs(value).into_iter().any(|(first, fallback)| {
            fallback == name && self.config.component_prefixes.iter().any(|p| first.starts_with(p.as_str()))
        })
    }

    fn leads_to_cycle(&self, start: &str, value_of: &dyn Fn(&str) -> Option<String>) -> bool {
        let mut path = vec![start.to_string()];
        self.walk(start, 0, &mut path, value_of)
    }

    fn walk(
        &self,
        current: &str,
        depth: usize,
        path: &mut Vec<String>,
        value_of: &dyn Fn(&str) -> Option<String>,
    ) -> bool {
        if depth >= self.config.max_depth {
            return false;
        }
        let Some(value) = value_of(current) else {
            return false;
        };
        for next in referenced_vars(&value, &self.config.prefix) {
            if path.iter().any(|seen| seen == next) {
                return true;
            }
            path.push(next.to_string());
            let found = self.walk(next, depth + 1, path, value_of);
            path.pop();
            if found {
                return true;
            }
        }
        false
    }
}

/// Audits `env` with the given configuration.
pub fn find_broken_references(env: &dyn StyleEnvironment, config: &AuditConfig) -> AuditReport {
    Auditor::new(config.clone()).audit(env)
}

fn observe(env: &dyn StyleEnvironment) -> Vec<Observed<'_>> {
    let mut observed = Vec::new();
    let root = env.root();
    observed.extend(root.inline.iter().map(|(name, value)| Observed {
        name: name.as_str(),
        value: value.as_str(),
        location: Location::RootInline,
        element: None,
    }));
    observed.extend(root.computed.iter().map(|(name, value)| Observed {
        name: name.as_str(),
        value: value.as_str(),
        location: Location::RootComputed,
        element: None,
    }));

    for sheet in env.stylesheets() {
        let sheet = match sheet {
            Ok(sheet) => sheet,
            Err(e) => {
                warn!("Skipping stylesheet: {}", e);
                continue;
            }
        };
        for rule in &sheet.rules {
            observed.extend(rule.properties.iter().map(|(name, value)| Observed {
                name: name.as_str(),
                value: value.as_str(),
                location: Location::Stylesheet,
                element: Some(rule.selector.as_str()),
            }));
        }
    }

    for element in env.elements() {
        let selector = Some(element.selector.as_str());
        observed.extend(element.computed.iter().map(|(name, value)| Observed {
            name: name.as_str(),
            value: value.as_str(),
            location: Location::ElementComputed,
            element: selector,
        }));
        observed.extend(element.inline.iter().map(|(name, value)| Observed {
            name: name.as_str(),
            value: value.as_str(),
            location: Location::ElementInline,
            element: selector,
        }));
    }
    observed
}

/// Broken references, deduplicated on (variable, referenced variable, reason).
#[derive(Default)]
struct Faults {
    seen: HashSet<(String, Option<String>, BrokenReason)>,
    broken: Vec<BrokenReference>,
}

impl Faults {
    fn push(&mut self, prop: &Observed<'_>, referenced: Option<&str>, reason: BrokenReason) {
        let key = (prop.name.to_string(), referenced.map(str::to_string), reason);
        if !self.seen.insert(key) {
            return;
        }
        self.broken.push(BrokenReference {
            variable: prop.name.to_string(),
            value: prop.value.to_string(),
            referenced_var: referenced.map(str::to_string),
            reason,
            location: prop.location,
            element: prop.element.map(str::to_string),
        });
    }
}
