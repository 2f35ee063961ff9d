use crate::model::{BrokenReason, BrokenReference};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub broken: Vec<BrokenReference>,
    /// Number of distinct prefixed bindings collected.
    pub bindings: usize,
    /// Number of prefixed `var()` usages inspected.
    pub usages: usize,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }

    pub fn by_reason(&self, reason: BrokenReason) -> impl Iterator<Item = &BrokenReference> {
        self.broken.iter().filter(move |b| b.reason == reason)
    }

    pub fn count(&self, reason: BrokenReason) -> usize {
        self.by_reason(reason).count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(
                f,
                "No broken references ({} bindings, {} usages)",
                self.bindings, self.usages
            );
        }
        writeln!(f, "{} broken references", self.broken.len())?;
        for reason in BrokenReason::ALL {
            let count = self.count(reason);
            if count == 0 {
                continue;
            }
            writeln!(f, "{} ({}):", reason, count)?;
            for b in self.by_reason(reason) {
                write!(f, "  {}: {}", b.variable, b.value)?;
                if let Some(var) = &b.referenced_var {
                    write!(f, " -> {}", var)?;
                }
                write!(f, " [{}", b.location)?;
                if let Some(el) = &b.element {
                    write!(f, " {}", el)?;
                }
                writeln!(f, "]")?;
            }
        }
        Ok(())
    }
}
