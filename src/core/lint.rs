/// Static checks for story templates and word pools.

use std::fmt;

use crate::core::pool::PoolSet;
use crate::core::template::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

/// Report every placeholder in `template` that names no loaded pool.
pub fn lint_template(name: &str, template: &Template, pools: &PoolSet) -> Vec<LintIssue> {
    template
        .placeholders()
        .filter(|(_, key)| !pools.contains_key(key))
        .map(|(line, key)| LintIssue {
            severity: Severity::Error,
            message: format!(
                "{}:{}: placeholder <{}> matches no word list (known: {})",
                name,
                line,
                key,
                pools.keys().join(", ")
            ),
        })
        .collect()
}

/// Report pools holding blank words; placeholders drawing one render as
/// nothing but the separating space.
pub fn lint_pools(pools: &PoolSet) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    for key in pools.keys() {
        let Some(pool) = pools.get(key) else { continue };
        let blanks = pool.blank_count();
        if blanks == 0 {
            continue;
        }
        let message = if blanks == pool.words.len() {
            format!("word list '{}' has no words", key)
        } else {
            format!("word list '{}' has {} blank of {} entries", key, blanks, pool.words.len())
        };
        issues.push(LintIssue {
            severity: Severity::Warning,
            message,
        });
    }
    issues
}
