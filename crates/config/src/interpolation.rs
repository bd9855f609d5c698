//! Variable interpolation for environment values.
//!
//! Responsibilities:
//! - Render `${NAME}` references inside a single value.
//! - Expand a whole `Environment` until no value changes between passes.
//!
//! Does NOT handle:
//! - Loading variables from the process or `.env` files (see `loader`).
//! - Type conversion of expanded values (see `loader::env`).
//!
//! Invariants:
//! - Each pass substitutes from the snapshot taken before that pass, so the
//!   result of a pass does not depend on key order.
//! - Unknown references render as the empty string.
//! - `${` without a closing `}` and empty `${}` are kept literally.
//! - Expansion stops after at most `len + 1` passes; a mapping that still
//!   changes then, or that is stable but still holds references, contains a
//!   reference cycle and is rejected.

use crate::environment::Environment;
use crate::loader::ConfigError;

const OPEN: &str = "${";
const CLOSE: char = '}';

/// Render `${NAME}` references in `template` using `lookup`.
///
/// Names are trimmed before lookup. A name that `lookup` does not resolve
/// is replaced with nothing.
pub fn render<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            // Unterminated reference: keep the remainder as-is.
            output.push_str(&rest[start..]);
            return output;
        };

        let name = after_open[..end].trim();
        if name.is_empty() {
            output.push_str(&rest[start..start + OPEN.len() + end + 1]);
        } else if let Some(value) = lookup(name) {
            output.push_str(value);
        }

        rest = &after_open[end + 1..];
    }

    output.push_str(rest);
    output
}

/// Returns true if `value` contains at least one well-formed `${NAME}` reference.
pub fn has_references(value: &str) -> bool {
    let mut rest = value;
    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        match after_open.find(CLOSE) {
            Some(end) if !after_open[..end].trim().is_empty() => return true,
            Some(end) => rest = &after_open[end + 1..],
            None => return false,
        }
    }
    false
}

/// Run one substitution pass over every value.
fn expand_once(variables: &Environment) -> Environment {
    variables
        .iter()
        .map(|(name, value)| {
            let rendered = if has_references(value) {
                render(value, |reference| variables.get(reference))
            } else {
                value.to_string()
            };
            (name, rendered)
        })
        .collect()
}

/// Expand `${NAME}` references across `variables` until a fixed point.
///
/// The input is not modified. Chains of references (`BAZ -> BAR -> FOO`)
/// resolve over successive passes.
///
/// # Errors
///
/// Returns `ConfigError::InterpolationCycle` if values are still changing
/// after `variables.len() + 1` passes, or if a stable mapping still holds
/// references. The error names the affected keys, never their values.
pub fn expand(variables: &Environment) -> Result<Environment, ConfigError> {
    let max_passes = variables.len() + 1;
    let mut current = variables.clone();

    for pass in 1..=max_passes {
        let next = expand_once(&current);
        if next == current {
            // A reference that survives a stable pass can only point back at itself.
            let unresolved: Vec<String> = next
                .iter()
                .filter(|(_, value)| has_references(value))
                .map(|(name, _)| name.to_string())
                .collect();
            if !unresolved.is_empty() {
                tracing::debug!(
                    passes = pass,
                    keys = ?unresolved,
                    "Environment interpolation left self-referencing values"
                );
                return Err(ConfigError::InterpolationCycle { keys: unresolved });
            }
            tracing::trace!(passes = pass, "Environment interpolation converged");
            return Ok(next);
        }
        current = next;
    }

    let next = expand_once(&current);
    let keys: Vec<String> = next
        .iter()
        .filter(|(name, value)| current.get(name) != Some(*value))
        .map(|(name, _)| name.to_string())
        .collect();

    tracing::debug!(
        passes = max_passes,
        keys = ?keys,
        "Environment interpolation did not converge"
    );

    Err(ConfigError::InterpolationCycle { keys })
}
