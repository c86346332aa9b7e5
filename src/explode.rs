//! Decomposition of compound stat cells into atomic statistics.
//!
//! Upstream packs several numbers into one display string: `"9-19"` under
//! `"fieldGoalsMade-fieldGoalsAttempted"`, slash codes such as `"3/4"`, or a
//! `"mm:ss"` clock. Each cell becomes one record per named number.

use crate::error::{ExtractError, Result};
use crate::model::Statistic;

fn is_delimiter(c: char) -> bool {
    c == '-' || c == '/'
}

/// Pair two sequences positionally, stopping at the end of the shorter one.
/// Trailing items of the longer sequence are dropped.
pub fn zip_shortest<A, B>(
    left: impl IntoIterator<Item = A>,
    right: impl IntoIterator<Item = B>,
) -> impl Iterator<Item = (A, B)> {
    left.into_iter().zip(right)
}

/// Parse one value token. Empty tokens count as zero, and so do tokens that
/// are not a finite number (`"W1"`, `"inf"`).
pub fn parse_token(token: &str) -> f64 {
    let token = token.trim();
    if token.is_empty() {
        return 0.0;
    }
    token.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// `"mm:ss"` to whole seconds. Pieces past the second colon are ignored.
pub fn clock_seconds(label: &str, value: &str) -> Result<i64> {
    let invalid = || ExtractError::Clock { label: label.to_string(), value: value.to_string() };
    let mut pieces = value.split(':');
    let minutes = pieces.next().unwrap_or_default().trim().parse::<i64>().map_err(|_| invalid())?;
    let seconds = pieces.next().unwrap_or_default().trim().parse::<i64>().map_err(|_| invalid())?;
    minutes.checked_mul(60).and_then(|m| m.checked_add(seconds)).ok_or_else(invalid)
}

/// Split a `(label, value)` cell into statistics cloned from `base`.
///
/// A value containing `:` is a clock and yields exactly one record named by
/// the whole label. Otherwise label and value are split on `-` or `/` and
/// paired with [`zip_shortest`].
pub fn explode<S: Statistic>(base: &S, (label, value): (&str, &str)) -> Result<Vec<S>> {
    let named = |name: &str, amount: f64| {
        let mut stat = base.clone();
        let inner = stat.base_mut();
        inner.statistic_name = name.to_string();
        inner.statistic_value = amount;
        stat
    };

    if value.contains(':') {
        let seconds = clock_seconds(label, value)?;
        return Ok(vec![named(label, seconds as f64)]);
    }

    let names = label.split(is_delimiter);
    let values = value.split(is_delimiter);
    Ok(zip_shortest(names, values).map(|(name, token)| named(name, parse_token(token))).collect())
}
