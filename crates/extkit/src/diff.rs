//! Drift detection between desired and installed extensions.

use crate::types::{Diff, ExtensionId, ExtensionSet};

/// Compute what has to change for `current` to match `desired`.
///
/// Ids are compared case-insensitively. Ids are opaque: anything that is
/// not a well-formed `publisher.name` is still diffed as a plain string.
pub fn compute_diff<D, C>(desired: D, current: C) -> Diff
where
    D: IntoIterator,
    D::Item: AsRef<str>,
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    let desired: ExtensionSet = desired.into_iter().map(ExtensionId::new).collect();
    let current: ExtensionSet = current.into_iter().map(ExtensionId::new).collect();

    Diff {
        to_install: desired.difference(&current).cloned().collect(),
        to_uninstall: current.difference(&desired).cloned().collect(),
    }
}
