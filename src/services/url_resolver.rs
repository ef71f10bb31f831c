//! Resolution of caller-supplied URL strings.

use url::Url;

/// Resolve `candidate` against `base`.
///
/// Returns `None` when the string cannot be parsed. Callers treat this as an
/// absent field, not an error.
pub fn resolve(base: &Url, candidate: &str) -> Option<Url> {
    match base.join(candidate) {
        Ok(url) => Some(url),
        Err(e) => {
            log::debug!("[url] Could not resolve '{}' against {}: {}", candidate, base, e);
            None
        }
    }
}
