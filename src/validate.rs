//! Regular expression syntax gate.

use crate::Cause;

/// Checks that `pattern` is valid regular expression syntax.
///
/// The pattern language is a superset of regex syntax, so anything the regex
/// parser rejects cannot be decomposed either. The check is conservative:
/// extensions that are not also regex syntax, such as the reserved `\c`
/// escape, are rejected here too.
///
/// # Errors
///
/// Returns [`Cause::Regex`] with the regex parser's diagnostic.
pub fn validate(pattern: &str) -> Result<(), Cause> {
    match regex::Regex::new(pattern) {
        Err(regex::Error::Syntax(message)) => Err(Cause::Regex(message)),
        // Too big to compile is still valid syntax.
        Ok(_) | Err(_) => Ok(()),
    }
}
