//! Path separator conventions of the generated artifacts.
//!
//! Each consumer escapes differently: batch files take single backslashes,
//! Java properties files read `\` as an escape and need `\\`, and Jenkins
//! pipelines need forward slashes.

/// Replace every `/` with `\`.
pub fn backslashed(path: &str) -> String {
    path.replace('/', "\\")
}

/// Normalize every separator, forward or back, to an escaped `\\`.
pub fn double_backslashed(path: &str) -> String {
    path.replace('\\', "/").replace('/', "\\\\")
}

/// Replace every `\` with `/`.
pub fn forward_slashed(text: &str) -> String {
    text.replace('\\', "/")
}
