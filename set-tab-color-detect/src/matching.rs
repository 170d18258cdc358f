//! Process name matching.

/// Check whether `process_name` names `candidate`.
///
/// Matches when the names are equal, or when `process_name` is `candidate`
/// followed by a space or a colon (`"tmux: server"`, `"sshd user@pts/0"`).
/// A bare prefix (`"sshdserver"`) or a substring (`"mysshd"`) is not a
/// match. With `case_sensitive` false both sides are lowercased first.
pub fn matches(process_name: &str, candidate: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        matches_exact_or_prefix(process_name, candidate)
    } else {
        matches_exact_or_prefix(&process_name.to_lowercase(), &candidate.to_lowercase())
    }
}

fn matches_exact_or_prefix(name: &str, candidate: &str) -> bool {
    match name.strip_prefix(candidate) {
        Some("") => true,
        Some(rest) => rest.starts_with([' ', ':']),
        None => false,
    }
}
