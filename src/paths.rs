//! Path-string joining for walked entries

/// Join two path strings with exactly one `/` at the junction.
///
/// This is deliberately a string operation: `Path::join` discards the
/// parent entirely when the child starts with a separator, which is the
/// wrong semantics for appending a directory-entry name to the path that
/// reached its parent. Only the junction is normalized; separators
/// elsewhere in either operand are left alone.
pub fn join_paths(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        return child.to_string();
    }
    if child.is_empty() {
        return parent.to_string();
    }

    match (parent.ends_with('/'), child.starts_with('/')) {
        // Both carry a separator at the junction; keep one.
        (true, true) => format!("{}{}", &parent[..parent.len() - 1], child),
        // Neither does; insert one.
        (false, false) => format!("{}/{}", parent, child),
        // Exactly one does; plain concatenation is already correct.
        _ => format!("{}{}", parent, child),
    }
}
