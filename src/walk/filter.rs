//! Predicate evaluation: does one entry satisfy the active filters?

use crate::entry::Entry;
use crate::owner;

use super::config::{FilterConfig, OwnerFilter};

/// True iff `entry` satisfies every active filter in `config`.
///
/// The predicate is the conjunction of the active filters; an inactive
/// filter is vacuously satisfied, so a configuration with no filters at
/// all matches every entry.
pub fn matches(entry: &Entry, config: &FilterConfig) -> bool {
    if let Some(types) = &config.types {
        if !types.contains(entry.kind) {
            return false;
        }
    }

    match config.owner {
        Some(OwnerFilter::User(uid)) if entry.uid != uid => return false,
        Some(OwnerFilter::Unowned) if owner::name_for_uid(entry.uid).is_some() => return false,
        _ => {}
    }

    if let Some(pattern) = &config.name {
        if !pattern.matches(&entry.name) {
            return false;
        }
    }

    if let Some(pattern) = &config.path {
        if !pattern.matches(&entry.path) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use crate::entry::TypeSet;
    use crate::owner;

    use super::*;

    fn entry_for(path: &Path) -> Entry {
        Entry::new(
            path.to_string_lossy().into_owned(),
            fs::symlink_metadata(path).unwrap(),
        )
    }

    fn fixture() -> (TempDir, Entry, Entry) {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "x").unwrap();
        let file_entry = entry_for(&file);
        let dir_entry = entry_for(dir.path());
        (dir, file_entry, dir_entry)
    }

    #[test]
    fn no_active_filters_match_everything() {
        let (_guard, file, dir) = fixture();
        let config = FilterConfig::new();
        assert!(matches(&file, &config));
        assert!(matches(&dir, &config));
    }

    #[test]
    fn type_filter_checks_membership() {
        let (_guard, file, dir) = fixture();
        let config = FilterConfig::new().with_types(TypeSet::parse("d").unwrap());
        assert!(!matches(&file, &config));
        assert!(matches(&dir, &config));
    }

    #[test]
    fn name_glob_applies_to_the_base_name_only() {
        let (_guard, file, _dir) = fixture();
        let config = FilterConfig::new().with_name_pattern("*.txt").unwrap();
        assert!(matches(&file, &config));

        // The glob must cover the whole name, not a prefix of the path.
        let config = FilterConfig::new().with_name_pattern("notes").unwrap();
        assert!(!matches(&file, &config));
    }

    #[test]
    fn path_glob_applies_to_the_full_path() {
        let (_guard, file, _dir) = fixture();
        let config = FilterConfig::new().with_path_pattern("*notes*").unwrap();
        assert!(matches(&file, &config));

        let config = FilterConfig::new().with_path_pattern("notes.txt").unwrap();
        assert!(!matches(&file, &config));
    }

    #[test]
    fn owner_filter_compares_uids() {
        let (_guard, file, _dir) = fixture();
        let own_uid = file.uid;

        let config = FilterConfig::new().with_owner(own_uid).unwrap();
        assert!(matches(&file, &config));

        let config = FilterConfig::new().with_owner(own_uid.wrapping_add(1)).unwrap();
        assert!(!matches(&file, &config));
    }

    #[test]
    fn unowned_filter_tracks_account_resolution() {
        let (_guard, file, _dir) = fixture();
        let config = FilterConfig::new().with_unowned().unwrap();
        // Matches exactly when the owning uid has no passwd entry.
        assert_eq!(matches(&file, &config), owner::name_for_uid(file.uid).is_none());
    }

    #[test]
    fn active_filters_combine_as_a_conjunction() {
        let (_guard, file, _dir) = fixture();
        let config = FilterConfig::new()
            .with_types(TypeSet::parse("f").unwrap())
            .with_name_pattern("*.txt")
            .unwrap();
        assert!(matches(&file, &config));

        let config = FilterConfig::new()
            .with_types(TypeSet::parse("d").unwrap())
            .with_name_pattern("*.txt")
            .unwrap();
        assert!(!matches(&file, &config));
    }
}
