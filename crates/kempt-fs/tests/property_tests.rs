use kempt_fs::path::{file_name, join, normalize, parent_of, relative_to};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._-]{1,12}"
}

fn base_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..4).prop_map(|parts| parts.join("/"))
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "\\PC*") {
        let once = normalize(&s);
        prop_assert!(!once.contains('\\'));
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn join_then_relative_round_trips(base in base_path(), seg in segment()) {
        let joined = join(&base, &seg);
        prop_assert_eq!(relative_to(&joined, &base), Some(seg.as_str()));
    }

    #[test]
    fn join_then_parent_round_trips(base in base_path(), seg in segment()) {
        let joined = join(&base, &seg);
        prop_assert_eq!(parent_of(&joined), Some(base));
        prop_assert_eq!(file_name(&joined), seg.as_str());
    }

    #[test]
    fn relative_rejects_siblings(base in base_path(), seg in segment()) {
        // A sibling sharing the base as a name prefix must not count as
        // being within it.
        let sibling = format!("{base}x/{seg}");
        prop_assert_eq!(relative_to(&sibling, &base), None);
    }
}
