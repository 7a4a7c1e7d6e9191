use crate::selection::SkillSelection;

/// Unselected skills whose name contains `query`, ignoring case.
///
/// An empty query offers nothing; suggestions only appear once the user types.
pub fn suggest<'a>(
    query: &str,
    selection: &SkillSelection,
    all_skills: &'a [String],
) -> Vec<&'a str> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    all_skills
        .iter()
        .map(String::as_str)
        .filter(|skill| skill.to_lowercase().contains(&needle))
        .filter(|skill| !selection.contains(skill))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_substrings_case_insensitively() {
        let all = skills(&["PostgreSQL", "SQL", "Go", "NoSQL Modeling"]);
        let selection = SkillSelection::new();
        assert_eq!(
            suggest("sql", &selection, &all),
            vec!["PostgreSQL", "SQL", "NoSQL Modeling"]
        );
        assert_eq!(suggest("GO", &selection, &all), vec!["Go"]);
    }

    #[test]
    fn excludes_selected_skills() {
        let all = skills(&["PostgreSQL", "SQL", "Go"]);
        let selection: SkillSelection = ["SQL"].into_iter().collect();
        assert_eq!(suggest("sql", &selection, &all), vec!["PostgreSQL"]);
    }

    #[test]
    fn no_matches_yields_empty_list() {
        let all = skills(&["Go"]);
        assert!(suggest("haskell", &SkillSelection::new(), &all).is_empty());
    }

    proptest! {
        #[test]
        fn empty_query_never_suggests(
            all in proptest::collection::vec("[A-Za-z ]{1,8}", 0..10),
            picked in proptest::collection::vec("[A-Za-z]{1,4}", 0..4),
        ) {
            let selection: SkillSelection = picked.iter().collect();
            prop_assert!(suggest("", &selection, &all).is_empty());
        }
    }
}
