#[cfg(test)]
mod tests {
  use crate::schema::NameMinimizer;
  use proptest::prelude::*;
  use rstest::*;
  use std::collections::BTreeSet;

  fn aliases_of(names: &[&str]) -> Vec<(String, String)> {
    NameMinimizer::minimize(names.iter().copied()).into_iter().collect()
  }

  fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
      .iter()
      .map(|(name, alias)| (name.to_string(), alias.to_string()))
      .collect()
  }

  #[test]
  fn test_earlier_names_claim_shorter_prefixes() {
    assert_eq!(
      aliases_of(&["sizeLimit", "score", "size"]),
      pairs(&[("score", "s"), ("size", "si"), ("sizeLimit", "siz")])
    );
  }

  #[rstest]
  #[case(&["a", "ab", "abc"], &[("a", "a"), ("ab", "ab"), ("abc", "abc")])]
  #[case(&["name", "number", "note"], &[("name", "n"), ("note", "no"), ("number", "nu")])]
  #[case(&["alpha", "beta"], &[("alpha", "a"), ("beta", "b")])]
  #[case(&["x"], &[("x", "x")])]
  #[case(&["é1", "é2"], &[("é1", "é"), ("é2", "é2")])]
  fn test_minimize_cases(#[case] names: &[&str], #[case] expected: &[(&str, &str)]) {
    assert_eq!(aliases_of(names), pairs(expected));
  }

  #[test]
  fn test_full_name_is_used_when_every_shorter_prefix_is_taken() {
    let aliases = NameMinimizer::minimize(["s", "si", "siz", "size"]);
    assert_eq!(aliases["size"], "size");
  }

  #[test]
  fn test_empty_input() {
    assert!(NameMinimizer::minimize(Vec::<String>::new()).is_empty());
  }

  #[test]
  fn test_duplicates_collapse() {
    assert_eq!(aliases_of(&["id", "id"]), pairs(&[("id", "i")]));
  }

  proptest! {
    #[test]
    fn minimized_aliases_are_unique_prefixes(names in prop::collection::btree_set("[a-c]{1,6}", 0..24)) {
      let aliases = NameMinimizer::minimize(&names);
      prop_assert_eq!(aliases.len(), names.len());
      let distinct = aliases.values().collect::<BTreeSet<_>>();
      prop_assert_eq!(distinct.len(), aliases.len());
      for (name, alias) in &aliases {
        prop_assert!(name.starts_with(alias.as_str()));
        prop_assert!(!alias.is_empty());
      }
    }

    #[test]
    fn minimized_aliases_ignore_input_order(names in prop::collection::vec("[a-d]{1,5}", 0..16)) {
      let mut reversed = names.clone();
      reversed.reverse();
      prop_assert_eq!(NameMinimizer::minimize(&names), NameMinimizer::minimize(&reversed));
    }
  }
}
