use std::collections::{BTreeMap, BTreeSet};

/// Allocates the shortest unique prefix of each property name as its alias.
///
/// Names are processed in sorted order, so earlier names claim shorter prefixes and the
/// result depends only on the set of names, never on the order they were supplied in.
pub struct NameMinimizer;

impl NameMinimizer {
  pub fn minimize<I, S>(names: I) -> BTreeMap<String, String>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>, {
    let sorted = names
      .into_iter()
      .map(|name| name.as_ref().to_string())
      .collect::<BTreeSet<_>>();

    let mut taken = BTreeSet::new();
    let mut aliases = BTreeMap::new();
    for name in sorted {
      let alias = Self::shortest_free_prefix(&name, &taken);
      taken.insert(alias.clone());
      aliases.insert(name, alias);
    }
    aliases
  }

  fn shortest_free_prefix(name: &str, taken: &BTreeSet<String>) -> String {
    let prefix_ends = name
      .char_indices()
      .skip(1)
      .map(|(index, _)| index)
      .chain(std::iter::once(name.len()));
    for end in prefix_ends {
      let prefix = &name[..end];
      if !taken.contains(prefix) {
        return prefix.to_string();
      }
    }
    // Only reachable for the empty name, or if an earlier alias equals the full name,
    // which would make that earlier name an extension of this one and sort it later.
    debug_assert!(!taken.contains(name), "alias `{name}` allocated twice");
    name.to_string()
  }
}
