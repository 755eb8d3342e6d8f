use std::collections::HashSet;

use anyhow::Context;
use regex::RegexSet;

/// Shell-style name patterns hidden from a listing (`ls -I`).
///
/// Plain names are matched exactly; patterns containing `*` or `?` are
/// compiled into a single [`RegexSet`].
#[derive(Clone, Debug)]
pub struct IgnorePatterns {
    literals: HashSet<String>,
    globs: Option<RegexSet>,
}

impl IgnorePatterns {
    /// Build from one or more `|`-separated pattern strings.
    pub fn new<I, S>(patterns: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut literals = HashSet::new();
        let mut globs = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            for part in pattern.split('|').map(str::trim).filter(|p| !p.is_empty()) {
                if part.contains(['*', '?']) {
                    globs.push(glob_to_regex(part));
                } else {
                    literals.insert(part.to_owned());
                }
            }
        }

        let globs = if globs.is_empty() {
            None
        } else {
            Some(RegexSet::new(&globs).with_context(|| format!("invalid ignore pattern: {globs:?}"))?)
        };

        Ok(Self { literals, globs })
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.literals.contains(name)
            || self
                .globs
                .as_ref()
                .is_some_and(|globs| globs.is_match(name))
    }
}

fn glob_to_regex(glob: &str) -> String {
    let mut out = String::from("^");
    let mut literal = String::new();

    for c in glob.chars() {
        let wildcard = match c {
            '*' => ".*",
            '?' => ".",
            _ => {
                literal.push(c);
                continue;
            }
        };
        out.push_str(&regex::escape(&literal));
        literal.clear();
        out.push_str(wildcard);
    }

    out.push_str(&regex::escape(&literal));
    out.push('$');
    out
}
