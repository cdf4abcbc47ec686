use std::collections::HashSet;

/// Derives the undisambiguated identifier for a fixture.
///
/// `relative_path` uses `/` separators; `stem` is the fixture's file name
/// with the matched extension removed. Every separator and every character
/// outside `[A-Za-z0-9_]` becomes `_`. The result never starts with a digit
/// and is never empty.
pub fn base_identifier(relative_path: &str, stem: &str) -> String {
    let dir = match relative_path.rfind('/') {
        Some(idx) => &relative_path[..=idx],
        None => "",
    };

    let mut identifier: String = dir
        .chars()
        .chain(stem.chars())
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if identifier.is_empty() || identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }

    identifier
}

/// Makes a list of base identifiers unique.
///
/// `bases` must already be in path order. The first occurrence of a base keeps
/// it; each later occurrence gets `{base}_{n}` for the smallest `n >= 2` that
/// is neither some other fixture's base nor already handed out.
pub(crate) fn disambiguate(bases: Vec<String>) -> Vec<String> {
    let reserved: HashSet<String> = bases.iter().cloned().collect();
    let mut assigned: HashSet<String> = HashSet::with_capacity(bases.len());

    bases
        .into_iter()
        .map(|base| {
            if assigned.insert(base.clone()) {
                return base;
            }

            let mut n = 2usize;
            loop {
                let candidate = format!("{base}_{n}");
                if !reserved.contains(&candidate) && assigned.insert(candidate.clone()) {
                    tracing::trace!(base = %base, identifier = %candidate, "disambiguated fixture identifier");
                    return candidate;
                }
                n += 1;
            }
        })
        .collect()
}
