use serde::Serialize;

/// Separators considered when the caller gives no priority list, highest priority first.
pub const DEFAULT_SEPARATORS: [char; 9] = [',', ';', '|', ' ', '\t', ':', '/', '\\', '\n'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeparatorCount {
    pub separator: char,
    pub count: usize,
}

fn effective_priority(priority: Option<&[char]>) -> &[char] {
    match priority {
        Some(list) if !list.is_empty() => list,
        _ => &DEFAULT_SEPARATORS,
    }
}

/// Marks whitespace that only pads a non-whitespace separator, as in `"a, b"`.
fn padding_mask(chars: &[char], priority: &[char]) -> Vec<bool> {
    let is_hard = |c: &char| !c.is_whitespace() && priority.contains(c);
    let mut mask = vec![false; chars.len()];
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_whitespace() {
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        let before = start > 0 && is_hard(&chars[start - 1]);
        let after = chars.get(i).is_some_and(is_hard);
        if before || after {
            mask[start..i].fill(true);
        }
    }

    mask
}

/// Count every priority separator that occurs in `input`.
///
/// Entries keep the order of the priority list. Separators that never occur
/// are left out, and a separator listed twice is only counted once.
/// Whitespace directly around a non-whitespace separator is padding and is
/// not counted, so `"a, b, c"` has two commas and no spaces.
pub fn separator_frequencies(input: &str, priority: Option<&[char]>) -> Vec<SeparatorCount> {
    let priority = effective_priority(priority);
    let chars: Vec<char> = input.chars().collect();
    let padding = padding_mask(&chars, priority);
    let mut frequencies: Vec<SeparatorCount> = Vec::new();

    for &separator in priority {
        if frequencies.iter().any(|f| f.separator == separator) {
            continue;
        }
        let count = chars
            .iter()
            .zip(&padding)
            .filter(|(c, padded)| **c == separator && !**padded)
            .count();
        if count > 0 {
            frequencies.push(SeparatorCount { separator, count });
        }
    }

    log::trace!("separator frequencies for {:?}: {:?}", input, frequencies);
    frequencies
}

/// Find the separator that occurs most often in `input`.
///
/// Counts are the padding-free ones from [`separator_frequencies`], so
/// `"a b, c"` picks `','`: the space after the comma is padding, which leaves
/// one space against one comma. Ties go to whichever separator comes first in
/// the priority list. A missing or empty `priority` falls back to
/// [`DEFAULT_SEPARATORS`].
pub fn most_frequent_separator(input: &str, priority: Option<&[char]>) -> Option<char> {
    let mut best: Option<SeparatorCount> = None;

    for candidate in separator_frequencies(input, priority) {
        // strictly greater: earlier entries win ties
        if best.map_or(true, |b| candidate.count > b.count) {
            best = Some(candidate);
        }
    }

    best.map(|b| b.separator)
}

/// Split `input` on its most frequent separator.
///
/// Whitespace padding next to a non-whitespace separator is stripped from the
/// fields (`"a, b"` gives `["a", "b"]`); whitespace at the very start or end
/// of `input` is kept. Without any separator the whole input is a single
/// field; empty input has no fields.
pub fn split_fields<'a>(input: &'a str, priority: Option<&[char]>) -> Vec<&'a str> {
    if input.is_empty() {
        return Vec::new();
    }

    match most_frequent_separator(input, priority) {
        Some(separator) if !separator.is_whitespace() => {
            let pieces: Vec<&str> = input.split(separator).collect();
            let last = pieces.len() - 1;
            pieces
                .into_iter()
                .enumerate()
                .map(|(i, field)| {
                    let field = if i > 0 { field.trim_start() } else { field };
                    if i < last {
                        field.trim_end()
                    } else {
                        field
                    }
                })
                .collect()
        }
        Some(separator) => input.split(separator).collect(),
        None => vec![input],
    }
}
