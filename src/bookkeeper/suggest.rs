//! "Did you mean" scoring for mistyped command names.
//!
//! This is a small rule-based heuristic, not an edit distance. Both strings
//! are reduced to their ASCII letters and then scored:
//!
//! | Rule                                                            | Points |
//! |-----------------------------------------------------------------|--------|
//! | one is a prefix of the other, or all but one character of the   | +5     |
//! | longer string is covered by shared characters                   |        |
//! | (nothing so far and the input is under a third of the guess)    | stop   |
//! | same multiset of characters (anagram)                           | +3     |
//! | one is a substring of the other                                 | +1     |
//!
//! The rules run in that order; the early stop means a very short input only
//! ever scores through the first rule.

use std::collections::HashMap;

const CLOSE_MATCH: u32 = 5;
const ANAGRAM: u32 = 3;
const SUBSTRING: u32 = 1;

fn sanitize(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

/// Characters of `guess` found in `input`, each input character used once.
fn shared_chars(input: &str, guess: &str) -> usize {
    let mut available: HashMap<char, usize> = HashMap::new();
    for c in input.chars() {
        *available.entry(c).or_default() += 1;
    }
    guess
        .chars()
        .filter(|c| match available.get_mut(c) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        })
        .count()
}

fn is_anagram(a: &str, b: &str) -> bool {
    let mut a: Vec<char> = a.chars().collect();
    let mut b: Vec<char> = b.chars().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

pub fn similarity_score(input: &str, guess: &str) -> u32 {
    let input = sanitize(input);
    let guess = sanitize(guess);
    if input.is_empty() {
        return 0;
    }

    let input_len = input.chars().count();
    let guess_len = guess.chars().count();
    let mut score = 0;

    let is_prefix = guess.starts_with(&input) || input.starts_with(&guess);
    if is_prefix || shared_chars(&input, &guess) + 1 >= input_len.max(guess_len) {
        score += CLOSE_MATCH;
    }

    if score == 0 && (input_len as f64) < guess_len as f64 / 3.0 {
        return 0;
    }

    if is_anagram(&input, &guess) {
        score += ANAGRAM;
    }

    if guess.contains(&input) || input.contains(&guess) {
        score += SUBSTRING;
    }

    score
}

/// Every candidate tied at the best positive score, in candidate order.
pub fn suggest<'a, I>(input: &str, candidates: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let scored: Vec<(&str, u32)> = candidates
        .into_iter()
        .map(|c| (c, similarity_score(input, c)))
        .filter(|(_, score)| *score > 0)
        .collect();

    let Some(best) = scored.iter().map(|(_, score)| *score).max() else {
        return Vec::new();
    };

    scored
        .into_iter()
        .filter(|(_, score)| *score == best)
        .map(|(c, _)| c)
        .collect()
}
