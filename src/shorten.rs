//! Abbreviation of a code name to a fixed length.
//!
//! Characters are deleted (when the name is too long) or duplicated in place
//! (when it is too short) one at a time, at a position drawn uniformly from
//! the positions the policy allows. The policy spares uppercase letters, which
//! mark the start of each word, so the abbreviation stays recognizable:
//!
//! 1. a lowercase vowel is always eligible;
//! 2. when the name has no lowercase vowel left, any non-uppercase character is;
//! 3. when the name has no uppercase character, every character is.
//!
//! Eligibility is recomputed against the current string before every
//! mutation. If nothing qualifies (an all-uppercase name) every position is
//! used, so the loop always terminates.

use crate::error::{CodeNameError, CodeNameResult};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Positions of `chars` the policy allows to mutate, in ascending order.
pub fn eligible_positions(chars: &[char]) -> Vec<usize> {
    let has_vowel = chars.iter().copied().any(is_vowel);
    let has_uppercase = chars.iter().any(|c| c.is_uppercase());

    chars
        .iter()
        .enumerate()
        .filter(|&(_, &c)| {
            (is_vowel(c) && !c.is_uppercase())
                || (!has_vowel && !c.is_uppercase())
                || !has_uppercase
        })
        .map(|(index, _)| index)
        .collect()
}

/// Shorten or stretch `name` to exactly `target` characters.
///
/// Returns `name` unchanged when it already has `target` characters. An empty
/// name can only satisfy a target of zero; anything else is `EmptyInput`.
pub fn shorten<R: Rng + ?Sized>(name: &str, target: usize, rng: &mut R) -> CodeNameResult<String> {
    let mut chars: Vec<char> = name.chars().collect();
    if chars.is_empty() && target > 0 {
        return Err(CodeNameError::EmptyInput { target });
    }

    let original_len = chars.len();
    let mut mutations = 0usize;
    while chars.len() != target {
        let mut positions = eligible_positions(&chars);
        if positions.is_empty() {
            positions = (0..chars.len()).collect();
        }
        let index = *positions
            .choose(rng)
            .ok_or(CodeNameError::EmptyInput { target })?;

        if chars.len() > target {
            chars.remove(index);
        } else {
            let c = chars[index];
            chars.insert(index, c);
        }
        mutations += 1;
    }

    let short_name: String = chars.into_iter().collect();
    debug!(
        name,
        short_name = %short_name,
        original_len,
        target,
        mutations,
        "shortened code name"
    );
    Ok(short_name)
}
