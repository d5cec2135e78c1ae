//! Scoring rules
//!
//! A find is worth two points per letter. Every rejected submission costs a
//! flat penalty. The score never drops below zero.

/// Points awarded per letter of a found word
pub const POINTS_PER_LETTER: u32 = 2;

/// Points deducted for a rejected submission
pub const PENALTY: u32 = 5;

/// Points a find of `word` is worth
#[inline]
#[must_use]
pub fn points_for(word: &str) -> u32 {
    word.len() as u32 * POINTS_PER_LETTER
}

/// Score after a rejection penalty, floored at zero
#[inline]
#[must_use]
pub const fn apply_penalty(score: u32) -> u32 {
    score.saturating_sub(PENALTY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_scale_with_length() {
        assert_eq!(points_for("CAT"), 6);
        assert_eq!(points_for("PLAYER"), 12);
        assert_eq!(points_for(""), 0);
    }

    #[test]
    fn penalty_floors_at_zero() {
        assert_eq!(apply_penalty(12), 7);
        assert_eq!(apply_penalty(5), 0);
        assert_eq!(apply_penalty(3), 0);
        assert_eq!(apply_penalty(0), 0);
    }
}
