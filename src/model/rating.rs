use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single customer score attached to a restaurant.
///
/// `Rating::new` stores whatever it is given; range checks happen in
/// [`Restaurant::receive_rating`](crate::model::Restaurant::receive_rating).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub customer: String,
    pub score: f64,
}

impl Rating {
    pub fn new(customer: impl Into<String>, score: f64) -> Self {
        Self {
            customer: customer.into(),
            score,
        }
    }
}

/// Mean score of a restaurant, or the absence of one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageRating {
    NoRatings,
    /// Arithmetic mean, already rounded to one decimal place.
    Score(f64),
}

impl AverageRating {
    /// Averages `ratings`, rounding to one decimal.
    ///
    /// Rounds the exact binary value of the mean, exact ties going to the even
    /// digit (1.25 -> 1.2, 1.75 -> 1.8).
    pub fn of(ratings: &[Rating]) -> Self {
        if ratings.is_empty() {
            return AverageRating::NoRatings;
        }
        let total: f64 = ratings.iter().map(|r| r.score).sum();
        let mean = total / ratings.len() as f64;
        // fixed-precision formatting is correctly rounded, ties to even
        let rounded = format!("{:.1}", mean).parse().unwrap_or(mean);
        AverageRating::Score(rounded)
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            AverageRating::NoRatings => None,
            AverageRating::Score(score) => Some(*score),
        }
    }
}

impl Display for AverageRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // `pad` so width/alignment flags from listings still apply
            AverageRating::NoRatings => f.pad("-"),
            AverageRating::Score(score) => f.pad(&format!("{:.1}", score)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_placeholder() {
        let avg = AverageRating::of(&[]);
        assert_eq!(avg, AverageRating::NoRatings);
        assert_eq!(avg.score(), None);
        assert_eq!(avg.to_string(), "-");
    }

    #[test]
    fn test_mean_rounds_to_one_decimal() {
        let ratings = vec![Rating::new("a", 5.0), Rating::new("b", 4.0), Rating::new("c", 4.0)];
        // 13 / 3 = 4.333...
        assert_eq!(AverageRating::of(&ratings), AverageRating::Score(4.3));
    }

    #[test]
    fn test_ties_round_to_even_digit() {
        let scores = |s: &[f64]| s.iter().map(|&x| Rating::new("c", x)).collect::<Vec<_>>();

        // 5 / 4 = 1.25 and 13 / 4 = 3.25 round down
        assert_eq!(AverageRating::of(&scores(&[1.0, 1.0, 1.0, 2.0])).to_string(), "1.2");
        assert_eq!(AverageRating::of(&scores(&[3.0, 3.0, 3.0, 4.0])).to_string(), "3.2");
        // 14 / 8 = 1.75 rounds up
        assert_eq!(
            AverageRating::of(&scores(&[1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0])),
            AverageRating::Score(1.8)
        );
    }

    #[test]
    fn test_whole_mean_keeps_decimal_when_displayed() {
        let ratings = vec![Rating::new("a", 3.0), Rating::new("b", 4.0), Rating::new("c", 5.0)];
        let avg = AverageRating::of(&ratings);
        assert_eq!(avg.score(), Some(4.0));
        assert_eq!(avg.to_string(), "4.0");
        assert_eq!(format!("{:<6}|", avg), "4.0   |");
    }
}
