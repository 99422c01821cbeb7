//! Letter-grade and grade-point conversion
//!
//! Both conversions share one piecewise scale with inclusive lower bounds,
//! evaluated top-down. An average below the lowest cutoff maps to F / 0.0.

/// The conversion scale: (minimum average, grade points, letter).
///
/// Rows are ordered from the highest cutoff down; the first row whose
/// cutoff the average meets wins.
const GRADE_SCALE: [(f64, f64, &str); 11] = [
    (97.0, 4.0, "A+"),
    (93.0, 3.7, "A"),
    (90.0, 3.3, "A-"),
    (87.0, 3.0, "B+"),
    (83.0, 2.7, "B"),
    (80.0, 2.3, "B-"),
    (77.0, 2.0, "C+"),
    (73.0, 1.7, "C"),
    (70.0, 1.3, "C-"),
    (67.0, 1.0, "D+"),
    (65.0, 0.7, "D"),
];

/// Convert a course average to grade points on the 0.0-4.0 scale
#[must_use]
pub fn grade_points(average: f64) -> f64 {
    for (cutoff, points, _) in GRADE_SCALE {
        if average >= cutoff {
            return points;
        }
    }
    0.0
}

/// Convert a course average to its letter grade
#[must_use]
pub fn letter_grade(average: f64) -> &'static str {
    for (cutoff, _, letter) in GRADE_SCALE {
        if average >= cutoff {
            return letter;
        }
    }
    "F"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_points(average: f64, expected: f64) {
        let actual = grade_points(average);
        assert!(
            (actual - expected).abs() < f64::EPSILON,
            "grade_points({average}) = {actual}, expected {expected}"
        );
    }

    #[test]
    fn maps_each_cutoff_to_its_tier() {
        assert_points(97.0, 4.0);
        assert_points(93.0, 3.7);
        assert_points(90.0, 3.3);
        assert_points(87.0, 3.0);
        assert_points(83.0, 2.7);
        assert_points(80.0, 2.3);
        assert_points(77.0, 2.0);
        assert_points(73.0, 1.7);
        assert_points(70.0, 1.3);
        assert_points(67.0, 1.0);
        assert_points(65.0, 0.7);
        assert_points(64.0, 0.0);
    }

    #[test]
    fn cutoffs_are_inclusive_lower_bounds() {
        // Exactly 65 is a D; just below is an F
        assert_eq!(letter_grade(65.0), "D");
        assert_points(65.0, 0.7);
        assert_eq!(letter_grade(64.999), "F");
        assert_points(64.999, 0.0);
    }

    #[test]
    fn fractional_average_falls_to_the_tier_it_meets() {
        // 92.5 misses the 93 cutoff and lands on A-
        assert_eq!(letter_grade(92.5), "A-");
        assert_points(92.5, 3.3);
    }

    #[test]
    fn extremes() {
        assert_eq!(letter_grade(100.0), "A+");
        assert_points(100.0, 4.0);
        assert_eq!(letter_grade(0.0), "F");
        assert_points(0.0, 0.0);
    }

    #[test]
    fn letters_and_points_share_the_same_cutoffs() {
        for average in [100.0, 97.0, 95.0, 92.5, 88.0, 76.9, 65.0, 64.999, 0.0] {
            let letter = letter_grade(average);
            let points = grade_points(average);
            let expected = GRADE_SCALE
                .iter()
                .find(|(_, _, l)| *l == letter)
                .map_or(0.0, |(_, p, _)| *p);
            assert!(
                (points - expected).abs() < f64::EPSILON,
                "letter {letter} and points {points} disagree at {average}"
            );
        }
    }
}
