//! Property-based tests for alea-mechanics.

use alea_mechanics::dice::roll::{HIGH_OPEN_BAND, LOW_OPEN_BAND};
use alea_mechanics::dice::{OpenDirection, OpenRoll};
use alea_mechanics::{
    Alea99Result, AleaCheck, AleaEngine, Difficulty, RangeText, ThresholdTable, classify,
};
use proptest::prelude::*;

fn standard() -> ThresholdTable {
    ThresholdTable::standard()
}

proptest! {
    #[test]
    fn classify_is_monotonic(threshold in 1i64..500, a in -200i64..400, b in -200i64..400) {
        let table = standard();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let lower = classify(low, threshold, &table).unwrap();
        let higher = classify(high, threshold, &table).unwrap();
        prop_assert!(lower.index <= higher.index);
    }

    #[test]
    fn boundary_classifies_to_its_level(threshold in 1i64..500, index in 0usize..7) {
        let table = standard();
        let boundaries = table.boundaries(threshold);
        let boundary = boundaries[index];
        let c = classify(boundary, threshold, &table).unwrap();
        // Equal neighbouring boundaries send the value to the first of them.
        let first_equal = boundaries.iter().position(|b| *b == boundary).unwrap();
        prop_assert_eq!(c.index, first_equal);
        prop_assert!(c.index <= index);
    }

    #[test]
    fn range_text_contains_classified_value(threshold in 20i64..500, value in -200i64..1200) {
        let c = classify(value, threshold, &standard()).unwrap();
        let inside = match c.range {
            RangeText::Any => true,
            RangeText::Below { high } => value <= high,
            RangeText::Between { low, high } => low <= value && value <= high,
            RangeText::Above { low } => value > low,
        };
        prop_assert!(inside, "{} not in {}", value, c.range);
    }

    #[test]
    fn open_roll_rerolls_exactly_when_critical(first in 1u32..=100, second in 1u32..=100) {
        let mut draws = 0;
        let roll = OpenRoll::from_draws(first, || {
            draws += 1;
            second
        });
        if LOW_OPEN_BAND.contains(&first) {
            prop_assert_eq!(draws, 1);
            prop_assert_eq!(roll.reroll.map(|r| r.direction), Some(OpenDirection::Down));
            prop_assert_eq!(roll.value(), i64::from(first) - i64::from(second));
        } else if HIGH_OPEN_BAND.contains(&first) {
            prop_assert_eq!(draws, 1);
            prop_assert_eq!(roll.reroll.map(|r| r.direction), Some(OpenDirection::Up));
            prop_assert_eq!(roll.value(), i64::from(first) + i64::from(second));
        } else {
            prop_assert_eq!(draws, 0);
            prop_assert_eq!(roll.value(), i64::from(first));
        }
    }

    #[test]
    fn alea99_digits(rolls in proptest::collection::vec(0u32..=9, 2..=5), threshold in 0i64..=99) {
        let r = Alea99Result::from_rolls(rolls.clone(), threshold, Difficulty::default()).unwrap();
        prop_assert!(r.two_lowest.0 <= r.two_lowest.1);
        prop_assert_eq!(r.result_value, 10 * r.two_lowest.0 + r.two_lowest.1);
        let mut sorted = rolls;
        sorted.sort_unstable();
        prop_assert_eq!(r.two_lowest, (sorted[0], sorted[1]));
    }

    #[test]
    fn final_roll_sums_its_parts(first in 1u32..=100, second in 1u32..=100, step in -3i64..=3) {
        let engine = AleaEngine::new(standard());
        let difficulty = Difficulty::from_modifier(step * 20).unwrap();
        let check = AleaCheck::against(75).with_difficulty(difficulty);
        let roll = OpenRoll::from_draws(first, || second);
        let result = engine.resolve(roll, &check).unwrap();
        let reroll = match result.open_direction {
            Some(OpenDirection::Down) => -i64::from(second),
            Some(OpenDirection::Up) => i64::from(second),
            None => 0,
        };
        prop_assert_eq!(result.final_roll, i64::from(first) + reroll + step * 20);
    }
}
