//! Property tests for lucky-date search.

use chrono::{Days, NaiveDate};
use numen_search::{LuckyConfig, MAX_LUCKY_SCORE, search_lucky_dates};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn day(offset: u64) -> NaiveDate {
    base().checked_add_days(Days::new(offset)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // The start stays fixed: moving it into another year changes the
    // Personal Year for the whole range.
    #[test]
    fn prop_widening_range_keeps_dates(
        start in 0u64..400,
        len in 0u64..60,
        extra in 0u64..60,
        min_score in 0u32..80,
    ) {
        let birth = NaiveDate::from_ymd_opt(1985, 12, 25).unwrap();
        let cfg = LuckyConfig::with_min_score(min_score);
        let narrow = search_lucky_dates(
            birth,
            "Ada Lovelace",
            day(start),
            day(start + len),
            &cfg,
        )
        .unwrap();
        let wide = search_lucky_dates(
            birth,
            "Ada Lovelace",
            day(start),
            day(start + len + extra),
            &cfg,
        )
        .unwrap();
        for c in &narrow.dates {
            prop_assert!(wide.dates.iter().any(|w| w.date == c.date && w.score == c.score));
        }
    }

    #[test]
    fn prop_ranking_is_descending_and_stable(start in 0u64..400, len in 0u64..90) {
        let birth = NaiveDate::from_ymd_opt(1971, 7, 4).unwrap();
        let r = search_lucky_dates(
            birth,
            "Grace Hopper",
            day(start),
            day(start + len),
            &LuckyConfig::with_min_score(0),
        )
        .unwrap();
        prop_assert_eq!(r.dates.len() as u64, len + 1);
        for pair in r.dates.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].date < pair[1].date);
            }
        }
        for c in &r.dates {
            prop_assert!(c.score <= MAX_LUCKY_SCORE);
            prop_assert_eq!(c.score, c.reasons.iter().map(|t| t.points()).sum::<u32>());
        }
    }
}
