use crate::{EnglishParser, ParseOptions, TemporalParser, detect_reminder_intent, parse_smart_reminder};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use proptest::prelude::*;
use proptest_arbitrary_interop::arb;
use regex::Regex;

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2} (AM|PM)$").unwrap());

/// Reference instants in a range where ISO dates keep four-digit years.
fn reference() -> impl Strategy<Value = NaiveDateTime> {
    (2000i32..2100, 1u32..=12, 1u32..=28, arb::<NaiveTime>()).prop_map(|(y, m, d, t)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(t.hour(), t.minute(), t.second())
            .unwrap()
    })
}

/// Free text mixing temporal words, cue words, numbers and punctuation.
fn reminder_text() -> impl Strategy<Value = String> {
    let vocabulary = prop::sample::select(vec![
        "tomorrow", "today", "tonight", "at", "on", "in", "the", "next", "friday", "morning",
        "evening", "august", "remind me to", "call", "mom", "days", "noon",
    ])
    .prop_map(str::to_string);
    let word = prop_oneof![
        vocabulary,
        (0u32..40).prop_map(|n| n.to_string()),
        (0u32..30).prop_map(|n| format!("{n}pm")),
        (0u32..30, 0u32..70).prop_map(|(h, m)| format!("{h}:{m:02}")),
        (1u32..40).prop_map(|n| format!("{n}th")),
        "[a-zA-Z]{1,8}",
        "[ ,.!?']{1,3}",
    ];
    prop::collection::vec(word, 0..8).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn drafts_are_always_well_formed(text in reminder_text(), now in reference()) {
        let draft = parse_smart_reminder(&text, now);
        prop_assert!(DATE_RE.is_match(&draft.date_iso()), "date {}", draft.date_iso());
        prop_assert!(TIME_RE.is_match(&draft.time_label()), "time {}", draft.time_label());
        prop_assert_eq!(draft.text.trim(), draft.text.as_str());
        if !text.trim().is_empty() {
            prop_assert!(!draft.text.is_empty(), "empty text for {:?}", text);
        }
    }

    #[test]
    fn arbitrary_strings_never_panic(text in any::<String>(), now in reference()) {
        let draft = parse_smart_reminder(&text, now);
        prop_assert!(TIME_RE.is_match(&draft.time_label()));
        let _ = detect_reminder_intent(&text, now);
    }

    #[test]
    fn detected_reminders_match_direct_extraction(text in reminder_text(), now in reference()) {
        let detected = detect_reminder_intent(&text, now);
        prop_assert_eq!(detected.is_reminder, detected.draft.is_some());
        if let Some(draft) = detected.draft {
            prop_assert_eq!(draft, parse_smart_reminder(&text, now));
        }
    }
}

#[test]
fn cleaned_text_has_no_temporal_language_left() {
    let now = NaiveDate::from_ymd_opt(2025, 8, 15)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    for text in [
        "call mom tomorrow at 5pm",
        "dentist appointment tomorrow at 2pm",
        "meeting on Monday morning",
        "chemistry test on the 20th of August",
        "conference call in 3 days at 10:30am",
        "yoga class next Tuesday at 6am",
        "remind me to pay rent on Aug 1st",
    ] {
        let draft = parse_smart_reminder(text, now);
        let again = EnglishParser.parse(&draft.text, now, ParseOptions::default());
        assert!(again.is_empty(), "{text:?} left {again:?}");

        let redraft = parse_smart_reminder(&draft.text, now);
        assert_eq!(redraft.date, now.date());
        assert_eq!(redraft.time_label(), "9:00 AM");
        assert_eq!(redraft.text, draft.text);
    }
}
