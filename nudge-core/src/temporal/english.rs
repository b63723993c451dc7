//! English date/time grammar.
//!
//! The parser works in two passes. First every pattern below is run over the
//! lowercased input, producing *components* (a date, a clock time, a day part, or
//! a combination). Then overlapping components are dropped, keeping the earliest and
//! longest, and neighbours separated only by spaces, commas, `on` or `at` are merged,
//! so `"tomorrow at 5pm"` becomes a single match.
//!
//! A clock hour without AM/PM (`at 7`, `7:30`, `7 o'clock`) is read as afternoon
//! when its match also names afternoon, evening or night: `"at 7 tonight"` is 19:00.
//!
//! Understood expressions:
//! - Relative days: `today`, `tonight`, `tomorrow`, `yesterday` (and configured synonyms)
//! - Weekdays: `friday`, `this friday`, `next friday`, `last friday`
//! - Periods: `next week`, `this month`, `last year`
//! - Offsets: `in 3 days`, `in a month`, `in two hours`
//! - Calendar dates: `20th of august`, `aug 20, 2026`, `2026-08-20`, `8/20`, `the 20th`
//! - Clock times: `5pm`, `5:30 p.m.`, `17:30`, `at 5`, `5 o'clock`, `noon`, `midnight`
//! - Day parts: `morning`, `in the afternoon`, `this evening`, `night`

use chrono::{
    Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::sync::{PoisonError, RwLock};

use super::{DayPart, ParseOptions, ParsedTemporal, TemporalParser};
use crate::keywords::{Keyword, Keywords};

const MONTHS: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";

static WEEKDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:on\s+)?(?:(this|next|last|coming)\s+)?(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
    )
    .expect("valid weekday regex")
});

static PERIOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(this|next|last)\s+(week|month|year)\b").expect("valid period regex")
});

static OFFSET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bin\s+(\d{1,3}|an?|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve)\s+(minute|min|hour|hr|day|week|month|year)s?\b",
    )
    .expect("valid offset regex")
});

static DAY_MONTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:on\s+)?(?:the\s+)?(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?({MONTHS})\b(?:,?\s+(\d{{4}})\b)?"
    ))
    .expect("valid day-month regex")
});

static MONTH_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:on\s+)?({MONTHS})\.?\s+(?:the\s+)?(\d{{1,2}})(?:st|nd|rd|th)?\b(?:,?\s+(\d{{4}})\b)?"
    ))
    .expect("valid month-day regex")
});

static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:on\s+)?(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("valid iso date regex")
});

static SLASH_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:on\s+)?(\d{1,2})/(\d{1,2})(?:/(\d{4}|\d{2}))?\b")
        .expect("valid slash date regex")
});

static ORDINAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:on\s+)?the\s+(\d{1,2})(?:st|nd|rd|th)\b").expect("valid ordinal regex")
});

static TIME_12H_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:at\s+)?(\d{1,2})(?::(\d{2}))?\s*(a\.m\.|p\.m\.|am\b|pm\b)")
        .expect("valid 12h time regex")
});

static TIME_24H_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:at\s+)?(\d{1,2}):(\d{2})\b").expect("valid 24h time regex")
});

static AT_HOUR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bat\s+(\d{1,2})\b").expect("valid hour regex"));

static OCLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:at\s+)?(\d{1,2})\s*o'?clock\b").expect("valid o'clock regex")
});

static NAMED_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:at\s+)?(noon|midday|midnight)\b").expect("valid named time regex")
});

static DAY_PART_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:(in\s+the|this)\s+)?(morning|afternoon|evening|night)\b")
        .expect("valid day part regex")
});

static GAP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s,]*(?:(?:on|at)\s+)?$").expect("valid gap regex"));

/// The bundled English grammar.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishParser;

/// What a component contributes to a match.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Slots {
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    day_part: Option<DayPart>,
    /// `time` came from a 1-11 hour with no AM/PM, e.g. `at 7`.
    bare_hour: bool,
}

#[derive(Debug, Clone, Copy)]
struct Component {
    start: usize,
    end: usize,
    slots: Slots,
}

impl Component {
    /// Folds `other` into `self` if they fill different slots.
    fn absorb(&mut self, other: &Component) -> bool {
        let a = self.slots;
        let b = other.slots;
        if (a.date.is_some() && b.date.is_some())
            || (a.time.is_some() && b.time.is_some())
            || (a.day_part.is_some() && b.day_part.is_some())
        {
            return false;
        }
        self.slots = Slots {
            date: a.date.or(b.date),
            time: a.time.or(b.time),
            day_part: a.day_part.or(b.day_part),
            bare_hour: if a.time.is_some() {
                a.bare_hour
            } else {
                b.bare_hour
            },
        };
        self.end = other.end;
        true
    }
}

impl TemporalParser for EnglishParser {
    fn parse(
        &self,
        text: &str,
        reference: NaiveDateTime,
        options: ParseOptions,
    ) -> Vec<ParsedTemporal> {
        // ASCII lowercasing keeps byte offsets valid for the original text.
        let lower = text.to_ascii_lowercase();
        let components = select(find_components(&lower, reference, options.forward_date));

        let mut groups: Vec<Component> = Vec::new();
        for component in components {
            let merged = groups.last_mut().is_some_and(|group| {
                GAP_RE.is_match(&lower[group.end..component.start]) && group.absorb(&component)
            });
            if !merged {
                groups.push(component);
            }
        }

        groups
            .into_iter()
            .filter_map(|group| finish(text, group, reference, options.forward_date))
            .collect()
    }
}

/// Turns a merged group into a public match, filling in the date when only a time
/// or day part was given.
fn finish(
    text: &str,
    group: Component,
    reference: NaiveDateTime,
    forward: bool,
) -> Option<ParsedTemporal> {
    let Slots {
        date,
        time,
        day_part,
        bare_hour,
    } = group.slots;
    let time = match (time, day_part) {
        (Some(t), Some(DayPart::Afternoon | DayPart::Evening | DayPart::Night)) if bare_hour => {
            Some(t.overflowing_add_signed(Duration::hours(12)).0)
        }
        _ => time,
    };
    let date = match (date, time) {
        (Some(date), _) => date,
        (None, Some(time)) if forward && time < reference.time() => {
            reference.date().succ_opt()?
        }
        (None, _) => reference.date(),
    };
    let parsed = ParsedTemporal {
        start: group.start,
        end: group.end,
        matched_text: text.get(group.start..group.end)?.to_string(),
        date,
        hour: time.map(|t| t.hour()),
        minute: time.map(|t| t.minute()),
        day_part,
    };
    log::trace!("temporal match {parsed:?}");
    Some(parsed)
}

/// Orders components by position and drops the ones overlapping an earlier,
/// or equally early but longer, component.
fn select(mut components: Vec<Component>) -> Vec<Component> {
    components.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
    let mut kept: Vec<Component> = Vec::with_capacity(components.len());
    for component in components {
        if kept.last().is_none_or(|last| component.start >= last.end) {
            kept.push(component);
        }
    }
    kept
}

fn find_components(lower: &str, reference: NaiveDateTime, forward: bool) -> Vec<Component> {
    let today = reference.date();
    let mut out = Vec::new();

    let relative_day_re = relative_day_regex();
    scan(&relative_day_re, lower, &mut out, |caps| {
        let word = caps.get(1)?.as_str();
        match Keywords::lookup(word)? {
            Keyword::Today => date_slots(today),
            Keyword::Tomorrow => date_slots(today.succ_opt()?),
            Keyword::Yesterday => date_slots(today.pred_opt()?),
            Keyword::Tonight => Some(Slots {
                date: Some(today),
                day_part: Some(DayPart::Night),
                ..Slots::default()
            }),
            _ => None,
        }
    });

    scan(&WEEKDAY_RE, lower, &mut out, |caps| {
        let weekday = caps.get(2)?.as_str().parse::<Weekday>().ok()?;
        let modifier = caps.get(1).map(|m| m.as_str());
        date_slots(resolve_weekday(today, weekday, modifier, forward)?)
    });

    scan(&PERIOD_RE, lower, &mut out, |caps| {
        let modifier = caps.get(1)?.as_str();
        let unit = caps.get(2)?.as_str();
        let date = match (modifier, unit) {
            ("this", _) => today,
            ("next", "week") => today.checked_add_days(Days::new(7))?,
            ("last", "week") => today.checked_sub_days(Days::new(7))?,
            ("next", "month") => today.checked_add_months(Months::new(1))?,
            ("last", "month") => today.checked_sub_months(Months::new(1))?,
            ("next", _) => today.checked_add_months(Months::new(12))?,
            _ => today.checked_sub_months(Months::new(12))?,
        };
        date_slots(date)
    });

    scan(&OFFSET_RE, lower, &mut out, |caps| {
        let amount = amount(caps.get(1)?.as_str())?;
        match caps.get(2)?.as_str() {
            "minute" | "min" => instant_slots(reference, Duration::minutes(amount.into())),
            "hour" | "hr" => instant_slots(reference, Duration::hours(amount.into())),
            "day" => date_slots(today.checked_add_days(Days::new(amount.into()))?),
            "week" => date_slots(today.checked_add_days(Days::new(u64::from(amount) * 7))?),
            "month" => date_slots(today.checked_add_months(Months::new(amount))?),
            _ => date_slots(today.checked_add_months(Months::new(amount.checked_mul(12)?))?),
        }
    });

    scan(&DAY_MONTH_RE, lower, &mut out, |caps| {
        let day = number(caps, 1)?;
        let month = month_number(caps.get(2)?.as_str())?;
        let year = caps.get(3).and_then(|m| m.as_str().parse().ok());
        date_slots(resolve_month_day(today, month, day, year, forward)?)
    });

    scan(&MONTH_DAY_RE, lower, &mut out, |caps| {
        let month = month_number(caps.get(1)?.as_str())?;
        let day = number(caps, 2)?;
        let year = caps.get(3).and_then(|m| m.as_str().parse().ok());
        date_slots(resolve_month_day(today, month, day, year, forward)?)
    });

    scan(&ISO_DATE_RE, lower, &mut out, |caps| {
        let year = caps.get(1)?.as_str().parse().ok()?;
        date_slots(NaiveDate::from_ymd_opt(
            year,
            number(caps, 2)?,
            number(caps, 3)?,
        )?)
    });

    scan(&SLASH_DATE_RE, lower, &mut out, |caps| {
        let month = number(caps, 1)?;
        let day = number(caps, 2)?;
        let year = match caps.get(3) {
            Some(m) if m.as_str().len() == 2 => Some(2000 + m.as_str().parse::<i32>().ok()?),
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };
        date_slots(resolve_month_day(today, month, day, year, forward)?)
    });

    scan(&ORDINAL_RE, lower, &mut out, |caps| {
        let day = number(caps, 1)?;
        let this_month = today.with_day(day);
        let date = match this_month {
            Some(date) if !forward || date >= today => date,
            _ => today
                .with_day(1)?
                .checked_add_months(Months::new(1))?
                .with_day(day)?,
        };
        date_slots(date)
    });

    scan(&TIME_12H_RE, lower, &mut out, |caps| {
        let hour = number(caps, 1)?;
        let minute = caps.get(2).map_or(Some(0), |m| m.as_str().parse().ok())?;
        let pm = caps.get(3)?.as_str().starts_with('p');
        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (1..=11, true) => hour + 12,
            (0..=11, false) => hour,
            // "14pm" reads as 14:00
            (13..=23, true) => hour,
            _ => return None,
        };
        time_slots(hour, minute)
    });

    scan(&TIME_24H_RE, lower, &mut out, |caps| {
        let hour = caps.get(1)?.as_str();
        let minute = number(caps, 2)?;
        // "07:30" is explicit, "7:30" may still be evening
        if hour.starts_with('0') {
            time_slots(hour.parse().ok()?, minute)
        } else {
            bare_time_slots(hour.parse().ok()?, minute)
        }
    });

    scan(&AT_HOUR_RE, lower, &mut out, |caps| bare_time_slots(number(caps, 1)?, 0));

    scan(&OCLOCK_RE, lower, &mut out, |caps| bare_time_slots(number(caps, 1)?, 0));

    scan(&NAMED_TIME_RE, lower, &mut out, |caps| {
        match caps.get(1)?.as_str() {
            "midnight" => time_slots(0, 0),
            _ => time_slots(12, 0),
        }
    });

    scan(&DAY_PART_RE, lower, &mut out, |caps| {
        let day_part = DayPart::from_word(caps.get(2)?.as_str())?;
        Some(Slots {
            // "this morning" pins the day, a bare "morning" leaves it open
            date: caps.get(1).filter(|m| m.as_str() == "this").map(|_| today),
            day_part: Some(day_part),
            ..Slots::default()
        })
    });

    out
}

fn scan(
    re: &Regex,
    lower: &str,
    out: &mut Vec<Component>,
    mut resolve: impl FnMut(&Captures) -> Option<Slots>,
) {
    for caps in re.captures_iter(lower) {
        let Some(whole) = caps.get(0) else { continue };
        if let Some(slots) = resolve(&caps) {
            out.push(Component {
                start: whole.start(),
                end: whole.end(),
                slots,
            });
        }
    }
}

/// Compiled relative-day regex, tagged with the keyword generation it was built from.
static RELATIVE_DAY_RE: Lazy<RwLock<(u64, Regex)>> = Lazy::new(|| {
    let generation = Keywords::generation();
    RwLock::new((generation, build_relative_day_regex()))
});

/// Matches the relative day words, including any configured synonyms.
///
/// The regex is rebuilt only after new synonyms were registered.
fn relative_day_regex() -> Regex {
    let generation = Keywords::generation();
    {
        let cached = RELATIVE_DAY_RE
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if cached.0 == generation {
            return cached.1.clone();
        }
    }
    let re = build_relative_day_regex();
    let mut cached = RELATIVE_DAY_RE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *cached = (generation, re.clone());
    re
}

fn build_relative_day_regex() -> Regex {
    let mut words: Vec<String> = [
        Keyword::Today,
        Keyword::Tonight,
        Keyword::Tomorrow,
        Keyword::Yesterday,
    ]
    .into_iter()
    .flat_map(Keywords::aliases)
    .map(|word| regex::escape(&word))
    .collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()));
    let pattern = format!(r"\b({})\b", words.join("|"));
    Regex::new(&pattern).unwrap_or_else(|e| {
        log::warn!("relative day synonyms ignored: {e}");
        Regex::new(r"\b(today|tonight|tomorrow|yesterday)\b").expect("valid fallback regex")
    })
}

fn resolve_weekday(
    today: NaiveDate,
    target: Weekday,
    modifier: Option<&str>,
    forward: bool,
) -> Option<NaiveDate> {
    let today_idx = i64::from(today.weekday().num_days_from_monday());
    let target_idx = i64::from(target.num_days_from_monday());
    let ahead = (target_idx - today_idx).rem_euclid(7);
    let offset = match modifier {
        Some("this") => ahead,
        // same weekday of the following Monday-based week
        Some("next") => 7 - today_idx + target_idx,
        Some("last") => {
            let back = (today_idx - target_idx).rem_euclid(7);
            -(if back == 0 { 7 } else { back })
        }
        _ if forward => {
            if ahead == 0 {
                7
            } else {
                ahead
            }
        }
        _ if ahead <= 3 => ahead,
        _ => ahead - 7,
    };
    shift_days(today, offset)
}

fn resolve_month_day(
    today: NaiveDate,
    month: u32,
    day: u32,
    year: Option<i32>,
    forward: bool,
) -> Option<NaiveDate> {
    if let Some(year) = year {
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    let this_year = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if forward && this_year < today {
        NaiveDate::from_ymd_opt(today.year() + 1, month, day)
    } else {
        Some(this_year)
    }
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn amount(word: &str) -> Option<u32> {
    let n = match word {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        digits => return digits.parse().ok(),
    };
    Some(n)
}

fn number(caps: &Captures, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn date_slots(date: NaiveDate) -> Option<Slots> {
    Some(Slots {
        date: Some(date),
        ..Slots::default()
    })
}

fn time_slots(hour: u32, minute: u32) -> Option<Slots> {
    Some(Slots {
        time: Some(NaiveTime::from_hms_opt(hour, minute, 0)?),
        ..Slots::default()
    })
}

/// A clock time without AM/PM. Hours 1-11 move to the afternoon when the match
/// also names afternoon, evening or night.
fn bare_time_slots(hour: u32, minute: u32) -> Option<Slots> {
    Some(Slots {
        bare_hour: (1..=11).contains(&hour),
        ..time_slots(hour, minute)?
    })
}

fn instant_slots(reference: NaiveDateTime, offset: Duration) -> Option<Slots> {
    let at = reference.checked_add_signed(offset)?;
    Some(Slots {
        date: Some(at.date()),
        time: Some(NaiveTime::from_hms_opt(at.hour(), at.minute(), 0)?),
        ..Slots::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Friday, 15 Aug 2025, 10:00.
    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn first(text: &str) -> ParsedTemporal {
        parse(text).into_iter().next().expect("a match")
    }

    fn parse(text: &str) -> Vec<ParsedTemporal> {
        EnglishParser.parse(text, anchor(), ParseOptions::default())
    }

    #[test]
    fn relative_day_with_time_is_one_match() {
        let p = first("call mom tomorrow at 5pm");
        assert_eq!(p.matched_text, "tomorrow at 5pm");
        assert_eq!(p.date, ymd(2025, 8, 16));
        assert_eq!((p.hour, p.minute), (Some(17), Some(0)));
        assert_eq!(&"call mom tomorrow at 5pm"[p.start..p.end], p.matched_text);
    }

    #[test]
    fn matched_text_keeps_original_casing() {
        let p = first("meeting on Monday Morning");
        assert_eq!(p.matched_text, "on Monday Morning");
        assert_eq!(p.date, ymd(2025, 8, 18));
        assert_eq!(p.hour, None);
        assert_eq!(p.day_part, Some(DayPart::Morning));
    }

    #[test]
    fn weekdays_resolve_forward() {
        // the anchor is a Friday
        assert_eq!(first("friday").date, ymd(2025, 8, 22));
        assert_eq!(first("this friday").date, ymd(2025, 8, 15));
        assert_eq!(first("next friday").date, ymd(2025, 8, 22));
        assert_eq!(first("last friday").date, ymd(2025, 8, 8));
        assert_eq!(first("monday").date, ymd(2025, 8, 18));
        assert_eq!(first("next monday").date, ymd(2025, 8, 18));
        assert_eq!(first("thursday").date, ymd(2025, 8, 21));
    }

    #[test]
    fn next_weekday_from_midweek_skips_to_following_week() {
        // Monday, 11 Aug 2025
        let monday = ymd(2025, 8, 11).and_hms_opt(9, 0, 0).unwrap();
        let p = EnglishParser.parse("next friday", monday, ParseOptions::default());
        assert_eq!(p[0].date, ymd(2025, 8, 22));
        let p = EnglishParser.parse("friday", monday, ParseOptions::default());
        assert_eq!(p[0].date, ymd(2025, 8, 15));
    }

    #[test]
    fn weekdays_without_forward_bias_pick_closest() {
        let opts = ParseOptions {
            forward_date: false,
        };
        let p = EnglishParser.parse("friday", anchor(), opts);
        assert_eq!(p[0].date, ymd(2025, 8, 15));
        let p = EnglishParser.parse("wednesday", anchor(), opts);
        assert_eq!(p[0].date, ymd(2025, 8, 13));
    }

    #[test]
    fn offsets() {
        assert_eq!(first("in 3 days").date, ymd(2025, 8, 18));
        assert_eq!(first("in a month").date, ymd(2025, 9, 15));
        assert_eq!(first("in two weeks").date, ymd(2025, 8, 29));
        assert_eq!(first("in 1 year").date, ymd(2026, 8, 15));

        let p = first("in 2 hours");
        assert_eq!(p.date, ymd(2025, 8, 15));
        assert_eq!((p.hour, p.minute), (Some(12), Some(0)));

        let p = first("in 90 minutes");
        assert_eq!((p.hour, p.minute), (Some(11), Some(30)));
    }

    #[test]
    fn offset_merges_with_time() {
        let p = first("conference call in 3 days at 10:30am");
        assert_eq!(p.matched_text, "in 3 days at 10:30am");
        assert_eq!(p.date, ymd(2025, 8, 18));
        assert_eq!((p.hour, p.minute), (Some(10), Some(30)));
    }

    #[test]
    fn periods() {
        assert_eq!(first("next week").date, ymd(2025, 8, 22));
        assert_eq!(first("next month").date, ymd(2025, 9, 15));
        assert_eq!(first("this year").date, ymd(2025, 8, 15));
        assert_eq!(first("last month").date, ymd(2025, 7, 15));
    }

    #[test]
    fn calendar_dates() {
        let p = first("chemistry test on the 20th of August");
        assert_eq!(p.matched_text, "on the 20th of August");
        assert_eq!(p.date, ymd(2025, 8, 20));

        assert_eq!(first("Aug 20th").date, ymd(2025, 8, 20));
        assert_eq!(first("September 3, 2027").date, ymd(2027, 9, 3));
        assert_eq!(first("2025-12-25").date, ymd(2025, 12, 25));
        assert_eq!(first("12/25").date, ymd(2025, 12, 25));
        assert_eq!(first("1/2/26").date, ymd(2026, 1, 2));
        assert_eq!(first("on the 20th").date, ymd(2025, 8, 20));
    }

    #[test]
    fn past_calendar_dates_move_forward() {
        assert_eq!(first("August 1").date, ymd(2026, 8, 1));
        assert_eq!(first("the 3rd").date, ymd(2025, 9, 3));
    }

    #[test]
    fn invalid_calendar_dates_are_skipped() {
        assert!(parse("Feb 30").is_empty());
        assert!(parse("13/45").is_empty());
        assert!(parse("2025-02-31").is_empty());
    }

    #[test]
    fn clock_times() {
        let t = |s: &str| {
            let p = first(s);
            (p.hour.unwrap(), p.minute.unwrap())
        };
        assert_eq!(t("at 5:30pm"), (17, 30));
        assert_eq!(t("5 p.m."), (17, 0));
        assert_eq!(t("17:45"), (17, 45));
        assert_eq!(t("at 11"), (11, 0));
        assert_eq!(t("at 11 o'clock"), (11, 0));
        assert_eq!(t("noon"), (12, 0));
        assert_eq!(t("12am"), (0, 0));
        assert_eq!(t("12pm"), (12, 0));
        assert_eq!(t("14pm"), (14, 0));
    }

    #[test]
    fn passed_times_roll_to_tomorrow() {
        assert_eq!(first("at 9am").date, ymd(2025, 8, 16));
        assert_eq!(first("midnight").date, ymd(2025, 8, 16));
        assert_eq!(first("at 11am").date, ymd(2025, 8, 15));
    }

    #[test]
    fn time_before_date_merges() {
        let p = first("pay rent 5pm on Monday");
        assert_eq!(p.matched_text, "5pm on Monday");
        assert_eq!(p.date, ymd(2025, 8, 18));
        assert_eq!(p.hour, Some(17));
    }

    #[test]
    fn tonight_and_day_parts() {
        let p = first("party tonight");
        assert_eq!(p.date, ymd(2025, 8, 15));
        assert_eq!(p.day_part, Some(DayPart::Night));
        assert_eq!(p.hour, None);

        let p = first("gym in the evening");
        assert_eq!(p.matched_text, "in the evening");
        assert_eq!(p.day_part, Some(DayPart::Evening));
    }

    #[test]
    fn bare_hours_move_to_the_evening_with_a_late_day_part() {
        let p = first("dinner at 7 tonight");
        assert_eq!(p.matched_text, "at 7 tonight");
        assert_eq!(p.date, ymd(2025, 8, 15));
        assert_eq!((p.hour, p.minute), (Some(19), Some(0)));

        let p = first("call dad at 8 in the evening");
        assert_eq!(p.matched_text, "at 8 in the evening");
        assert_eq!(p.date, ymd(2025, 8, 15));
        assert_eq!(p.hour, Some(20));

        let p = first("pick up kids at 3 this afternoon");
        assert_eq!(p.date, ymd(2025, 8, 15));
        assert_eq!(p.hour, Some(15));

        assert_eq!(first("tomorrow evening at 6:30").hour, Some(18));
        assert_eq!(first("5 o'clock tomorrow afternoon").hour, Some(17));
    }

    #[test]
    fn explicit_times_keep_their_hour_next_to_a_day_part() {
        assert_eq!(first("at 9 pm tonight").hour, Some(21));
        assert_eq!(first("at 9am tomorrow evening").hour, Some(9));
        assert_eq!(first("at 07:30 tonight").hour, Some(7));
        assert_eq!(first("at 19:30 tonight").hour, Some(19));
        assert_eq!(first("at 12 tonight").hour, Some(12));
        assert_eq!(first("at 7 tomorrow morning").hour, Some(7));
        // no day part, no shift
        assert_eq!(first("at 7 tomorrow").hour, Some(7));
    }

    #[test]
    fn relative_day_regex_is_cached_until_synonyms_change() {
        let a = relative_day_regex();
        let b = relative_day_regex();
        assert_eq!(a.as_str(), b.as_str());

        Keywords::extend(&[("tmoz".into(), "tomorrow".into())]);
        assert!(relative_day_regex().is_match("gym tmoz"));
        assert_eq!(first("gym tmoz").date, ymd(2025, 8, 16));
    }

    #[test]
    fn separate_expressions_are_separate_matches() {
        let p = parse("lunch tomorrow and dinner on friday");
        assert_eq!(p.len(), 2);
        assert_eq!(p[0].matched_text, "tomorrow");
        assert_eq!(p[1].matched_text, "on friday");
        assert!(p[0].start < p[1].start);
    }

    #[test]
    fn two_dates_do_not_merge() {
        let p = parse("tomorrow friday");
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn configured_synonyms_are_understood() {
        Keywords::extend(&[("tmrw".into(), "tomorrow".into())]);
        let p = first("dentist tmrw");
        assert_eq!(p.matched_text, "tmrw");
        assert_eq!(p.date, ymd(2025, 8, 16));
    }

    #[test]
    fn no_temporal_language() {
        assert!(parse("just a plain thought").is_empty());
        assert!(parse("").is_empty());
        assert!(parse("my 5th attempt at 250 things").is_empty());
    }

    #[test]
    fn non_ascii_text_keeps_valid_offsets() {
        let p = first("café with José tomorrow");
        assert_eq!(p.matched_text, "tomorrow");
    }
}
