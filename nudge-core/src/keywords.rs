use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Keyword {
    Remind,
    Reminder,
    Meeting,
    Appointment,
    Call,
    Exam,
    Test,
    Due,
    Deadline,
    Schedule,
    At,
    On,
    In,
    Tomorrow,
    Today,
    Next,
    This,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    Morning,
    Afternoon,
    Evening,
    Night,
    Am,
    Pm,
    #[strum(serialize = "o'clock")]
    OClock,
    // Understood by the date parser but not reminder cues on their own.
    Tonight,
    Yesterday,
}

impl Keyword {
    /// Whether a whole-word occurrence of this keyword marks text as a possible reminder.
    pub fn is_cue(self) -> bool {
        !matches!(self, Keyword::Tonight | Keyword::Yesterday)
    }
}

/// Bumped whenever [`Keywords::extend`] registers a synonym.
static GENERATION: AtomicU64 = AtomicU64::new(0);

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+(?:'[a-z0-9]+)*").expect("valid word regex"));

pub struct Keywords;

impl Keywords {
    /// Returns the **global keyword registry** (input → canonical).
    ///
    /// The registry is:
    /// - **Initialized once** on first access (via [`once_cell::sync::Lazy`]).
    /// - **Thread-safe** (wrapped in [`RwLock`]): many readers or one writer.
    /// - **Lowercased**: all keys are stored lowercased for case-insensitive lookups.
    ///
    /// It is seeded with every canonical [`Keyword`] mapped to itself. Use
    /// [`extend`](Self::extend) to add synonyms and [`matches`](Self::matches) for checks.
    fn registry() -> &'static RwLock<HashMap<String, Keyword>> {
        static REGISTRY: Lazy<RwLock<HashMap<String, Keyword>>> = Lazy::new(|| {
            let m = Keyword::iter()
                .map(|keyword| (keyword.as_ref().to_string(), keyword))
                .collect();
            RwLock::new(m)
        });
        &REGISTRY
    }

    /// Extends the global registry with user-defined **synonyms**.
    ///
    /// Each pair is `(alias, target)`. The `target` must already be known to the
    /// registry; unknown targets are skipped with a warning.
    ///
    /// ```toml
    /// # config.toml
    /// [synonyms]
    /// tmrw = "tomorrow"
    /// mtg  = "meeting"
    /// ```
    pub fn extend(synonyms: &[(String, String)]) {
        let mut reg = Self::registry()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for (alias, target) in synonyms {
            match reg.get(&target.to_ascii_lowercase()) {
                Some(&canonical) => {
                    reg.insert(alias.to_ascii_lowercase(), canonical);
                    GENERATION.fetch_add(1, Ordering::Release);
                }
                None => log::warn!("ignoring synonym '{alias}': unknown keyword '{target}'"),
            }
        }
    }

    /// Changes every time the registry gains a synonym. Lets callers cache
    /// anything derived from [`aliases`](Self::aliases).
    pub fn generation() -> u64 {
        GENERATION.load(Ordering::Acquire)
    }

    /// Returns `true` if `word` is a canonical word (eg "today").
    pub fn is_canonical(word: &str) -> bool {
        let word = word.to_ascii_lowercase();
        Keyword::iter().any(|key| key.as_ref() == word)
    }

    /// Returns `true` if `input` equals (case-insensitively) the given canonical keyword
    /// or any of its registered synonyms.
    pub fn matches(keyword: Keyword, input: &str) -> bool {
        Self::lookup(input).is_some_and(|canon| canon == keyword)
    }

    /// Resolves a single word to its canonical keyword, if registered.
    pub fn lookup(word: &str) -> Option<Keyword> {
        let reg = Self::registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        reg.get(&word.to_ascii_lowercase()).copied()
    }

    /// Every registered spelling of `keyword`, canonical form included, sorted.
    pub fn aliases(keyword: Keyword) -> Vec<String> {
        let reg = Self::registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut out: Vec<String> = reg
            .iter()
            .filter(|(_, canon)| **canon == keyword)
            .map(|(alias, _)| alias.clone())
            .collect();
        out.sort();
        out
    }

    /// Finds the first whole word of `text` that is a reminder cue.
    ///
    /// Words are runs of ASCII letters and digits, optionally joined by apostrophes,
    /// so `"5pm"` is one word and does not contain the cue `pm`. A possessive such as
    /// `"monday's"` is also checked piece by piece.
    pub fn find_cue(text: &str) -> Option<Keyword> {
        let lower = text.to_ascii_lowercase();
        WORD_RE.find_iter(&lower).find_map(|m| {
            let word = m.as_str();
            Self::lookup(word)
                .or_else(|| word.split('\'').find_map(Self::lookup))
                .filter(|keyword| keyword.is_cue())
        })
    }
}
