//! Lexicon-based polarity scorer for short financial headlines

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::sentiment::PolarityScorer;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("token pattern is valid"));

const NEGATION_FACTOR: f64 = -0.5;
const INTENSIFIER_FACTOR: f64 = 1.3;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "without", "isn't", "aren't", "wasn't", "won't", "don't", "doesn't",
    "didn't", "cannot", "can't",
];

const INTENSIFIERS: &[&str] = &[
    "very", "sharply", "strongly", "deeply", "significantly", "highly", "extremely", "hugely",
    "massively",
];

const WORDS: &[(&str, f64)] = &[
    // positive
    ("gain", 0.4),
    ("gains", 0.4),
    ("rise", 0.3),
    ("rises", 0.3),
    ("rally", 0.5),
    ("rallies", 0.5),
    ("surge", 0.6),
    ("surges", 0.6),
    ("soar", 0.7),
    ("soars", 0.7),
    ("jump", 0.4),
    ("jumps", 0.4),
    ("beat", 0.4),
    ("beats", 0.4),
    ("record", 0.3),
    ("growth", 0.4),
    ("profit", 0.4),
    ("profits", 0.4),
    ("strong", 0.43),
    ("upgrade", 0.5),
    ("upgrades", 0.5),
    ("upgraded", 0.5),
    ("outperform", 0.5),
    ("bullish", 0.6),
    ("buy", 0.3),
    ("positive", 0.23),
    ("good", 0.7),
    ("great", 0.8),
    ("best", 1.0),
    ("better", 0.5),
    ("success", 0.5),
    ("successful", 0.75),
    ("boost", 0.4),
    ("boosts", 0.4),
    ("win", 0.8),
    ("wins", 0.8),
    ("optimistic", 0.5),
    ("innovative", 0.5),
    ("breakthrough", 0.6),
    ("high", 0.16),
    ("higher", 0.25),
    ("top", 0.5),
    ("tops", 0.5),
    // negative
    ("loss", -0.4),
    ("losses", -0.4),
    ("fall", -0.3),
    ("falls", -0.3),
    ("drop", -0.4),
    ("drops", -0.4),
    ("decline", -0.4),
    ("declines", -0.4),
    ("plunge", -0.7),
    ("plunges", -0.7),
    ("slump", -0.6),
    ("slumps", -0.6),
    ("crash", -0.8),
    ("crashes", -0.8),
    ("miss", -0.4),
    ("misses", -0.4),
    ("weak", -0.38),
    ("downgrade", -0.5),
    ("downgrades", -0.5),
    ("downgraded", -0.5),
    ("underperform", -0.5),
    ("bearish", -0.6),
    ("sell", -0.3),
    ("negative", -0.3),
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("lawsuit", -0.5),
    ("probe", -0.4),
    ("fraud", -0.8),
    ("recall", -0.4),
    ("layoffs", -0.5),
    ("cut", -0.3),
    ("cuts", -0.3),
    ("risk", -0.2),
    ("risks", -0.2),
    ("fears", -0.5),
    ("concern", -0.3),
    ("concerns", -0.3),
    ("warning", -0.4),
    ("warns", -0.4),
    ("low", -0.15),
    ("lower", -0.2),
    ("volatile", -0.2),
    ("uncertain", -0.2),
    ("bankruptcy", -0.9),
];

/// Averages the polarity of known words, honouring negations and intensifiers
pub struct LexiconScorer {
    words: HashMap<&'static str, f64>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            words: WORDS.iter().copied().collect(),
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let mut scores = Vec::new();
        let mut modifier = 1.0;

        for token in TOKEN.find_iter(&lowered).map(|m| m.as_str()) {
            if NEGATIONS.contains(&token) {
                modifier *= NEGATION_FACTOR;
            } else if INTENSIFIERS.contains(&token) {
                modifier *= INTENSIFIER_FACTOR;
            } else if let Some(&polarity) = self.words.get(token) {
                scores.push((polarity * modifier).clamp(-1.0, 1.0));
                modifier = 1.0;
            }
        }

        if scores.is_empty() {
            return 0.0;
        }
        (scores.iter().sum::<f64>() / scores.len() as f64).clamp(-1.0, 1.0)
    }
}
