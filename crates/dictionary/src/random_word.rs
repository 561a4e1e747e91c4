use rand::{seq::SliceRandom, Rng};

/// Pool the word of the day is drawn from.
pub const CANDIDATE_WORDS: [&str; 20] = [
    "serendipity",
    "ephemeral",
    "luminous",
    "eloquent",
    "mellifluous",
    "tranquility",
    "ethereal",
    "resilience",
    "solitude",
    "nostalgia",
    "effervescent",
    "melancholy",
    "whimsical",
    "ineffable",
    "serene",
    "perennial",
    "quintessential",
    "resplendent",
    "introspection",
    "vellichor",
];

pub fn pick_candidate<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static str> {
    CANDIDATE_WORDS.choose(rng).copied()
}
