//! Randomized browser user agents.
//!
//! The portal serves plain HTML to anything that looks like a browser;
//! rotating among a few desktop user agents keeps the crawler from being
//! trivially fingerprinted by a constant default.

use rand::seq::SliceRandom;

const USER_AGENTS: &[&str] = &[
    // Chrome
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/88.0.4324.182 Safari/537.36",
    // Opera
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/88.0.4324.192 Safari/537.36 OPR/74.0.3911.218",
    // Firefox
    "Mozilla/5.0 (X11; Linux x86_64; rv:86.0) Gecko/20100101 Firefox/86.0",
];

/// Picks one of the known browser user agents at random.
pub fn get_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}
