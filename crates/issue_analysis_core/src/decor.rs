//! crates/issue_analysis_core/src/decor.rs
//!
//! Cosmetic page actions. They share nothing with the analysis flow.

use crate::ports::PageSurface;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

pub const GREETING: &str = "Hello! Welcome to my first web app!";

/// Light background tints: gray, red, green, blue, orange, purple.
pub const BACKGROUND_PALETTE: [&str; 6] = [
    "#f0f0f0", "#ffebee", "#e8f5e9", "#e3f2fd", "#fff3e0", "#f3e5f5",
];

pub fn say_hello(page: &dyn PageSurface) {
    page.alert(GREETING);
}

/// Sets the page background to a uniformly chosen palette colour and
/// returns that colour.
pub fn change_background_color<R: Rng + ?Sized>(
    page: &dyn PageSurface,
    rng: &mut R,
) -> &'static str {
    let color = BACKGROUND_PALETTE
        .choose(rng)
        .copied()
        .unwrap_or(BACKGROUND_PALETTE[0]);
    debug!(color, "Changing background colour");
    page.set_background(color);
    color
}
