//! CardAnimated: thaw `Card` with the `card-appear` entrance animation.
//!
//! Grid cards pass a growing `delay_ms` for a stagger effect:
//!
//! ```text
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=40>  // card 2
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Upper bound for the stagger delay so long grids do not lag behind
pub const MAX_STAGGER_MS: u32 = 400;

/// Stagger delay for the card at `index` with `step_ms` between cards
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
        .min(MAX_STAGGER_MS)
}

fn animation_style(delay_ms: u32, style: &str) -> String {
    if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    }
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation
    #[prop(optional, into)]
    style: String,
    /// Additional CSS classes for the card
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_style = animation_style(delay_ms, &style);

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}
