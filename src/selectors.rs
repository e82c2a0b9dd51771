//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for hidden form inputs carrying session/view state.
pub static HIDDEN_INPUT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("input[type='hidden']").expect("valid hidden input selector"));
