//! Context size estimation

/// Characters per estimate unit
///
/// One word averages ~1.3 model tokens, which works out to roughly three
/// characters per unit for mixed prose.
pub const CHARS_PER_UNIT: usize = 3;

/// Estimate how much context budget a piece of text would cost
///
/// This is a deterministic proxy (character count divided by a fixed ratio),
/// not a token count; exact tokenization belongs to the model provider.
pub fn estimate_units(text: &str) -> usize {
    text.len() / CHARS_PER_UNIT
}
