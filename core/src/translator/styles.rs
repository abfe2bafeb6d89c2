//! Fixed lookup tables keyed by translation style tag.

pub const DEFAULT_STYLE: &str = "default";
pub const HK_MAFIA_STYLE: &str = "hk-mafia-90s";

/// Tone instruction sent alongside the text for each known style.
pub const STYLE_INSTRUCTIONS: &[(&str, &str)] = &[
    (
        DEFAULT_STYLE,
        "Translate the sentence accurately with a neutral, helpful tone.",
    ),
    (
        HK_MAFIA_STYLE,
        "Translate like a Hong Kong mafia member in the 1990s: a little bit rude, confident, but never insulting beyond playful toughness.",
    ),
];

/// Offline translations shown when the backend is unreachable.
pub const PLACEHOLDER_TRANSLATIONS: &[(&str, &str)] = &[(HK_MAFIA_STYLE, "我鍾意寫程式，唔好搞我喺度。")];

/// Placeholder for every style without its own entry.
pub const FALLBACK_PLACEHOLDER: &str = "Ich programmiere gerne.";

/// Display names for the style selector, in menu order.
pub const STYLE_LABELS: &[(&str, &str)] = &[
    (DEFAULT_STYLE, "Neutral"),
    (HK_MAFIA_STYLE, "90s Hong Kong mafia"),
];

/// Instruction for a style. Unknown styles have none.
pub fn style_instruction(style: &str) -> Option<&'static str> {
    lookup(STYLE_INSTRUCTIONS, style)
}

pub fn placeholder_translation(style: &str) -> &'static str {
    lookup(PLACEHOLDER_TRANSLATIONS, style).unwrap_or(FALLBACK_PLACEHOLDER)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
