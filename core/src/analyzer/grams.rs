use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").unwrap());

/// Reduce a macro value to a single number for chart sizing.
///
/// Plain numbers pass through, `"15g"` becomes 15, and ranges such as
/// `"20-25"` average to 22.5. Absent values, objects, and text without digits
/// become 0.
/// Lossy: only used for chart proportions, never for the displayed value.
pub fn parse_gram_value(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) | Some(Value::Object(_)) => 0.0,
        Some(Value::String(s)) => mean_of_numbers(s),
        Some(other) => mean_of_numbers(&other.to_string()),
    }
}

fn mean_of_numbers(text: &str) -> f64 {
    let numbers: Vec<f64> = NUMBER
        .find_iter(text)
        .filter_map(|m| {
            let matched = m.as_str();
            // A dash right after a digit separates a range ("20-25"); it is not a sign.
            let follows_digit = text[..m.start()]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_digit());
            let literal = if follows_digit {
                matched.trim_start_matches('-')
            } else {
                matched
            };
            literal.parse::<f64>().ok()
        })
        .collect();

    if numbers.is_empty() {
        return 0.0;
    }
    numbers.iter().sum::<f64>() / numbers.len() as f64
}
