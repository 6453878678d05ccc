#![no_main]

use libfuzzer_sys::fuzz_target;
use slope_engine::{
    compute_line_from_input, extract_pasted_number, sanitize_numeric_input, CoordinateInput,
};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let sanitized = sanitize_numeric_input(text);
    assert!(sanitized
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-'));
    assert!(sanitized.matches('.').count() <= 1);
    assert!(sanitized.rfind('-').is_none_or(|pos| pos == 0));
    assert_eq!(sanitize_numeric_input(&sanitized), sanitized);

    let pasted = extract_pasted_number(text);
    assert_eq!(sanitize_numeric_input(&pasted), pasted);

    let input = CoordinateInput::new(sanitized.as_str(), "1", pasted.as_str(), "2");
    let _ = compute_line_from_input(&input);
});
