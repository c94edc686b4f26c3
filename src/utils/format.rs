pub fn format_number(num: usize) -> String {
    if num == 0 {
        return "0".to_string();
    }

    let mut result = String::new();
    let num_str = num.to_string();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        result.push(c);
        if (len - i - 1) % 3 == 0 && i < len - 1 {
            result.push(',');
        }
    }

    result
}

/// Percentage with two decimals, or `n/a` when undefined.
pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{:.2}%", p),
        None => "n/a".to_string(),
    }
}

/// `%f`-style rendering (six decimals); an undefined statistic renders as `NaN`.
pub fn format_stat(value: Option<f64>) -> String {
    format!("{:.6}", value.unwrap_or(f64::NAN))
}
