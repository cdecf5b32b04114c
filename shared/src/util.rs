/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Unique print window name, `Print` followed by the millisecond timestamp
pub fn print_window_name() -> String {
    format!("Print{}", now_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_window_name_has_timestamp_suffix() {
        let name = print_window_name();
        let suffix = name.strip_prefix("Print").unwrap();
        assert!(suffix.parse::<i64>().unwrap() > 0);
    }
}
