/// Format a statistic for display. Whole numbers print without a fractional part and non-finite values print as "N/A".
pub fn format_number(value: f64) -> String {
	if value.is_finite() {
		value.to_string()
	} else {
		"N/A".to_owned()
	}
}

#[test]
fn test_format_number() {
	assert_eq!(format_number(1234.0), "1234");
	assert_eq!(format_number(2.5), "2.5");
	assert_eq!(format_number(f64::NAN), "N/A");
}
