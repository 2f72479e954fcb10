/// Describe how far apart two distributions are. Distances are expected in `[0, 1]`; NaN reads as very similar.
pub fn distance_to_phrase(distance: f64) -> &'static str {
	if distance >= 0.75 {
		"Very different"
	} else if distance >= 0.5 {
		"Somewhat different"
	} else if distance >= 0.25 {
		"Somewhat similar"
	} else {
		"Very similar"
	}
}

#[test]
fn test_distance_to_phrase() {
	let phrases = [0.0, 0.25, 0.5, 0.74, 0.75, 1.0, f64::NAN]
		.iter()
		.map(|distance| distance_to_phrase(*distance))
		.collect::<Vec<_>>();
	insta::assert_debug_snapshot!(phrases, @r###"
 [
     "Very similar",
     "Somewhat similar",
     "Somewhat different",
     "Somewhat different",
     "Very different",
     "Very different",
     "Very similar",
 ]
 "###);
}
