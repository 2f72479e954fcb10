#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct HistogramBin {
	pub label: String,
	pub count: f64,
}

/// The payload written to `data-options` so a client script can redraw the chart.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct HistogramOptions {
	pub bins: Vec<HistogramBin>,
	pub colors: Vec<String>,
	pub show_axis: bool,
}

/// Bar heights as percentages of the tallest bin. Negative and non-finite counts draw as empty bars.
pub fn bar_heights(bins: &[HistogramBin]) -> Vec<f64> {
	let max = bins
		.iter()
		.map(|bin| bin.count)
		.filter(|count| count.is_finite())
		.fold(0.0, f64::max);
	bins.iter()
		.map(|bin| {
			if max > 0.0 && bin.count.is_finite() && bin.count > 0.0 {
				bin.count / max * 100.0
			} else {
				0.0
			}
		})
		.collect()
}

#[test]
fn test_bar_heights() {
	let bins = vec![
		HistogramBin {
			label: "a".to_owned(),
			count: 1.0,
		},
		HistogramBin {
			label: "b".to_owned(),
			count: 4.0,
		},
		HistogramBin {
			label: "c".to_owned(),
			count: f64::NAN,
		},
	];
	assert_eq!(bar_heights(&bins), vec![25.0, 100.0, 0.0]);
	assert_eq!(bar_heights(&[]), Vec::<f64>::new());
}
