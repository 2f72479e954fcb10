use crate::histogram::{bar_heights, HistogramBin, HistogramOptions};
use html::{component, html, style};

/// A histogram drawn as static bars. The first color fills the bars and the full color list is passed on to the client.
#[component]
pub fn Histogram(bins: Vec<HistogramBin>, colors: Vec<String>, show_axis: Option<bool>) {
	let show_axis = show_axis.unwrap_or(true);
	let bar_color = colors.first().cloned();
	let heights = bar_heights(&bins);
	let bars = bins
		.iter()
		.zip(heights)
		.map(|(bin, height)| {
			let style = style! {
				"height" => format!("{:.2}%", height),
				"background-color" => bar_color.clone(),
			};
			let title = format!("{}: {}", bin.label, bin.count);
			html! {
				<div class="histogram-bar" style={style} title={title}></div>
			}
		})
		.collect::<Vec<_>>();
	let axis = if show_axis {
		Some(html! {
			<div class="histogram-axis">
				{bins.iter().map(|bin| html! {
					<div class="histogram-axis-label">{bin.label.clone()}</div>
				}).collect::<Vec<_>>()}
			</div>
		})
	} else {
		None
	};
	let options = HistogramOptions {
		bins,
		colors,
		show_axis,
	};
	let options = serde_json::to_string(&options).ok();
	html! {
		<div class="chart-wrapper">
			<div class="histogram" data-chart-type="histogram" data-options={options}>
				<div class="histogram-bars">{bars}</div>
				{axis}
			</div>
		</div>
	}
}

#[test]
fn test_histogram_without_axis() {
	let bins = vec![
		HistogramBin {
			label: "0-10".to_owned(),
			count: 2.0,
		},
		HistogramBin {
			label: "10-20".to_owned(),
			count: 8.0,
		},
	];
	let html = html! {
		<Histogram
			bins={bins}
			colors={vec!["#509EE3".to_owned(), "#EF8C8C".to_owned()]}
			show_axis={Some(false)}
		/>
	}
	.render_to_string();
	assert!(html.contains(r#"data-chart-type="histogram""#));
	assert!(html.contains(
		r#"<div class="histogram-bar" style="height: 25.00%; background-color: #509EE3;" title="0-10: 2"></div>"#
	));
	assert!(html.contains(r#"style="height: 100.00%; background-color: #509EE3;""#));
	assert!(!html.contains("histogram-axis"));
	assert!(html.contains("&quot;show_axis&quot;:false"));
}
