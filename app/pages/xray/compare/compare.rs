use html::{component, html, style};
use xray_app_common::item::{HistogramValue, ItemColor};
use xray_charts::components::Histogram;
use xray_ui as ui;

/// Two statistic values side by side, each on a tint of its item's color. itemB's tint is lighter.
#[component]
pub fn CompareInts(
	item_a: Option<f64>,
	item_a_color: ItemColor,
	item_b: Option<f64>,
	item_b_color: ItemColor,
) {
	let style_a = style! {
		"color" => item_a_color.text,
		"background-color" => ui::color::lighten(&item_a_color.main, 0.1),
	};
	let style_b = style! {
		"color" => item_b_color.text,
		"background-color" => ui::color::lighten(&item_b_color.main, 0.4),
	};
	html! {
		<div class="compare-ints flex">
			<div class="p2 text-align-center flex-full" style={style_a}>
				<h3>{item_a.map(ui::format_number)}</h3>
			</div>
			<div class="p2 text-align-center flex-full" style={style_b}>
				<h3>{item_b.map(ui::format_number)}</h3>
			</div>
		</div>
	}
}

/// Only itemA's distribution is drawn. itemB contributes its color to the palette.
#[component]
pub fn CompareHistograms(item_a: HistogramValue, item_a_color: ItemColor, item_b_color: ItemColor) {
	html! {
		<div class="compare-histograms flex" style="height: 60px;">
			<div class="flex-full">
				<Histogram
					bins={item_a.bins()}
					colors={vec![item_a_color.main, item_b_color.main]}
					show_axis={Some(false)}
				/>
			</div>
		</div>
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use xray_app_common::item::{HistogramKey, HistogramRow};

	fn color(main: &str) -> ItemColor {
		ItemColor {
			main: main.to_owned(),
			text: "#fff".to_owned(),
		}
	}

	#[test]
	fn test_compare_ints_lightens_each_side() {
		let html = html! {
			<CompareInts
				item_a={Some(2.5)}
				item_a_color={color("#ff0000")}
				item_b={None}
				item_b_color={color("#808080")}
			/>
		}
		.render_to_string();
		assert_eq!(
			html,
			concat!(
				r#"<div class="compare-ints flex">"#,
				r#"<div class="p2 text-align-center flex-full" style="color: #fff; background-color: rgb(255, 26, 26);"><h3>2.5</h3></div>"#,
				r#"<div class="p2 text-align-center flex-full" style="color: #fff; background-color: rgb(179, 179, 179);"><h3></h3></div>"#,
				"</div>",
			)
		);
	}

	#[test]
	fn test_compare_histograms_draws_item_a() {
		let histogram = HistogramValue {
			rows: vec![
				HistogramRow(HistogramKey::Text("small".to_owned()), 1.0),
				HistogramRow(HistogramKey::Text("large".to_owned()), 4.0),
			],
		};
		let html = html! {
			<CompareHistograms
				item_a={histogram}
				item_a_color={color("#509EE3")}
				item_b_color={color("#EF8C8C")}
			/>
		}
		.render_to_string();
		assert!(html.contains(r#"style="height: 60px;""#));
		assert!(html.contains(r#"title="small: 1""#));
		assert!(html.contains(r#"title="large: 4""#));
		assert!(html.contains("&quot;colors&quot;:[&quot;#509EE3&quot;,&quot;#EF8C8C&quot;]"));
		assert!(!html.contains("histogram-axis"));
	}
}
