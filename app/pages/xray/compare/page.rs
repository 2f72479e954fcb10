use crate::compare::{CompareHistograms, CompareInts};
use html::{component, html, style};
use xray_app_common::{
	cost::Cost,
	cost_select::CostSelect,
	distance::distance_to_phrase,
	item::{Comparison, Field, Item},
	item_link::ItemLink,
	schema_metadata::icon_for_field,
};
use xray_app_layouts::{
	document::{Document, PageInfo},
	xray_layout::{Heading, XRayPageWrapper},
};
use xray_ui as ui;

#[derive(serde::Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Props {
	/// Fields flagged as potentially interesting. When absent the section is not shown.
	#[serde(default)]
	pub contributors: Option<Vec<Field>>,
	#[serde(default)]
	pub comparison: Comparison,
	/// Column labels for the full breakdown table.
	#[serde(default)]
	pub comparison_fields: Vec<String>,
	pub item_a: Item,
	pub item_b: Item,
	pub fields: Vec<Field>,
	#[serde(default)]
	pub cost: Cost,
}

pub fn render(props: Props, page_info: PageInfo) -> String {
	let html = html! {
		<Document page_info={page_info}>
			<XRayPageWrapper>
				<XRayComparison props={props} />
			</XRayPageWrapper>
		</Document>
	};
	html.render_to_string()
}

#[component]
pub fn XRayComparison(props: Props) {
	let Props {
		contributors,
		comparison,
		comparison_fields,
		item_a,
		item_b,
		fields,
		cost,
	} = props;
	// itemA's count comes from the first field and itemB's from the second.
	let count_a = overview_count(&item_a, fields.get(0));
	let count_b = overview_count(&item_b, fields.get(1));
	let count_a_style = style! { "color" => item_a.color.main.clone() };
	let count_b_style = style! { "color" => item_b.color.main.clone() };
	let name_a_style = style! { "color" => item_a.color.main.clone() };
	let name_b_style = style! { "color" => item_b.color.main.clone() };
	let contributors = contributors.map(|contributors| {
		html! {
			<div class="interesting-differences">
				<Heading heading={"Potentially interesting differences".to_owned()} />
				<ol class="Grid Grid--gutters Grid--1of3">
					{contributors.iter().map(|_| html! {
						<li class="Grid-cell">
							<div class="bg-white shadowed rounded bordered"></div>
						</li>
					}).collect::<Vec<_>>()}
				</ol>
			</div>
		}
	});
	let header_cells = comparison_fields
		.into_iter()
		.map(|label| {
			html! {
				<ui::TableHeaderCell class_name={Some("px2 py2".to_owned())} text_align={None}>
					{label}
				</ui::TableHeaderCell>
			}
		})
		.collect::<Vec<_>>();
	let rows = fields
		.iter()
		.map(|field| {
			html! {
				<ComparisonRow
					distance={comparison.get(&field.name).map(|comparison| comparison.distance)}
					field={field.clone()}
					item_a={item_a.clone()}
					item_b={item_b.clone()}
				/>
			}
		})
		.collect::<Vec<_>>();
	let item_a_link = item_a.href();
	let item_b_link = item_b.href();
	html! {
		<div class="xray-comparison">
			<div>
				<div class="my4 flex align-center">
					<h1 class="flex align-center">
						<ui::Icon class_name={Some("mr1".to_owned())} name={"compare".to_owned()} size={Some(32)} />
						{"Comparing"}
					</h1>
					<div class="ml-auto">
						<CostSelect current_cost={cost} />
					</div>
				</div>
				<div class="flex">
					<ItemLink item={item_a.clone()} link={item_a_link} />
					<ItemLink item={item_b.clone()} link={item_b_link} />
				</div>
			</div>
			<Heading heading={"Overview".to_owned()} />
			<div class="overview bordered rounded bg-white shadowed p4">
				<h3 class="text-grey-3">{"Count"}</h3>
				<div class="flex my1">
					<h1 class="mr1" style={count_a_style}>{count_a}</h1>
					<span class="h1 text-grey-1 mr1">{"/"}</span>
					<h1 style={count_b_style}>{count_b}</h1>
				</div>
			</div>
			{contributors}
			<Heading heading={"Full breakdown".to_owned()} />
			<div class="full-breakdown bordered rounded bg-white shadowed">
				<div class="flex p2">
					<h4 class="mr1" style={name_a_style}>{item_a.name.clone()}</h4>
					<h4 style={name_b_style}>{item_b.name.clone()}</h4>
				</div>
				<ui::Table class_name={Some("comparison-table full".to_owned())} width={Some("100%".to_owned())}>
					<ui::TableHeader>
						<ui::TableRow class_name={None} color={None}>
							<ui::TableHeaderCell class_name={Some("px2".to_owned())} text_align={None}>
								{"Field"}
							</ui::TableHeaderCell>
							{header_cells}
						</ui::TableRow>
					</ui::TableHeader>
					<ui::TableBody>
						{rows}
					</ui::TableBody>
				</ui::Table>
			</div>
		</div>
	}
}

/// One row of the full breakdown. Whether a statistic is shown depends on itemA alone.
#[component]
fn ComparisonRow(distance: Option<f64>, field: Field, item_a: Item, item_b: Item) {
	let href = field.href();
	let icon = icon_for_field(&field).to_owned();
	let constituents_a = item_a.constituent(&field.name);
	let constituents_b = item_b.constituent(&field.name);
	let entropy = constituents_a
		.and_then(|constituents| constituents.entropy.as_ref())
		.map(|entropy| {
			html! {
				<CompareInts
					item_a={Some(entropy.value)}
					item_a_color={item_a.color.clone()}
					item_b={constituents_b.and_then(|constituents| constituents.entropy.as_ref()).map(|entropy| entropy.value)}
					item_b_color={item_b.color.clone()}
				/>
			}
		});
	let histogram = constituents_a
		.and_then(|constituents| constituents.histogram.as_ref())
		.map(|histogram| {
			html! {
				<CompareHistograms
					item_a={histogram.value.clone()}
					item_a_color={item_a.color.clone()}
					item_b_color={item_b.color.clone()}
				/>
			}
		});
	let nil_percent = constituents_a
		.and_then(|constituents| constituents.nil_percent.as_ref())
		.map(|nil_percent| {
			html! {
				<CompareInts
					item_a={Some(nil_percent.value)}
					item_a_color={item_a.color.clone()}
					item_b={constituents_b.and_then(|constituents| constituents.nil_percent.as_ref()).map(|nil_percent| nil_percent.value)}
					item_b_color={item_b.color.clone()}
				/>
			}
		});
	html! {
		<ui::TableRow class_name={Some("comparison-table-row".to_owned())} color={None}>
			<ui::TableCell class_name={Some("border-right".to_owned())} min_width={None} text_align={None}>
				<ui::Link
					class_name={Some("px2 no-decoration flex align-center text-brand-hover".to_owned())}
					href={Some(href)}
					title={field.description.clone()}
				>
					<ui::Icon class_name={Some("text-grey-2 mr1".to_owned())} name={icon} size={None} />
					<h3>{field.display_name.clone()}</h3>
				</ui::Link>
			</ui::TableCell>
			<ui::TableCell class_name={Some("border-right px2".to_owned())} min_width={None} text_align={None}>
				<h3>{distance.map(distance_to_phrase)}</h3>
			</ui::TableCell>
			<ui::TableCell class_name={Some("border-right entropy-cell".to_owned())} min_width={None} text_align={None}>
				{entropy}
			</ui::TableCell>
			<ui::TableCell
				class_name={Some("px2 border-right histogram-cell".to_owned())}
				min_width={Some("400px".to_owned())}
				text_align={None}
			>
				{histogram}
			</ui::TableCell>
			<ui::TableCell class_name={Some("px2 h3 nil-percent-cell".to_owned())} min_width={None} text_align={None}>
				{nil_percent}
			</ui::TableCell>
		</ui::TableRow>
	}
}

fn overview_count(item: &Item, field: Option<&Field>) -> Option<String> {
	field
		.and_then(|field| item.constituent(&field.name))
		.and_then(|constituents| constituents.count.as_ref())
		.map(|count| ui::format_number(count.value))
}

#[cfg(test)]
mod test {
	use super::*;

	fn props(contributors: serde_json::Value) -> Props {
		serde_json::from_value(serde_json::json!({
			"contributors": contributors,
			"comparison": {
				"TOTAL": { "distance": 0.8 },
				"CREATED_AT": { "distance": 0.1 }
			},
			"comparisonFields": ["Distance", "Entropy", "Histogram", "Nil%"],
			"itemA": {
				"id": 1,
				"itemType": "segment",
				"name": "Big spenders",
				"color": { "main": "#509EE3", "text": "#fff" },
				"constituents": {
					"TOTAL": {
						"count": { "value": 120 },
						"nil%": { "value": 0.5 },
						"histogram": { "value": { "rows": [["0-50", 3], ["50-100", 9]] } }
					},
					"CREATED_AT": {
						"count": { "value": 118 },
						"entropy": { "value": 1.5 }
					}
				}
			},
			"itemB": {
				"id": 3,
				"itemType": "table",
				"name": "Orders",
				"color": { "main": "#EF8C8C", "text": "#000" },
				"constituents": {
					"TOTAL": {
						"count": { "value": 900 },
						"entropy": { "value": 2.25 },
						"nil%": { "value": 0.25 }
					},
					"CREATED_AT": {
						"count": { "value": 1000 }
					}
				}
			},
			"fields": [
				{
					"id": 10,
					"name": "TOTAL",
					"display_name": "Total",
					"base_type": "type/Float"
				},
				{
					"id": 11,
					"name": "CREATED_AT",
					"display_name": "Created At",
					"base_type": "type/DateTime"
				},
				{
					"id": 12,
					"name": "USER_ID",
					"display_name": "User ID",
					"base_type": "type/Integer",
					"special_type": "type/FK"
				}
			],
			"cost": "exact"
		}))
		.unwrap()
	}

	fn render_comparison(props: Props) -> String {
		html!(<XRayComparison props={props} />).render_to_string()
	}

	/// The markup of each body row, in order.
	fn body_rows(html: &str) -> Vec<&str> {
		html.split("<tr class=\"table-row comparison-table-row\"")
			.skip(1)
			.map(|row| row.split("</tr>").next().unwrap())
			.collect()
	}

	/// The contents of the first cell with the given class in a row.
	fn cell<'a>(row: &'a str, class: &str) -> &'a str {
		let start = row.find(class).unwrap();
		let cell = &row[start..];
		let contents = &cell[cell.find('>').unwrap() + 1..];
		&contents[..contents.find("</td>").unwrap()]
	}

	#[test]
	fn test_rows_follow_fields() {
		let html = render_comparison(props(serde_json::Value::Null));
		let rows = body_rows(&html);
		assert_eq!(rows.len(), 3);
		assert!(rows[0].contains(r#"href="/xray/field/10/approximate""#));
		assert!(rows[0].contains("<h3>Total</h3>"));
		assert!(rows[0].contains("icon-int"));
		assert!(rows[1].contains(r#"href="/xray/field/11/approximate""#));
		assert!(rows[1].contains("icon-calendar"));
		assert!(rows[2].contains(r#"href="/xray/field/12/approximate""#));
		assert!(rows[2].contains("icon-connections"));
	}

	#[test]
	fn test_distance_phrases() {
		let html = render_comparison(props(serde_json::Value::Null));
		let rows = body_rows(&html);
		assert_eq!(cell(rows[0], "px2\""), "<h3>Very different</h3>");
		assert_eq!(cell(rows[1], "px2\""), "<h3>Very similar</h3>");
		assert_eq!(cell(rows[2], "px2\""), "<h3></h3>");
	}

	#[test]
	fn test_statistics_are_gated_on_item_a() {
		let html = render_comparison(props(serde_json::Value::Null));
		let rows = body_rows(&html);
		// itemB has entropy for TOTAL but itemA does not.
		assert_eq!(cell(rows[0], "entropy-cell"), "");
		assert!(cell(rows[0], "histogram-cell").contains(r#"data-chart-type="histogram""#));
		assert!(cell(rows[0], "nil-percent-cell").contains("<h3>0.5</h3><"));
		assert!(cell(rows[0], "nil-percent-cell").contains("<h3>0.25</h3>"));
		// itemA has entropy for CREATED_AT and itemB does not.
		let entropy = cell(rows[1], "entropy-cell");
		assert!(entropy.contains("<h3>1.5</h3>"));
		assert!(entropy.contains("<h3></h3>"));
		assert_eq!(cell(rows[1], "histogram-cell"), "");
		assert_eq!(cell(rows[1], "nil-percent-cell"), "");
		// Neither item has constituents for USER_ID.
		assert_eq!(cell(rows[2], "entropy-cell"), "");
		assert_eq!(cell(rows[2], "histogram-cell"), "");
		assert_eq!(cell(rows[2], "nil-percent-cell"), "");
	}

	#[test]
	fn test_missing_contributors_omit_section() {
		let html = render_comparison(props(serde_json::Value::Null));
		assert!(!html.contains("Potentially interesting differences"));
		assert!(!html.contains("Grid--1of3"));
	}

	#[test]
	fn test_empty_contributors_render_empty_list() {
		let html = render_comparison(props(serde_json::json!([])));
		assert!(html.contains("Potentially interesting differences"));
		assert!(html.contains(r#"<ol class="Grid Grid--gutters Grid--1of3"></ol>"#));
	}

	#[test]
	fn test_contributors_render_shell_cards() {
		let contributor = serde_json::json!({
			"id": 10,
			"name": "TOTAL",
			"display_name": "Total",
			"base_type": "type/Float"
		});
		let html = render_comparison(props(serde_json::json!([contributor, contributor])));
		let card = r#"<li class="Grid-cell"><div class="bg-white shadowed rounded bordered"></div></li>"#;
		assert!(html.contains(&format!(
			r#"<ol class="Grid Grid--gutters Grid--1of3">{}{}</ol>"#,
			card, card
		)));
	}

	#[test]
	fn test_header_and_overview() {
		let html = render_comparison(props(serde_json::Value::Null));
		assert!(html.contains("icon-compare"));
		assert!(html.contains(r#"<option selected value="exact">Exact</option>"#));
		assert!(html.contains(r#"href="/xray/segment/1/approximate""#));
		assert!(html.contains(r#"href="/xray/table/3/approximate""#));
		// itemA counts its first field and itemB its second.
		assert!(html.contains(r#"<h1 class="mr1" style="color: #509EE3;">120</h1>"#));
		assert!(html.contains(r#"<h1 style="color: #EF8C8C;">1000</h1>"#));
		assert!(html.contains(r#"<h4 class="mr1" style="color: #509EE3;">Big spenders</h4>"#));
		assert!(html.contains(
			r#"<th class="table-header-cell table-align-left px2 py2">Nil%</th>"#
		));
	}

	#[test]
	fn test_overview_without_fields() {
		let mut props = props(serde_json::Value::Null);
		props.fields.clear();
		let html = render_comparison(props);
		assert!(html.contains(r#"<h1 class="mr1" style="color: #509EE3;"></h1>"#));
		assert!(body_rows(&html).is_empty());
	}

	#[test]
	fn test_render_page() {
		let page_info = PageInfo {
			title: Some("Comparing Big spenders and Orders".to_owned()),
		};
		let html = render(props(serde_json::Value::Null), page_info);
		assert!(html.starts_with("<!doctype html>"));
		assert!(html.contains(r#"<div class="xray-page-wrapper wrapper pb4 full-height"><div class="xray-comparison">"#));
	}
}
