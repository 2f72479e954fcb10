//! The statistical summaries an xray computes for a segment, table, field or saved question.

use std::collections::BTreeMap;
use std::fmt;
use xray_charts::histogram::HistogramBin;

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
	Segment,
	Table,
	Field,
	Card,
}

impl fmt::Display for ItemType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let item_type = match self {
			ItemType::Segment => "segment",
			ItemType::Table => "table",
			ItemType::Field => "field",
			ItemType::Card => "card",
		};
		write!(f, "{}", item_type)
	}
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct ItemColor {
	pub main: String,
	pub text: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
	pub id: u64,
	pub item_type: ItemType,
	pub name: String,
	pub color: ItemColor,
	#[serde(default)]
	pub constituents: BTreeMap<String, FieldConstituents>,
}

impl Item {
	/// The page summarizing this item on its own.
	pub fn href(&self) -> String {
		format!("/xray/{}/{}/approximate", self.item_type, self.id)
	}

	pub fn constituent(&self, field_name: &str) -> Option<&FieldConstituents> {
		self.constituents.get(field_name)
	}
}

/// The statistics computed for one field of an item. A statistic that was not computed is `None`.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FieldConstituents {
	#[serde(default)]
	pub count: Option<Statistic<f64>>,
	#[serde(default)]
	pub entropy: Option<Statistic<f64>>,
	#[serde(default)]
	pub histogram: Option<Statistic<HistogramValue>>,
	#[serde(default, rename = "nil%")]
	pub nil_percent: Option<Statistic<f64>>,
}

/// A computed statistic. Labels and descriptions sent alongside the value are ignored.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Statistic<T> {
	pub value: T,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HistogramValue {
	pub rows: Vec<HistogramRow>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct HistogramRow(pub HistogramKey, pub f64);

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum HistogramKey {
	Number(f64),
	Text(String),
}

impl fmt::Display for HistogramKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			HistogramKey::Number(value) => write!(f, "{}", value),
			HistogramKey::Text(value) => write!(f, "{}", value),
		}
	}
}

impl HistogramValue {
	pub fn bins(&self) -> Vec<HistogramBin> {
		self.rows
			.iter()
			.map(|HistogramRow(key, count)| HistogramBin {
				label: key.to_string(),
				count: *count,
			})
			.collect()
	}
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Field {
	pub id: u64,
	pub name: String,
	pub display_name: String,
	#[serde(default)]
	pub description: Option<String>,
	pub base_type: String,
	#[serde(default)]
	pub special_type: Option<String>,
}

impl Field {
	pub fn href(&self) -> String {
		format!("/xray/field/{}/approximate", self.id)
	}
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct FieldComparison {
	pub distance: f64,
}

/// Per field name, how different the two compared items are.
pub type Comparison = BTreeMap<String, FieldComparison>;
