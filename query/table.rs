#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Table {
	pub id: u64,
	pub name: String,
	pub display_name: String,
}
