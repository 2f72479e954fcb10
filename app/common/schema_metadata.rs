use crate::item::Field;

/// Parents of each semantic and base type. A type may derive from more than one parent.
const TYPE_PARENTS: &[(&str, &[&str])] = &[
	("type/Number", &["type/*"]),
	("type/Integer", &["type/Number"]),
	("type/BigInteger", &["type/Integer"]),
	("type/Float", &["type/Number"]),
	("type/Decimal", &["type/Float"]),
	("type/Text", &["type/*"]),
	("type/TextLike", &["type/*"]),
	("type/IPAddress", &["type/TextLike"]),
	("type/MongoBSONID", &["type/TextLike"]),
	("type/Boolean", &["type/*"]),
	("type/DateTime", &["type/*"]),
	("type/Date", &["type/DateTime"]),
	("type/Time", &["type/DateTime"]),
	("type/UNIXTimestamp", &["type/Integer", "type/DateTime"]),
	("type/UNIXTimestampSeconds", &["type/UNIXTimestamp"]),
	("type/UNIXTimestampMilliseconds", &["type/UNIXTimestamp"]),
	("type/Special", &["type/*"]),
	("type/PK", &["type/Special"]),
	("type/FK", &["type/Special"]),
	("type/Name", &["type/Special", "type/Text"]),
	("type/Category", &["type/Special"]),
	("type/Coordinate", &["type/Float"]),
	("type/Latitude", &["type/Coordinate"]),
	("type/Longitude", &["type/Coordinate"]),
	("type/Address", &["type/*"]),
	("type/City", &["type/Address", "type/Text"]),
	("type/State", &["type/Address", "type/Text"]),
	("type/Country", &["type/Address", "type/Text"]),
	("type/ZipCode", &["type/Address", "type/Text"]),
	("type/URL", &["type/Text"]),
	("type/Email", &["type/Text"]),
	("type/SerializedJSON", &["type/Text"]),
];

/// True when `child` is `ancestor` or derives from it.
pub fn isa(child: &str, ancestor: &str) -> bool {
	if child == ancestor {
		return true;
	}
	TYPE_PARENTS
		.iter()
		.find(|(name, _)| *name == child)
		.map(|(_, parents)| parents.iter().any(|parent| isa(parent, ancestor)))
		.unwrap_or(false)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
	Temporal,
	Location,
	Coordinate,
	Foreign,
	Primary,
	String,
	StringLike,
	Number,
	Boolean,
}

struct FieldTypeDefinition {
	field_type: FieldType,
	base: &'static [&'static str],
	special: &'static [&'static str],
}

/// More specific types come first, so a latitude stored as a float is a coordinate rather than a number.
const FIELD_TYPES: &[FieldTypeDefinition] = &[
	FieldTypeDefinition {
		field_type: FieldType::Temporal,
		base: &["type/DateTime"],
		special: &["type/DateTime"],
	},
	FieldTypeDefinition {
		field_type: FieldType::Location,
		base: &[],
		special: &["type/Address"],
	},
	FieldTypeDefinition {
		field_type: FieldType::Coordinate,
		base: &[],
		special: &["type/Coordinate"],
	},
	FieldTypeDefinition {
		field_type: FieldType::Foreign,
		base: &[],
		special: &["type/FK"],
	},
	FieldTypeDefinition {
		field_type: FieldType::Primary,
		base: &[],
		special: &["type/PK"],
	},
	FieldTypeDefinition {
		field_type: FieldType::String,
		base: &["type/Text"],
		special: &["type/Text"],
	},
	FieldTypeDefinition {
		field_type: FieldType::StringLike,
		base: &["type/TextLike"],
		special: &[],
	},
	FieldTypeDefinition {
		field_type: FieldType::Number,
		base: &["type/Number"],
		special: &["type/Number"],
	},
	FieldTypeDefinition {
		field_type: FieldType::Boolean,
		base: &["type/Boolean"],
		special: &[],
	},
];

pub fn get_field_type(field: &Field) -> Option<FieldType> {
	FIELD_TYPES
		.iter()
		.find(|definition| {
			let special = field.special_type.as_deref().map_or(false, |special_type| {
				definition
					.special
					.iter()
					.any(|ancestor| isa(special_type, ancestor))
			});
			let base = definition
				.base
				.iter()
				.any(|ancestor| isa(&field.base_type, ancestor));
			special || base
		})
		.map(|definition| definition.field_type)
}

pub fn icon_for_field(field: &Field) -> &'static str {
	match get_field_type(field) {
		Some(FieldType::Temporal) => "calendar",
		Some(FieldType::Location) => "location",
		Some(FieldType::Coordinate) => "location",
		Some(FieldType::Foreign) => "connections",
		Some(FieldType::Primary) => "id",
		Some(FieldType::String) => "string",
		Some(FieldType::StringLike) => "string",
		Some(FieldType::Number) => "int",
		Some(FieldType::Boolean) => "io",
		None => "unknown",
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn field(base_type: &str, special_type: Option<&str>) -> Field {
		Field {
			id: 1,
			name: "FIELD".to_owned(),
			display_name: "Field".to_owned(),
			description: None,
			base_type: base_type.to_owned(),
			special_type: special_type.map(|special_type| special_type.to_owned()),
		}
	}

	#[test]
	fn test_isa() {
		assert!(isa("type/BigInteger", "type/Number"));
		assert!(isa("type/UNIXTimestampSeconds", "type/DateTime"));
		assert!(isa("type/City", "type/Address"));
		assert!(!isa("type/Text", "type/Number"));
		assert!(!isa("type/Unheard", "type/Number"));
	}

	#[test]
	fn test_icon_for_field() {
		let icons = vec![
			field("type/DateTime", None),
			field("type/Integer", Some("type/UNIXTimestampSeconds")),
			field("type/Text", Some("type/City")),
			field("type/Float", Some("type/Latitude")),
			field("type/Integer", Some("type/FK")),
			field("type/Integer", Some("type/PK")),
			field("type/Text", None),
			field("type/IPAddress", None),
			field("type/Decimal", None),
			field("type/Boolean", None),
			field("type/Array", None),
		]
		.iter()
		.map(icon_for_field)
		.collect::<Vec<_>>();
		insta::assert_debug_snapshot!(icons, @r###"
  [
      "calendar",
      "calendar",
      "location",
      "location",
      "connections",
      "id",
      "string",
      "string",
      "int",
      "io",
      "unknown",
  ]
  "###);
	}
}
