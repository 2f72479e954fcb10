use derive_more::From;
use std::borrow::Cow;
use std::fmt::Write;

pub use html_macro::{component, html};

#[derive(Clone, From)]
pub enum Node {
	RawText(RawTextNode),
	EscapedText(EscapedTextNode),
	Fragment(FragmentNode),
	Host(HostNode),
	Component(ComponentNode),
	#[from(ignore)]
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

#[derive(Clone)]
pub struct RawTextNode(pub Cow<'static, str>);

#[derive(Clone)]
pub struct EscapedTextNode(pub Cow<'static, str>);

#[derive(Clone)]
pub struct FragmentNode {
	pub children: Vec<Node>,
}

#[derive(Clone)]
pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

#[derive(Clone, From)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

#[derive(Clone)]
pub enum ComponentNode {
	Unrendered {
		component: Option<Box<dyn Component>>,
		children: Option<Vec<Node>>,
	},
	Rendered(Box<Node>),
}

pub trait Component: ComponentClone {
	fn render(self: Box<Self>, children: Vec<Node>) -> Node;
}

pub trait ComponentClone {
	fn clone_box(&self) -> Box<dyn Component>;
}

impl<T> ComponentClone for T
where
	T: Component + Clone + 'static,
{
	fn clone_box(&self) -> Box<dyn Component> {
		Box::new(self.clone())
	}
}

impl Clone for Box<dyn Component> {
	fn clone(&self) -> Box<dyn Component> {
		self.clone_box()
	}
}

impl Node {
	pub fn render_to_string(mut self) -> String {
		self.render().to_string()
	}

	pub fn render_to_text(mut self) -> String {
		self.render().text_content()
	}

	fn render(&mut self) -> &mut Node {
		match self {
			Node::Fragment(node) => {
				for child in node.children.iter_mut() {
					child.render();
				}
			}
			Node::Host(node) => {
				for child in node.children.iter_mut() {
					child.render();
				}
			}
			Node::Component(node) => {
				if let ComponentNode::Unrendered {
					component,
					children,
				} = node
				{
					let rendered = match (component.take(), children.take()) {
						(Some(component), Some(children)) => {
							let mut rendered = component.render(children);
							rendered.render();
							rendered
						}
						_ => Node::Option(None),
					};
					*node = ComponentNode::Rendered(Box::new(rendered));
				}
			}
			Node::Vec(node) => {
				for child in node.iter_mut() {
					child.render();
				}
			}
			Node::Option(node) => {
				if let Some(node) = node {
					node.render();
				}
			}
			_ => {}
		};
		self
	}

	/// Concatenate the text content of this node, ignoring markup. Unrendered components contribute nothing.
	pub fn text_content(&self) -> String {
		let mut text = String::new();
		self.collect_text(&mut text);
		text
	}

	fn collect_text(&self, text: &mut String) {
		match self {
			Node::RawText(node) => text.push_str(&node.0),
			Node::EscapedText(node) => text.push_str(&node.0),
			Node::Fragment(node) => node.children.iter().for_each(|child| child.collect_text(text)),
			Node::Host(node) => node.children.iter().for_each(|child| child.collect_text(text)),
			Node::Component(ComponentNode::Rendered(node)) => node.collect_text(text),
			Node::Component(_) => {}
			Node::Option(node) => {
				if let Some(node) = node {
					node.collect_text(text)
				}
			}
			Node::Vec(nodes) => nodes.iter().for_each(|child| child.collect_text(text)),
		}
	}
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::RawText(node) => write!(f, "{}", node),
			Node::EscapedText(node) => write!(f, "{}", node),
			Node::Fragment(node) => write!(f, "{}", node),
			Node::Host(node) => write!(f, "{}", node),
			Node::Component(node) => write!(f, "{}", node),
			Node::Option(node) => match node {
				Some(node) => write!(f, "{}", node),
				None => Ok(()),
			},
			Node::Vec(nodes) => {
				for node in nodes {
					write!(f, "{}", node)?;
				}
				Ok(())
			}
		}
	}
}

impl std::fmt::Display for FragmentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for HostNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(value) => {
					if let Some(true) = value {
						write!(f, " {}", key)?;
					}
				}
				AttributeValue::String(value) => {
					if let Some(value) = value {
						write!(f, r#" {}=""#, key)?;
						write_escaped(f, value)?;
						write!(f, r#"""#)?;
					}
				}
			}
		}
		if self.self_closing {
			write!(f, " /")?;
		}
		write!(f, ">")?;
		if !self.self_closing {
			for child in self.children.iter() {
				write!(f, "{}", child)?;
			}
			write!(f, "</{}>", self.name)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for ComponentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ComponentNode::Rendered(rendered) => write!(f, "{}", rendered),
			ComponentNode::Unrendered { .. } => {
				panic!("attempted to display component that has not yet been rendered")
			}
		}
	}
}

impl std::fmt::Display for RawTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::fmt::Display for EscapedTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write_escaped(f, &self.0)
	}
}

fn write_escaped(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'>' => write!(f, "&gt;")?,
			'<' => write!(f, "&lt;")?,
			'"' => write!(f, "&quot;")?,
			'&' => write!(f, "&amp;")?,
			'\'' => write!(f, "&apos;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<Option<&'static str>> for AttributeValue {
	fn from(value: Option<&'static str>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

/// A value that may contribute a declaration to a `style!` attribute.
pub trait StyleValue {
	fn into_style_value(self) -> Option<String>;
}

impl StyleValue for String {
	fn into_style_value(self) -> Option<String> {
		Some(self)
	}
}

impl StyleValue for &str {
	fn into_style_value(self) -> Option<String> {
		Some(self.to_owned())
	}
}

impl StyleValue for &String {
	fn into_style_value(self) -> Option<String> {
		Some(self.clone())
	}
}

impl<T> StyleValue for Option<T>
where
	T: StyleValue,
{
	fn into_style_value(self) -> Option<String> {
		self.and_then(StyleValue::into_style_value)
	}
}

/// A value that may contribute a class name to a `classes!` list.
pub trait ClassValue {
	fn into_class_value(self) -> Option<String>;
}

impl ClassValue for String {
	fn into_class_value(self) -> Option<String> {
		Some(self)
	}
}

impl ClassValue for &str {
	fn into_class_value(self) -> Option<String> {
		Some(self.to_owned())
	}
}

impl<T> ClassValue for Option<T>
where
	T: ClassValue,
{
	fn into_class_value(self) -> Option<String> {
		self.and_then(ClassValue::into_class_value)
	}
}

#[macro_export]
macro_rules! raw {
	($t:expr) => {
		::html::RawTextNode($t.into())
	};
}

/// Build an inline style string. Declarations whose value is `None` are skipped.
#[macro_export]
macro_rules! style {
	($($key:expr => $value:expr),* $(,)?) => {{
		let mut style = String::new();
		$(
			if let Some(value) = $crate::StyleValue::into_style_value($value) {
				if !style.is_empty() {
					style.push(' ');
				}
				style.push_str($key);
				style.push_str(": ");
				style.push_str(&value);
				style.push(';');
			}
		)*
		style
	}};
}

/// Join class names with spaces. Empty strings and `None` are skipped.
#[macro_export]
macro_rules! classes {
	($($class:expr),* $(,)?) => {{
		let mut classes: Vec<String> = Vec::new();
		$(
			if let Some(class) = $crate::ClassValue::into_class_value($class) {
				if !class.is_empty() {
					classes.push(class);
				}
			}
		)*
		classes.join(" ")
	}};
}

#[test]
fn test_escapes_text_and_attributes() {
	let node = Node::Host(HostNode {
		name: "div",
		attributes: vec![("title", "a \"quoted\" <value>".into())],
		children: vec!["1 < 2 & 3".into()],
		self_closing: false,
	});
	assert_eq!(
		node.render_to_string(),
		r#"<div title="a &quot;quoted&quot; &lt;value&gt;">1 &lt; 2 &amp; 3</div>"#
	);
}

#[test]
fn test_skips_absent_attributes() {
	let node = Node::Host(HostNode {
		name: "input",
		attributes: vec![
			("disabled", Some(false).into()),
			("required", Some(true).into()),
			("name", Option::<String>::None.into()),
		],
		children: Vec::new(),
		self_closing: true,
	});
	assert_eq!(node.render_to_string(), "<input required />");
}

#[test]
fn test_style_and_classes() {
	let color: Option<String> = None;
	let style = style! {
		"color" => "#fff",
		"background-color" => color,
		"min-width" => "400px".to_owned(),
	};
	assert_eq!(style, "color: #fff; min-width: 400px;");
	let selected: Option<&str> = Some("selected");
	let class = classes!("option", selected, "", Option::<String>::None);
	assert_eq!(class, "option selected");
}
