use super::*;

/// A property value as it appears in a hast properties object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
  Null,
  Bool(bool),
  Number(serde_json::Number),
  String(String),
  List(Vec<PropertyValue>),
}

impl PropertyValue {
  #[must_use]
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::String(value) => Some(value),
      _ => None,
    }
  }
}

impl fmt::Display for PropertyValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Null => Ok(()),
      Self::Bool(value) => write!(f, "{value}"),
      Self::Number(value) => match value.as_f64() {
        Some(float) if value.is_f64() => write!(f, "{}", float + 0.0),
        _ => write!(f, "{value}"),
      },
      Self::String(value) => f.write_str(value),
      Self::List(items) => {
        for (index, item) in items.iter().enumerate() {
          if index > 0 {
            f.write_str(",")?;
          }

          write!(f, "{item}")?;
        }

        Ok(())
      }
    }
  }
}

impl From<&str> for PropertyValue {
  fn from(value: &str) -> Self {
    Self::String(value.to_string())
  }
}

impl From<String> for PropertyValue {
  fn from(value: String) -> Self {
    Self::String(value)
  }
}

impl From<bool> for PropertyValue {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

/// The `className` property, kept in whichever shape the producer used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassName {
  #[default]
  Absent,
  Single(String),
  List(Vec<String>),
}

impl ClassName {
  #[must_use]
  pub fn is_absent(&self) -> bool {
    matches!(self, Self::Absent)
  }

  /// Appends `token`, converting to a list only when a value has to be
  /// merged in. Duplicates are kept.
  pub fn push(&mut self, token: impl Into<String>) {
    let token = token.into();

    *self = match mem::take(self) {
      Self::Absent => Self::List(vec![token]),
      Self::Single(existing) => Self::List(vec![existing, token]),
      Self::List(mut tokens) => {
        tokens.push(token);
        Self::List(tokens)
      }
    };
  }

  #[must_use]
  pub fn tokens(&self) -> Vec<&str> {
    match self {
      Self::Absent => Vec::new(),
      Self::Single(token) => vec![token.as_str()],
      Self::List(tokens) => tokens.iter().map(String::as_str).collect(),
    }
  }
}

impl<S: Into<String>> FromIterator<S> for ClassName {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self::List(iter.into_iter().map(Into::into).collect())
  }
}

/// The properties of an element: the keys the rewriter cares about, plus
/// every other key in its original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub align: Option<PropertyValue>,
  #[serde(
    default,
    rename = "className",
    skip_serializing_if = "ClassName::is_absent"
  )]
  pub class_name: ClassName,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub style: Option<PropertyValue>,
  #[serde(flatten)]
  pub other: IndexMap<String, PropertyValue>,
}

impl Properties {
  /// Renders the properties as HTML attributes. Known keys come first.
  pub(crate) fn attributes(&self) -> Vec<(String, String)> {
    let mut attributes = Vec::new();

    if let Some(value) = self.align.as_ref().and_then(Self::attribute_value) {
      attributes.push(("align".to_string(), value));
    }

    if !self.class_name.is_absent() {
      attributes
        .push(("class".to_string(), self.class_name.tokens().join(" ")));
    }

    if let Some(value) = self.style.as_ref().and_then(Self::attribute_value) {
      attributes.push(("style".to_string(), value));
    }

    for (name, value) in &self.other {
      if let Some(value) = Self::attribute_value(value) {
        attributes.push((name.clone(), value));
      }
    }

    attributes
  }

  fn attribute_value(value: &PropertyValue) -> Option<String> {
    match value {
      PropertyValue::Null | PropertyValue::Bool(false) => None,
      PropertyValue::Bool(true) => Some(String::new()),
      PropertyValue::List(items) => Some(
        items
          .iter()
          .map(ToString::to_string)
          .collect::<Vec<String>>()
          .join(" "),
      ),
      value => Some(value.to_string()),
    }
  }

  pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
    match name {
      "align" => self.align = Some(value.into()),
      "class" => self.class_name = value.split_whitespace().collect(),
      "style" => self.style = Some(value.into()),
      _ => {
        self.other.insert(name.to_string(), value.into());
      }
    }
  }
}
