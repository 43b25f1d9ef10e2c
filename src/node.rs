use super::*;

/// A node of a hast-shaped document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
  Root {
    #[serde(default)]
    children: Vec<Node>,
  },
  Element(Element),
  Text {
    value: String,
  },
  Comment {
    value: String,
  },
  Doctype,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
  #[serde(rename = "tagName")]
  pub tag_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub properties: Option<Properties>,
  #[serde(default)]
  pub children: Vec<Node>,
}

impl Element {
  #[must_use]
  pub fn new(tag_name: impl Into<String>) -> Self {
    Self {
      tag_name: tag_name.into(),
      properties: None,
      children: Vec::new(),
    }
  }

  #[must_use]
  pub fn with_children(self, children: Vec<Node>) -> Self {
    Self { children, ..self }
  }

  #[must_use]
  pub fn with_properties(self, properties: Properties) -> Self {
    Self {
      properties: Some(properties),
      ..self
    }
  }
}

impl Node {
  #[must_use]
  pub fn children(&self) -> Option<&[Node]> {
    match self {
      Self::Root { children } | Self::Element(Element { children, .. }) => {
        Some(children)
      }
      _ => None,
    }
  }

  pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
    match self {
      Self::Root { children } | Self::Element(Element { children, .. }) => {
        Some(children)
      }
      _ => None,
    }
  }

  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  #[must_use]
  pub fn root(children: Vec<Node>) -> Self {
    Self::Root { children }
  }

  #[must_use]
  pub fn text(value: impl Into<String>) -> Self {
    Self::Text {
      value: value.into(),
    }
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}

// Children are torn down from a heap stack so deep trees cannot overflow
// the call stack while dropping.
impl Drop for Node {
  fn drop(&mut self) {
    let Some(children) = self.children_mut() else {
      return;
    };

    let mut stack = mem::take(children);

    while let Some(mut node) = stack.pop() {
      if let Some(children) = node.children_mut() {
        stack.append(children);
      }
    }
  }
}

impl From<Element> for Node {
  fn from(element: Element) -> Self {
    Self::Element(element)
  }
}
