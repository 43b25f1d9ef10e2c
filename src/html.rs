use {
  super::*,
  ego_tree::{iter::Edge, NodeRef},
  scraper::{Html, Node as HtmlNode},
};

impl Node {
  fn convert_leaf(node: &HtmlNode) -> Option<Self> {
    match node {
      HtmlNode::Doctype(_) => Some(Self::Doctype),
      HtmlNode::Comment(comment) => Some(Self::Comment {
        value: comment.comment.to_string(),
      }),
      HtmlNode::Text(text) => Some(Self::text(text.text.to_string())),
      _ => None,
    }
  }

  /// Converts the descendants of `parent` without recursing, so nesting
  /// depth is bounded by the heap rather than the call stack.
  fn convert_children(parent: NodeRef<'_, HtmlNode>) -> Vec<Self> {
    let mut open = Vec::new();
    let mut levels = vec![Vec::new()];

    for edge in parent.traverse() {
      match edge {
        Edge::Open(node) if node == parent => {}
        Edge::Close(node) if node == parent => {}
        Edge::Open(node) => match node.value() {
          HtmlNode::Element(element) => {
            let mut properties = Properties::default();

            for (name, value) in element.attrs() {
              properties.set_attribute(name, value);
            }

            open.push(
              Element::new(element.name()).with_properties(properties),
            );
            levels.push(Vec::new());
          }
          value => {
            if let (Some(converted), Some(siblings)) =
              (Self::convert_leaf(value), levels.last_mut())
            {
              siblings.push(converted);
            }
          }
        },
        Edge::Close(node) => {
          if !node.value().is_element() {
            continue;
          }

          let (Some(element), Some(children)) = (open.pop(), levels.pop())
          else {
            continue;
          };

          if let Some(siblings) = levels.last_mut() {
            siblings.push(element.with_children(children).into());
          }
        }
      }
    }

    levels.pop().unwrap_or_default()
  }

  /// Parses a complete HTML document into a tree rooted at [`Node::Root`].
  #[must_use]
  pub fn from_html(html: &str) -> Self {
    let document = Html::parse_document(html);

    Self::root(Self::convert_children(document.tree.root()))
  }

  /// Parses an HTML fragment. The parser's implicit `<html>` wrapper is
  /// dropped, so the root's children are the fragment's top-level nodes.
  #[must_use]
  pub fn from_html_fragment(html: &str) -> Self {
    let fragment = Html::parse_fragment(html);

    Self::root(Self::convert_children(*fragment.root_element()))
  }

  /// Serializes the tree as HTML. A root serializes as its children only.
  pub fn to_html(&self) -> Result<String> {
    let mut buffer = Vec::new();

    serializable_node::write_html(self, &mut buffer)?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
  }
}
