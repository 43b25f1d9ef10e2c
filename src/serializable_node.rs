use {
  super::*,
  html5ever::{
    serialize::{
      serialize, Serialize, SerializeOpts, Serializer, TraversalScope,
    },
    namespace_url, ns, LocalName, QualName,
  },
  std::io::Write,
};

enum Edge<'a> {
  Close(QualName),
  Open(&'a Node),
}

pub(crate) struct SerializableNode<'a> {
  pub(crate) node: &'a Node,
}

impl Serialize for SerializableNode<'_> {
  fn serialize<S: Serializer>(
    &self,
    serializer: &mut S,
    traversal_scope: TraversalScope,
  ) -> io::Result<()> {
    let mut stack: Vec<Edge<'_>> = match (self.node, traversal_scope) {
      (Node::Element(element), TraversalScope::ChildrenOnly(_)) => {
        element.children.iter().rev().map(Edge::Open).collect()
      }
      (node, _) => vec![Edge::Open(node)],
    };

    while let Some(edge) = stack.pop() {
      let node = match edge {
        Edge::Close(name) => {
          serializer.end_elem(name)?;
          continue;
        }
        Edge::Open(node) => node,
      };

      match node {
        Node::Root { children } => {
          stack.extend(children.iter().rev().map(Edge::Open));
        }
        Node::Element(element) => {
          let name = QualName::new(
            None,
            ns!(html),
            LocalName::from(element.tag_name.as_str()),
          );

          let attributes = element
            .properties
            .as_ref()
            .map(Properties::attributes)
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| {
              (
                QualName::new(None, ns!(), LocalName::from(name)),
                value,
              )
            })
            .collect::<Vec<(QualName, String)>>();

          serializer.start_elem(
            name.clone(),
            attributes.iter().map(|(name, value)| (name, value.as_str())),
          )?;

          stack.push(Edge::Close(name));
          stack.extend(element.children.iter().rev().map(Edge::Open));
        }
        Node::Text { value } => serializer.write_text(value)?,
        Node::Comment { value } => serializer.write_comment(value)?,
        Node::Doctype => serializer.write_doctype("html")?,
      }
    }

    Ok(())
  }
}

pub(crate) fn write_html(node: &Node, writer: impl Write) -> io::Result<()> {
  serialize(
    writer,
    &SerializableNode { node },
    SerializeOpts {
      traversal_scope: TraversalScope::IncludeNode,
      ..SerializeOpts::default()
    },
  )
}
