use super::*;

const TABLE_CELL_TAGS: &[&str] = &["td", "th"];

/// Replaces the `align` property of `<th>` and `<td>` elements with either
/// a `text-align` declaration or a class token.
#[derive(Debug, Clone, Default)]
pub struct TableAlign {
  options: TableAlignOptions,
}

impl TableAlign {
  fn merge_style(existing: Option<&PropertyValue>, alignment: &str) -> String {
    let rule = format!("text-align: {alignment};");

    let trimmed = existing.and_then(PropertyValue::as_str).map(|style| {
      style.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
    });

    match trimmed {
      Some(style) if !style.is_empty() => {
        if style.ends_with(';') {
          format!("{style} {rule}")
        } else {
          format!("{style}; {rule}")
        }
      }
      _ => rule,
    }
  }

  #[must_use]
  pub fn new(options: TableAlignOptions) -> Self {
    Self { options }
  }

  #[must_use]
  pub fn options(&self) -> &TableAlignOptions {
    &self.options
  }

  /// Returns whether `element` was a table cell carrying an alignment.
  fn rewrite(&self, element: &mut Element) -> bool {
    if !TABLE_CELL_TAGS.contains(&element.tag_name.as_str()) {
      return false;
    }

    let Some(properties) = element.properties.as_mut() else {
      return false;
    };

    let alignment = match &properties.align {
      None | Some(PropertyValue::Null) => return false,
      Some(value) => value.to_string(),
    };

    match (self.options.method, self.options.classes.get(&alignment)) {
      (Method::Class, Some(token)) => properties.class_name.push(token),
      (method, _) => {
        if method == Method::Class {
          tracing::trace!(
            alignment = %alignment,
            "no class token for alignment, falling back to style"
          );
        }

        properties.style = Some(PropertyValue::String(Self::merge_style(
          properties.style.as_ref(),
          &alignment,
        )));
      }
    }

    properties.align = None;

    tracing::debug!(
      tag = %element.tag_name,
      alignment = %alignment,
      method = %self.options.method,
      "rewrote table cell alignment"
    );

    true
  }

  /// Rewrites every table cell reachable from `tree` in place, visiting
  /// nodes in document order, and returns how many cells were rewritten.
  pub fn run(&self, tree: &mut Node) -> usize {
    let mut rewritten = 0;

    let mut stack = vec![tree];

    while let Some(node) = stack.pop() {
      if let Node::Element(element) = &mut *node {
        if self.rewrite(element) {
          rewritten += 1;
        }
      }

      if let Some(children) = node.children_mut() {
        stack.extend(children.iter_mut().rev());
      }
    }

    tracing::debug!(
      rewritten,
      method = %self.options.method,
      "table alignment pass finished"
    );

    rewritten
  }

  #[must_use]
  pub fn transform(&self, mut tree: Node) -> Node {
    self.run(&mut tree);
    tree
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn cell(tag: &str, properties: Properties) -> Node {
    Element::new(tag)
      .with_properties(properties)
      .with_children(vec![Node::text("content")])
      .into()
  }

  fn table(cells: Vec<Node>) -> Node {
    Node::root(vec![Element::new("table")
      .with_children(vec![Element::new("tr").with_children(cells).into()])
      .into()])
  }

  fn aligned(align: &str) -> Properties {
    Properties {
      align: Some(align.into()),
      ..Properties::default()
    }
  }

  fn cells(tree: &Node) -> Vec<&Properties> {
    let mut found = Vec::new();
    let mut stack = vec![tree];

    while let Some(node) = stack.pop() {
      if let Node::Element(element) = node {
        if TABLE_CELL_TAGS.contains(&element.tag_name.as_str()) {
          if let Some(properties) = &element.properties {
            found.push(properties);
          }
        }
      }

      if let Some(children) = node.children() {
        stack.extend(children.iter().rev());
      }
    }

    found
  }

  fn class_mode() -> TableAlign {
    TableAlign::new(TableAlignOptions::builder().method(Method::Class).build())
  }

  #[test]
  fn removes_align_from_every_cell() {
    for rewriter in [TableAlign::default(), class_mode()] {
      let mut tree = table(vec![
        cell("th", aligned("left")),
        cell("td", aligned("justify")),
        cell("td", aligned("bogus")),
        cell("td", aligned("right")),
      ]);

      assert_eq!(rewriter.run(&mut tree), 4);

      assert!(cells(&tree).iter().all(|p| p.align.is_none()));
    }
  }

  #[test]
  fn leaves_non_cells_untouched() {
    let mut tree = Node::root(vec![Element::new("div")
      .with_properties(aligned("right"))
      .into()]);

    let before = tree.clone();

    assert_eq!(TableAlign::default().run(&mut tree), 0);
    assert_eq!(class_mode().run(&mut tree), 0);

    assert_eq!(tree, before);
  }

  #[test]
  fn leaves_cells_without_alignment_untouched() {
    let mut tree = table(vec![
      Element::new("td").into(),
      cell("td", Properties::default()),
      cell(
        "th",
        Properties {
          align: Some(PropertyValue::Null),
          style: Some("color: red".into()),
          ..Properties::default()
        },
      ),
    ]);

    let before = tree.clone();

    assert_eq!(TableAlign::default().run(&mut tree), 0);

    assert_eq!(tree, before);
  }

  #[test]
  fn writes_style_when_none_exists() {
    let mut tree = table(vec![cell("td", aligned("right"))]);

    TableAlign::default().run(&mut tree);

    assert_eq!(cells(&tree)[0].style, Some("text-align: right;".into()));
  }

  #[test]
  fn appends_to_style_without_trailing_semicolon() {
    let mut tree = table(vec![cell(
      "td",
      Properties {
        style: Some("color: red".into()),
        ..aligned("right")
      },
    )]);

    TableAlign::default().run(&mut tree);

    assert_eq!(
      cells(&tree)[0].style,
      Some("color: red; text-align: right;".into())
    );
  }

  #[test]
  fn appends_to_style_with_trailing_semicolon_and_whitespace() {
    let mut tree = table(vec![cell(
      "td",
      Properties {
        style: Some("  font-weight: bold;  ".into()),
        ..aligned("center")
      },
    )]);

    TableAlign::default().run(&mut tree);

    assert_eq!(
      cells(&tree)[0].style,
      Some("font-weight: bold; text-align: center;".into())
    );
  }

  #[test]
  fn trims_byte_order_marks_around_style() {
    let mut tree = table(vec![cell(
      "td",
      Properties {
        style: Some("\u{feff} color: red\u{feff}".into()),
        ..aligned("right")
      },
    )]);

    TableAlign::default().run(&mut tree);

    assert_eq!(
      cells(&tree)[0].style,
      Some("color: red; text-align: right;".into())
    );
  }

  #[test]
  fn blank_or_non_string_style_is_replaced() {
    let mut tree = table(vec![
      cell(
        "td",
        Properties {
          style: Some("   ".into()),
          ..aligned("left")
        },
      ),
      cell(
        "td",
        Properties {
          style: Some(PropertyValue::Bool(true)),
          ..aligned("left")
        },
      ),
    ]);

    TableAlign::default().run(&mut tree);

    for properties in cells(&tree) {
      assert_eq!(properties.style, Some("text-align: left;".into()));
    }
  }

  #[test]
  fn style_mode_passes_unknown_values_through() {
    let mut tree = table(vec![cell("td", aligned("justify"))]);

    TableAlign::default().run(&mut tree);

    assert_eq!(cells(&tree)[0].style, Some("text-align: justify;".into()));
  }

  #[test]
  fn non_string_alignment_uses_its_string_form() {
    let mut tree = table(vec![cell(
      "td",
      Properties {
        align: Some(PropertyValue::Number(1u64.into())),
        ..Properties::default()
      },
    )]);

    TableAlign::default().run(&mut tree);

    assert_eq!(cells(&tree)[0].style, Some("text-align: 1;".into()));
  }

  #[test]
  fn integral_float_alignment_drops_fraction() {
    let mut tree = table(vec![cell(
      "td",
      Properties {
        align: Some(serde_json::from_str("1.0").unwrap()),
        ..Properties::default()
      },
    )]);

    TableAlign::default().run(&mut tree);

    assert_eq!(cells(&tree)[0].style, Some("text-align: 1;".into()));
  }

  #[test]
  fn cell_events_carry_method() {
    use std::{
      io::Write,
      sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
      fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
      }

      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }

    let captured = Captured::default();

    let writer = captured.clone();

    let subscriber = tracing_subscriber::fmt()
      .with_max_level(tracing::Level::DEBUG)
      .with_ansi(false)
      .with_writer(move || writer.clone())
      .finish();

    tracing::subscriber::with_default(subscriber, || {
      let mut tree = table(vec![cell("th", aligned("right"))]);
      class_mode().run(&mut tree);
    });

    let output =
      String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();

    let line = output
      .lines()
      .find(|line| line.contains("rewrote table cell alignment"))
      .unwrap_or_else(|| panic!("no cell event in {output:?}"));

    assert!(line.contains("tag=th"), "{line}");
    assert!(line.contains("alignment=right"), "{line}");
    assert!(line.contains("method=class"), "{line}");
  }

  #[test]
  fn class_mode_creates_class_list() {
    let mut tree = table(vec![cell("td", aligned("right"))]);

    class_mode().run(&mut tree);

    let properties = cells(&tree)[0];

    assert_eq!(properties.class_name, ClassName::List(vec!["right".into()]));
    assert_eq!(properties.style, None);
  }

  #[test]
  fn class_mode_extends_string_class() {
    let mut tree = table(vec![cell(
      "td",
      Properties {
        class_name: ClassName::Single("string-class".into()),
        ..aligned("center")
      },
    )]);

    class_mode().run(&mut tree);

    assert_eq!(
      cells(&tree)[0].class_name,
      ClassName::List(vec!["string-class".into(), "center".into()])
    );
  }

  #[test]
  fn class_mode_extends_class_list() {
    let mut tree = table(vec![cell(
      "td",
      Properties {
        class_name: ClassName::List(vec!["existing-class".into()]),
        ..aligned("right")
      },
    )]);

    class_mode().run(&mut tree);

    assert_eq!(
      cells(&tree)[0].class_name,
      ClassName::List(vec!["existing-class".into(), "right".into()])
    );
  }

  #[test]
  fn class_mode_keeps_existing_style() {
    let mut tree = table(vec![cell(
      "th",
      Properties {
        style: Some("color: red".into()),
        ..aligned("left")
      },
    )]);

    class_mode().run(&mut tree);

    let properties = cells(&tree)[0];

    assert_eq!(properties.style, Some("color: red".into()));
    assert_eq!(properties.class_name.tokens(), vec!["left"]);
  }

  #[test]
  fn class_mode_falls_back_to_style_for_unrecognized_values() {
    let mut tree = table(vec![
      cell("td", aligned("justify")),
      cell("td", aligned("Right")),
    ]);

    class_mode().run(&mut tree);

    let found = cells(&tree);

    assert_eq!(found[0].style, Some("text-align: justify;".into()));
    assert_eq!(found[0].class_name, ClassName::Absent);
    assert_eq!(found[1].style, Some("text-align: Right;".into()));
  }

  #[test]
  fn class_mode_uses_custom_tokens() {
    let rewriter = TableAlign::new(
      TableAlignOptions::builder()
        .method(Method::Class)
        .left_class("text-left")
        .center_class("text-center")
        .right_class("text-right")
        .build(),
    );

    let mut tree = table(vec![
      cell("th", aligned("left")),
      cell("td", aligned("center")),
      cell("td", aligned("right")),
    ]);

    rewriter.run(&mut tree);

    assert_eq!(
      cells(&tree)
        .iter()
        .map(|p| p.class_name.tokens())
        .collect::<Vec<_>>(),
      vec![vec!["text-left"], vec!["text-center"], vec!["text-right"]]
    );
  }

  #[test]
  fn second_pass_is_a_no_op() {
    for rewriter in [TableAlign::default(), class_mode()] {
      let mut tree = table(vec![
        cell("th", aligned("center")),
        cell(
          "td",
          Properties {
            style: Some("color: red".into()),
            class_name: ClassName::Single("x".into()),
            ..aligned("right")
          },
        ),
      ]);

      rewriter.run(&mut tree);

      let once = tree.clone();

      assert_eq!(rewriter.run(&mut tree), 0);
      assert_eq!(tree, once);
    }
  }

  #[test]
  fn visits_nested_tables() {
    let mut inner = table(vec![cell("td", aligned("left"))]);

    let children = inner.children_mut().map(mem::take).unwrap_or_default();

    let mut tree = table(vec![Element::new("td")
      .with_properties(aligned("right"))
      .with_children(children)
      .into()]);

    assert_eq!(TableAlign::default().run(&mut tree), 2);

    assert_eq!(
      cells(&tree)
        .iter()
        .map(|p| p.style.clone())
        .collect::<Vec<_>>(),
      vec![
        Some("text-align: right;".into()),
        Some("text-align: left;".into())
      ]
    );
  }

  #[test]
  fn transform_returns_rewritten_tree() {
    let tree = TableAlign::default().transform(table(vec![cell(
      "td",
      aligned("center"),
    )]));

    assert_eq!(cells(&tree)[0].style, Some("text-align: center;".into()));
  }

  #[test]
  fn handles_deep_trees() {
    let mut tree = cell("td", aligned("right"));

    for _ in 0..100_000 {
      tree = Element::new("div").with_children(vec![tree]).into();
    }

    assert_eq!(TableAlign::default().run(&mut tree), 1);
  }
}
