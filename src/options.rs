use super::*;

/// How an alignment gets expressed once the `align` attribute is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
  Class,
  #[default]
  Style,
}

impl FromStr for Method {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "class" => Ok(Self::Class),
      "style" => Ok(Self::Style),
      _ => Err(Error::UnknownMethod(s.to_string())),
    }
  }
}

impl fmt::Display for Method {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Class => "class",
      Self::Style => "style",
    })
  }
}

/// Class tokens used in class mode, one per recognized alignment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
  pub center: String,
  pub left: String,
  pub right: String,
}

impl Default for ClassNames {
  fn default() -> Self {
    Self {
      center: "center".to_string(),
      left: "left".to_string(),
      right: "right".to_string(),
    }
  }
}

impl ClassNames {
  /// Resolves the token for `alignment`, which must be exactly `left`,
  /// `center` or `right`.
  #[must_use]
  pub fn get(&self, alignment: &str) -> Option<&str> {
    match alignment {
      "center" => Some(self.center.as_str()),
      "left" => Some(self.left.as_str()),
      "right" => Some(self.right.as_str()),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableAlignOptions {
  pub classes: ClassNames,
  pub method: Method,
}

impl TableAlignOptions {
  #[must_use]
  pub fn builder() -> TableAlignOptionsBuilder {
    TableAlignOptionsBuilder::default()
  }

  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }
}

#[derive(Default)]
pub struct TableAlignOptionsBuilder {
  inner: TableAlignOptions,
}

impl From<TableAlignOptions> for TableAlignOptionsBuilder {
  fn from(inner: TableAlignOptions) -> Self {
    Self { inner }
  }
}

impl TableAlignOptionsBuilder {
  #[must_use]
  pub fn build(self) -> TableAlignOptions {
    self.inner
  }

  #[must_use]
  pub fn center_class(self, center: impl Into<String>) -> Self {
    Self {
      inner: TableAlignOptions {
        classes: ClassNames {
          center: center.into(),
          ..self.inner.classes
        },
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn classes(self, classes: ClassNames) -> Self {
    Self {
      inner: TableAlignOptions {
        classes,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn left_class(self, left: impl Into<String>) -> Self {
    Self {
      inner: TableAlignOptions {
        classes: ClassNames {
          left: left.into(),
          ..self.inner.classes
        },
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn method(self, method: Method) -> Self {
    Self {
      inner: TableAlignOptions {
        method,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn right_class(self, right: impl Into<String>) -> Self {
    Self {
      inner: TableAlignOptions {
        classes: ClassNames {
          right: right.into(),
          ..self.inner.classes
        },
        ..self.inner
      },
    }
  }
}
