//! Rewrites the legacy `align` attribute on `<th>` and `<td>` nodes of a
//! hast-shaped document tree into an inline `text-align` style or a class
//! name, for renderers that ignore presentational attributes.

use {
  indexmap::IndexMap,
  serde::{Deserialize, Serialize},
  std::{fmt, io, mem, str::FromStr},
};

pub use crate::{
  error::Error,
  node::{Element, Node},
  options::{ClassNames, Method, TableAlignOptions, TableAlignOptionsBuilder},
  properties::{ClassName, Properties, PropertyValue},
  rewriter::TableAlign,
};

mod error;
mod html;
mod node;
mod options;
mod properties;
mod rewriter;
mod serializable_node;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
