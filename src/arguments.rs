use super::*;

#[derive(Parser)]
#[command(name = "table-align")]
#[command(
  about = "Rewrite align attributes on table cells into styles or classes",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    long = "class-center",
    value_name = "CLASS",
    help = "Class token for centered cells in class mode"
  )]
  class_center: Option<String>,
  #[arg(
    long = "class-left",
    value_name = "CLASS",
    help = "Class token for left-aligned cells in class mode"
  )]
  class_left: Option<String>,
  #[arg(
    long = "class-right",
    value_name = "CLASS",
    help = "Class token for right-aligned cells in class mode"
  )]
  class_right: Option<String>,
  #[arg(
    long,
    value_name = "FILE",
    help = "JSON file with `method` and `classes` options"
  )]
  config: Option<PathBuf>,
  #[arg(
    long,
    conflicts_with = "json",
    help = "Parse HTML input as a fragment instead of a document"
  )]
  fragment: bool,
  #[arg(value_name = "FILE", help = "Input file, read from stdin when omitted")]
  input: Option<PathBuf>,
  #[arg(long, help = "Read and write a hast JSON tree instead of HTML")]
  json: bool,
  #[arg(
    long,
    value_name = "METHOD",
    help = "Rewrite strategy: `style` or `class`"
  )]
  method: Option<Method>,
  #[arg(short, long, help = "Log every rewritten cell to stderr")]
  verbose: bool,
}

impl Arguments {
  fn init_tracing(&self) {
    let filter = if self.verbose {
      EnvFilter::new("debug")
    } else {
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(io::stderr)
      .init();
  }

  fn options(&self) -> Result<TableAlignOptions> {
    let options = match &self.config {
      Some(path) => {
        let json = fs::read_to_string(path).with_context(|| {
          format!("failed to read config from `{}`", path.display())
        })?;

        TableAlignOptions::from_json(&json).with_context(|| {
          format!("invalid config in `{}`", path.display())
        })?
      }
      None => TableAlignOptions::default(),
    };

    let mut builder = TableAlignOptionsBuilder::from(options);

    if let Some(method) = self.method {
      builder = builder.method(method);
    }

    if let Some(left) = &self.class_left {
      builder = builder.left_class(left.as_str());
    }

    if let Some(center) = &self.class_center {
      builder = builder.center_class(center.as_str());
    }

    if let Some(right) = &self.class_right {
      builder = builder.right_class(right.as_str());
    }

    Ok(builder.build())
  }

  fn read_input(&self) -> Result<String> {
    match &self.input {
      Some(path) => fs::read_to_string(path).with_context(|| {
        format!("failed to read file from `{}`", path.display())
      }),
      None => {
        let mut input = String::new();

        io::stdin()
          .read_to_string(&mut input)
          .context("failed to read stdin")?;

        Ok(input)
      }
    }
  }

  pub(crate) fn run(self) -> Result {
    self.init_tracing();

    let options = self.options()?;

    let source = self.read_input()?;

    let mut tree = if self.json {
      Node::from_json(&source).context("failed to parse hast tree")?
    } else if self.fragment {
      Node::from_html_fragment(&source)
    } else {
      Node::from_html(&source)
    };

    let rewritten = TableAlign::new(options).run(&mut tree);

    tracing::info!(rewritten, "rewrote table cell alignments");

    let output = if self.json {
      tree.to_json()?
    } else {
      tree.to_html().context("failed to serialize html")?
    };

    println!("{output}");

    Ok(())
  }
}
