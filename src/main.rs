use {
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
  },
  table_align::{
    Method, Node, TableAlign, TableAlignOptions, TableAlignOptionsBuilder,
  },
  tracing_subscriber::EnvFilter,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
