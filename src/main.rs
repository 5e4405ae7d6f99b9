use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use structopt::StructOpt;

use bstree::script::{self, Error};

/// Applies a batch of insert/remove records to a binary search tree and
/// prints the surviving keys in order.
///
/// The input is a whitespace-delimited stream of `<op> <key>` records,
/// where `<op>` is `i` (insert) or `r` (remove) and `<key>` is an
/// integer, e.g. `i 5 i 3 r 5`.
#[derive(Debug, StructOpt)]
#[structopt(name = "bstree")]
struct Opt {
    /// File holding the operation records. Reads stdin when omitted.
    input: Option<PathBuf>,
    /// File receiving the ordered keys. Writes to stdout when omitted.
    output: Option<PathBuf>,
}

fn main() {
    let opt = Opt::from_args();
    if let Err(err) = run(&opt) {
        eprintln!("bstree: {}", err);
        process::exit(1);
    }
}

fn run(opt: &Opt) -> Result<(), Error> {
    let source: Box<dyn Read> = match &opt.input {
        Some(path) => Box::new(File::open(path).map_err(Error::Read)?),
        None => Box::new(io::stdin()),
    };
    let sink: Box<dyn Write> = match &opt.output {
        Some(path) => Box::new(File::create(path).map_err(Error::Write)?),
        None => Box::new(io::stdout()),
    };
    script::run(source, sink)
}
