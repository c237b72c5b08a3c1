mod color;
mod convert;
mod shared;
mod utils;

use std::io::{self, Write};
use std::process;

use anyhow::Result;
use clap::Parser;

use crate::convert::{Message, Request, Status};
use crate::shared::constants;
use crate::utils::logger;

/// Convert an RGB hex colour into an xterm 256-colour palette index, a
/// terminal escape sequence, or an editor :hi highlight statement.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Foreground colour as six hex digits; a leading `#` or similar
    /// prefix is skipped. Printed as a 256-colour index unless --bgcolour
    /// or --term change the output shape.
    #[arg(short, long)]
    colour: Option<String>,

    /// Background colour for :hi statements. Passing this switches to :hi
    /// output; the literal value `transparent` leaves the background
    /// fields unset.
    #[arg(short, long)]
    bgcolour: Option<String>,

    /// Highlight group name used in :hi output.
    #[arg(short, long, default_value = constants::DEFAULT_TAG)]
    tag: String,

    /// Write an xterm 256-colour escape code instead of a bare index.
    #[arg(long)]
    term: bool,
}

fn deliver(status: &mut Status, message: Message) -> Result<()> {
    match message {
        Message::Status(s) => *status = s,
        Message::Result(line) => writeln!(io::stdout(), "{}", line)?,
        Message::Diagnostic(line) => writeln!(io::stderr(), "Error: {}", line)?,
    }
    Ok(())
}

fn main() {
    logger::init();

    let cli = Cli::parse();
    let request = Request {
        colour: cli.colour,
        bgcolour: cli.bgcolour,
        tag: cli.tag,
        term: cli.term,
    };
    logger::debug(&format!("request: {:?}", request));

    let mut status = Status::Ok;
    for message in convert::run(request) {
        if let Err(err) = deliver(&mut status, message) {
            // Output delivery is assumed infallible; a failed write aborts
            // rather than exiting with an ordinary failure status.
            panic!("Fatal error: {}", err);
        }
    }

    logger::debug(&format!("exiting with status {:?}", status));
    process::exit(status as i32);
}
