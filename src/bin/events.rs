use std::io;

use snippets::{logging, report, Result};

fn main() -> Result<()> {
    logging::init();
    report::write_events(&mut io::stdout().lock())
}
