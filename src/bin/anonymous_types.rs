use std::io;

use snippets::{logging, report, Result};

fn main() -> Result<()> {
    logging::init();
    report::write_anonymous_types(&mut io::stdout().lock())
}
