use env_logger::{Builder, Env};
use std::io::Write;

/// Installs `env_logger` with a `warn` default; `RUST_LOG` overrides it.
/// Calling it twice is harmless.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
