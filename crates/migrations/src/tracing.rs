use {
    std::panic,
    time::macros::format_description,
    tracing_subscriber::fmt::{time::UtcTime, writer::MakeWriterExt as _},
};

/// Initializes the tracing subscriber used by the binary.
///
/// `env_filter` uses the tracing-subscriber env filter syntax, e.g.
/// "warn,migrations=debug". Errors go to stderr, everything else to stdout.
pub fn initialize(env_filter: &str) {
    tracing_subscriber::fmt::fmt()
        .with_timer(UtcTime::new(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        )))
        .with_env_filter(env_filter)
        .with_ansi(atty::is(atty::Stream::Stdout))
        .with_writer(
            std::io::stderr
                .with_max_level(tracing::Level::ERROR)
                .or_else(std::io::stdout),
        )
        .init();
    set_panic_hook();
}

// Logs panic information before handing over to the default hook, which
// keeps the full backtrace output.
fn set_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let thread = std::thread::current();
        tracing::error!("thread '{}' {}", thread.name().unwrap_or("<unnamed>"), info);
        default_hook(info);
    }));
}
