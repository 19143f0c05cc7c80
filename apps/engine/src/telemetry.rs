use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the JSON tracing subscriber for a hosting process.
///
/// `RUST_LOG` wins when set; otherwise `default_directives` applies (for
/// example `"fingerspell=info"`). Event fields are flattened into each JSON
/// line. Returns false when a global subscriber was already installed.
pub fn init_tracing(default_directives: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
