use iagate::{cli, config, IagateError};

fn init_tracing() {
    use tracing_subscriber::{
        filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt as _, Registry,
    };

    Registry::default()
        .with(
            fmt::Layer::new()
                .with_ansi(true)
                .with_file(false)
                .with_line_number(false)
                .with_target(true)
                .with_timer(fmt::time::ChronoLocal::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::try_from_env(config::env::LOG_DIRECTIVE)
                .or_else(|_| EnvFilter::try_new("warn"))
                .unwrap(),
        )
        .init();
}

// Every operation runs on a single logical thread.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    if let Err(err) = cli::parse().run().await {
        if let Some(backtrace) = err.backtrace() {
            tracing::debug!("{:?}", backtrace);
        }
        let code = match err {
            IagateError::InvalidCredentials | IagateError::Unauthenticated => 2,
            IagateError::PermissionDenied { .. } => 3,
            _ => {
                tracing::error!("{err}");
                1
            }
        };
        if err.is_retryable() {
            eprintln!("{}, try again", err);
        } else if matches!(err, IagateError::Unauthenticated) {
            eprintln!("please log in first");
        } else {
            eprintln!("{}", err);
        }
        std::process::exit(code);
    }
}
