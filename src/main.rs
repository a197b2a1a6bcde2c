use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use sanity_check::cli_arguments::CliArguments;
use sanity_check::http_client::reqwest_http_client::ReqwestHttpClient;
use sanity_check::sanity_checker::error::Error;
use sanity_check::sanity_checker::http_sanity_checker::HttpSanityChecker;
use sanity_check::sanity_checker::{TARGET_URL, run};
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// A reported outcome exits with its status. A transport fault stays an `Err`
/// so the runtime prints it and exits non-zero.
fn exit_code(result: Result<u8, Error>) -> Result<ExitCode, Error> {
    match result {
        Ok(exit_status) => Ok(ExitCode::from(exit_status)),
        Err(err) => {
            error!("Sanity check against {} aborted: {}", TARGET_URL, err);
            Err(err)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    CliArguments::parse();

    let checker = HttpSanityChecker::new(Arc::new(ReqwestHttpClient::default()), TARGET_URL);

    exit_code(run(&checker, &mut std::io::stdout()).await)
}
