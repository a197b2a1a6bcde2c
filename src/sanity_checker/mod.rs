pub mod check_outcome;
pub mod error;
pub mod http_sanity_checker;
pub mod sanity_checker;

use std::io::Write;

use tracing::info;

use crate::sanity_checker::{error::Error, sanity_checker::SanityChecker};

/// The fixed endpoint the binary checks.
pub const TARGET_URL: &str = "https://official-joke-api.appspot.com/random_joke";

/// Runs one check, writes its report to `out` and returns the process exit status.
///
/// Transport faults are not reported on `out`; they come back as `Err`.
pub async fn run<W: Write>(checker: &dyn SanityChecker, out: &mut W) -> Result<u8, Error> {
    let outcome = checker.run_check().await?;
    outcome.report(out)?;

    let exit_status = outcome.exit_status();
    info!("Sanity check finished with exit status {}", exit_status);

    Ok(exit_status)
}
