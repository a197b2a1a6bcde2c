use clap::Parser;

/// Checks that the public joke API answers a GET with 200 and prints its body.
///
/// The target URL is fixed. Log verbosity follows `RUST_LOG`.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArguments {}

#[cfg(test)]
mod test {
    use clap::Parser;

    use crate::cli_arguments::CliArguments;

    #[test]
    fn test_cli_arguments_without_flags() {
        assert!(CliArguments::try_parse_from(["sanity-check"]).is_ok());
    }

    #[test]
    fn test_cli_arguments_reject_a_target_url() {
        let result = CliArguments::try_parse_from([
            "sanity-check",
            "--url",
            "http://localhost:9000",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_cli_arguments_reject_positional_arguments() {
        assert!(CliArguments::try_parse_from(["sanity-check", "https://example.com"]).is_err());
    }
}
