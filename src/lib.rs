pub mod cli_arguments;
pub mod http_client;
pub mod sanity_checker;
