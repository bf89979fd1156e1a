//! Command handlers, one module per subcommand.

pub mod init;
