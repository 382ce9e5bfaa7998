//! Common functionality shared across commands

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::LineageError>;
}

/// Trait for configurations that can be created from the parsed command line
pub trait FromCli: Sized {
    fn from_cli(cli: crate::cli::Cli) -> Result<Self, crate::error::LineageError>;
}

/// Macro to implement `TryFrom<Cli>` using [`FromCli`] trait
#[macro_export]
macro_rules! impl_try_from_cli {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Cli> for $config {
            type Error = $crate::error::LineageError;

            fn try_from(cli: $crate::cli::Cli) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCli>::from_cli(cli)
            }
        }
    };
}

/// Error for a builder field that was never set
pub(crate) fn missing_field(field: &str) -> crate::error::LineageError {
    crate::error::LineageError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
