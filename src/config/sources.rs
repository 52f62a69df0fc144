//! Config sources, one module per layer.

pub mod environment {
    //! Environment variable source: FILEDAG prefix with __ separator

    use config::builder::DefaultState;
    use config::{ConfigBuilder, ConfigError, Environment};

    /// Add environment variable overlay to builder.
    /// `FILEDAG__GRAPH__CYCLE_POLICY=reject` sets `graph.cycle_policy`.
    pub fn add_to_builder(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(builder.add_source(
            Environment::with_prefix("FILEDAG")
                .separator("__")
                .try_parsing(true),
        ))
    }
}

pub mod global_file {
    //! Global config file under the XDG config home; optional.

    use crate::config::paths::global_config_path;
    use config::builder::DefaultState;
    use config::{ConfigBuilder, ConfigError, File};

    pub fn add_to_builder(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        match global_config_path() {
            Some(path) => Ok(builder.add_source(File::from(path).required(false))),
            None => Ok(builder),
        }
    }
}

pub mod explicit_file {
    //! File passed on the command line; required.

    use config::builder::DefaultState;
    use config::{ConfigBuilder, ConfigError, File};
    use std::path::Path;

    pub fn add_to_builder(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(builder.add_source(File::from(path).required(true)))
    }
}
