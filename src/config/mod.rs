mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{CONFIG_VERSION, Config, GateConfig, LimitsConfig, RulesConfig, ScanConfig};
pub use validation::validate_config_semantics;
