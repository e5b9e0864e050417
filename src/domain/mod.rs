pub mod config;
pub mod error;
pub mod execution;
pub mod import;
pub mod phase;
pub mod script;

pub use config::{ConfigError, DeploymentConfig};
pub use error::AppError;
pub use execution::{ExecutionError, ExecutionResult, ScriptExecution};
pub use import::{ImportService, StepResult};
pub use phase::{PlatformProcess, SystemPhase};
pub use script::{Script, Step};
