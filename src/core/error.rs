use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Script not found: {0}")]
    NotFound(String),

    #[error("Failed to compile script {name}: {message}")]
    Compile { name: String, message: String },

    #[error("Runtime error in script {name}: {message}")]
    Runtime { name: String, message: String },

    #[error("Script engine panicked: {0}")]
    Panicked(String),

    #[error("Unknown script event: {0}")]
    UnknownEvent(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScriptError>;
