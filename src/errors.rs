use thiserror::Error;
use crate::manager_owm::errors::OwmError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ConfigError::File: could not read {0}: {1}")]
    File(String, std::io::Error),
    #[error("ConfigError::Document: {0}")]
    Document(#[from] toml::de::Error),
    #[error("ConfigError::MissingEnv: environment variable {0} is not set")]
    MissingEnv(String),
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("LoggingError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("LoggingError::Config: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("LoggingError::Logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

#[derive(Error, Debug)]
pub enum ReadmeError {
    #[error("ReadmeError::Read: could not read {0}: {1}")]
    Read(String, std::io::Error),
    #[error("ReadmeError::Write: could not write {0}: {1}")]
    Write(String, std::io::Error),
}

#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Weather(#[from] OwmError),
    #[error(transparent)]
    Readme(#[from] ReadmeError),
}
