use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Terminal failures of a run. None of them are retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Помилка читання файлу: {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Невідома стратегія: {0}")]
    UnknownStrategy(String),

    #[error("Невідомий декоратор: {0}")]
    UnknownDecorator(String),

    #[error("Помилка виводу: {0}")]
    Output(#[from] io::Error),
}
