//! Text analysis with pluggable strategies.
//!
//! A [`Strategy`] (word count or most repeated word) can be wrapped in
//! [`Decorator`] layers that rewrite the text before the strategy sees it.
//! [`runner::run`] ties this to a [`Config`]: it loads the input file,
//! resolves the names, and writes the result to an output sink.

pub mod config;
pub mod decorator;
pub mod error;
pub mod normalizer;
pub mod runner;
pub mod strategy;
pub mod tokenizer;

pub use config::Config;
pub use decorator::{Composed, Decorator};
pub use error::{Error, Result};
pub use normalizer::normalize;
pub use runner::run;
pub use strategy::{Report, Strategy};
pub use tokenizer::tokenize;
