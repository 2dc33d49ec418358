use std::borrow::Cow;
use std::io::Write;

use crate::error::{Error, Result};
use crate::normalizer::normalize;
use crate::strategy::{Report, Strategy};

/// A text transformation applied before the strategy sees the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decorator {
    RemoveExtraSpaces,
}

impl Decorator {
    pub fn transform(&self, text: &str) -> String {
        match self {
            Decorator::RemoveExtraSpaces => normalize(text),
        }
    }

    /// The name this decorator is selected by on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Decorator::RemoveExtraSpaces => "removeExtraSpaces",
        }
    }

    /// Resolves a command-line decorator name; `none` selects no decorator.
    pub fn from_flag(s: &str) -> Result<Option<Self>> {
        match s {
            "none" => Ok(None),
            "removeExtraSpaces" => Ok(Some(Decorator::RemoveExtraSpaces)),
            other => Err(Error::UnknownDecorator(other.to_string())),
        }
    }
}

/// A strategy together with the decorator layers wrapped around it.
///
/// Layers are stored innermost first. Running the composition walks them from
/// the outermost inwards: each layer transforms the text it receives, writes
/// the result to the output sink on its own line, and passes it on. The
/// strategy finally analyzes whatever the innermost layer produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composed {
    strategy: Strategy,
    layers: Vec<Decorator>,
}

impl Composed {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            layers: Vec::new(),
        }
    }

    /// Adds `decorator` as the new outermost layer.
    pub fn wrap(mut self, decorator: Decorator) -> Self {
        self.layers.push(decorator);
        self
    }

    pub fn layers(&self) -> &[Decorator] {
        &self.layers
    }

    pub fn analyze<W: Write>(&self, text: &str, out: &mut W) -> Result<Report> {
        let mut current = Cow::Borrowed(text);
        for layer in self.layers.iter().rev() {
            let transformed = layer.transform(&current);
            writeln!(out, "{}", transformed)?;
            current = Cow::Owned(transformed);
        }
        Ok(self.strategy.analyze(&current))
    }
}

impl From<Strategy> for Composed {
    fn from(strategy: Strategy) -> Self {
        Composed::new(strategy)
    }
}
