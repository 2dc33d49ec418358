use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, warn};

use crate::config::Config;
use crate::decorator::{Composed, Decorator};
use crate::error::{Error, Result};
use crate::strategy::{Report, Strategy};

/// Runs one analysis pass described by `config`.
///
/// The input file is loaded first, then the strategy and decorator names are
/// resolved, and only then is the composed analysis executed against the
/// loaded text. Any failure before execution returns early, so nothing is
/// written to `out` in that case. On success the decorator output (if any)
/// and the report line are written to `out` and the report is returned.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Report> {
    let result = execute(config, out);
    if let Err(ref e) = result {
        debug!("run aborted: {:?}", e);
    }
    result
}

fn execute<W: Write>(config: &Config, out: &mut W) -> Result<Report> {
    let text = load_text(&config.input)?;

    let strategy: Strategy = config.strategy.parse()?;
    debug!("strategy selected: {}", strategy.name());

    let decorator = Decorator::from_flag(&config.decorator)?;
    let composed = decorator
        .into_iter()
        .fold(Composed::new(strategy), Composed::wrap);
    debug!(
        "decorator composed: {} ({} layer(s))",
        decorator.map_or("none", |d| d.name()),
        composed.layers().len()
    );

    let report = composed.analyze(&text, out)?;
    writeln!(out, "{}", report)?;
    out.flush()?;
    Ok(report)
}

/// Reads the whole file and decodes it as UTF-8, replacing invalid sequences.
pub fn load_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {} bytes from {}", bytes.len(), path.display());

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("{} is not valid UTF-8, replacing invalid bytes", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(text)
}
