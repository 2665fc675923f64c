use anyhow::{bail, Context, Result};
use smallcancel_core::AnalysisConfig;
use smallcancel_words::{RelatorInput, RelatorSet, Word};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read relators from positional arguments or a JSON file (`-` for stdin).
///
/// The file holds a JSON array whose entries are letter strings or signed
/// generator lists. With `reduce`, words are cyclically reduced first.
pub fn load_relators(
    positional: &[String],
    file: Option<&Path>,
    reduce: bool,
) -> Result<RelatorSet> {
    let inputs: Vec<RelatorInput> = match file {
        Some(path) => {
            if !positional.is_empty() {
                bail!("Pass relators either as arguments or with --file, not both");
            }
            let raw = read_source(path)?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid relator JSON in {}", path.display()))?
        }
        None => positional
            .iter()
            .map(|text| RelatorInput::from(text.as_str()))
            .collect(),
    };

    let words = inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            input
                .to_word()
                .with_context(|| format!("Invalid relator #{index}"))
        })
        .collect::<Result<Vec<Word>>>()?;

    let relators = if reduce {
        RelatorSet::reduced(words)
    } else {
        RelatorSet::new(words)
    }
    .context("Relators violate the input contract")?;

    log::debug!(
        "Loaded {} relator(s) over {} generator(s)",
        relators.len(),
        relators.rank()
    );
    Ok(relators)
}

/// Load an analysis config from TOML, or the defaults
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: AnalysisConfig = toml::from_str(&raw)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    log::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read relators from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
