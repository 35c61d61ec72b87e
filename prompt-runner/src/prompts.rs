//! Prompt templating for adjective hypernym elicitation

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One row of the disambiguated adjective dataset
#[derive(Debug, Deserialize)]
pub struct AdjectiveRow {
    pub hyponym: String,
    pub definition: String,
}

/// Render the hypernym-elicitation prompt for one adjective sense.
pub fn build_prompt(hyponym: &str, definition: &str) -> String {
    format!(
        r#"Given the hyponym adjective "{hyponym}" with definition "{definition}", generate a list of related adjective hypernyms. Only a list of adjective hypernyms must be in the output, nothing else more. Do not re-generate the input hyponym. Respect the following guidelines:

    - The hyponym and the hypernym must be different.
    - The hyponym and the hypernym must not pertain to the same synset in the Open English WordNet.
    - Adjectives that are in the same synset need to have the same hypernym. There are many adjectives that are very similar (e.g., 'Eurasian', 'Eurasiatic', oewn-03035646-a, relating to, or coming from, Europe and Asia) and should have the same hypernym.
    - Principle of substitution: if you substitute the hyponym with the hypernym, the meaning of the phrase should not change much. There could necessarily be some loss of specificity, but the difference should only concern a broader meaning. Vice-versa, if you substitute the hypernym with the hyponym, there could be loss of meaning because the scope of the hyponym is littler that the hypernym one.
    - Inclusion of meaning principle: the meaning of the hyponym is narrower and should be included in the meaning of the hypernym, which is broader. Vice-versa, the meaning of the hypernym is not completely included in the hyponym one.
    - Hyponym and hypernym must not pertain to the same synset, because this would mean that there is a synonymy relation between them, rather than hypernymy.
    - A hyponym could have more than one hypernym.
    - Always output an adjective/s. The hypernym must be an adjective. The relation must hold between two lemmas that have the same part of speech. You cannot output a different part of speech than adjective.
    - If the input hyponym lemma could have multiple parts of speech (e.g., 'clean' could be an adjective and a verb), always consider the adjective one, as you are dealing with adjectival hypernymy.
    - For input adjectives that are polysemous (e.g., 'hard'), always consider the provided definition to disambiguate.
    - The concept should be distinct from other concepts in the wordnet. For example, "happy" and "felicitous" are synonyms, ewn-01052105-s and the examples can be substituted, e.g., "a happy life"/"a felicitous outcome". This does not mean that they can be substituted in every sense, e.g., "happy to help" but not *"felicitous to help". This is valid for synonyms, but the substitution check must always hold for hypernymy.
    - Well-defined principle: it should be possible to easily write a definition for this concept that is distinct from other concepts in Open English Wordnet.

"#
    )
}

/// Replace characters that are unsafe in file names.
pub fn safe_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Render one prompt file per CSV row into `output_dir`.
///
/// Files are named `<sanitized-hyponym>_<row-index>.txt` so polysemous
/// lemmas appearing on several rows do not collide. Returns the number of
/// files written.
pub fn write_prompt_files(csv_path: &Path, output_dir: &Path) -> Result<usize> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            output_dir.display()
        )
    })?;

    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open {}", csv_path.display()))?;

    let mut written = 0;
    for (idx, row) in reader.deserialize::<AdjectiveRow>().enumerate() {
        let row = row.with_context(|| format!("Malformed CSV row {}", idx + 1))?;
        let hyponym = row.hyponym.trim();
        let definition = row.definition.trim();

        let prompt = build_prompt(hyponym, definition);
        let path = output_dir.join(format!("{}_{}.txt", safe_filename(hyponym), idx));
        std::fs::write(&path, prompt)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written += 1;
    }

    Ok(written)
}
