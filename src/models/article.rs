//! Article text shown in the preview.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// A titled article made of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Headline
    pub title: String,
    /// Body paragraphs, in order
    pub paragraphs: Vec<String>,
}

impl Article {
    /// Built-in article used when no file is given.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_text(SAMPLE_ARTICLE)
    }

    /// Parses plain text: the first non-empty line is the title, blank lines
    /// separate paragraphs, and lines within a paragraph are joined with spaces.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut lines = text.lines().skip_while(|line| line.trim().is_empty());
        let title = lines.next().map(str::trim).unwrap_or_default().to_string();

        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }

        Self { title, paragraphs }
    }

    /// Reads an article from a UTF-8 text file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read article: {}", path.display()))?;
        let article = Self::from_text(&text);
        tracing::info!(path = %path.display(), paragraphs = article.paragraphs.len(), "article loaded");
        Ok(article)
    }
}

const SAMPLE_ARTICLE: &str = "\
Portrait of a Typeface

Every font carries a temperament. A geometric sans reads as calm and modern,
a high-contrast serif leans toward ceremony, and a heavy display face shouts
before you have read a single word.

Readers rarely notice type when it works. They notice when lines run too
long, when letters crowd each other, or when the color of the page fights
the color of the text.

That is why reading tools let you choose. Pick a face you like, a size that
suits your eyes, and a column width that keeps the lines comfortable, then
apply it and keep reading.

Good settings disappear. What remains is the article.
";
