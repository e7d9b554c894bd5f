//! Article body
//!
//! Plain-text format: the first non-empty line is the title, and paragraphs
//! are separated by blank lines.

use std::path::Path;

const SAMPLE_ARTICLE: &str = "\
Human-readable typography

Reading on a screen is easier when the text adapts to the reader. Font, size, \
color and the width of the column all change how quickly the eye finds the \
start of the next line.

Open the settings panel with the arrow on the left edge (or press F2). Pick a \
font, a size and colors, then press Apply to see the article change. Changes \
you make in the panel stay private to the panel until you apply them.

Press Reset to return to the defaults at once. Click anywhere outside the panel \
to put it away; unapplied edits are dropped and the panel starts from the \
current settings the next time it opens.

Narrow columns help long paragraphs, while wide columns suit short notes and \
lists. Large type with extra spacing is easier on tired eyes.";

/// A loaded article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Article {
    /// The built-in sample article
    pub fn sample() -> Self {
        Self::parse(SAMPLE_ARTICLE)
    }

    /// Parse an article from plain text
    pub fn parse(text: &str) -> Self {
        let mut blocks = text
            .split("\n\n")
            .map(|block| {
                block
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|block| !block.is_empty());

        let title = blocks.next().unwrap_or_default();
        let paragraphs = blocks.collect();
        Self { title, paragraphs }
    }

    /// Load an article from a file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let article = Self::parse(&text.replace("\r\n", "\n"));
        tracing::debug!(
            "Loaded article {:?} with {} paragraphs from {}",
            article.title,
            article.paragraphs.len(),
            path.display()
        );
        Ok(article)
    }
}
