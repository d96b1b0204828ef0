//! Line classification
//!
//! Splits a document into physical lines and tags each one as a header,
//! list item, metadata directive or plain text. Classification looks at a
//! single line only, never at its neighbours.

/// What a single line contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `#`..`######` followed by text
    Header { level: usize, text: String },
    /// `- content`
    ListItem(String),
    /// `@key: value`
    Metadata { key: String, value: String },
    /// Anything else, including blank lines
    Text,
}

/// A classified line of the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based
    pub number: usize,
    pub trimmed: String,
    pub kind: LineKind,
}

impl Line {
    pub fn header_level(&self) -> Option<usize> {
        match self.kind {
            LineKind::Header { level, .. } => Some(level),
            _ => None,
        }
    }

    pub fn header_text(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Header { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn list_item(&self) -> Option<&str> {
        match &self.kind {
            LineKind::ListItem(content) => Some(content),
            _ => None,
        }
    }

    pub fn is_list_item(&self) -> bool {
        matches!(self.kind, LineKind::ListItem(_))
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }

    /// True for a header at `level` or shallower, which closes any frame
    /// opened at `level`
    pub fn closes(&self, level: usize) -> bool {
        self.header_level().is_some_and(|l| l <= level)
    }
}

/// Normalizes line endings and classifies every line
pub fn classify(content: &str) -> Vec<Line> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");

    normalized
        .split('\n')
        .enumerate()
        .map(|(i, raw)| classify_line(i + 1, raw))
        .collect()
}

fn classify_line(number: usize, raw: &str) -> Line {
    let trimmed = raw.trim();

    let kind = if let Some(caps) = regex!(r"^(#{1,6})\s+(.+)$").captures(trimmed) {
        LineKind::Header {
            level: caps[1].len(),
            text: caps[2].trim().to_string(),
        }
    } else if let Some(caps) = regex!(r"^-\s+(.+)$").captures(trimmed) {
        LineKind::ListItem(caps[1].trim().to_string())
    } else if let Some(caps) = regex!(r"^@(\w+):\s*(.*)$").captures(trimmed) {
        LineKind::Metadata {
            key: caps[1].to_lowercase(),
            value: caps[2].trim().to_string(),
        }
    } else {
        LineKind::Text
    };

    Line {
        number,
        trimmed: trimmed.to_string(),
        kind,
    }
}
