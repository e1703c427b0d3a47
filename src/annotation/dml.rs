//! DML classification by leading keyword.

/// Data-modifying statement kinds recognised by their first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DmlKind {
    Insert,
    Update,
    Delete,
}

impl DmlKind {
    /// Classify a single keyword under Unicode simple case folding.
    ///
    /// Besides ASCII case, this accepts the two non-ASCII characters whose
    /// simple fold is an ASCII letter, so `inſert` (long s) is an insert.
    pub fn from_keyword(word: &str) -> Option<Self> {
        if keyword_eq(word, "insert") {
            Some(Self::Insert)
        } else if keyword_eq(word, "update") {
            Some(Self::Update)
        } else if keyword_eq(word, "delete") {
            Some(Self::Delete)
        } else {
            None
        }
    }

    /// The keyword in upper case.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for DmlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Simple case fold onto lowercase ASCII where one exists.
fn fold(c: char) -> char {
    match c {
        '\u{017F}' => 's',
        '\u{212A}' => 'k',
        c => c.to_ascii_lowercase(),
    }
}

/// `keyword` must be lowercase ASCII.
fn keyword_eq(word: &str, keyword: &str) -> bool {
    word.chars().map(fold).eq(keyword.chars())
}

/// Classify `sql` by its first whitespace-delimited token.
///
/// Leading whitespace is skipped. A statement with no whitespace after its
/// first token is a single word and never DML.
pub fn dml_kind(sql: &str) -> Option<DmlKind> {
    let sql = sql.trim_start();
    let end = sql.find(char::is_whitespace)?;
    DmlKind::from_keyword(&sql[..end])
}

/// Returns true if `sql` is an INSERT, UPDATE or DELETE statement.
pub fn is_dml(sql: &str) -> bool {
    dml_kind(sql).is_some()
}
