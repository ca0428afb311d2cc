use std::path::Path;

use syntect::parsing::SyntaxSet;

/// Maps a file name to a language id for highlighting-scheme selection.
/// `None` is a normal answer, not an error.
pub trait LanguageGuesser {
    fn guess(&self, file_name: &str) -> Option<String>;
}

pub struct SyntectLanguages {
    syntax_set: SyntaxSet,
}

impl SyntectLanguages {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }
}

impl Default for SyntectLanguages {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageGuesser for SyntectLanguages {
    fn guess(&self, file_name: &str) -> Option<String> {
        let path = Path::new(file_name);
        let by_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| self.syntax_set.find_syntax_by_extension(ext));
        // Sublime syntaxes also list bare file names such as "Makefile"
        let syntax = by_extension.or_else(|| {
            path.file_name()
                .and_then(|n| n.to_str())
                .and_then(|name| self.syntax_set.find_syntax_by_extension(name))
        })?;

        if syntax.name == "Plain Text" {
            return None;
        }
        Some(syntax.name.clone())
    }
}
