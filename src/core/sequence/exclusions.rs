use glob_match::glob_match;

/// Names that are never renamed.
///
/// Entries containing `*`, `?` or `[` are glob patterns; everything else is
/// compared for exact equality.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    literals: Vec<String>,
    patterns: Vec<String>,
}

fn is_glob(entry: &str) -> bool {
    entry.contains(['*', '?', '['])
}

impl Exclusions {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut exclusions = Self::default();
        for entry in entries {
            exclusions.push(entry.into());
        }
        exclusions
    }

    pub fn push(&mut self, entry: String) {
        if entry.is_empty() {
            return;
        }
        let bucket = if is_glob(&entry) {
            &mut self.patterns
        } else {
            &mut self.literals
        };
        if !bucket.contains(&entry) {
            bucket.push(entry);
        }
    }

    /// Add the running executable's own file name, so a binary dropped into the
    /// directory it renames leaves itself alone.
    pub fn with_current_exe(mut self) -> Self {
        if let Some(name) = std::env::current_exe()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        {
            self.push(name);
        }
        self
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.literals.iter().any(|l| l == name)
            || self.patterns.iter().any(|p| glob_match(p, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_entries_match_exactly() {
        let exclusions = Exclusions::new(["rename.py"]);
        assert!(exclusions.is_excluded("rename.py"));
        assert!(!exclusions.is_excluded("rename.py.bak"));
        assert!(!exclusions.is_excluded("Rename.py"));
    }

    #[test]
    fn glob_entries_match_patterns() {
        let exclusions = Exclusions::new(["*.part", "notes?.md"]);
        assert!(exclusions.is_excluded("video.part"));
        assert!(exclusions.is_excluded("notes1.md"));
        assert!(!exclusions.is_excluded("notes.md"));
        assert!(!exclusions.is_excluded("video.mp4"));
    }

    #[test]
    fn empty_and_duplicate_entries_are_ignored() {
        let exclusions = Exclusions::new(["", "a", "a"]);
        assert_eq!(exclusions.literals, vec!["a".to_string()]);
        assert!(!exclusions.is_excluded(""));
    }

    #[test]
    fn current_exe_is_excluded() {
        let exe = std::env::current_exe().unwrap();
        let name = exe.file_name().unwrap().to_string_lossy().into_owned();
        let exclusions = Exclusions::default().with_current_exe();
        assert!(exclusions.is_excluded(&name));
    }
}
