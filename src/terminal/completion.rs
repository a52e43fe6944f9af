//! Cycling tab completion.

/// Prefix completion that cycles through matches on repeated Tab.
pub struct Completer {
    /// Prefix the current cycle started from.
    prefix: String,
    match_idx: usize,
    cycling: bool,
}

impl Completer {
    /// Fresh completer with no active cycle.
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            match_idx: 0,
            cycling: false,
        }
    }

    /// Complete `prefix` against `candidates`.
    ///
    /// Repeated calls with the same prefix cycle through the matches in
    /// candidate order, wrapping around; a changed prefix starts a fresh
    /// cycle. Returns `None` when nothing matches.
    pub fn complete<'a, I>(&mut self, prefix: &str, candidates: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if prefix != self.prefix {
            self.prefix = prefix.to_string();
            self.match_idx = 0;
            self.cycling = false;
        } else if self.cycling {
            self.match_idx += 1;
        }

        let matches: Vec<&str> = candidates
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .collect();

        if matches.is_empty() {
            self.cycling = false;
            return None;
        }

        if self.match_idx >= matches.len() {
            self.match_idx = 0;
        }

        self.cycling = true;
        Some(matches[self.match_idx])
    }

    /// Reset cycling state (the operator typed a non-Tab key).
    pub fn reset(&mut self) {
        self.cycling = false;
        self.match_idx = 0;
    }
}

impl Default for Completer {
    fn default() -> Self {
        Self::new()
    }
}
