use std_util::str;

/// A camel-case identifier broken into its lowercase words.
///
/// `TrainEngineer` becomes `["train", "engineer"]`. Qualifier dropping works
/// on the leading words: dropping one word from `TrainEngineer` yields
/// `Engineer`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        Self {
            parts: str::words(src),
        }
    }

    /// Returns the name without its first `count` words, or `None` when that
    /// would leave nothing.
    pub fn drop_leading(&self, count: usize) -> Option<Name> {
        if count >= self.parts.len() {
            return None;
        }

        Some(Self {
            parts: self.parts[count..].to_vec(),
        })
    }

    pub fn camel_case(&self) -> String {
        str::camel_case(&self.snake_case())
    }

    pub fn upper_camel_case(&self) -> String {
        str::upper_camel_case(&self.snake_case())
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }
}
