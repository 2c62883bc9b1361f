use serde::Deserialize;

use crate::entities::movie;

pub const DEFAULT_FORMAT: &str = "hd";

/// A catalog entry as returned by the read operations. Editions are never
/// joined back in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub name: String,
    pub format: String,
}

impl From<movie::Model> for Movie {
    fn from(model: movie::Model) -> Self {
        Self {
            id: model.movie_id,
            name: model.name,
            format: model.format,
        }
    }
}

/// One element of the seed JSON array. The `id` field of the file is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct SeedMovie {
    pub name: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub edition: Option<String>,
}

impl SeedMovie {
    /// The stored format: the input as given, or `"hd"` when it is blank.
    pub fn format(&self) -> &str {
        match self.format.as_deref() {
            Some(format) if !is_blank(format) => format,
            _ => DEFAULT_FORMAT,
        }
    }

    /// The edition as given, unless it is blank.
    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref().filter(|e| !is_blank(e))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub name: String,
}
