// src/application/ports/util.rs

/// Pure, deterministic title → slug mapping. May return an empty string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
