use crate::application::ports::util::SlugGenerator;
use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| compile(r"[^a-z0-9_\s-]"));
static SEPARATORS: Lazy<Regex> = Lazy::new(|| compile(r"[\s_-]+"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("slug pattern is a valid regex")
}

/// Lowercases, drops everything but ASCII letters, digits, whitespace,
/// underscores and hyphens, then joins the remaining words with single hyphens.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let kept = DISALLOWED.replace_all(lowered.trim(), "");
        let joined = SEPARATORS.replace_all(&kept, "-");
        joined.trim_matches('-').to_string()
    }
}
