/// Story rendering — substitutes placeholders with random pool words.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use crate::core::pool::PoolSet;
use crate::core::source::{SourceError, TextSource};
use crate::core::template::{Template, Token};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read story '{name}': {source}")]
    Missing {
        name: String,
        #[source]
        source: SourceError,
    },
}

/// Picks one word out of a pool's candidates.
pub trait WordChooser {
    /// Returns `None` only when `words` is empty.
    fn choose<'w>(&mut self, words: &'w [String]) -> Option<&'w str>;
}

/// Uniform random choice backed by `StdRng`.
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    /// Reproducible choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl WordChooser for RandomChooser {
    fn choose<'w>(&mut self, words: &'w [String]) -> Option<&'w str> {
        words.choose(&mut self.rng).map(String::as_str)
    }
}

impl<C: WordChooser + ?Sized> WordChooser for &mut C {
    fn choose<'w>(&mut self, words: &'w [String]) -> Option<&'w str> {
        (**self).choose(words)
    }
}

/// Renders templates against a pool set.
pub struct StoryRenderer<C> {
    chooser: C,
}

impl<C: WordChooser> StoryRenderer<C> {
    pub fn new(chooser: C) -> Self {
        Self { chooser }
    }

    /// Render a parsed template.
    ///
    /// Every token is followed by one space and every line by `\n`.
    /// Placeholders whose key names no pool are kept verbatim. Each
    /// placeholder is an independent draw.
    pub fn render(&mut self, template: &Template, pools: &PoolSet) -> String {
        let mut out = String::new();
        for line in &template.lines {
            for token in &line.tokens {
                out.push_str(self.resolve(token, pools));
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// Parse and render raw template text.
    pub fn render_text(&mut self, text: &str, pools: &PoolSet) -> String {
        self.render(&Template::parse(text), pools)
    }

    /// Read the template `name` from `source` and render it.
    pub fn render_story<S: TextSource>(
        &mut self,
        source: &S,
        name: &str,
        pools: &PoolSet,
    ) -> Result<String, RenderError> {
        let text = source.read_text(name).map_err(|e| {
            tracing::warn!(story = name, error = %e, "story template unavailable");
            RenderError::Missing {
                name: name.to_string(),
                source: e,
            }
        })?;
        Ok(self.render_text(&text, pools))
    }

    fn resolve<'a>(&mut self, token: &'a Token, pools: &'a PoolSet) -> &'a str {
        match token {
            Token::Literal(text) => text.as_str(),
            Token::Placeholder { key, raw } => {
                match pools.get(key) {
                    Some(pool) => self.chooser.choose(&pool.words).unwrap_or(""),
                    None => {
                        tracing::trace!(key = key.as_str(), "unresolved placeholder kept as text");
                        raw.as_str()
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::MemorySource;

    /// Always takes the candidate at a fixed index (clamped).
    struct Nth(usize);

    impl WordChooser for Nth {
        fn choose<'w>(&mut self, words: &'w [String]) -> Option<&'w str> {
            words.get(self.0.min(words.len().saturating_sub(1))).map(String::as_str)
        }
    }

    fn color_pools() -> PoolSet {
        PoolSet::new().with_pool("adj.txt", "red\nblue")
    }

    #[test]
    fn replaces_known_placeholder() {
        let mut r = StoryRenderer::new(Nth(1));
        assert_eq!(r.render_text("The <adj.txt> car", &color_pools()), "The blue car \n");
    }

    #[test]
    fn random_pick_is_member_of_pool() {
        let pools = color_pools();
        let mut r = StoryRenderer::new(RandomChooser::seeded(7));
        for _ in 0..50 {
            let out = r.render_text("The <adj.txt> car", &pools);
            assert!(out == "The red car \n" || out == "The blue car \n", "got {:?}", out);
        }
    }

    #[test]
    fn random_pick_reaches_every_word() {
        let pools = color_pools();
        let mut r = StoryRenderer::new(RandomChooser::seeded(42));
        let outputs: std::collections::HashSet<String> = (0..100)
            .map(|_| r.render_text("<adj.txt>", &pools))
            .collect();
        assert_eq!(outputs.len(), 2);
    }

    #[test]
    fn unknown_placeholder_kept_verbatim() {
        let mut r = StoryRenderer::new(Nth(0));
        assert_eq!(
            r.render_text("A <unknown.txt> thing", &color_pools()),
            "A <unknown.txt> thing \n"
        );
    }

    #[test]
    fn key_without_extension_does_not_match() {
        let mut r = StoryRenderer::new(Nth(0));
        assert_eq!(r.render_text("<adj>", &color_pools()), "<adj> \n");
    }

    #[test]
    fn empty_brackets_kept_verbatim() {
        let mut r = StoryRenderer::new(Nth(0));
        assert_eq!(r.render_text("x <> y", &color_pools()), "x <> y \n");
    }

    #[test]
    fn empty_pool_renders_empty_word() {
        let pools = PoolSet::new().with_pool("adv.txt", "");
        let mut r = StoryRenderer::new(RandomChooser::seeded(1));
        assert_eq!(r.render_text("ran <adv.txt>", &pools), "ran  \n");
    }

    #[test]
    fn whitespace_only_pool_draws_its_line() {
        let pools = PoolSet::new().with_pool("adv.txt", "   \n");
        let mut r = StoryRenderer::new(Nth(0));
        assert_eq!(r.render_text("ran <adv.txt>", &pools), "ran     \n");
    }

    #[test]
    fn blank_line_in_pool_can_be_drawn() {
        let pools = PoolSet::new().with_pool("adj.txt", "red\n\nblue");
        let mut r = StoryRenderer::new(Nth(1));
        assert_eq!(r.render_text("The <adj.txt> car", &pools), "The  car \n");
    }

    #[test]
    fn blank_lines_are_drawn_like_any_word() {
        let pools = PoolSet::new().with_pool("adj.txt", "red\n\nblue");
        let mut r = StoryRenderer::new(RandomChooser::seeded(17));
        let mut counts = std::collections::HashMap::new();
        for _ in 0..3000 {
            *counts.entry(r.render_text("<adj.txt>", &pools)).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 3);
        for word in ["red \n", " \n", "blue \n"] {
            let n = counts[word];
            assert!((800..1200).contains(&n), "{:?} drawn {} times", word, n);
        }
    }

    #[test]
    fn empty_line_is_just_newline() {
        let mut r = StoryRenderer::new(Nth(0));
        assert_eq!(r.render_text("one\n\ntwo", &color_pools()), "one \n\ntwo \n");
    }

    #[test]
    fn consecutive_spaces_collapse_to_one() {
        let mut r = StoryRenderer::new(Nth(0));
        assert_eq!(r.render_text("a    b", &color_pools()), "a b \n");
    }

    #[test]
    fn empty_template_renders_nothing() {
        let mut r = StoryRenderer::new(Nth(0));
        assert_eq!(r.render_text("", &color_pools()), "");
    }

    #[test]
    fn repeated_key_draws_independently() {
        let pools = PoolSet::new().with_pool("singnoun.txt", "cat\ndog\nfox\nowl");
        let mut r = StoryRenderer::new(RandomChooser::seeded(3));
        let mut saw_mixed = false;
        for _ in 0..50 {
            let out = r.render_text("<singnoun.txt> <singnoun.txt>", &pools);
            let words: Vec<&str> = out.split_whitespace().collect();
            if words[0] != words[1] {
                saw_mixed = true;
                break;
            }
        }
        assert!(saw_mixed);
    }

    #[test]
    fn same_seed_same_story() {
        let pools = PoolSet::new().with_pool("adj.txt", "a\nb\nc\nd\ne\nf");
        let template = "<adj.txt> <adj.txt> <adj.txt>\n<adj.txt>";
        let first = StoryRenderer::new(RandomChooser::seeded(99)).render_text(template, &pools);
        let second = StoryRenderer::new(RandomChooser::seeded(99)).render_text(template, &pools);
        assert_eq!(first, second);
    }

    #[test]
    fn render_story_reads_from_source() {
        let src = MemorySource::new().with_file("story1.txt", "The <adj.txt> car\n");
        let mut r = StoryRenderer::new(Nth(0));
        let out = r.render_story(&src, "story1.txt", &color_pools()).unwrap();
        assert_eq!(out, "The red car \n");
    }

    #[test]
    fn render_story_missing_template() {
        let src = MemorySource::new();
        let mut r = StoryRenderer::new(Nth(0));
        let err = r.render_story(&src, "story2.txt", &color_pools()).unwrap_err();
        assert!(matches!(err, RenderError::Missing { ref name, .. } if name == "story2.txt"));
    }

    #[test]
    fn rendering_leaves_pools_untouched() {
        let pools = color_pools();
        let before = pools.get("adj.txt").unwrap().clone();
        let mut r = StoryRenderer::new(RandomChooser::seeded(5));
        r.render_text("<adj.txt> <adj.txt>", &pools);
        assert_eq!(pools.get("adj.txt").unwrap(), &before);
    }
}
