//! WASM bindings for madlibs — powers the in-browser story demo.

use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

use madlibs::core::lint::lint_template;
use madlibs::core::pool::{PoolSet, WordPool, POOL_FILES};
use madlibs::core::render::{RandomChooser, StoryRenderer};
use madlibs::core::template::Template;

// ---------------------------------------------------------------------------
// Embedded sample data — compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const POOLS: &[(&str, &str)] = &[
        ("adj.txt", include_str!("../../wordlists/adj.txt")),
        ("adv.txt", include_str!("../../wordlists/adv.txt")),
        ("singnoun.txt", include_str!("../../wordlists/singnoun.txt")),
        ("plunoun.txt", include_str!("../../wordlists/plunoun.txt")),
        ("singverb.txt", include_str!("../../wordlists/singverb.txt")),
        ("pluverb.txt", include_str!("../../wordlists/pluverb.txt")),
        ("pastverb.txt", include_str!("../../wordlists/pastverb.txt")),
    ];

    pub const STORIES: &[&str] = &[
        include_str!("../../wordlists/story1.txt"),
        include_str!("../../wordlists/story2.txt"),
    ];
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct PoolInfo {
    name: String,
    words: Vec<String>,
}

fn sample_pools() -> PoolSet {
    let mut pools = PoolSet::new();
    for (name, text) in data::POOLS {
        pools.insert(WordPool::parse(*name, text));
    }
    pools
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

// ---------------------------------------------------------------------------
// MadlibsDemo — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct MadlibsDemo {
    renderer: StoryRenderer<RandomChooser>,
    pools: PoolSet,
}

#[wasm_bindgen]
impl MadlibsDemo {
    /// Create a demo with the bundled word lists and the given seed.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> MadlibsDemo {
        MadlibsDemo {
            renderer: StoryRenderer::new(RandomChooser::seeded(seed)),
            pools: sample_pools(),
        }
    }

    /// Replace the word lists from a JSON object of `{ "adj.txt": "red\nblue", ... }`.
    ///
    /// Every standard pool name must be present.
    pub fn set_pools(&mut self, pools_json: &str) -> Result<(), JsError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(pools_json)
            .map_err(|e| JsError::new(&format!("Invalid pools JSON: {e}")))?;
        if let Some(missing) = POOL_FILES.iter().find(|name| !raw.contains_key(**name)) {
            return Err(JsError::new(&format!("Missing word list: {missing}")));
        }
        let mut pools = PoolSet::new();
        for (name, text) in &raw {
            pools.insert(WordPool::parse(name.as_str(), text));
        }
        self.pools = pools;
        Ok(())
    }

    /// Render arbitrary template text against the current word lists.
    pub fn render(&mut self, template: &str) -> String {
        self.renderer.render_text(template, &self.pools)
    }

    /// Render bundled story `number` (1-based).
    pub fn render_sample(&mut self, number: usize) -> Result<String, JsError> {
        let text = number
            .checked_sub(1)
            .and_then(|i| data::STORIES.get(i))
            .ok_or_else(|| JsError::new(&format!("No sample story {number}")))?;
        Ok(self.renderer.render_text(text, &self.pools))
    }

    /// Number of bundled sample stories.
    pub fn sample_count() -> usize {
        data::STORIES.len()
    }

    /// JSON array of lint messages for `template` against the current word lists.
    pub fn lint(&self, template: &str) -> Result<String, JsError> {
        let issues: Vec<String> = lint_template("template", &Template::parse(template), &self.pools)
            .iter()
            .map(ToString::to_string)
            .collect();
        to_json(&issues)
    }

    /// JSON array of the current word lists.
    pub fn pools(&self) -> Result<String, JsError> {
        let info: Vec<PoolInfo> = self
            .pools
            .keys()
            .into_iter()
            .filter_map(|key| self.pools.get(key))
            .map(|pool| PoolInfo {
                name: pool.name.clone(),
                words: pool.words.clone(),
            })
            .collect();
        to_json(&info)
    }

    /// Reseed the word chooser, keeping the word lists.
    pub fn reset(&mut self, seed: u64) {
        self.renderer = StoryRenderer::new(RandomChooser::seeded(seed));
    }
}
