/// Quickstart — renders each bundled sample story a few times.
///
/// Run with: cargo run --example quickstart

use madlibs::core::pool::PoolSet;
use madlibs::core::render::{RandomChooser, StoryRenderer};
use madlibs::core::source::DirSource;

fn main() {
    let source = DirSource::new("wordlists");
    let pools = PoolSet::load_default(&source).expect("Failed to load bundled word lists");

    let mut renderer = StoryRenderer::new(RandomChooser::seeded(2023));

    for story in ["story1.txt", "story2.txt"] {
        println!("=== {} ===", story);
        for take in 1..=3 {
            let text = renderer
                .render_story(&source, story, &pools)
                .expect("Failed to render bundled story");
            println!("--- take {} ---", take);
            print!("{}", text);
        }
        println!();
    }
}
