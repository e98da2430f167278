/// Interactive game loop over injected console streams.

use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;

use crate::config::Config;
use crate::core::pool::PoolSet;
use crate::core::render::{StoryRenderer, WordChooser};
use crate::core::source::{DirSource, TextSource};

pub const DIR_PROMPT: &str = "Enter the name of the folder where the stories and wordlists are, or press Enter for the default location: ";
pub const STORY_PROMPT: &str = "Enter a story number or 'q' to quit: ";
pub const LOAD_FAILED: &str = "Failed to load wordlists. Make sure the folder and files exist.";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a valid story number or 'q' to quit.";
pub const STORY_HEADING: &str = "Here is your Madlib:";
pub const FAREWELL: &str = "Thank you for using this program.";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console IO error: {0}")]
    Io(#[from] io::Error),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The player quit (or input ran out).
    Finished,
    /// Word lists could not be loaded; no story was offered.
    LoadFailed,
}

/// One line of player input at the story prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Story(i64),
    Invalid(String),
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Command::Quit;
        }
        match input.parse::<i64>() {
            Ok(n) => Command::Story(n),
            Err(_) => Command::Invalid(input.to_string()),
        }
    }
}

/// File name of story number `n`.
pub fn story_file_name(n: i64) -> String {
    format!("story{}.txt", n)
}

pub struct Session<R, W, C> {
    input: R,
    output: W,
    renderer: StoryRenderer<C>,
    config: Config,
    dir: Option<String>,
}

impl<R: BufRead, W: Write, C: WordChooser> Session<R, W, C> {
    pub fn new(input: R, output: W, chooser: C, config: Config) -> Self {
        Self {
            input,
            output,
            renderer: StoryRenderer::new(chooser),
            config,
            dir: None,
        }
    }

    /// Use `dir` as the story directory instead of asking for one.
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Run against the filesystem.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        self.run_with(|dir: &Path| DirSource::new(dir))
    }

    /// Run with `open` turning the chosen directory into a text source.
    pub fn run_with<S, F>(&mut self, open: F) -> Result<SessionOutcome, SessionError>
    where
        S: TextSource,
        F: FnOnce(&Path) -> S,
    {
        self.print_banner()?;

        let dir = match self.dir.clone() {
            Some(dir) => dir,
            None => {
                write!(self.output, "{}", DIR_PROMPT)?;
                self.output.flush()?;
                match self.read_line()? {
                    Some(line) if !line.is_empty() => line,
                    _ => self.config.default_dir.clone(),
                }
            }
        };
        tracing::info!(dir = dir.as_str(), "using story directory");

        let source = open(Path::new(&dir));
        let pools = match PoolSet::load(&source, self.config.pool_files.as_slice()) {
            Ok(pools) => pools,
            Err(e) => {
                tracing::error!(error = %e, "word lists unavailable");
                writeln!(self.output, "{}", LOAD_FAILED)?;
                return Ok(SessionOutcome::LoadFailed);
            }
        };

        loop {
            write!(self.output, "{}", STORY_PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match Command::parse(&line) {
                Command::Quit => break,
                Command::Story(n) => {
                    let name = story_file_name(n);
                    match self.renderer.render_story(&source, &name, &pools) {
                        Ok(story) => {
                            writeln!(self.output, "{}", STORY_HEADING)?;
                            writeln!(self.output, "{}", story)?;
                        }
                        Err(_) => {
                            writeln!(
                                self.output,
                                "Could not read story {}. Make sure {} exists in {}.",
                                n, name, dir
                            )?;
                        }
                    }
                }
                Command::Invalid(_) => writeln!(self.output, "{}", INVALID_INPUT)?,
            }
        }

        writeln!(self.output, "{}", FAREWELL)?;
        Ok(SessionOutcome::Finished)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print_banner(&mut self) -> io::Result<()> {
        let rule = "*".repeat(62);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "*{:^60}*", "Welcome to Madlibs V1.")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(
            self.output,
            "This program generates random stories using wordlists you supply."
        )
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
