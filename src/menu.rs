// File: src/menu.rs
//! Line-driven menu over the cipher: encrypt or decrypt a file with a key,
//! brute force a file, or guess its key from letter frequencies.

use crate::analysis::brute_force::brute_force_decrypt;
use crate::analysis::frequency::statistical_analysis;
use crate::config::AppConfig;
use crate::core::engine::decrypt;
use crate::core::types::{Key, Mode};
use crate::error::CipherError;
use crate::persistence::{process_file, read_joined, write_candidates};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Everything the user can pick from the menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    EncryptFile,
    DecryptFile,
    BruteForce,
    FrequencyAnalysis,
    Exit,
}

/// What the loop does after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

type Handler<R, W> = fn(&mut Session<R, W>) -> Result<Flow, CipherError>;

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::EncryptFile,
        MenuAction::DecryptFile,
        MenuAction::BruteForce,
        MenuAction::FrequencyAnalysis,
        MenuAction::Exit,
    ];

    /// Maps a 1-based menu number to its action.
    pub fn from_choice(choice: i64) -> Option<Self> {
        let index = usize::try_from(choice.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::EncryptFile => "Encrypt file",
            MenuAction::DecryptFile => "Decrypt file with key",
            MenuAction::BruteForce => "Brute force decryption",
            MenuAction::FrequencyAnalysis => "Frequency analysis",
            MenuAction::Exit => "Exit",
        }
    }

    fn handler<R: BufRead, W: Write>(self) -> Handler<R, W> {
        match self {
            MenuAction::EncryptFile => Session::encrypt_file,
            MenuAction::DecryptFile => Session::decrypt_file,
            MenuAction::BruteForce => Session::brute_force,
            MenuAction::FrequencyAnalysis => Session::frequency_analysis,
            MenuAction::Exit => Session::exit,
        }
    }
}

/// Parses a menu line. Non-numbers are an error; numbers outside the menu
/// are `Ok(None)`.
pub fn parse_choice(line: &str) -> Result<Option<MenuAction>, CipherError> {
    let choice: i64 = line
        .trim()
        .parse()
        .map_err(|_| CipherError::InvalidChoice(line.to_string()))?;
    Ok(MenuAction::from_choice(choice))
}

pub fn parse_key(line: &str) -> Result<Key, CipherError> {
    line.trim()
        .parse()
        .map_err(|_| CipherError::InvalidKey(line.trim().to_string()))
}

/// One interactive run, reading answers from `input` and writing prompts
/// and results to `output`.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        Self { input, output, config }
    }

    /// Shows the menu until the user exits or input runs out. Failed
    /// operations are reported and the loop goes on; only a broken output
    /// stream ends it with an error.
    pub fn run(&mut self) -> Result<(), CipherError> {
        self.heading("Caesar cipher")?;

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                info!("input closed, leaving menu");
                return Ok(());
            };

            let action = match parse_choice(&line) {
                Ok(Some(action)) => action,
                Ok(None) => {
                    self.say("Invalid choice")?;
                    continue;
                }
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };

            debug!(?action, "dispatching menu action");
            match (action.handler())(self) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(CipherError::EndOfInput) => {
                    info!("input closed mid-operation, leaving menu");
                    return Ok(());
                }
                Err(e) => {
                    warn!(?action, error = %e, "menu action failed");
                    self.report(&e)?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        self.heading("Choose an action:")?;
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, action.label())?;
        }
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, question: &str) -> Result<String, CipherError> {
        self.say(question)?;
        self.output.flush()?;
        self.read_line()?.ok_or(CipherError::EndOfInput)
    }

    fn prompt_path(&mut self, question: &str) -> Result<PathBuf, CipherError> {
        Ok(PathBuf::from(self.prompt(question)?))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn heading(&mut self, text: &str) -> io::Result<()> {
        if !self.config.color {
            return self.say(text);
        }
        queue!(
            self.output,
            SetAttribute(Attribute::Bold),
            Print(text),
            SetAttribute(Attribute::Reset),
            Print("\n")
        )
    }

    fn success(&mut self, text: &str) -> io::Result<()> {
        self.colored(text, Color::Green)
    }

    fn report(&mut self, error: &CipherError) -> io::Result<()> {
        self.colored(&format!("Error: {error}"), Color::Red)
    }

    fn colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if !self.config.color {
            return self.say(text);
        }
        queue!(
            self.output,
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            Print("\n")
        )
    }

    fn transform_file(&mut self, mode: Mode) -> Result<Flow, CipherError> {
        let input = self.prompt_path("Enter input file:")?;
        let output = self.prompt_path("Enter output file:")?;
        let key = parse_key(&self.prompt("Enter key:")?)?;

        process_file(&input, &output, key, mode)?;
        self.success("Operation completed successfully")?;
        Ok(Flow::Continue)
    }

    fn encrypt_file(&mut self) -> Result<Flow, CipherError> {
        self.transform_file(Mode::Encrypt)
    }

    fn decrypt_file(&mut self) -> Result<Flow, CipherError> {
        self.transform_file(Mode::Decrypt)
    }

    fn brute_force(&mut self) -> Result<Flow, CipherError> {
        let input = self.prompt_path("Enter input file:")?;
        let output = self.prompt_path("Enter output file for results:")?;

        let cipher_text = read_joined(&input, "\n")?;
        write_candidates(&output, &brute_force_decrypt(&cipher_text))?;
        self.success("Brute force finished. Check the output file.")?;
        Ok(Flow::Continue)
    }

    fn frequency_analysis(&mut self) -> Result<Flow, CipherError> {
        let table = self.config.frequency_table()?;
        let input = self.prompt_path("Enter input file:")?;

        // Lines are glued together with no separator.
        let cipher_text = read_joined(&input, "")?;
        let key = statistical_analysis(&cipher_text, &table);
        info!(input = %input.display(), key, "frequency analysis picked a key");

        self.success(&format!("Guessed key: {key}"))?;
        self.say("Decrypted text:")?;
        let plain_text = decrypt(&cipher_text, key);
        self.say(&plain_text)?;
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> Result<Flow, CipherError> {
        self.say("Exiting...")?;
        Ok(Flow::Exit)
    }
}
