//! Interactive session
//!
//! Blocking menu loop that owns the portfolio. Every operator mistake is
//! reported and the menu comes back; only a broken stdin/stdout ends the
//! session with an error.

pub mod menu;
pub mod prompt;

pub use menu::{MenuChoice, MENU_TEXT};
pub use prompt::Prompter;

use std::io::{BufRead, Write};

use crate::config::AppConfig;
use crate::core::{OptionPosition, PayoffResult, Portfolio};
use crate::input;
use crate::render::{ChartRenderer, PayoffChart};

enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    portfolio: Portfolio,
    config: AppConfig,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, AppConfig::default())
    }

    pub fn with_config(input: R, output: W, config: AppConfig) -> Self {
        Self {
            portfolio: Portfolio::new(),
            config,
            prompt: Prompter::new(input, output),
        }
    }

    /// Finished portfolio and everything written to the output
    pub fn into_parts(self) -> (Portfolio, W) {
        (self.portfolio, self.prompt.into_output())
    }

    /// Run until the operator exits or input ends
    pub fn run(&mut self, renderer: &mut dyn ChartRenderer) -> PayoffResult<()> {
        loop {
            match self.step(renderer) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    tracing::info!("Session ended with {} options", self.portfolio.len());
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("Request rejected: {}", e);
                    self.prompt.say(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn step(&mut self, renderer: &mut dyn ChartRenderer) -> PayoffResult<Flow> {
        self.show_portfolio()?;
        self.prompt.say(MENU_TEXT)?;

        let Some(choice) = self.prompt.ask("Select: ")? else {
            return Ok(Flow::Exit);
        };

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::AddOption) => {
                let Some(option) = self.read_option()? else {
                    return Ok(Flow::Exit);
                };
                self.portfolio.add(option);
                self.prompt.say("Option added.")?;
            }
            Some(MenuChoice::ShowGraph) => {
                let chart = PayoffChart::from_portfolio(&self.portfolio, &self.config)?;
                renderer.render(&chart)?;
            }
            Some(MenuChoice::Exit) => return Ok(Flow::Exit),
            None => self.prompt.say("Invalid selection.")?,
        }

        Ok(Flow::Continue)
    }

    fn show_portfolio(&mut self) -> PayoffResult<()> {
        self.prompt.say("\nCurrent portfolio:")?;
        if self.portfolio.is_empty() {
            self.prompt.say("(empty)")?;
        } else {
            let listing = self.portfolio.to_string();
            self.prompt.say(&listing)?;
        }
        Ok(())
    }

    /// Collect one option field by field.
    ///
    /// Each field is validated as soon as it is entered. `Ok(None)` means
    /// input ended part way through.
    fn read_option(&mut self) -> PayoffResult<Option<OptionPosition>> {
        let Some(raw) = self.prompt.ask("Option type (call/put): ")? else {
            return Ok(None);
        };
        let option_type = input::parse_option_type(&raw)?;

        let Some(raw) = self.prompt.ask("Direction (long/short): ")? else {
            return Ok(None);
        };
        let direction = input::parse_direction(&raw)?;

        let Some(raw) = self.prompt.ask("Strike price: ")? else {
            return Ok(None);
        };
        let strike = input::parse_strike(&raw, &self.config.range)?;

        let Some(raw) = self.prompt.ask("Premium: ")? else {
            return Ok(None);
        };
        let premium = input::parse_premium(&raw)?;

        let Some(raw) = self.prompt.ask("Quantity (default 1): ")? else {
            return Ok(None);
        };
        let quantity = input::parse_quantity(&raw)?;

        Ok(Some(
            OptionPosition::new(option_type, direction, strike, premium).with_quantity(quantity),
        ))
    }
}
