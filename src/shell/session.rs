//! Interactive command loop
//!
//! Reads one action per iteration and dispatches it against the store.
//! Validation and not-found errors are reported where they occur and the
//! loop carries on; any other error ends the session and is returned to
//! the caller.

use crate::{
    config::Config,
    core::RecordStore,
    error::Result,
    shell::{action::Action, prompt::Prompter},
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const BANNER: &str = "Welcome to the Pet Shelter System";
const FAREWELL: &str = "Goodbye!";
const INVALID_ACTION: &str = "Invalid action. Please choose 'add', 'fee', or 'exit'.";

/// What the loop should do after an iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// One operator session over a record store
pub struct Session<'a, R, W> {
    config: &'a Config,
    store: &'a mut RecordStore,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session reading answers from `input` and writing to `output`
    pub fn new(config: &'a Config, store: &'a mut RecordStore, input: R, output: W) -> Self {
        Self {
            config,
            store,
            prompter: Prompter::new(input, output, config.prompts.show),
        }
    }

    /// Run until the operator types `exit` or a fatal error occurs
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        if self.config.banner {
            self.prompter.say(BANNER)?;
        }

        let mut iterations = 0usize;
        loop {
            iterations += 1;
            match self.step()? {
                Flow::Continue => {}
                Flow::Stop => {
                    info!(
                        "Session ended after {} action(s), {} record(s) held",
                        iterations,
                        self.store.len()
                    );
                    return Ok(());
                }
            }
        }
    }

    /// Read and execute a single action
    pub fn step(&mut self) -> Result<Flow> {
        let answer = self.prompter.ask(&self.config.prompts.action)?;
        let action = Action::parse(&answer);
        debug!("Dispatching action: {}", action);

        match action {
            Action::Exit => {
                self.prompter.say(FAREWELL)?;
                return Ok(Flow::Stop);
            }
            Action::Add => self.add_animal()?,
            Action::Fee => self.report_fee()?,
            Action::Unknown(_) => self.prompter.say(INVALID_ACTION)?,
        }

        Ok(Flow::Continue)
    }

    fn add_animal(&mut self) -> Result<()> {
        let name = self.prompter.ask(&self.config.prompts.name)?;
        let fee = self.prompter.ask_fee(&self.config.prompts.fee)?;

        match self.store.add(&name, fee) {
            Ok(()) => self
                .prompter
                .say(format!("{name} added with a fee of ${fee}.")),
            Err(e) if e.is_recoverable() => {
                info!("Rejected record: {}", e);
                self.prompter.say(format!("Error adding animal: {e}"))
            }
            Err(e) => Err(e),
        }
    }

    fn report_fee(&mut self) -> Result<()> {
        let name = self.prompter.ask(&self.config.prompts.lookup)?;

        match self.store.lookup(&name) {
            Ok(fee) => self
                .prompter
                .say(format!("{name}'s adoption fee is ${fee}.")),
            Err(e) if e.is_recoverable() => {
                info!("Lookup failed: {}", e);
                self.prompter.say(format!("Error retrieving fee: {e}"))
            }
            Err(e) => Err(e),
        }
    }
}
