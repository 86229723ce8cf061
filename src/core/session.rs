use crate::adapters::console::Console;
use crate::app::presenter::{self, Confirmation};
use crate::app::prompter;
use crate::core::pricing::PricingEngine;
use crate::core::{CatalogProvider, Quote, Result};
use crate::utils::error::GymError;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

#[derive(Debug)]
enum SessionState {
    Selecting,
    Confirming(Quote),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Confirmed(Quote),
    Aborted,
}

pub const TERMINATION_NOTICE: &str = "\nProgram terminated by user.";

/// Ctrl-C handler body: prints the termination notice and returns the exit
/// status to leave with. An interrupt is a normal way out, not a failure.
pub fn on_interrupt<W: Write>(output: &mut W) -> i32 {
    if let Err(e) = writeln!(output, "{}", TERMINATION_NOTICE).and_then(|_| output.flush()) {
        tracing::warn!("Could not print termination notice: {}", e);
    }
    0
}

/// The sign-up loop: select, price, confirm. A validation error or a declined
/// confirmation starts the whole selection over; end of input ends the session.
pub struct SignupSession<C: CatalogProvider, R, W> {
    catalog: C,
    engine: PricingEngine,
    console: Console<R, W>,
}

impl<C: CatalogProvider, R: BufRead, W: Write> SignupSession<C, R, W> {
    pub fn new(catalog: C, console: Console<R, W>) -> Self {
        let engine = PricingEngine::new(catalog.rules().clone());
        Self {
            catalog,
            engine,
            console,
        }
    }

    pub fn run(&mut self) -> Result<SessionOutcome> {
        self.console.say("Welcome to the gym membership system")?;

        let mut state = SessionState::Selecting;
        let mut attempt = 0u32;
        loop {
            if matches!(state, SessionState::Selecting) {
                attempt += 1;
                tracing::debug!(attempt, "Starting selection");
            }

            state = match self.step(state) {
                Ok(ControlFlow::Continue(next)) => next,
                Ok(ControlFlow::Break(quote)) => {
                    self.console.say(format!(
                        "\nFinal total cost: ${}",
                        quote.breakdown.display_total()
                    ))?;
                    tracing::info!(
                        plan = %quote.plan.name,
                        total = quote.breakdown.total,
                        attempt,
                        "Selection confirmed"
                    );
                    return Ok(SessionOutcome::Confirmed(quote));
                }
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("Selection rejected: {}", e);
                    self.console.say(format!("Error: {}\n", e))?;
                    SessionState::Selecting
                }
                Err(GymError::UserAborted) => {
                    tracing::info!(attempt, "Session aborted by user");
                    self.console.say(TERMINATION_NOTICE)?;
                    return Ok(SessionOutcome::Aborted);
                }
                Err(e) => return Err(e),
            };
        }
    }

    /// Advances one state; `Break` carries the confirmed quote.
    fn step(&mut self, state: SessionState) -> Result<ControlFlow<Quote, SessionState>> {
        match state {
            SessionState::Selecting => {
                let plan = prompter::select_plan(&mut self.console, &self.catalog)?;
                let features = prompter::select_features(&mut self.console, &self.catalog)?;
                let group_size = prompter::read_group_size(&mut self.console, self.engine.rules())?;
                Ok(ControlFlow::Continue(SessionState::Confirming(
                    self.engine.quote(plan, features, group_size),
                )))
            }
            SessionState::Confirming(quote) => {
                match presenter::confirm(&mut self.console, &quote)? {
                    Confirmation::Confirmed => Ok(ControlFlow::Break(quote)),
                    Confirmation::Cancelled => {
                        tracing::debug!("Selection cancelled");
                        self.console.say("\nProcess cancelled. Starting over...\n")?;
                        Ok(ControlFlow::Continue(SessionState::Selecting))
                    }
                }
            }
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
