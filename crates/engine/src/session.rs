use crate::persistence::PersistedInputs;
use analytics::Calculator;
use core_types::CalculatorError;
use storage::PersistenceGateway;

/// One open calculator: the inputs being edited, the last successful results
/// and the error from the last attempt, if it failed.
///
/// A failed calculation never clears the previous results. A successful one
/// replaces them in full and, with autosave on, persists the inputs.
#[derive(Debug)]
pub struct CalculatorSession<C: Calculator> {
    calculator: C,
    gateway: PersistenceGateway,
    autosave: bool,
    inputs: C::Inputs,
    results: C::Results,
    error: Option<CalculatorError>,
}

impl<C> CalculatorSession<C>
where
    C: Calculator,
    C::Inputs: PersistedInputs,
{
    /// Opens a session, restoring saved inputs or starting from the defaults.
    pub fn open(calculator: C, gateway: PersistenceGateway, autosave: bool) -> Self {
        let (defaults, results) = calculator.reset();
        let inputs = match C::Inputs::load(&gateway) {
            Some(saved) => {
                tracing::debug!("Restored saved calculator inputs.");
                saved
            }
            None => defaults,
        };

        Self {
            calculator,
            gateway,
            autosave,
            inputs,
            results,
            error: None,
        }
    }

    pub fn inputs(&self) -> &C::Inputs {
        &self.inputs
    }

    /// Mutable access for field-by-field edits. Results are not touched until
    /// the next `calculate`.
    pub fn inputs_mut(&mut self) -> &mut C::Inputs {
        &mut self.inputs
    }

    pub fn set_inputs(&mut self, inputs: C::Inputs) {
        self.inputs = inputs;
    }

    /// The results of the last successful calculation, or the defaults.
    pub fn results(&self) -> &C::Results {
        &self.results
    }

    pub fn error(&self) -> Option<&CalculatorError> {
        self.error.as_ref()
    }

    /// Evaluates the current inputs.
    pub fn calculate(&mut self) -> Result<&C::Results, CalculatorError> {
        match self.calculator.evaluate(&self.inputs) {
            Ok(results) => {
                self.results = results;
                self.error = None;
                if self.autosave {
                    self.inputs.save(&self.gateway);
                }
                Ok(&self.results)
            }
            Err(e) => {
                tracing::info!(error = %e, "Calculation rejected.");
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Restores default inputs and results and clears the last error.
    ///
    /// The defaults are saved too, so the next session starts from them.
    pub fn reset(&mut self) {
        let (inputs, results) = self.calculator.reset();
        self.inputs = inputs;
        self.results = results;
        self.error = None;
        if self.autosave {
            self.inputs.save(&self.gateway);
        }
    }
}
