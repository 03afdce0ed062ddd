use crate::algorithms::hook::AlignHook;
use crate::error::AlignError;
use crate::types::{Action, Opcode};

/// An [`AlignHook`] that captures all steps as [`Opcode`]s.
#[derive(Default, Clone)]
pub struct Capture(Vec<Opcode>);

impl Capture {
    /// Creates a new capture hook.
    pub fn new() -> Capture {
        Capture::default()
    }

    /// Converts the capture hook into a vector.
    pub fn into_vec(self) -> Vec<Opcode> {
        self.0
    }

    /// Accesses the captured operations.
    pub fn ops(&self) -> &[Opcode] {
        &self.0
    }
}

impl AlignHook for Capture {
    type Error = AlignError;

    fn equal(&mut self, old_index: usize, new_index: usize) -> Result<(), Self::Error> {
        self.0.push(Opcode::new(Action::Equal, old_index, new_index));
        Ok(())
    }

    fn replace(&mut self, old_index: usize, new_index: usize) -> Result<(), Self::Error> {
        self.0.push(Opcode::new(Action::Replace, old_index, new_index));
        Ok(())
    }

    fn insert(&mut self, old_index: usize, new_index: usize) -> Result<(), Self::Error> {
        self.0.push(Opcode::new(Action::Insert, old_index, new_index));
        Ok(())
    }

    fn delete(&mut self, old_index: usize, new_index: usize) -> Result<(), Self::Error> {
        self.0.push(Opcode::new(Action::Delete, old_index, new_index));
        Ok(())
    }
}
