use crate::branching::SelectionContext;
use crate::engine::VariableId;

/// A trait containing the interface for [`VariableSelector`]s, specifying the method required for
/// selecting the next slot to fill.
pub trait VariableSelector {
    /// Determines which slot to fill next if there are any left.
    ///
    /// Should only return [`None`] when all slots are assigned. Otherwise it should return an
    /// unassigned slot.
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId>;
}

impl<T: VariableSelector + ?Sized> VariableSelector for Box<T> {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        self.as_mut().select_variable(context)
    }
}
