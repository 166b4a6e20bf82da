use crate::error::AgentError;
use crate::game::GameState;

/// Universal interface for move-selection agents.
pub trait Agent {
    /// Pick a column for the side to move in `state`.
    ///
    /// Fails with [`AgentError::NoValidMoves`] when no column is playable;
    /// callers are expected to check the game outcome before asking for a
    /// move.
    fn select_move(&mut self, state: &GameState) -> Result<usize, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}
