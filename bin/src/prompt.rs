use inquire::{InquireError, Select};
use point_graph::{Chooser, Error, Issuer, Result};

/// Asks whoever is at the terminal to pick the issuer.
pub struct Prompt;

impl Chooser for Prompt {
	fn choose(&self, options: &[Issuer]) -> Result<Issuer> {
		Select::new("Select clusterissuer", options.to_vec())
			.with_help_message("↑↓ to move, Enter to select, Esc to cancel")
			.prompt()
			.map_err(|err| match err {
				InquireError::OperationCanceled | InquireError::OperationInterrupted => {
					Error::SelectionAborted("operation canceled".to_string())
				}
				err => Error::SelectionAborted(err.to_string()),
			})
	}
}
