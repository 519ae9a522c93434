use std::cell::RefCell;

use point_graph::{Chooser, Error, Issuer, Result};

pub enum Answer {
	Pick(usize),
	Cancel,
	Stranger(Issuer),
}

/// Answers the selection as told and remembers the options it was given.
pub struct Scripted {
	answer: Answer,
	seen: RefCell<Vec<Issuer>>,
}

impl Scripted {
	pub fn new(answer: Answer) -> Self {
		Self {
			answer,
			seen: RefCell::new(vec![]),
		}
	}

	pub fn seen(&self) -> Vec<Issuer> {
		self.seen.borrow().clone()
	}
}

impl Chooser for Scripted {
	fn choose(&self, options: &[Issuer]) -> Result<Issuer> {
		self.seen.replace(options.to_vec());

		match &self.answer {
			Answer::Pick(index) => options
				.get(*index)
				.cloned()
				.ok_or_else(|| Error::SelectionAborted(format!("no option at {index}"))),
			Answer::Cancel => Err(Error::SelectionAborted("operation canceled".to_string())),
			Answer::Stranger(issuer) => Ok(issuer.clone()),
		}
	}
}
