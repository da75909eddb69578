pub mod session;

pub use session::{WizardSession, WizardStep};
