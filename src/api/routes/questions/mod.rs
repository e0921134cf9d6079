pub mod public;
mod router;

pub use router::{SAMPLE_QUESTIONS, router};
