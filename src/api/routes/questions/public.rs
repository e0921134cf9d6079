//! Public types for the sample questions API
use serde::Serialize;

#[derive(Serialize)]
pub struct SampleQuestionsResponse {
    pub questions: Vec<String>,
}
