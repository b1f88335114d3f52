use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub number: usize,
    pub user_story: String,
    pub acceptance_criterion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Params {
    pub debug: bool,
}

/// Envelope POSTed to the run endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestBody {
    pub dataset: Dataset,
    pub params: Params,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
}

impl ServiceStatus {
    pub fn is_operational(&self) -> bool {
        self.status == "operational"
    }
}
