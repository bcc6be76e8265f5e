use crate::repository::Resource;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    Submitted,
    /// Credentials checked and, on success, tokens persisted.
    Completed(Resource<()>),
}

impl Intent for LoginIntent {}
