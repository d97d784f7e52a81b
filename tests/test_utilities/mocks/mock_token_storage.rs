use shelfwise::prelude::*;
use std::sync::{Arc, Mutex};

/// In-memory TokenStorage; clones share the slot
#[derive(Default, Clone)]
pub struct MemoryTokenStorage {
    pub slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.stored())
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.slot.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}
