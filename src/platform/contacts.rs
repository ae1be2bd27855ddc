//! In-memory contact directory built from config

use async_trait::async_trait;

use super::{ContactDirectory, Result};
use crate::config::Config;
use crate::interpreter::Contact;

#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.contact.iter().map(Contact::from).collect())
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// First contact whose name contains `name`, ignoring case
    pub fn lookup(&self, name: &str) -> Option<&Contact> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.contacts
            .iter()
            .find(|c| c.name.to_lowercase().contains(&needle))
    }
}

#[async_trait]
impl ContactDirectory for ContactBook {
    async fn find(&self, name: &str) -> Result<Option<Contact>> {
        Ok(self.lookup(name).cloned())
    }
}
