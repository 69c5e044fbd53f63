//! ParticipantRegistry: deduplication and stable id assignment
//!
//! Identity policy: a participant is keyed by email address when one is
//! present (compared case-insensitively), otherwise by display name. The
//! first occurrence of a key wins; later duplicates never overwrite its role
//! or name.

use super::input::ValidatedInput;
use crate::address::{parse_address_list, parse_single_address, ParsedAddress};
use crate::record::{Participant, ParticipantId, Role};
use std::collections::HashMap;

/// Identity under which a participant is deduplicated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    Email(String),
    Name(String),
}

impl IdentityKey {
    /// Key for a parsed address, or `None` when it has neither email nor name
    pub fn for_address(address: &ParsedAddress) -> Option<Self> {
        if let Some(email) = &address.email {
            return Some(Self::Email(email.to_ascii_lowercase()));
        }
        address.display_name.clone().map(Self::Name)
    }
}

/// Participants of one build, in first-seen order.
///
/// Lives for a single build invocation and is consumed into the record.
#[derive(Debug, Default)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
    index: HashMap<IdentityKey, usize>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every participant named by the input, in field order:
    /// from, to, cc, then explicit attendee names.
    pub fn from_input(input: &ValidatedInput) -> Self {
        let mut registry = Self::new();

        let sender = parse_single_address(&input.from);
        if sender.is_valid() {
            registry.add_if_new(Role::From, &sender);
        } else {
            // Keep the sender as a name-only participant so it stays p1
            tracing::warn!(from = %input.from, "sender has no parsable address");
            let name = sender.display_name.as_deref().unwrap_or(&input.from);
            registry.add_name(Role::From, name);
        }

        for (role, field) in [(Role::To, &input.to), (Role::Cc, &input.cc)] {
            if let Some(raw) = field {
                for address in parse_address_list(raw) {
                    registry.add_if_new(role, &address);
                }
            }
        }

        for name in &input.participants {
            if registry.add_name(Role::Participant, name).is_none() {
                tracing::warn!("skipping blank participant name");
            }
        }

        registry
    }

    /// Register a parsed address unless its identity is already known.
    ///
    /// Returns the registered (or pre-existing) participant; `None` when the
    /// address carries neither an email nor a display name.
    pub fn add_if_new(&mut self, role: Role, address: &ParsedAddress) -> Option<&Participant> {
        let key = IdentityKey::for_address(address)?;
        let name = address
            .display_name
            .clone()
            .or_else(|| address.email.clone())?;
        Some(self.insert(key, role, name, address.email.clone()))
    }

    /// Register a participant known only by name
    pub fn add_name(&mut self, role: Role, name: &str) -> Option<&Participant> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let key = IdentityKey::Name(name.to_string());
        Some(self.insert(key, role, name.to_string(), None))
    }

    fn insert(
        &mut self,
        key: IdentityKey,
        role: Role,
        name: String,
        email: Option<String>,
    ) -> &Participant {
        if let Some(&existing) = self.index.get(&key) {
            return &self.participants[existing];
        }
        let position = self.participants.len();
        self.participants.push(Participant {
            id: ParticipantId::from_sequence(position + 1),
            name,
            email,
            role,
        });
        self.index.insert(key, position);
        &self.participants[position]
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn first(&self) -> Option<&Participant> {
        self.participants.first()
    }

    pub fn second(&self) -> Option<&Participant> {
        self.participants.get(1)
    }

    pub fn into_participants(self) -> Vec<Participant> {
        self.participants
    }
}
