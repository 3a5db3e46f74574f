//! Raw contact batches reported by the host input system

/// A single contact point at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Position in the reference view's local space (logical pixels)
    pub position: [f32; 2],
}

impl Contact {
    pub fn new(position: [f32; 2]) -> Self {
        Self { position }
    }
}

/// Unordered set of contacts active at one instant
///
/// Contacts carry no identity across batches. When a batch holds exactly one
/// contact, that contact is the one at index 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactBatch {
    contacts: Vec<Contact>,
}

impl ContactBatch {
    /// Creates an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a batch holding one contact
    pub fn single(position: [f32; 2]) -> Self {
        Self {
            contacts: vec![Contact::new(position)],
        }
    }

    /// Creates a batch from a list of positions
    pub fn from_positions(positions: impl IntoIterator<Item = [f32; 2]>) -> Self {
        positions.into_iter().map(Contact::new).collect()
    }

    /// Adds a contact to the batch
    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Number of contacts in the batch
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Returns the contact if the batch holds exactly one
    pub fn sole(&self) -> Option<&Contact> {
        match self.contacts.as_slice() {
            [contact] => Some(contact),
            _ => None,
        }
    }
}

impl FromIterator<Contact> for ContactBatch {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().collect(),
        }
    }
}
