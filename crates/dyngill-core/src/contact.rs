//! Undirected contacts and the per-slice contact list.

use crate::NodeId;

/// An undirected contact between two nodes during one time slice.
///
/// The order of the endpoints carries no meaning. A self contact
/// `(i, i)` is representable; it can never join a susceptible and an
/// infected node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Contact(pub NodeId, pub NodeId);

impl Contact {
    /// Build a contact from raw node indices.
    pub fn new(i: u32, j: u32) -> Self {
        Self(NodeId(i), NodeId(j))
    }

    /// Returns `true` if both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.0 == self.1
    }

    /// The larger of the two endpoint ids.
    pub fn max_node(&self) -> NodeId {
        self.0.max(self.1)
    }
}

impl From<(u32, u32)> for Contact {
    fn from((i, j): (u32, u32)) -> Self {
        Self::new(i, j)
    }
}

/// All contacts active during one time slice of length `Δt`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSlice {
    contacts: Vec<Contact>,
}

impl ContactSlice {
    /// Create an empty slice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slice with room for `n` contacts.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            contacts: Vec::with_capacity(n),
        }
    }

    /// Append a contact.
    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Number of contacts in the slice.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` if nobody is in contact during this slice.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The contacts of this slice, in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Iterate over the contacts.
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Largest node id touched by this slice, if any.
    pub fn max_node(&self) -> Option<NodeId> {
        self.contacts.iter().map(Contact::max_node).max()
    }
}

impl From<Vec<Contact>> for ContactSlice {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl FromIterator<Contact> for ContactSlice {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(u32, u32)> for ContactSlice {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        iter.into_iter().map(Contact::from).collect()
    }
}

impl<'a> IntoIterator for &'a ContactSlice {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
