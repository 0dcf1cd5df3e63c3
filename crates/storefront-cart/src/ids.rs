//! Newtype IDs for type-safe identifiers.
//!
//! Product IDs are assigned by the external catalog. Cart entry IDs are minted
//! by the cart session itself and never leave it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a product, as assigned by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a new ID from the catalog's integer identifier.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Identifier of a single cart entry.
///
/// Combines the product the entry was created for with a session-wide
/// sequence number, so two entries never share an ID even when the same
/// product is removed and added again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartEntryId {
    product_id: ProductId,
    sequence: u64,
}

impl CartEntryId {
    /// Product this entry was created for.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Position of this entry in the session's creation order.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Display for CartEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.product_id, self.sequence)
    }
}

/// Monotonic source of cart entry IDs for one session.
///
/// The counter is never rewound, clearing the cart included.
#[derive(Debug, Default)]
pub struct EntryIdGenerator {
    next: u64,
}

impl EntryIdGenerator {
    /// Create a generator starting at sequence zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next entry ID for a product.
    pub fn next_for(&mut self, product_id: ProductId) -> CartEntryId {
        let sequence = self.next;
        self.next += 1;
        CartEntryId {
            product_id,
            sequence,
        }
    }

    /// Number of IDs handed out so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_id_display() {
        let id = ProductId::new(42);
        assert_eq!(format!("{}", id), "42");
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_product_id_from_integer() {
        let id: ProductId = 7.into();
        assert_eq!(id, ProductId::new(7));
    }

    #[test]
    fn test_entry_id_generation() {
        let mut ids = EntryIdGenerator::new();
        let first = ids.next_for(ProductId::new(3));
        let second = ids.next_for(ProductId::new(3));

        assert_ne!(first, second);
        assert_eq!(first.product_id(), ProductId::new(3));
        assert_eq!(second.sequence(), first.sequence() + 1);
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_entry_ids_unique_in_a_burst() {
        let mut ids = EntryIdGenerator::new();
        let seen: HashSet<_> = (0..1000).map(|_| ids.next_for(ProductId::new(1))).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_entry_id_display() {
        let mut ids = EntryIdGenerator::new();
        ids.next_for(ProductId::new(1));
        let id = ids.next_for(ProductId::new(9));
        assert_eq!(id.to_string(), "9-1");
    }
}
