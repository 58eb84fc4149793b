use std::cmp::Ordering;

use crate::customer::{Customer, CustomerId};

#[derive(Debug)]
struct Node {
    customer: Customer,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

/// Unbalanced binary search tree of customers keyed by customer id.
///
/// Shape follows insertion order, so sorted inserts degrade to a list. Keys
/// are unique: inserting an id that is already present keeps the original.
#[derive(Debug, Default)]
pub struct CustomerIndex {
    root: Option<Box<Node>>,
    len: usize,
}

impl CustomerIndex {
    /// Returns `false` and drops `customer` if its id is already indexed.
    pub fn insert(&mut self, customer: Customer) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match customer.customer_id.cmp(&node.customer.customer_id) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *slot = Some(Box::new(Node {
            customer,
            left: None,
            right: None,
        }));
        self.len += 1;
        true
    }

    pub fn search(&self, customer_id: CustomerId) -> Option<&Customer> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match customer_id.cmp(&node.customer.customer_id) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.customer),
            }
        }
        None
    }

    pub fn search_mut(&mut self, customer_id: CustomerId) -> Option<&mut Customer> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match customer_id.cmp(&node.customer.customer_id) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.customer),
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// In-order traversal, ascending by customer id.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Customer;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(customer_id: CustomerId) -> Customer {
        Customer::new(customer_id, 40, "Male".to_string(), false)
    }

    fn index_of(ids: &[CustomerId]) -> CustomerIndex {
        let mut index = CustomerIndex::default();
        for &id in ids {
            index.insert(customer(id));
        }
        index
    }

    fn in_order_ids(index: &CustomerIndex) -> Vec<CustomerId> {
        index.iter().map(|c| c.customer_id).collect()
    }

    #[test]
    fn test_in_order_traversal_is_strictly_ascending() {
        let sequences: [&[CustomerId]; 5] = [
            &[50, 30, 70, 20, 40, 60, 80],
            &[1, 2, 3, 4, 5, 6],
            &[6, 5, 4, 3, 2, 1],
            &[19957, -3, 42, 0, 42, 7, -3, 1000],
            &[],
        ];

        for ids in sequences {
            let index = index_of(ids);
            let mut expected: Vec<CustomerId> = ids.to_vec();
            expected.sort_unstable();
            expected.dedup();

            assert_eq!(in_order_ids(&index), expected);
            assert_eq!(index.len(), expected.len());
        }
    }

    #[test]
    fn test_search_finds_every_inserted_id() {
        let ids = [50, 30, 70, 20, 40, 60, 80, 35, 65];
        let index = index_of(&ids);

        for id in ids {
            assert_eq!(index.search(id).map(|c| c.customer_id), Some(id));
        }
        for missing in [0, 10, 36, 55, 90, -50] {
            assert!(index.search(missing).is_none());
        }
    }

    #[test]
    fn test_search_on_empty_index() {
        let index = CustomerIndex::default();

        assert!(index.is_empty());
        assert!(index.search(1).is_none());
        assert_eq!(index.iter().count(), 0);
    }

    #[test]
    fn test_duplicate_insert_keeps_existing_entry() {
        let mut index = CustomerIndex::default();
        assert!(index.insert(Customer::new(9, 25, "Female".to_string(), true)));
        assert!(!index.insert(Customer::new(9, 61, "Male".to_string(), false)));

        let kept = index.search(9).unwrap();
        assert_eq!(kept.age, 25);
        assert_eq!(kept.gender, "Female");
        assert!(kept.is_loyalty_member);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_search_mut_updates_entry_in_place() {
        let mut index = index_of(&[3, 1, 2]);
        index
            .search_mut(2)
            .unwrap()
            .add_transaction(crate::customer::tests::transaction(15.0, "2024-03-01"));

        assert_eq!(index.search(2).unwrap().transactions().len(), 1);
        assert!(index.search(1).unwrap().transactions().is_empty());
        assert!(index.search_mut(4).is_none());
    }

    #[test]
    fn test_sorted_inserts_still_searchable() {
        let ids: Vec<CustomerId> = (0..500).collect();
        let index = index_of(&ids);

        assert_eq!(index.len(), 500);
        assert!(index.search(499).is_some());
        assert!(index.search(500).is_none());
    }
}
