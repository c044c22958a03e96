use thiserror::Error;

pub type CustomerId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    full_name: String,
}

impl Customer {
    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomerError {
    #[error("Customer name must not be blank")]
    BlankName,
    #[error("No customer ids left to allocate")]
    IdsExhausted,
}

/// Customers in registration order. Ids are handed out sequentially and never reused.
#[derive(Debug)]
pub struct CustomerRegistry {
    /// `None` once the last representable id has been handed out.
    next_id: Option<CustomerId>,
    customers: Vec<Customer>,
}

impl Default for CustomerRegistry {
    fn default() -> Self {
        Self::new(1)
    }
}

impl CustomerRegistry {
    pub fn new(first_id: CustomerId) -> Self {
        Self {
            next_id: Some(first_id),
            customers: Vec::new(),
        }
    }

    pub fn create(&mut self, full_name: &str) -> Result<&Customer, CustomerError> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(CustomerError::BlankName);
        }
        let id = self.next_id.ok_or(CustomerError::IdsExhausted)?;
        let customer = Customer {
            id,
            full_name: full_name.to_string(),
        };
        self.next_id = id.checked_add(1);
        self.customers.push(customer);
        Ok(&self.customers[self.customers.len() - 1])
    }

    pub fn find(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn as_slice(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut registry = CustomerRegistry::default();
        let first = registry.create("Ivan Petrov").unwrap().id();
        let second = registry.create("Anna Sidorova").unwrap().id();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut registry = CustomerRegistry::new(10);
        assert_eq!(registry.create("   ").unwrap_err(), CustomerError::BlankName);
        assert_eq!(registry.create("").unwrap_err(), CustomerError::BlankName);
        assert!(registry.is_empty());

        // failed attempts don't consume ids
        let customer = registry.create("  Ivan Petrov ").unwrap();
        assert_eq!(customer.id(), 10);
        assert_eq!(customer.full_name(), "Ivan Petrov");
    }

    #[test]
    fn ids_are_never_reused_after_exhaustion() {
        let mut registry = CustomerRegistry::new(CustomerId::MAX - 1);
        assert_eq!(registry.create("A").unwrap().id(), CustomerId::MAX - 1);
        assert_eq!(registry.create("B").unwrap().id(), CustomerId::MAX);
        assert_eq!(registry.create("C").unwrap_err(), CustomerError::IdsExhausted);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn find_by_id() {
        let mut registry = CustomerRegistry::default();
        registry.create("Ivan Petrov").unwrap();
        assert_eq!(registry.find(1).unwrap().full_name(), "Ivan Petrov");
        assert!(registry.find(2).is_none());
    }
}
