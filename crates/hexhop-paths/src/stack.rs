use crate::error::CollectionError;

/// Last-in, first-out stack holding the route under construction.
#[derive(Debug, Clone)]
pub struct PathStack<T> {
    items: Vec<T>,
}

impl<T> PathStack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.items.pop().ok_or(CollectionError::EmptyCollection)
    }

    /// The top item, without removing it.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.items.last().ok_or(CollectionError::EmptyCollection)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for PathStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_in_first_out() {
        let mut s = PathStack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.peek(), Ok(&3));
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn empty_stack_reports_errors() {
        let mut s = PathStack::<char>::default();
        assert!(s.is_empty());
        assert_eq!(s.peek(), Err(CollectionError::EmptyCollection));
        assert_eq!(s.pop(), Err(CollectionError::EmptyCollection));
    }
}
