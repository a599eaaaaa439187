//! Modal stack for managing overlays
//!
//! One enum-based stack instead of a boolean flag per dialog; only the top
//! modal receives input events.

/// A modal overlay displayed on top of the browser screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Location selection dialog
    LocationFilter,
    /// Industry selection dialog
    IndustryFilter,
    /// Keyboard shortcut reference
    Help,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::LocationFilter);
        assert!(stack.top().is_some());

        stack.push(Modal::Help);

        let top = stack.pop();
        assert_eq!(top, Some(Modal::Help));

        let top = stack.pop();
        assert_eq!(top, Some(Modal::LocationFilter));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_modal_stack_top() {
        let mut stack = ModalStack::new();
        assert!(stack.is_empty());

        stack.push(Modal::IndustryFilter);
        assert_eq!(stack.top(), Some(&Modal::IndustryFilter));

        stack.push(Modal::Help);
        assert_eq!(stack.top(), Some(&Modal::Help));
        assert!(!stack.is_empty());
    }
}
