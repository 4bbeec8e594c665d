use std::{convert::Infallible, marker::PhantomData};

use crate::collections::adapter::{ContainerCommon, Stack, StackLike};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("The Queue is empty!")]
    Empty,
}

/// FIFO queue made of two stacks.
///
/// Pushes go to the input stack. When the output stack runs dry, the input stack is flushed onto
/// it, which reverses it so the oldest element ends up on top. Each element is moved at most
/// once, so every operation is amortized O(1).
///
/// The logical order is the output stack from top to bottom followed by the input stack from
/// bottom to top.
pub struct Queue<T, S: StackLike<T> = Stack<T>> {
    input_stack: S,
    output_stack: S,
    _phantom_data: PhantomData<T>,
}

impl<T, S: StackLike<T, PushError = Infallible> + Default> Queue<T, S> {
    #[inline]
    pub fn new() -> Self {
        Self {
            input_stack: Default::default(),
            output_stack: Default::default(),
            _phantom_data: PhantomData,
        }
    }
}

impl<T, S: StackLike<T, PushError = Infallible>> Queue<T, S> {
    #[inline]
    pub fn push(&mut self, value: T) {
        let Ok(()) = self.input_stack.push(value);
    }

    /// Moves the input stack onto the output stack once the output stack is empty.
    ///
    /// Flushing while the output stack still holds older elements would bury them under newer
    /// ones, so it is a no-op in that case, as it is when the input stack is empty.
    fn flush_inputs_to_outputs(&mut self) {
        if !self.output_stack.is_empty() {
            return;
        }
        while let Some(value) = self.input_stack.pop() {
            let Ok(()) = self.output_stack.push(value);
        }
    }

    /// Returns the oldest element without removing it.
    pub fn peak(&mut self) -> Result<&T, QueueError> {
        self.flush_inputs_to_outputs();
        self.output_stack.top().ok_or(QueueError::Empty)
    }

    /// Removes the oldest element and returns it.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        self.flush_inputs_to_outputs();
        self.output_stack.pop().ok_or(QueueError::Empty)
    }
}

impl<T, S: StackLike<T>> Queue<T, S> {
    #[inline]
    pub fn size(&self) -> usize {
        self.input_stack.len() + self.output_stack.len()
    }

    /// Iterates from the oldest to the newest element without flushing.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.output_stack
            .iter()
            .rev()
            .chain(self.input_stack.iter())
    }
}

impl<T, S: StackLike<T, PushError = Infallible> + Default> Default for Queue<T, S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: StackLike<T, PushError = Infallible>> Extend<T> for Queue<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<T, S: StackLike<T, PushError = Infallible> + Default> FromIterator<T> for Queue<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T, S: StackLike<T> + std::fmt::Debug> std::fmt::Debug for Queue<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Queue")
            .field("input_stack", &self.input_stack)
            .field("output_stack", &self.output_stack)
            .finish()
    }
}

impl<T, S: StackLike<T> + std::fmt::Display> std::fmt::Display for Queue<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty Queue");
        }
        write!(
            f,
            "Queue elements:\n\tInput stack:\n\t\t{}\n\tOutput stack:\n\t\t{}",
            self.input_stack, self.output_stack
        )
    }
}

impl<T, S: StackLike<T>> ContainerCommon for Queue<T, S> {
    #[inline]
    fn len(&self) -> usize {
        self.size()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.input_stack.is_empty() && self.output_stack.is_empty()
    }
}
