use std::{
    collections::{LinkedList, VecDeque},
    convert::Infallible,
    marker::PhantomData,
};

use crate::collections::adapter::ContainerCommon;

pub trait StackLike<T>: ContainerCommon {
    type PushError;

    fn push(&mut self, value: T) -> Result<(), Self::PushError>;

    fn pop(&mut self) -> Option<T>;

    fn top(&self) -> Option<&T>;

    fn top_mut(&mut self) -> Option<&mut T>;

    /// Iterates from the bottom to the top.
    fn iter<'a>(&'a self) -> impl DoubleEndedIterator<Item = &'a T>
    where
        T: 'a;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("Empty Stack")]
    Empty,
}

/// LIFO stack over a [`StackLike`] container, `Vec<T>` by default.
///
/// Index 0 of the container is the bottom, pushes and pops happen at the top.
pub struct Stack<T, Container: StackLike<T> = Vec<T>> {
    container: Container,
    _phantom_data: PhantomData<T>,
}

impl<T, Container: StackLike<T> + Default> Stack<T, Container> {
    #[inline]
    pub fn new() -> Self {
        Self::from_container(Default::default())
    }
}

impl<T, Container: StackLike<T>> Stack<T, Container> {
    /// Wraps an existing container, its last element becomes the top.
    #[inline]
    pub fn from_container(container: Container) -> Self {
        Self {
            container,
            _phantom_data: PhantomData,
        }
    }

    #[inline]
    pub fn inner(&self) -> &Container {
        &self.container
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    #[inline]
    pub fn into_inner(self) -> Container {
        self.container
    }

    #[inline]
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.container.pop().ok_or(StackError::Empty)
    }

    #[inline]
    pub fn peak(&self) -> Result<&T, StackError> {
        self.container.top().ok_or(StackError::Empty)
    }

    #[inline]
    pub fn peak_mut(&mut self) -> Result<&mut T, StackError> {
        self.container.top_mut().ok_or(StackError::Empty)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.container.len()
    }

    /// Iterates from the bottom to the top.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.container.iter()
    }
}

impl<T, Container: StackLike<T, PushError = Infallible>> Stack<T, Container> {
    #[inline]
    pub fn push(&mut self, value: T) {
        let Ok(()) = self.container.push(value);
    }
}

impl<T, Container: StackLike<T>> From<Container> for Stack<T, Container> {
    #[inline]
    fn from(value: Container) -> Self {
        Self::from_container(value)
    }
}

impl<T, Container: StackLike<T> + Default> Default for Stack<T, Container> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Container: StackLike<T> + Clone> Clone for Stack<T, Container> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_container(self.container.clone())
    }
}

impl<T, Container: StackLike<T, PushError = Infallible>> Extend<T> for Stack<T, Container> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<T, Container: StackLike<T, PushError = Infallible> + Default> FromIterator<T>
    for Stack<T, Container>
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T, Container: StackLike<T> + std::fmt::Debug> std::fmt::Debug for Stack<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stack")
            .field("container", &self.container)
            .finish()
    }
}

/// Writes `items` joined by `"; "`.
pub(crate) fn fmt_joined<I, F>(
    f: &mut std::fmt::Formatter<'_>,
    items: I,
    mut fmt_item: F,
) -> std::fmt::Result
where
    I: Iterator,
    F: FnMut(I::Item, &mut std::fmt::Formatter<'_>) -> std::fmt::Result,
{
    for (index, item) in items.enumerate() {
        if index > 0 {
            f.write_str("; ")?;
        }
        fmt_item(item, f)?;
    }
    Ok(())
}

/// `Empty Stack`, or `Stack Elements: ` followed by the elements from bottom to top.
impl<T: std::fmt::Display, Container: StackLike<T>> std::fmt::Display for Stack<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty Stack");
        }
        f.write_str("Stack Elements: ")?;
        fmt_joined(f, self.iter(), std::fmt::Display::fmt)
    }
}

impl<T, Container: StackLike<T>> ContainerCommon for Stack<T, Container> {
    #[inline]
    fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}

impl<T, Container: StackLike<T>> StackLike<T> for Stack<T, Container> {
    type PushError = Container::PushError;

    #[inline]
    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        self.container.push(value)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.container.pop()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.container.top()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.container.top_mut()
    }

    #[inline]
    fn iter<'a>(&'a self) -> impl DoubleEndedIterator<Item = &'a T>
    where
        T: 'a,
    {
        self.container.iter()
    }
}

impl<T> StackLike<T> for Vec<T> {
    type PushError = Infallible;

    #[inline]
    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push(value);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.last()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    #[inline]
    fn iter<'a>(&'a self) -> impl DoubleEndedIterator<Item = &'a T>
    where
        T: 'a,
    {
        self.as_slice().iter()
    }
}

impl<T> StackLike<T> for VecDeque<T> {
    type PushError = Infallible;

    #[inline]
    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push_back(value);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn iter<'a>(&'a self) -> impl DoubleEndedIterator<Item = &'a T>
    where
        T: 'a,
    {
        VecDeque::iter(self)
    }
}

impl<T> StackLike<T> for LinkedList<T> {
    type PushError = Infallible;

    #[inline]
    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push_back(value);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn iter<'a>(&'a self) -> impl DoubleEndedIterator<Item = &'a T>
    where
        T: 'a,
    {
        LinkedList::iter(self)
    }
}
