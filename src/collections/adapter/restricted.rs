use std::any::{Any, TypeId};

use crate::{
    collections::adapter::{ContainerCommon, Stack, StackError, StackLike, stack::fmt_joined},
    elements::{Element, Number},
};

/// Runtime tag of the only type a [`TypeRestrictedStack`] accepts.
///
/// Only constructible from a type, never from a value.
#[derive(Clone, Copy)]
pub struct AcceptableClass {
    type_id: TypeId,
    name: &'static str,
}

impl AcceptableClass {
    #[inline]
    pub fn of<T: Any>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Boxed elements are judged by the value they hold.
    #[inline]
    pub fn is_instance(&self, item: &dyn Element) -> bool {
        item.unboxed().as_any().type_id() == self.type_id
    }
}

impl PartialEq for AcceptableClass {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for AcceptableClass {}

impl std::fmt::Debug for AcceptableClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AcceptableClass").field(&self.name).finish()
    }
}

impl std::fmt::Display for AcceptableClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("items in the stack must be an instance of {expected}, found {found}")]
pub struct TypeMismatchError {
    pub expected: &'static str,
    pub found: &'static str,
}

/// Stack that only accepts instances of one type, [`Number`] unless told otherwise.
///
/// Elements are stored as `Box<dyn Element>` and checked against the [`AcceptableClass`] on
/// [`push`](Self::push). The restriction is fixed at construction.
pub struct TypeRestrictedStack {
    stack: Stack<Box<dyn Element>>,
    acceptable_class: AcceptableClass,
}

impl TypeRestrictedStack {
    #[inline]
    pub fn new() -> Self {
        Self::of::<Number>()
    }

    #[inline]
    pub fn of<T: Element>() -> Self {
        Self::with_class(AcceptableClass::of::<T>())
    }

    #[inline]
    pub fn with_class(acceptable_class: AcceptableClass) -> Self {
        Self {
            stack: Stack::new(),
            acceptable_class,
        }
    }

    #[inline]
    pub fn acceptable_class(&self) -> AcceptableClass {
        self.acceptable_class
    }

    pub fn type_verification(&self, item: &dyn Element) -> Result<(), TypeMismatchError> {
        let item = item.unboxed();
        if self.acceptable_class.is_instance(item) {
            return Ok(());
        }
        Err(TypeMismatchError {
            expected: self.acceptable_class.name(),
            found: item.type_name(),
        })
    }

    /// Checks every stored element from bottom to top, failing on the first bad one.
    ///
    /// Only [`inner_mut`](Self::inner_mut) and [`StackLike::top_mut`] can let such an element in.
    pub fn verify_types(&self) -> Result<(), TypeMismatchError> {
        self.stack
            .iter()
            .try_for_each(|item| self.type_verification(&**item))
    }

    /// Pushes `item` if it is an instance of the acceptable class, leaving the stack untouched
    /// otherwise.
    pub fn push(&mut self, item: Box<dyn Element>) -> Result<(), TypeMismatchError> {
        self.type_verification(&*item)?;
        self.stack.push(item);
        Ok(())
    }

    #[inline]
    pub fn pop(&mut self) -> Result<Box<dyn Element>, StackError> {
        self.stack.pop()
    }

    #[inline]
    pub fn peak(&self) -> Result<&dyn Element, StackError> {
        self.stack.peak().map(|item| &**item)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.stack.size()
    }

    /// Iterates from the bottom to the top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &dyn Element> {
        self.stack.iter().map(|item| &**item)
    }

    #[inline]
    pub fn inner(&self) -> &Stack<Box<dyn Element>> {
        &self.stack
    }

    /// Direct access to the backing stack. Pushes through it skip the type check, use
    /// [`verify_types`](Self::verify_types) to audit afterwards.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut Stack<Box<dyn Element>> {
        &mut self.stack
    }
}

impl Default for TypeRestrictedStack {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeRestrictedStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRestrictedStack")
            .field("acceptable_class", &self.acceptable_class)
            .field("stack", &self.stack)
            .finish()
    }
}

impl std::fmt::Display for TypeRestrictedStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty TypeRestrictedStack");
        }
        f.write_str("Stack Elements: ")?;
        fmt_joined(f, self.iter(), std::fmt::Debug::fmt)
    }
}

impl ContainerCommon for TypeRestrictedStack {
    #[inline]
    fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl StackLike<Box<dyn Element>> for TypeRestrictedStack {
    type PushError = TypeMismatchError;

    #[inline]
    fn push(&mut self, value: Box<dyn Element>) -> Result<(), Self::PushError> {
        TypeRestrictedStack::push(self, value)
    }

    #[inline]
    fn pop(&mut self) -> Option<Box<dyn Element>> {
        self.stack.pop().ok()
    }

    #[inline]
    fn top(&self) -> Option<&Box<dyn Element>> {
        self.stack.peak().ok()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut Box<dyn Element>> {
        self.stack.peak_mut().ok()
    }

    #[inline]
    fn iter<'a>(&'a self) -> impl DoubleEndedIterator<Item = &'a Box<dyn Element>>
    where
        Box<dyn Element>: 'a,
    {
        self.stack.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_number() {
        let x = TypeRestrictedStack::new();
        assert_eq!(x.acceptable_class(), AcceptableClass::of::<Number>());
        assert_eq!(
            TypeRestrictedStack::default().acceptable_class().name(),
            x.acceptable_class().name()
        );
    }

    #[test]
    fn type_verification() {
        let x = TypeRestrictedStack::of::<f64>();
        assert_eq!(x.type_verification(&1.21), Ok(()));
        assert_eq!(
            x.type_verification(&1_i64),
            Err(TypeMismatchError {
                expected: "f64",
                found: "i64",
            })
        );
        assert!(x.type_verification(&"asd").is_err());

        let boxed: Box<dyn Element> = Box::new(1_i64);
        let z = TypeRestrictedStack::of::<i64>();
        assert_eq!(z.type_verification(&boxed), Ok(()));
        assert_eq!(x.type_verification(&boxed).map_err(|e| e.found), Err("i64"));
        assert!(AcceptableClass::of::<i64>().is_instance(&boxed));

        let y = TypeRestrictedStack::of::<String>();
        assert_eq!(y.type_verification(&String::from("pepe")), Ok(()));
        assert!(y.type_verification(&1.2).is_err());
    }

    #[test]
    fn verify_types_after_tampering() {
        let mut x = TypeRestrictedStack::of::<&str>();
        ["asd", "dqw", "123"]
            .into_iter()
            .for_each(|s| x.inner_mut().push(Box::new(s)));
        assert_eq!(x.verify_types(), Ok(()));

        x.inner_mut().push(Box::new(1.2_f64));
        let err = x.verify_types().unwrap_err();
        assert_eq!(err.found, "f64");
        assert_eq!(x.size(), 4);
    }

    #[test]
    fn restricted_push() {
        let mut x = TypeRestrictedStack::of::<i64>();
        x.push(Box::new(2_i64)).unwrap();
        x.push(Box::new(3_i64)).unwrap();
        assert_eq!(x.size(), 2);

        assert!(x.push(Box::new(1.5_f64)).is_err());
        assert!(x.push(Box::new("x")).is_err());
        assert_eq!(x.size(), 2);
        assert_eq!(x.peak().ok().and_then(|top| top.downcast_ref::<i64>()), Some(&3));

        let mut y = TypeRestrictedStack::new();
        let err = y.push(Box::new(2.5_f32)).unwrap_err();
        assert_eq!(err.expected, std::any::type_name::<Number>());
        y.push(Box::new(Number::from(3))).unwrap();
        assert_eq!(y.size(), 1);
    }

    #[test]
    fn pop_and_peak() {
        let mut x = TypeRestrictedStack::of::<char>();
        assert_eq!(x.pop().err(), Some(StackError::Empty));
        assert_eq!(x.peak().err(), Some(StackError::Empty));
        x.push(Box::new('a')).unwrap();
        x.push(Box::new('b')).unwrap();
        let top = x.pop().unwrap();
        assert_eq!(top.into_any().downcast::<char>().ok().map(|c| *c), Some('b'));
        assert_eq!(x.peak().ok().and_then(|top| top.downcast_ref::<char>()), Some(&'a'));
    }

    fn push_all<T, S: StackLike<T>>(
        stack: &mut S,
        items: impl IntoIterator<Item = T>,
    ) -> Result<(), S::PushError> {
        items.into_iter().try_for_each(|item| stack.push(item))
    }

    #[test]
    fn shares_interface_with_plain_stack() {
        let items = || {
            [
                Box::new(1_u8) as Box<dyn Element>,
                Box::new(2_u8),
                Box::new('c'),
            ]
        };

        let mut plain = Stack::<Box<dyn Element>>::new();
        assert_eq!(push_all(&mut plain, items()), Ok(()));
        assert_eq!(plain.size(), 3);

        let mut restricted = TypeRestrictedStack::of::<u8>();
        let err = push_all(&mut restricted, items()).unwrap_err();
        assert_eq!(err.found, "char");
        assert_eq!(restricted.size(), 2);
        assert_eq!(StackLike::iter(&restricted).count(), 2);
    }

    #[test]
    fn display() {
        let mut x = TypeRestrictedStack::new();
        assert_eq!(x.to_string(), "Empty TypeRestrictedStack");
        x.push(Box::new(Number::from(1))).unwrap();
        x.push(Box::new(Number::new(2.5).unwrap())).unwrap();
        assert_eq!(x.to_string(), "Stack Elements: 1; 2.5");
        println!("{:?}", x);
    }
}
