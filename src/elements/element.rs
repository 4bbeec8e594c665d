use std::any::Any;

/// A value of any `'static` type that can be stored behind `dyn Element` and inspected at runtime.
///
/// Every `T: Any + Debug` is an `Element`. When holding a `Box<dyn Element>`, call these methods
/// on the pointee (`(*boxed).as_any()` or `boxed.as_ref().as_any()`), since the box itself is an
/// `Element` too. Code that inspects a value it did not box itself goes through
/// `<dyn Element>::unboxed` first.
pub trait Element: Any + std::fmt::Debug + 'static {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Name of the concrete type, for error messages.
    fn type_name(&self) -> &'static str;
}

impl<T: Any + std::fmt::Debug> Element for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl dyn Element {
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Follows `Box<dyn Element>` layers down to the value they hold.
    pub fn unboxed(&self) -> &dyn Element {
        match self.as_any().downcast_ref::<Box<dyn Element>>() {
            Some(inner) => inner.as_ref().unboxed(),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t1() {
        let boxed: Box<dyn Element> = Box::new(42_i64);
        assert!(boxed.as_ref().is::<i64>());
        assert!(!boxed.as_ref().is::<i32>());
        assert_eq!(boxed.as_ref().type_name(), "i64");
        assert_eq!(boxed.into_any().downcast::<i64>().ok().map(|b| *b), Some(42));
    }

    #[test]
    fn downcast_mut_reaches_pointee() {
        let mut boxed: Box<dyn Element> = Box::new(String::from("asd"));
        boxed
            .as_mut()
            .downcast_mut::<String>()
            .map(|s| s.push('!'));
        assert_eq!(boxed.as_ref().downcast_ref::<String>().map(String::as_str), Some("asd!"));
    }

    #[test]
    fn unboxed_reaches_innermost_value() {
        let boxed: Box<dyn Element> = Box::new(7_u16);
        let nested: Box<dyn Element> = Box::new(Box::new(7_u16) as Box<dyn Element>);
        let outer: &dyn Element = &boxed;
        assert!(!outer.is::<u16>());
        assert!(outer.unboxed().is::<u16>());
        assert_eq!((&nested as &dyn Element).unboxed().downcast_ref::<u16>(), Some(&7));
        assert_eq!(outer.unboxed().type_name(), "u16");
    }
}
