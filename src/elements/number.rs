use std::{any::Any, cmp::Ordering};

use crate::elements::Element;

/// Scalar held by a [`Number`]: an integer or a floating-point value.
#[derive(Clone, Copy)]
pub enum Real {
    Int(i64),
    Float(f64),
}

impl Real {
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Float(f) if f.is_nan())
    }
}

/// Exact comparison of an integer with a float, without rounding `i` to `f64`.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, the first float above i64::MAX
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    if f.is_nan() {
        return None;
    }
    if f >= UPPER {
        return Some(Ordering::Less);
    }
    if f < -UPPER {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)),
        ordering => Some(ordering),
    }
}

impl PartialEq for Real {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl std::fmt::Display for Real {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => std::fmt::Display::fmt(i, f),
            // keeps the decimal point: `3.0`, not `3`
            Self::Float(x) => std::fmt::Debug::fmt(x, f),
        }
    }
}

impl std::fmt::Debug for Real {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

macro_rules! impl_real_from {
    ($variant:ident, $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Real {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_real_from!(Int, i64: i8, i16, i32, i64, u8, u16, u32);
impl_real_from!(Float, f64: f32, f64);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    #[error("Number must be a real number (int or float), got {type_name}")]
    NotReal { type_name: &'static str },
    #[error("Number must be a real number, got NaN")]
    NaN,
    #[error("{type_name} value does not fit into a 64-bit integer")]
    OutOfRange { type_name: &'static str },
    #[error("unsupported comparison between Number and {type_name}")]
    UnsupportedComparison { type_name: &'static str },
}

/// Immutable real number with total ordering.
///
/// Equality and ordering compare values across integers and floats, so `Number(3) == Number(3.0)`.
/// NaN is rejected on construction.
#[derive(Clone, Copy)]
pub struct Number {
    value: Real,
}

impl Number {
    pub fn new(value: impl Into<Real>) -> Result<Self, NumberError> {
        let value = value.into();
        if value.is_nan() {
            return Err(NumberError::NaN);
        }
        Ok(Self { value })
    }

    /// Builds a Number from a dynamically typed value.
    ///
    /// Accepts the primitive integer and float types and other Numbers. Booleans, strings, complex
    /// pairs and containers are rejected, nothing is coerced.
    pub fn try_from_element(value: &dyn Element) -> Result<Self, NumberError> {
        let value = value.unboxed();
        let any = value.as_any();
        if let Some(number) = any.downcast_ref::<Number>() {
            return Ok(*number);
        }
        if let Some(real) = Self::real_from_any(any) {
            return Self::new(real);
        }
        let type_name = value.type_name();
        let wide = any
            .downcast_ref::<u64>()
            .map(|&v| i64::try_from(v).ok())
            .or_else(|| any.downcast_ref::<usize>().map(|&v| i64::try_from(v).ok()))
            .or_else(|| any.downcast_ref::<isize>().map(|&v| i64::try_from(v).ok()))
            .or_else(|| any.downcast_ref::<i128>().map(|&v| i64::try_from(v).ok()))
            .or_else(|| any.downcast_ref::<u128>().map(|&v| i64::try_from(v).ok()));
        match wide {
            Some(Some(v)) => Self::new(v),
            Some(None) => Err(NumberError::OutOfRange { type_name }),
            None => Err(NumberError::NotReal { type_name }),
        }
    }

    fn real_from_any(any: &dyn Any) -> Option<Real> {
        any.downcast_ref::<i8>()
            .map(|&v| Real::from(v))
            .or_else(|| any.downcast_ref::<i16>().map(|&v| Real::from(v)))
            .or_else(|| any.downcast_ref::<i32>().map(|&v| Real::from(v)))
            .or_else(|| any.downcast_ref::<i64>().map(|&v| Real::from(v)))
            .or_else(|| any.downcast_ref::<u8>().map(|&v| Real::from(v)))
            .or_else(|| any.downcast_ref::<u16>().map(|&v| Real::from(v)))
            .or_else(|| any.downcast_ref::<u32>().map(|&v| Real::from(v)))
            .or_else(|| any.downcast_ref::<f32>().map(|&v| Real::from(v)))
            .or_else(|| any.downcast_ref::<f64>().map(|&v| Real::from(v)))
    }

    #[inline]
    pub fn value(&self) -> Real {
        self.value
    }

    /// Returns a new, independent instance holding the same value.
    #[inline]
    pub fn copy(&self) -> Self {
        Self { value: self.value }
    }

    /// Compares with a dynamically typed value, which must be a Number.
    pub fn try_cmp(&self, other: &dyn Element) -> Result<Ordering, NumberError> {
        let other = other.unboxed();
        other
            .as_any()
            .downcast_ref::<Number>()
            .map(|other| self.cmp(other))
            .ok_or(NumberError::UnsupportedComparison {
                type_name: other.type_name(),
            })
    }

    #[inline]
    pub fn try_eq(&self, other: &dyn Element) -> Result<bool, NumberError> {
        self.try_cmp(other).map(Ordering::is_eq)
    }

    #[inline]
    pub fn try_lt(&self, other: &dyn Element) -> Result<bool, NumberError> {
        self.try_cmp(other).map(Ordering::is_lt)
    }
}

impl From<i64> for Number {
    #[inline]
    fn from(value: i64) -> Self {
        Self {
            value: Real::Int(value),
        }
    }
}

impl From<i32> for Number {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl TryFrom<f64> for Number {
    type Error = NumberError;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq for Number {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // never NaN, so always comparable
        self.value
            .partial_cmp(&other.value)
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}

impl std::fmt::Debug for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.value, f)
    }
}
