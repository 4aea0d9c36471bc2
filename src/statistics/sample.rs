//! Per-kind numeric policy for statistics windows
//!
//! Integers shrink the window to a power of two and divide by shifting;
//! floats keep the requested size and multiply by the reciprocal. Integer
//! accumulators use wrapping arithmetic: sums stay exact modulo 2^bits, so
//! they are correct whenever the true window sum fits the sample type.

use core::fmt::Debug;

use tracing::warn;

use crate::kind::NumericKind;
use crate::math;

/// A scalar type a [`WindowStatistics`](super::WindowStatistics) can hold
pub trait Sample: Copy + Default + PartialOrd + Debug + Send + Sync + 'static {
    /// Kind tag matching this type
    const KIND: NumericKind;

    /// Additive identity
    const ZERO: Self;

    /// Smallest representable value, the initial running maximum.
    /// Negative infinity for floats.
    const MIN: Self;

    /// Largest representable value, the initial running minimum.
    /// Positive infinity for floats.
    const MAX: Self;

    /// Shift count for integers, reciprocal of the capacity for floats
    type Divisor: Copy + Debug + PartialEq + Send + Sync;

    /// Effective capacity and divisor for a requested window size.
    /// `requested` must be non-zero.
    fn window_policy(requested: u32) -> (u32, Self::Divisor);

    fn add(self, rhs: Self) -> Self;

    fn sub(self, rhs: Self) -> Self;

    fn mul(self, rhs: Self) -> Self;

    /// `self / capacity`, without dividing
    fn scale(self, divisor: Self::Divisor) -> Self;

    /// Square root, warning on a negative argument
    fn root(self) -> Self;

    /// Root of a variance that may have gone negative through truncation or
    /// rounding; warns and still returns a value.
    fn variance_root(self) -> Self;

    /// Decode from the first `size_of::<Self>()` bytes, native endian
    fn read_ne(bytes: &[u8]) -> Option<Self>;

    /// Encode into the first `size_of::<Self>()` bytes, native endian
    fn write_ne(self, bytes: &mut [u8]) -> bool;

    fn to_f64(self) -> f64;

    /// False for NaN and the infinities; always true for integers
    fn is_finite(self) -> bool;
}

/// Largest power of two not above `requested`, and its base-2 logarithm
#[inline]
pub fn power_of_two_floor(requested: u32) -> (u32, u32) {
    debug_assert!(requested > 0);
    let shift = 31 - requested.leading_zeros();
    (1 << shift, shift)
}

fn warn_truncated_window(kind: NumericKind, requested: u32, capacity: u32) {
    if requested != capacity {
        warn!(
            %kind,
            requested,
            effective = capacity,
            "integer window size rounded down to a power of two"
        );
    }
}

macro_rules! impl_marshal {
    ($t:ty) => {
        #[inline]
        fn read_ne(bytes: &[u8]) -> Option<Self> {
            let raw = bytes.get(..core::mem::size_of::<$t>())?;
            raw.try_into().ok().map(<$t>::from_ne_bytes)
        }

        #[inline]
        fn write_ne(self, bytes: &mut [u8]) -> bool {
            match bytes.get_mut(..core::mem::size_of::<$t>()) {
                Some(dst) => {
                    dst.copy_from_slice(&self.to_ne_bytes());
                    true
                }
                None => false,
            }
        }
    };
}

macro_rules! impl_int_sample {
    ($t:ty, $kind:ident, $root:path, $signed:expr) => {
        impl Sample for $t {
            const KIND: NumericKind = NumericKind::$kind;
            const ZERO: Self = 0;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            type Divisor = u32;

            fn window_policy(requested: u32) -> (u32, u32) {
                let (capacity, shift) = power_of_two_floor(requested);
                warn_truncated_window(Self::KIND, requested, capacity);
                (capacity, shift)
            }

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn scale(self, divisor: u32) -> Self {
                // Signed shifts saturate at the sign bit so negative sums
                // still floor to -1 when the window is wider than the type.
                if $signed {
                    self >> divisor.min(<$t>::BITS - 1)
                } else {
                    self.checked_shr(divisor).unwrap_or(0)
                }
            }

            #[inline]
            fn root(self) -> Self {
                $root(self)
            }

            fn variance_root(self) -> Self {
                // Unsigned variances can only wrap, never go below zero, so
                // a wrapped value is the unsigned form of a negative one.
                if !$signed && self > <$t>::MAX / 2 {
                    warn!(
                        value = self as u64,
                        "variance wrapped below zero, rooting its bit pattern"
                    );
                }
                $root(self)
            }

            impl_marshal!($t);

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_finite(self) -> bool {
                true
            }
        }
    };
}

macro_rules! impl_float_sample {
    ($t:ty, $kind:ident, $root:path) => {
        impl Sample for $t {
            const KIND: NumericKind = NumericKind::$kind;
            const ZERO: Self = 0.0;
            const MIN: Self = <$t>::NEG_INFINITY;
            const MAX: Self = <$t>::INFINITY;

            type Divisor = $t;

            fn window_policy(requested: u32) -> (u32, $t) {
                (requested, 1.0 / requested as $t)
            }

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn scale(self, divisor: $t) -> Self {
                self * divisor
            }

            #[inline]
            fn root(self) -> Self {
                if self < 0.0 {
                    warn!(value = self as f64, "square root of a negative value");
                }
                $root(self)
            }

            fn variance_root(self) -> Self {
                if self < 0.0 {
                    warn!(
                        variance = self as f64,
                        "negative variance from rounding noise, reporting zero deviation"
                    );
                    return 0.0;
                }
                $root(self)
            }

            impl_marshal!($t);

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
        }
    };
}

impl_int_sample!(i8, Int8, math::isqrt_i8, true);
impl_int_sample!(i16, Int16, math::isqrt_i16, true);
impl_int_sample!(i32, Int32, math::isqrt_i32, true);
impl_int_sample!(i64, Int64, math::isqrt_i64, true);
impl_int_sample!(u8, UInt8, math::isqrt_u8, false);
impl_int_sample!(u16, UInt16, math::isqrt_u16, false);
impl_int_sample!(u32, UInt32, math::isqrt_u32, false);
impl_int_sample!(u64, UInt64, math::isqrt_u64, false);
impl_float_sample!(f32, Float32, math::sqrtf);
impl_float_sample!(f64, Float64, math::sqrt);
