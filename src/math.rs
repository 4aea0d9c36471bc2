//! Square roots for every supported sample width
//!
//! Float roots use the standard library when available and fall back to libm
//! for no_std. Integer roots are computed digit by digit with shifts,
//! comparisons and subtractions only, so they never divide.

use tracing::warn;

#[cfg(feature = "std")]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn sqrtf(x: f32) -> f32 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sqrtf(x: f32) -> f32 {
    libm::sqrtf(x)
}

/// Defines `fn $name(n: $t) -> $t`, the floor of the square root of `n`.
///
/// `one` starts at the highest power of four not above `n`; each step tries
/// to set the next result bit and shifts the trial bit two places down.
macro_rules! unsigned_isqrt {
    ($(#[$meta:meta])* $name:ident, $t:ty) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(n: $t) -> $t {
            let mut op = n;
            let mut res: $t = 0;
            let mut one: $t = 1 << (<$t>::BITS - 2);

            while one > op {
                one >>= 2;
            }

            while one != 0 {
                if op >= res + one {
                    op -= res + one;
                    res = (res >> 1) + one;
                } else {
                    res >>= 1;
                }
                one >>= 2;
            }

            res
        }
    };
}

/// Defines the signed root as the unsigned root of the same bit pattern.
///
/// A negative argument has no real root; it is reported and the bit pattern
/// is still rooted so the caller always gets a value.
macro_rules! signed_isqrt {
    ($(#[$meta:meta])* $name:ident, $t:ty, $u:ty, $unsigned:ident) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(n: $t) -> $t {
            if n < 0 {
                warn!(
                    value = n as i64,
                    "integer square root of a negative value, rooting its unsigned bit pattern"
                );
            }
            $unsigned(n as $u) as $t
        }
    };
}

unsigned_isqrt!(
    /// Integer square root of an 8-bit value
    isqrt_u8,
    u8
);
unsigned_isqrt!(
    /// Integer square root of a 16-bit value
    isqrt_u16,
    u16
);
unsigned_isqrt!(
    /// Integer square root of a 32-bit value
    isqrt_u32,
    u32
);
unsigned_isqrt!(
    /// Integer square root of a 64-bit value
    isqrt_u64,
    u64
);

signed_isqrt!(isqrt_i8, i8, u8, isqrt_u8);
signed_isqrt!(isqrt_i16, i16, u16, isqrt_u16);
signed_isqrt!(isqrt_i32, i32, u32, isqrt_u32);
signed_isqrt!(isqrt_i64, i64, u64, isqrt_u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_squares() {
        for r in 0u32..=255 {
            assert_eq!(isqrt_u32(r * r), r);
        }
        assert_eq!(isqrt_u8(225), 15);
        assert_eq!(isqrt_u16(65025), 255);
        assert_eq!(isqrt_u64(1u64 << 62), 1u64 << 31);
    }

    #[test]
    fn test_floors_between_squares() {
        assert_eq!(isqrt_u32(2), 1);
        assert_eq!(isqrt_u32(3), 1);
        assert_eq!(isqrt_u32(8), 2);
        assert_eq!(isqrt_u32(99), 9);
        assert_eq!(isqrt_u16(1000), 31);
    }

    #[test]
    fn test_type_maxima() {
        assert_eq!(isqrt_u8(u8::MAX), 15);
        assert_eq!(isqrt_u16(u16::MAX), 255);
        assert_eq!(isqrt_u32(u32::MAX), 65535);
        assert_eq!(isqrt_u64(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn test_matches_float_root() {
        let mut n = 1u64;
        while n < (1u64 << 40) {
            let expected = (n as f64).sqrt().floor() as u64;
            assert_eq!(isqrt_u64(n), expected, "n = {}", n);
            n = n * 3 + 1;
        }
    }

    #[test]
    fn test_signed_positive() {
        assert_eq!(isqrt_i8(100), 10);
        assert_eq!(isqrt_i16(10_000), 100);
        assert_eq!(isqrt_i32(1 << 30), 1 << 15);
        assert_eq!(isqrt_i64(0), 0);
    }

    #[test]
    fn test_signed_negative_uses_bit_pattern() {
        // -1i8 is 0xFF, whose root is 15
        assert_eq!(isqrt_i8(-1), 15);
        assert_eq!(isqrt_i32(-1), 65535);
        assert_eq!(isqrt_i16(-4), isqrt_u16((-4i16) as u16) as i16);
    }

    #[test]
    fn test_float_roots() {
        assert!((sqrt(2.0) - core::f64::consts::SQRT_2).abs() < 1e-12);
        assert!((sqrtf(9.0) - 3.0).abs() < 1e-6);
        assert!(sqrt(-1.0).is_nan());
    }
}
