//! Element bounds for curvelet coefficient buffers.
//!
//! Coefficients are plain `Copy` numbers, real or complex. Views never do
//! arithmetic on them; they only move them around, so the bound is small.
//!
//! [`CastCoefficient`] is the element conversion used when a view is copied
//! into a different element type. Real-to-real and complex-to-complex
//! conversions go through [`NumCast`] component-wise and fail (return `None`)
//! when a value is not representable in the target type. Reals widen into
//! complex numbers with a zero imaginary part. Complex-to-real is not
//! provided: dropping the imaginary part silently is not a conversion.

use num_complex::Complex;
use num_traits::{NumCast, ToPrimitive};

/// Bounds shared by every element type a coefficient view can hold.
pub trait Coefficient: Copy + PartialEq + std::fmt::Debug {}

impl<T> Coefficient for T where T: Copy + PartialEq + std::fmt::Debug {}

/// Fallible conversion of one coefficient into element type `U`.
pub trait CastCoefficient<U>: Copy {
    /// Convert, or `None` when the value cannot be represented as `U`.
    fn cast_coefficient(self) -> Option<U>;
}

macro_rules! impl_cast_real {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl CastCoefficient<$dst> for $src {
                #[inline]
                fn cast_coefficient(self) -> Option<$dst> {
                    <$dst as NumCast>::from(self)
                }
            }
        )*
    };
}

macro_rules! impl_cast_real_all {
    ($($src:ty),*) => {
        $(
            impl_cast_real!(
                $src => f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
            );

            impl CastCoefficient<Complex<f32>> for $src {
                #[inline]
                fn cast_coefficient(self) -> Option<Complex<f32>> {
                    Some(Complex::new(<f32 as NumCast>::from(self)?, 0.0))
                }
            }

            impl CastCoefficient<Complex<f64>> for $src {
                #[inline]
                fn cast_coefficient(self) -> Option<Complex<f64>> {
                    Some(Complex::new(<f64 as NumCast>::from(self)?, 0.0))
                }
            }
        )*
    };
}

impl_cast_real_all!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<A, B> CastCoefficient<Complex<B>> for Complex<A>
where
    A: ToPrimitive + Copy,
    B: NumCast,
{
    #[inline]
    fn cast_coefficient(self) -> Option<Complex<B>> {
        Some(Complex::new(
            <B as NumCast>::from(self.re)?,
            <B as NumCast>::from(self.im)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};

    fn assert_coefficient<T: Coefficient>() {}

    #[test]
    fn test_standard_types() {
        assert_coefficient::<f32>();
        assert_coefficient::<f64>();
        assert_coefficient::<i32>();
        assert_coefficient::<u8>();
        assert_coefficient::<Complex64>();
    }

    #[test]
    fn test_real_widening() {
        let x: Option<f64> = 7i32.cast_coefficient();
        assert_eq!(x, Some(7.0));
        let y: Option<i64> = 250u8.cast_coefficient();
        assert_eq!(y, Some(250));
    }

    #[test]
    fn test_real_unrepresentable() {
        let neg: Option<u8> = (-1i32).cast_coefficient();
        assert_eq!(neg, None);
        let big: Option<i8> = 300i32.cast_coefficient();
        assert_eq!(big, None);
        let nan: Option<i32> = f64::NAN.cast_coefficient();
        assert_eq!(nan, None);
    }

    #[test]
    fn test_float_to_int_truncates() {
        let x: Option<i32> = 2.75f64.cast_coefficient();
        assert_eq!(x, Some(2));
    }

    #[test]
    fn test_real_to_complex() {
        let z: Option<Complex64> = 3i16.cast_coefficient();
        assert_eq!(z, Some(Complex64::new(3.0, 0.0)));
        let w: Option<Complex32> = 1.5f64.cast_coefficient();
        assert_eq!(w, Some(Complex32::new(1.5, 0.0)));
    }

    #[test]
    fn test_complex_to_complex() {
        let z = Complex32::new(1.0, -2.0);
        let w: Option<Complex64> = z.cast_coefficient();
        assert_eq!(w, Some(Complex64::new(1.0, -2.0)));
    }

    #[test]
    fn test_complex_component_unrepresentable() {
        let z = Complex64::new(1.0, f64::NAN);
        let w: Option<Complex<i32>> = z.cast_coefficient();
        assert_eq!(w, None);
    }
}
