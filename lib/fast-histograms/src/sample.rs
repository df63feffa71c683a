//! Numeric sample types.

/// A numeric value that can be binned by a numeric histogram.
///
/// Samples are resolved to bins in `f64` space, so every primitive integer and floating-point type can be fed to a
/// histogram directly: 8-bit image data, `f32` measurements, and so on.
#[allow(private_bounds)]
pub trait Sample: Copy + Send + Sync + private::Sealed {
    /// Converts the sample to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Sample for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }

            impl private::Sealed for $ty {}
        )+
    };
}

impl_sample!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

mod private {
    pub(super) trait Sealed {}
}
