/// Implements [`Word`](crate::Word) for a list of unsigned primitives.
///
/// Every method forwards to the primitive's inherent implementation; the only
/// logic here is the checked-shift mask construction, which never shifts by
/// the full width of the type.
macro_rules! impl_word {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::word::sealed::Sealed for $ty {}

        impl $crate::word::Word for $ty {
            const BITS: usize = <$ty>::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const ONES: Self = <$ty>::MAX;

            #[inline(always)]
            fn low_mask(n: usize) -> Self {
                let bits = <Self as $crate::word::Word>::BITS;
                debug_assert!(n <= bits, "mask width {n} exceeds word width");
                // n == 0 shifts by BITS, which checked_shr turns into zero
                <$ty>::MAX.checked_shr((bits - n) as u32).unwrap_or(0)
            }

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$ty>::count_ones(self)
            }

            #[inline(always)]
            fn trailing_zeros(self) -> u32 {
                <$ty>::trailing_zeros(self)
            }

            #[inline(always)]
            fn leading_zeros(self) -> u32 {
                <$ty>::leading_zeros(self)
            }
        }
    )+};
}

pub(crate) use impl_word;
