//! Raw byte views of fixed-size values

/// A value with a fixed-width storage representation.
///
/// `raw_bytes` returns the bytes in host-native order, index 0 being the
/// lowest address. This mirrors what a byte-by-byte read of the value's
/// memory would observe, without any unsafe reinterpretation.
pub trait RawBytes {
    fn raw_bytes(&self) -> Vec<u8>;

    /// Number of bytes in the storage representation
    fn byte_len(&self) -> usize {
        self.raw_bytes().len()
    }
}

macro_rules! impl_raw_bytes_ne {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RawBytes for $ty {
                fn raw_bytes(&self) -> Vec<u8> {
                    self.to_ne_bytes().to_vec()
                }

                fn byte_len(&self) -> usize {
                    std::mem::size_of::<$ty>()
                }
            }
        )*
    };
}

impl_raw_bytes_ne!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl RawBytes for bool {
    fn raw_bytes(&self) -> Vec<u8> {
        vec![u8::from(*self)]
    }
}

impl RawBytes for char {
    fn raw_bytes(&self) -> Vec<u8> {
        u32::from(*self).raw_bytes()
    }
}

/// Arrays are laid out element after element, so a text buffer dumps every
/// byte, trailing NULs included.
impl<T: RawBytes, const N: usize> RawBytes for [T; N] {
    fn raw_bytes(&self) -> Vec<u8> {
        self.iter().flat_map(RawBytes::raw_bytes).collect()
    }
}

impl<T: RawBytes + ?Sized> RawBytes for &T {
    fn raw_bytes(&self) -> Vec<u8> {
        (**self).raw_bytes()
    }

    fn byte_len(&self) -> usize {
        (**self).byte_len()
    }
}

impl<T: RawBytes + ?Sized> RawBytes for Box<T> {
    fn raw_bytes(&self) -> Vec<u8> {
        (**self).raw_bytes()
    }

    fn byte_len(&self) -> usize {
        (**self).byte_len()
    }
}
