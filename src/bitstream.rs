//! Build-time FPGA configuration image

/// An immutable bitstream, linked into the program image at build time
/// (`include_bytes!`). The format is vendor-specific and opaque here;
/// the loader only cares about length and byte order.
#[derive(Clone, Copy)]
pub struct Bitstream<'a> {
    data: &'a [u8],
}

impl<'a> Bitstream<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Bitstream { data, }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_content_are_fixed() {
        static IMAGE: [u8; 4] = [0x7e, 0xaa, 0x99, 0x7e];
        let bs = Bitstream::new(&IMAGE);
        assert_eq!(bs.len(), 4);
        assert!(!bs.is_empty());
        assert_eq!(bs.as_bytes(), &IMAGE);
    }
}
