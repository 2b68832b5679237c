use super::{BinRead, DecodeError};

/// Reader that narrows a borrowed slice as bytes are consumed.
pub struct SliceReader<'a> {
    rest: &'a [u8],
    total: usize,
}

impl<'a> SliceReader<'a> {
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            rest: buf,
            total: buf.len(),
        }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.total - self.rest.len()
    }
}

impl BinRead for SliceReader<'_> {
    fn read_into(&mut self, buf: &mut [u8]) -> Result<(), DecodeError> {
        if self.rest.len() < buf.len() {
            return Err(DecodeError::UnexpectedEof {
                needed: buf.len(),
                remaining: self.rest.len(),
            });
        }

        let (head, tail) = self.rest.split_at(buf.len());
        buf.copy_from_slice(head);
        self.rest = tail;
        Ok(())
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.rest.len()
    }
}
