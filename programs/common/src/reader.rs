//! Little-endian instruction data reader

use crate::SwapError;

pub struct InstructionReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> InstructionReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], SwapError> {
        let end = self
            .offset
            .checked_add(N)
            .ok_or(SwapError::InvalidInstruction)?;
        let slice = self
            .data
            .get(self.offset..end)
            .ok_or(SwapError::InvalidInstruction)?;

        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        self.offset = end;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, SwapError> {
        Ok(self.read_bytes::<1>()?[0])
    }

    pub fn read_u64(&mut self) -> Result<u64, SwapError> {
        Ok(u64::from_le_bytes(self.read_bytes::<8>()?))
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }
}
