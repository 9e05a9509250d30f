//! 16-byte u128 record

use binrw::io::{Read, Seek, Write};
use binrw::{BinRead, BinResult, BinWrite, Endian};

/// Size of one serialized record in bytes
pub const RECORD_SIZE: usize = 16;

/// One table value split into 64-bit halves
///
/// Serialized as `low` then `high`, each little-endian, independent of the
/// endianness requested by the caller. Small values are zero-padded so every
/// record is exactly [`RECORD_SIZE`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// `value mod 2^64`
    pub low: u64,
    /// `value div 2^64`
    pub high: u64,
}

impl Record {
    /// Split a value into its halves
    pub const fn new(value: u128) -> Self {
        Self {
            low: value as u64,
            high: (value >> 64) as u64,
        }
    }

    /// Recombine the halves into `low + high * 2^64`
    pub const fn value(&self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }

    /// Serialize into a fixed 16-byte array
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[..8].copy_from_slice(&self.low.to_le_bytes());
        bytes[8..].copy_from_slice(&self.high.to_le_bytes());
        bytes
    }
}

impl From<u128> for Record {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl From<Record> for u128 {
    fn from(record: Record) -> Self {
        record.value()
    }
}

impl BinRead for Record {
    type Args<'a> = ();

    fn read_options<R: Read + Seek>(
        reader: &mut R,
        _endian: Endian,
        _args: Self::Args<'_>,
    ) -> BinResult<Self> {
        // Record layout is always little-endian
        let low = u64::read_options(reader, Endian::Little, ())?;
        let high = u64::read_options(reader, Endian::Little, ())?;
        Ok(Self { low, high })
    }
}

impl BinWrite for Record {
    type Args<'a> = ();

    fn write_options<W: Write + Seek>(
        &self,
        writer: &mut W,
        _endian: Endian,
        _args: Self::Args<'_>,
    ) -> BinResult<()> {
        self.low.write_options(writer, Endian::Little, ())?;
        self.high.write_options(writer, Endian::Little, ())?;
        Ok(())
    }
}
