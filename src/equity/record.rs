use crate::Probability;
use crate::cards::hand::Hand;
use byteorder::LittleEndian;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::io::Read;
use std::io::Write;

/// Decision-support statistics for one (pockets, board) situation.
///
/// - `ppot`: probability a currently losing hand ends up winning
/// - `npot`: probability a currently winning hand ends up losing
/// - `hs`: current hand strength against the opponents' range
/// - `wp`: probability of winning at showdown
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Equity {
    pub ppot: Probability,
    pub npot: Probability,
    pub hs: Probability,
    pub wp: Probability,
}

impl From<[Probability; 4]> for Equity {
    fn from([ppot, npot, hs, wp]: [Probability; 4]) -> Self {
        Self { ppot, npot, hs, wp }
    }
}
impl From<Equity> for [Probability; 4] {
    fn from(e: Equity) -> Self {
        [e.ppot, e.npot, e.hs, e.wp]
    }
}

impl crate::Arbitrary for Equity {
    fn random() -> Self {
        Self::from([(); 4].map(|_| rand::random::<Probability>()))
    }
}

impl std::fmt::Display for Equity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ppot {:.4}  npot {:.4}  hs {:.4}  wp {:.4}",
            self.ppot, self.npot, self.hs, self.wp
        )
    }
}

/// One on-disk cache record: the board mask and its statistics.
///
/// Layout is 24 bytes, little-endian, no padding:
/// `u64 board | f32 ppot | f32 npot | f32 hs | f32 wp`.
/// Files are a bare concatenation of records with no header or count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub board: u64,
    pub equity: Equity,
}

impl Record {
    pub fn new(board: Hand, equity: Equity) -> Self {
        Self {
            board: u64::from(board),
            equity,
        }
    }
    pub fn read<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let board = reader.read_u64::<LittleEndian>()?;
        let ppot = reader.read_f32::<LittleEndian>()?;
        let npot = reader.read_f32::<LittleEndian>()?;
        let hs = reader.read_f32::<LittleEndian>()?;
        let wp = reader.read_f32::<LittleEndian>()?;
        Ok(Self {
            board,
            equity: Equity { ppot, npot, hs, wp },
        })
    }
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u64::<LittleEndian>(self.board)?;
        writer.write_f32::<LittleEndian>(self.equity.ppot)?;
        writer.write_f32::<LittleEndian>(self.equity.npot)?;
        writer.write_f32::<LittleEndian>(self.equity.hs)?;
        writer.write_f32::<LittleEndian>(self.equity.wp)?;
        Ok(())
    }
}
