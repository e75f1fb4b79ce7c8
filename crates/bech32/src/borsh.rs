use std::io;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::Hrp;

impl BorshSerialize for Hrp {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        BorshSerialize::serialize(self.as_str(), writer)
    }
}

impl BorshDeserialize for Hrp {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let s = String::deserialize_reader(reader)?;
        Hrp::new(&s).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
