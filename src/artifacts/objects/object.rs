use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use std::io::{BufRead, Write};

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    /// Prefix the record body with its `<type> <size>\0` header
    fn frame(&self, body: &[u8]) -> Result<Bytes> {
        let mut object_bytes = Vec::with_capacity(body.len() + 16);
        let header = format!("{} {}\0", self.object_type().as_str(), body.len());
        object_bytes.write_all(header.as_bytes())?;
        object_bytes.write_all(body)?;

        Ok(Bytes::from(object_bytes))
    }
}
