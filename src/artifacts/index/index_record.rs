//! Length-prefixed primitives of the index body

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use byteorder::{ByteOrder, WriteBytesExt};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn write_string(bytes: &mut Vec<u8>, value: &str) -> anyhow::Result<()> {
    let length = u16::try_from(value.len())
        .with_context(|| format!("Index string too long: {} bytes", value.len()))?;
    bytes.write_u16::<byteorder::NetworkEndian>(length)?;
    bytes.write_all(value.as_bytes())?;

    Ok(())
}

pub fn write_path(bytes: &mut Vec<u8>, path: &Path) -> anyhow::Result<()> {
    let path = path
        .to_str()
        .with_context(|| format!("Path is not valid UTF-8: {}", path.display()))?;
    write_string(bytes, path)
}

pub fn write_count(bytes: &mut Vec<u8>, count: usize) -> anyhow::Result<()> {
    let count = u32::try_from(count).context("Too many index entries")?;
    bytes.write_u32::<byteorder::NetworkEndian>(count)?;

    Ok(())
}

pub fn write_file_map(bytes: &mut Vec<u8>, files: &FileMap) -> anyhow::Result<()> {
    write_count(bytes, files.len())?;
    for (path, oid) in files {
        write_path(bytes, path)?;
        oid.write_h40_to(bytes)?;
    }

    Ok(())
}

pub fn write_path_set(bytes: &mut Vec<u8>, paths: &BTreeSet<PathBuf>) -> anyhow::Result<()> {
    write_count(bytes, paths.len())?;
    for path in paths {
        write_path(bytes, path)?;
    }

    Ok(())
}

/// Typed reads on top of a checksummed index file
pub struct RecordReader<'r, 'f> {
    reader: &'r mut Checksum<'f>,
}

impl<'r, 'f> RecordReader<'r, 'f> {
    pub fn new(reader: &'r mut Checksum<'f>) -> Self {
        RecordReader { reader }
    }

    pub fn read_count(&mut self) -> anyhow::Result<u32> {
        let bytes = self.reader.read(4)?;
        Ok(byteorder::NetworkEndian::read_u32(&bytes))
    }

    pub fn read_string(&mut self) -> anyhow::Result<String> {
        let length = self.reader.read(2)?;
        let length = byteorder::NetworkEndian::read_u16(&length) as usize;
        let bytes = self.reader.read(length)?;

        String::from_utf8(bytes.to_vec()).context("Invalid UTF-8 string in index")
    }

    pub fn read_path(&mut self) -> anyhow::Result<PathBuf> {
        Ok(PathBuf::from(self.read_string()?))
    }

    pub fn read_oid(&mut self) -> anyhow::Result<ObjectId> {
        let bytes = self.reader.read(OBJECT_ID_LENGTH / 2)?;
        ObjectId::read_h40_from(&mut &bytes[..])
    }

    pub fn read_file_map(&mut self) -> anyhow::Result<FileMap> {
        let count = self.read_count()?;
        let mut files = FileMap::new();
        for _ in 0..count {
            let path = self.read_path()?;
            let oid = self.read_oid()?;
            files.insert(path, oid);
        }

        Ok(files)
    }

    pub fn read_path_set(&mut self) -> anyhow::Result<BTreeSet<PathBuf>> {
        let count = self.read_count()?;
        (0..count).map(|_| self.read_path()).collect()
    }
}
