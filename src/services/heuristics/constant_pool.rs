//! Minimal class-file constant-pool walk.
//!
//! Only text constants matter for marker matching, so this reads the header,
//! skips every non-Utf8 pool entry by its fixed size, and collects the Utf8
//! payloads. It is deliberately not a bytecode parser: anything after the
//! constant pool is ignored, and malformed or truncated input just ends the
//! walk with whatever was collected so far.

const CLASS_MAGIC: u32 = 0xCAFE_BABE;

/// Extract the Utf8 text constants from raw class-file bytes.
pub(super) fn utf8_constants(bytes: &[u8]) -> Vec<String> {
    let mut constants = Vec::new();
    let mut reader = ByteReader::new(bytes);

    let header_ok = reader.read_u32() == Some(CLASS_MAGIC) && reader.skip(4); // minor + major
    if !header_ok {
        return constants;
    }
    let Some(count) = reader.read_u16() else {
        return constants;
    };

    // Pool slots are 1-based; Long/Double entries occupy two slots.
    let mut slot = 1u16;
    while slot < count {
        let Some(tag) = reader.read_u8() else { break };
        let advanced = match tag {
            // CONSTANT_Utf8
            1 => match reader.read_u16().and_then(|len| reader.take(len as usize)) {
                Some(data) => {
                    constants.push(String::from_utf8_lossy(data).into_owned());
                    true
                }
                None => false,
            },
            // Class, String, MethodType, Module, Package
            7 | 8 | 16 | 19 | 20 => reader.skip(2),
            // MethodHandle
            15 => reader.skip(3),
            // Integer, Float, Fieldref, Methodref, InterfaceMethodref,
            // NameAndType, Dynamic, InvokeDynamic
            3 | 4 | 9 | 10 | 11 | 12 | 17 | 18 => reader.skip(4),
            // Long, Double: eight bytes and a second pool slot
            5 | 6 => {
                slot = slot.saturating_add(1);
                reader.skip(8)
            }
            // Unknown tag: the pool is malformed, stop here.
            _ => false,
        };
        if !advanced {
            break;
        }
        slot = slot.saturating_add(1);
    }

    constants
}

struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        let slice = self.bytes.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    fn skip(&mut self, len: usize) -> bool {
        self.take(len).is_some()
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take(1).map(|b| b[0])
    }

    fn read_u16(&mut self) -> Option<u16> {
        self.take(2).map(|b| u16::from_be_bytes([b[0], b[1]]))
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take(4)
            .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}
