use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Once;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Write a zip-format mod archive with the given entries.
pub fn write_jar(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).expect("create test archive");
    let mut writer = ZipWriter::new(file);
    for (name, bytes) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start entry");
        writer.write_all(bytes).expect("write entry");
    }
    writer.finish().expect("finish test archive");
}

/// Minimal class-file bytes: a valid header and a constant pool holding the
/// given strings as Utf8 entries. Enough for the constant-pool walk; nothing
/// after the pool is needed.
pub fn class_with_constants(constants: &[&str]) -> Vec<u8> {
    let mut bytes = vec![0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x34];
    let count = constants.len() as u16 + 1;
    bytes.extend_from_slice(&count.to_be_bytes());
    for constant in constants {
        bytes.push(1); // CONSTANT_Utf8
        bytes.extend_from_slice(&(constant.len() as u16).to_be_bytes());
        bytes.extend_from_slice(constant.as_bytes());
    }
    bytes
}
