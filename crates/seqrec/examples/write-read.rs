//! Write a handful of records to a temp file, then read them back.
//!
//! Run with: cargo run --example write-read

use seqrec::channel::{ChannelError, ElementType, Mode, RecordChannel, Value};
use seqrec::record::ControlWidth;

fn main() -> Result<(), ChannelError> {
    let path = std::env::temp_dir().join(format!("seqrec-demo-{}.bin", std::process::id()));

    let mut writer = RecordChannel::new(&path, Mode::Write, ControlWidth::Four);
    writer.with_open(|chan| {
        chan.write_value(Value::Int(42), ElementType::I32)?;
        chan.write_values(
            &[Value::Float(1.0), Value::Float(2.5), Value::Float(-3.75)],
            ElementType::F64,
        )?;
        chan.write_record(b"raw payload bytes")?;
        Ok(())
    })?;

    let mut reader = RecordChannel::new(&path, Mode::Read, ControlWidth::Four);
    reader.with_open(|chan| {
        // A one-element record comes back as a bare scalar.
        println!("scalar: {:?}", chan.read_record(ElementType::I32)?);
        println!("floats: {:?}", chan.read_record(ElementType::F64)?);
        println!("bytes:  {:?}", chan.read_record(ElementType::U8)?);
        Ok(())
    })?;

    let _ = std::fs::remove_file(&path);
    Ok(())
}
