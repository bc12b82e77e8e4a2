use seqrec_record::{ControlWidth, RecordError, RecordReader};
use seqrec_stream::FileStream;

use crate::cmd::ScanArgs;
use crate::exit::{record_error, stream_error, CliResult, SUCCESS};
use crate::output::{print_scan, OutputFormat, RecordEntry};

pub fn run(args: ScanArgs, format: OutputFormat) -> CliResult<i32> {
    let width = ControlWidth::from_byte_count(args.control_bytes)
        .map_err(|err| record_error("invalid --control-bytes", err))?;

    let stream = FileStream::open_read(&args.path)
        .map_err(|err| stream_error("failed opening record file", err))?;
    let mut reader = RecordReader::new(stream, width);

    let mut entries = Vec::new();
    loop {
        let offset = reader
            .get_mut()
            .position()
            .map_err(|err| stream_error("failed querying offset", err))?;

        match reader.read_record() {
            Ok(payload) => entries.push(RecordEntry {
                index: entries.len(),
                offset,
                length: payload.len() as u64,
            }),
            Err(RecordError::EndOfFile) => break,
            Err(err) => {
                let context = format!("record {} at offset {offset}", entries.len());
                return Err(record_error(&context, err));
            }
        }
    }

    print_scan(&entries, format);
    Ok(SUCCESS)
}
