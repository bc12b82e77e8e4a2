use seqrec_channel::{Mode, Record, RecordChannel};
use seqrec_record::ControlWidth;

use crate::cmd::DumpArgs;
use crate::exit::{channel_error, record_error, CliResult, SUCCESS};
use crate::output::{print_dump, value_to_json, OutputFormat, RecordDump};

pub fn run(args: DumpArgs, format: OutputFormat) -> CliResult<i32> {
    let width = ControlWidth::from_byte_count(args.control_bytes)
        .map_err(|err| record_error("invalid --control-bytes", err))?;

    let mut channel = RecordChannel::new(&args.path, Mode::Read, width);
    let records = channel
        .with_open(|chan| {
            let mut records = Vec::new();
            loop {
                match chan.read_record(args.ty) {
                    Ok(record) => records.push(to_dump(records.len(), record)),
                    Err(err) if err.is_end_of_file() => return Ok(records),
                    Err(err) => return Err(err),
                }
            }
        })
        .map_err(|err| channel_error("failed decoding record file", err))?;

    print_dump(&records, format);
    Ok(SUCCESS)
}

fn to_dump(index: usize, record: Record) -> RecordDump {
    let scalar = record.as_scalar().is_some();
    let values: Vec<_> = record
        .into_values()
        .iter()
        .map(value_to_json)
        .collect();
    RecordDump {
        index,
        count: values.len(),
        scalar,
        values,
    }
}
