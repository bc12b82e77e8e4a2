use std::fs;

use seqrec_channel::{Mode, RecordChannel};
use seqrec_dtype::{ElementType, Value};
use seqrec_record::ControlWidth;

use crate::cmd::PackArgs;
use crate::exit::{channel_error, record_error, CliError, CliResult, SUCCESS, USAGE};

pub fn run(args: PackArgs) -> CliResult<i32> {
    let width = ControlWidth::from_byte_count(args.control_bytes)
        .map_err(|err| record_error("invalid --control-bytes", err))?;

    if args.values.is_empty() && args.raw.is_empty() {
        return Err(CliError::new(
            USAGE,
            "nothing to write: pass --value or --raw",
        ));
    }

    let values = args
        .values
        .iter()
        .map(|input| parse_value(input, args.ty))
        .collect::<CliResult<Vec<_>>>()?;

    let mut channel = RecordChannel::new(&args.path, Mode::Write, width);
    channel
        .with_open(|chan| {
            if !values.is_empty() {
                chan.write_values(&values, args.ty)?;
            }
            for path in &args.raw {
                let payload = fs::read(path).map_err(seqrec_stream::StreamError::Io)?;
                chan.write_record(&payload)?;
            }
            Ok(())
        })
        .map_err(|err| channel_error("failed writing record file", err))?;

    Ok(SUCCESS)
}

fn parse_value(input: &str, ty: ElementType) -> CliResult<Value> {
    let parsed = match ty {
        ElementType::I8 | ElementType::I16 | ElementType::I32 | ElementType::I64 => input
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|err| err.to_string()),
        ElementType::U8 | ElementType::U16 | ElementType::U32 | ElementType::U64 => input
            .parse::<u64>()
            .map(Value::Uint)
            .map_err(|err| err.to_string()),
        ElementType::F32 | ElementType::F64 => input
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|err| err.to_string()),
    };
    parsed.map_err(|err| CliError::new(USAGE, format!("invalid {ty} value {input:?}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_values_per_type_kind() {
        assert_eq!(
            parse_value("-12", ElementType::I32).unwrap(),
            Value::Int(-12)
        );
        assert_eq!(
            parse_value("12", ElementType::U8).unwrap(),
            Value::Uint(12)
        );
        assert_eq!(
            parse_value("2.5", ElementType::F64).unwrap(),
            Value::Float(2.5)
        );
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(parse_value("2.5", ElementType::I32).is_err());
        assert!(parse_value("-1", ElementType::U32).is_err());
        assert!(parse_value("abc", ElementType::F64).is_err());
    }
}
