use crate::cli::args::DecodeArgs;
use crate::cli::handlers::{read_input, write_output};
use base_codec::{CodecRegistry, TextCodec};

pub fn handle(args: DecodeArgs, registry: &CodecRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let codec = registry.build(&args.format)?;

    let input = read_input(args.file.as_ref())?;
    let text = String::from_utf8(input).map_err(|_| "Input must be valid UTF-8 for decoding")?;
    let data = codec.decode(text.trim())?;

    if args.hex {
        let mut hex = hex::encode(&data);
        hex.push('\n');
        write_output(args.output.as_ref(), hex.as_bytes())
    } else {
        write_output(args.output.as_ref(), &data)
    }
}
