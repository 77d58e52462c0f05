// This is a part of rust-encoding.
// Copyright (c) 2014-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{self, Read, Write};

use eci::label::eci_from_label;
use eci::segment::{negotiate, Segment, Symbology};
use eci::{best_eci, eci_length, transcode_into, types};
use getopts::Options;

fn symbology_from_name(name: &str) -> Option<Symbology> {
    match &name.to_ascii_lowercase()[..] {
        "aztec" => Some(Symbology::Aztec),
        "codeone" => Some(Symbology::CodeOne),
        "datamatrix" => Some(Symbology::DataMatrix),
        "dotcode" => Some(Symbology::DotCode),
        "gridmatrix" => Some(Symbology::GridMatrix),
        "hanxin" => Some(Symbology::HanXin),
        "maxicode" => Some(Symbology::MaxiCode),
        "micropdf417" => Some(Symbology::MicroPdf417),
        "pdf417" => Some(Symbology::Pdf417),
        "qrcode" => Some(Symbology::QrCode),
        "ultracode" => Some(Symbology::UltraCode),
        "upnqr" => Some(Symbology::UpnQr),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let mut opts = Options::new();
    opts.optopt("e", "eci", "set output ECI", "NUMBER");
    opts.optopt("t", "to-code", "set output character set by name", "NAME");
    opts.optopt("s", "symbology", "negotiate lines as segments for given symbology", "NAME");
    opts.optopt("o", "output", "output file", "FILE");
    opts.optflag("h", "help", "print this help menu");

    let matches = opts.parse(&args[1..])?;
    if matches.opt_present("h") {
        println!("{}", opts.usage("Transcodes UTF-8 input to an ECI character set."));
        return Ok(());
    }

    let mut input = Vec::new();
    match matches.free.first().map(|s| &s[..]) {
        Some("-") | None => { io::stdin().read_to_end(&mut input)?; }
        Some(f) => { File::open(f)?.read_to_end(&mut input)?; }
    }
    let mut output: Box<dyn Write> = match matches.opt_str("o").as_ref().map(|s| &s[..]) {
        Some("-") | None => Box::new(io::stdout()),
        Some(f) => Box::new(File::create(f)?),
    };

    if let Some(name) = matches.opt_str("s") {
        let symbology = symbology_from_name(&name)
            .ok_or_else(|| format!("invalid symbology name {}", name))?;
        let mut segments: Vec<Segment> = input.split(|&b| b == b'\n')
            .filter(|line| !line.is_empty())
            .map(Segment::new)
            .collect();
        let result = negotiate(&mut segments, symbology.default_eci())?;
        for (i, segment) in segments.iter().enumerate() {
            let eci = segment.effective_eci(symbology.default_eci());
            let bytes = segment.transcode(symbology.default_eci())?;
            writeln!(output, "segment {}: ECI {}, {} bytes", i, eci, bytes.len())?;
        }
        writeln!(output, "first ECI: {:?}, message ECI: {:?}", result.first_eci, result.message_eci)?;
        return Ok(());
    }

    let eci = match (matches.opt_str("e"), matches.opt_str("t")) {
        (Some(number), _) => number.parse::<u32>()?,
        (None, Some(name)) => eci_from_label(&name)
            .ok_or_else(|| format!("invalid character set name {}", name))?,
        (None, None) => {
            let eci = best_eci(&input).ok_or("input is not valid UTF-8")?;
            eprintln!("selected ECI {}", eci);
            eci
        }
    };

    if eci == types::ECI_UTF_8 {
        output.write_all(&input)?;
        return Ok(());
    }
    let mut dest = vec![0; eci_length(eci, &input) + 1];
    let length = transcode_into(eci, &input, &mut dest)?;
    output.write_all(&dest[..length])?;
    Ok(())
}
