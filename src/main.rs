// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![allow(clippy::uninlined_format_args)]

use std::path;

use pxsvg::pxtree;

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn timed<F, T>(perf: bool, name: &str, mut f: F) -> T
where
    F: FnMut() -> T,
{
    let now = std::time::Instant::now();
    let result = f();
    if perf {
        let elapsed = now.elapsed().as_micros() as f64 / 1000.0;
        println!("{}: {:.2}ms", name, elapsed);
    }

    result
}

fn process() -> Result<(), String> {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e);
        }
    };

    // Do not print warning during the ID querying.
    if !(args.query_all || args.quiet) {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    let svg_data = timed(args.perf, "Reading", || -> Result<Vec<u8>, &str> {
        if let InputFrom::File(ref file) = args.in_svg {
            std::fs::read(file).map_err(|_| "failed to open the provided file")
        } else {
            use std::io::Read;
            let mut buf = Vec::new();
            let stdin = std::io::stdin();
            let mut handle = stdin.lock();
            handle
                .read_to_end(&mut buf)
                .map_err(|_| "failed to read stdin")?;
            Ok(buf)
        }
    })?;

    let tree = timed(args.perf, "SVG Parsing", || {
        pxtree::Tree::from_data(&svg_data).map_err(|e| e.to_string())
    })?;

    if args.query_all {
        return query_all(&tree);
    }

    let canvas = timed(args.perf, "Rendering", || {
        pxsvg::rasterize(&tree, &args.options).map_err(|e| e.to_string())
    })?;

    match args.out_png {
        Some(OutputTo::Stdout) => {
            use std::io::Write;
            let buf = canvas.encode_png().map_err(|e| e.to_string())?;
            std::io::stdout()
                .write_all(&buf)
                .map_err(|_| "failed to write to stdout")?;
        }
        Some(OutputTo::File(ref file)) => {
            timed(args.perf, "Saving", || {
                canvas.save_png(file).map_err(|e| e.to_string())
            })?;
        }
        None => {}
    };

    Ok(())
}

const HELP: &str = "\
pxsvg is a tiny SVG rendering application.

USAGE:
  pxsvg [OPTIONS] <in-svg> <out-png>  # from file to file
  pxsvg [OPTIONS] <in-svg> -c         # from file to stdout
  pxsvg [OPTIONS] - <out-png>         # from stdin to file
  pxsvg [OPTIONS] - -c                # from stdin to stdout

  pxsvg in.svg out.png
  pxsvg --background black in.svg out.png
  pxsvg --query-all in.svg

OPTIONS:
      --help                    Prints this help
  -V, --version                 Prints version
  -c                            Prints the output PNG to the stdout

  --background COLOR            Sets the background color
                                Examples: red, #fff, #fff000
                                [default: white]

  --query-all                   Queries all valid SVG ids with bounding boxes

  --perf                        Prints performance stats
  --quiet                       Disables warnings

ARGS:
  <in-svg>                      Input file
  <out-png>                     Output file
";

#[derive(Debug)]
struct CliArgs {
    background: Option<svgtypes::Color>,
    query_all: bool,
    perf: bool,
    quiet: bool,

    input: String,
    output: Option<String>,
}

fn collect_args() -> Result<CliArgs, pico_args::Error> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains("--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    Ok(CliArgs {
        background: input.opt_value_from_str("--background")?,
        query_all: input.contains("--query-all"),
        perf: input.contains("--perf"),
        quiet: input.contains("--quiet"),

        input: input.free_from_str()?,
        output: input.opt_free_from_str()?,
    })
}

#[derive(Clone, PartialEq, Debug)]
enum InputFrom {
    Stdin,
    File(path::PathBuf),
}

#[derive(Clone, PartialEq, Debug)]
enum OutputTo {
    Stdout,
    File(path::PathBuf),
}

struct Args {
    in_svg: InputFrom,
    out_png: Option<OutputTo>,
    query_all: bool,
    perf: bool,
    quiet: bool,
    options: pxsvg::Options,
}

fn parse_args() -> Result<Args, String> {
    let args = collect_args().map_err(|e| e.to_string())?;

    let in_svg = if args.input == "-" {
        InputFrom::Stdin
    } else if args.input == "-c" {
        return Err("-c should be set after input".to_string());
    } else {
        InputFrom::File(args.input.as_str().into())
    };

    let out_png = match args.output {
        Some(ref out_png) if out_png == "-c" => Some(OutputTo::Stdout),
        Some(ref out_png) => Some(OutputTo::File(out_png.into())),
        None => None,
    };

    if !args.query_all && out_png.is_none() {
        return Err("<out-png> must be set".to_string());
    }

    let mut options = pxsvg::Options::default();
    if let Some(background) = args.background {
        if background.alpha != 255 {
            eprintln!("Warning: --background transparency is not supported.");
        }

        options.background =
            pxtree::Color::new_rgb(background.red, background.green, background.blue);
    }

    Ok(Args {
        in_svg,
        out_png,
        query_all: args.query_all,
        perf: args.perf,
        quiet: args.quiet,
        options,
    })
}

fn query_all(tree: &pxtree::Tree) -> Result<(), String> {
    let count = query_all_impl(&tree.root);

    if count == 0 {
        return Err("the file has no valid ID's".to_string());
    }

    Ok(())
}

fn query_all_impl(shapes: &[pxtree::Shape]) -> usize {
    let mut count = 0;
    for shape in shapes {
        if !shape.id().is_empty() {
            count += 1;

            match shape.bounding_box() {
                Some(bbox) => println!(
                    "{},{},{},{},{}",
                    shape.id(),
                    bbox.x(),
                    bbox.y(),
                    bbox.width(),
                    bbox.height()
                ),
                None => println!("{},0,0,0,0", shape.id()),
            }
        }

        if let pxtree::Shape::Group(ref group) = shape {
            count += query_all_impl(group.children());
        }
    }

    count
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
