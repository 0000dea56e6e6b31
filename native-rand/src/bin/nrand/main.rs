#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;
extern crate getopts;
extern crate native_rand;
extern crate pretty_env_logger;

use std::env;
use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};

use native_rand::{parse_seed, Engine, RandRng};


const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = -1;

const DEFAULT_COUNT: usize = 10;

#[derive(Debug, PartialEq)]
struct Conf {
    engine: Engine,
    seed: Option<i32>,
    count: usize,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            engine: Engine::default(),
            seed: None,
            count: DEFAULT_COUNT,
        }
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(Conf),
    Help,
}

fn options() -> getopts::Options {
    let mut opts = getopts::Options::new();

    opts.optopt(
        "e",
        "engine",
        "generator to draw from: native, glibc or msvc (default is native)",
        "ENGINE",
    );
    opts.optopt(
        "s",
        "seed",
        "seed passed to srand() before drawing, decimal or 0x hex",
        "SEED",
    );
    opts.optopt(
        "n",
        "count",
        "number of values to print (default is 10)",
        "COUNT",
    );
    opts.optflag("h", "help", "print this help menu");

    opts
}

// display usage
fn print_usage(program: &str, opts: &getopts::Options, code: i32) -> ! {
    let brief = format!("Usage: {} [options]", program);

    print!("{}", opts.usage(&brief));

    process::exit(code);
}

// Parse the arguments given in the command line, program name first
fn parse_args(opts: &getopts::Options, args: &[String]) -> Result<Command> {
    let matches = opts
        .parse(args.get(1..).unwrap_or(&[]))
        .context("invalid arguments")?;

    if matches.opt_present("h") {
        return Ok(Command::Help);
    }

    let mut conf = Conf::default();

    if let Some(arg) = matches.opt_str("e") {
        conf.engine = arg.parse()?;
    }

    if let Some(arg) = matches.opt_str("s") {
        conf.seed = Some(parse_seed(&arg)?);
    }

    if let Some(arg) = matches.opt_str("n") {
        conf.count = arg
            .parse::<usize>()
            .map_err(|_| anyhow!("invalid count, {}", arg))?;
    }

    Ok(Command::Run(conf))
}

fn run<W: Write>(conf: &Conf, out: &mut W) -> Result<()> {
    let mut rng = conf.engine.create(None);

    if let Some(seed) = conf.seed {
        info!("seeding {} generator with {}", conf.engine, seed);

        rng.srand(seed);
    }

    for _ in 0..conf.count {
        writeln!(out, "{}", rng.rand()).context("failed to write values")?;
    }

    Ok(())
}

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_default();
    let opts = options();

    let conf = match parse_args(&opts, &args) {
        Ok(Command::Run(conf)) => conf,
        Ok(Command::Help) => print_usage(&program, &opts, EXIT_SUCCESS),
        Err(err) => {
            println!("{:#}", err);

            print_usage(&program, &opts, EXIT_FAILURE);
        }
    };

    debug!("{:?}", conf);

    let stdout = io::stdout();

    if let Err(err) = run(&conf, &mut stdout.lock()) {
        error!("{:?}", err);

        process::exit(EXIT_FAILURE);
    }
}
