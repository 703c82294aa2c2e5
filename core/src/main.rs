mod args;
mod bench;
mod game;
mod history;

use args::{Args, Command};
use clap::Parser;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    match args.command {
        Some(Command::Bench { depth }) => bench::run(depth, args.stones),
        None => game::run(&args)?,
    }

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )
        .unwrap();
    }

    Ok(args)
}
