use std::process;
use clap::Parser;
use log::*;

use buildlog_stats::Opts;

fn main()
{
    env_logger::init();
    let options = Opts::parse();

    if let Err(error) = buildlog_stats::run(&options) {
        error!("{:#}", error);
        process::exit(1);
    };
}
