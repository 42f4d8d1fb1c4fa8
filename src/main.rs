use abcd::{
    console::{create_intro, Args, CliArgs},
    error::AbcdResult,
};
use clap::Parser;

fn main() -> AbcdResult<()> {
    env_logger::init();
    //parse and validate CLI arguments
    let args = Args::try_from(CliArgs::parse())?;
    println!("{}", create_intro());
    //calculate the selected scenario
    let report = args.run()?;
    println!("{report}");
    Ok(())
}
