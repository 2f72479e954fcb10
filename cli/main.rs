//! This module contains the main entrypoint to the xray cli.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

mod actions;
mod compare;

#[derive(Parser)]
#[clap(
	about = "Inspect drill actions and render xray comparisons.",
	disable_help_subcommand = true
)]
enum Options {
	#[clap(name = "actions")]
	Actions(ActionsOptions),
	#[clap(name = "compare")]
	Compare(CompareOptions),
}

#[derive(Parser, Debug)]
#[clap(about = "list the actions offered for a question")]
#[clap(long_about = "list the click actions offered for a saved question and optionally apply one")]
pub struct ActionsOptions {
	#[clap(short, long, env = "XRAY_QUESTION", help = "the path to a question .json file")]
	question: PathBuf,
	#[clap(long, help = "the name of an action to apply, printing the question it leads to")]
	apply: Option<String>,
}

#[derive(Parser, Debug)]
#[clap(about = "render an xray comparison")]
#[clap(long_about = "render the xray comparison of two items to html")]
pub struct CompareOptions {
	#[clap(short, long, env = "XRAY_PROPS", help = "the path to a comparison props .json file")]
	props: PathBuf,
	#[clap(short, long, env = "XRAY_OUTPUT", help = "the path to write the .html file to")]
	output: Option<PathBuf>,
}

fn main() {
	let options = Options::parse();
	let result = match options {
		Options::Actions(options) => actions::actions(options),
		Options::Compare(options) => compare::compare(options),
	};
	if let Err(error) = result {
		eprintln!("{}: {:#}", "error".red().bold(), error);
		std::process::exit(1);
	}
}
