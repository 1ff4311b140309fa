use clap::{
    crate_description, crate_name, crate_version, App, AppSettings, Arg, ArgMatches, SubCommand,
};
use itertools::Itertools;
use lcc::{graph::Graph, testcase::read_matrix};
use std::error::Error;

fn handle_display(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let matrix = read_matrix(matches.value_of("TESTCASE").unwrap())?;
    println!("input:");
    println!("{}", matrix);
    println!("{}", Graph::from_matrix(&matrix));
    Ok(())
}

fn handle_components(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let matrix = read_matrix(matches.value_of("TESTCASE").unwrap())?;
    let graph = Graph::from_matrix(&matrix);
    let components = graph.connected_components();
    println!("number of connected components = {}", components.len());
    for (i, component) in components.iter().enumerate() {
        println!("component {}: {}", i, component.iter().format(" "));
    }
    if let Some(largest) = Graph::largest_component(&components) {
        println!("largest component: {}", largest);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("display")
                .about("Displays the parsed connection matrix and the vertex/edge model")
                .arg(Arg::with_name("TESTCASE").required(true)),
        )
        .subcommand(
            SubCommand::with_name("components")
                .about("Lists the connected components and the largest one")
                .arg(Arg::with_name("TESTCASE").required(true)),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("display") {
        handle_display(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("components") {
        handle_components(matches)?;
    }
    Ok(())
}
