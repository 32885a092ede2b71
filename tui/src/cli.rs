//! Running without any user interaction.

use crate::args::{Args, Format};
use lifegrid_lib::Simulation;
use log::{debug, info};
use serde_json::json;
use std::{
    error::Error,
    io::{self, Write},
    thread,
};

/// Prints the current generation.
fn print<W: Write>(out: &mut W, simulation: &Simulation, format: Format) -> io::Result<()> {
    match format {
        Format::Plaintext => {
            writeln!(
                out,
                "gen = {}, population = {}",
                simulation.generation(),
                simulation.population()
            )?;
            write!(out, "{}", simulation.grid())?;
        }
        Format::Json => {
            let value = json!({
                "generation": simulation.generation(),
                "population": simulation.population(),
                "grid": simulation.grid(),
            });
            writeln!(out, "{}", value)?;
        }
    }
    out.flush()
}

/// Advances the simulation and prints the result.
///
/// With `play`, every generation is printed, one `interval` apart,
/// until the limit is reached or the grid stops changing.
/// Otherwise only the last one.
pub(crate) fn run<W: Write>(args: Args, out: &mut W) -> Result<(), Box<dyn Error>> {
    let Args {
        simulation,
        generations,
        interval,
        play,
        format,
        ..
    } = args;

    let mut simulation = simulation.set_stop_when_settled(play);
    if play {
        simulation.start();
        print(out, &simulation, format)?;
        while simulation.is_running() {
            thread::sleep(interval);
            if simulation.tick() {
                print(out, &simulation, format)?;
            }
        }
        info!(
            "Played {} generations, {} living cells left",
            simulation.generation(),
            simulation.population()
        );
    } else {
        debug!("Running {} generations", generations);
        simulation.advance(generations);
        print(out, &simulation, format)?;
    }
    Ok(())
}
