//! Subcommand implementations.

use std::path::{Path, PathBuf};

use tourdiff::tsplib::{read_instance, read_tour, tour_cost};
use tourdiff::{
    decompose_files, moves_to_json, read_moves, write_moves, AssertMode, DecomposeConfig,
    Decomposer, MoveReport, Result,
};

/// Arguments of `tourdiff diff`.
#[derive(Debug)]
pub struct DiffArgs {
    pub first: PathBuf,
    pub second: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub no_split: bool,
    pub parallel: bool,
    pub full_assert: bool,
}

impl DiffArgs {
    /// Flags override whatever the config file sets.
    fn decompose_config(&self) -> Result<DecomposeConfig> {
        let mut config = match &self.config {
            Some(path) => DecomposeConfig::from_file(path)?,
            None => DecomposeConfig::default(),
        };
        if self.no_split {
            config = config.with_split_junctions(false);
        }
        if self.parallel {
            config = config.with_parallel_islands(true);
        }
        if self.full_assert {
            config = config.with_assert_mode(AssertMode::Full);
        }
        Ok(config)
    }

    pub fn run(self) -> Result<()> {
        let decomposer = Decomposer::new(self.decompose_config()?);
        let decomposition = decompose_files(&decomposer, &self.first, &self.second)?;

        println!("total difference is a {}-opt move.", decomposition.total_k());
        println!(
            "split the total k-move into {} disjoint k-moves.",
            decomposition.move_count()
        );
        println!("k-opt for each island: {:?}", decomposition.move_sizes());

        match &self.output {
            Some(path) => write_moves(path, decomposition.moves())?,
            None => println!("{}", moves_to_json(decomposition.moves())?),
        }
        Ok(())
    }
}

/// `tourdiff length`
pub fn length(instance: &Path, tour: &Path) -> Result<()> {
    let instance = read_instance(instance)?;
    let tour = read_tour(tour)?;
    println!("cost: {}", tour_cost(&instance, &tour)?);
    Ok(())
}

/// `tourdiff report`
pub fn report(instance: &Path, moves: &Path) -> Result<()> {
    let instance = read_instance(instance)?;
    let moves = read_moves(moves)?;
    let report = MoveReport::new(&instance, &moves)?;

    for cost in report.costs() {
        println!("cost, k-count: ({}, {})", cost.gain, cost.k);
    }
    println!();
    println!("total k, cost: {}, {}", report.total_k(), report.total_gain());
    Ok(())
}
