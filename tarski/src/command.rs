use crate::terminal::Stylus;
use crate::{constants::*, structures::*, utils::*};
use anyhow::{Context, Error};
use std::{fs, path::PathBuf};
use structopt::StructOpt;
use tarski_fol::syntax::{bind_symbols, Expr};
use tarski_model::{
    semantics::{Assignment, Model},
    trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE},
};

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(name = "posets", about = "Compare a three element chain with a V shaped poset")]
    Posets,
    #[structopt(
        name = "boole",
        about = "Check the Boolean algebra of the subsets of {1, 2, 3}"
    )]
    Boole,
    #[structopt(
        name = "clamp",
        about = "Check n-ary functions over the integers from 42 to 52"
    )]
    Clamp,
    #[structopt(
        name = "explore",
        about = "Check that ∃x∀y r(x, y) entails ∀y∃x r(x, y) for every binary relation r on small universes"
    )]
    Explore {
        #[structopt(
            long = "max-size",
            help = "Largest universe to explore [default: 3]"
        )]
        max_size: Option<u32>,
    },
    #[structopt(name = "all", about = "Run every example")]
    All,
}

impl ProcessCommand {
    fn run(self, stylus: &Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::Posets => run_posets(stylus),
            ProcessCommand::Boole => run_boole(stylus),
            ProcessCommand::Clamp => run_clamp(stylus),
            ProcessCommand::Explore { max_size } => {
                run_explore(max_size.unwrap_or(DEFAULT_MAX_SIZE), stylus)
            }
            ProcessCommand::All => {
                run_posets(stylus)?;
                run_boole(stylus)?;
                run_clamp(stylus)?;
                run_explore(DEFAULT_MAX_SIZE, stylus)
            }
        }
    }
}

fn run_posets(stylus: &Stylus) -> Result<(), Error> {
    let structures = vec![
        ("Chain poset", chain_poset()?, true),
        ("V poset", v_poset()?, false),
    ];
    for (title, (universe, interpretation), total) in structures {
        let model = Model::new(poset_theory()?, universe, interpretation)
            .with_context(|| format!("the {} is not a poset", title))?;
        print_model(title, &model, stylus);
        for property in poset_properties(total)? {
            check(&model, &property, &Assignment::new(), stylus)?;
        }
        print_separator(stylus);
    }
    Ok(())
}

fn run_boole(stylus: &Stylus) -> Result<(), Error> {
    let model = boolean_algebra().context("the subsets of {1, 2, 3} are not a Boolean algebra")?;
    print_model("Boolean algebra", &model, stylus);

    let symbols = bind_symbols(model.theory().signature());
    check(
        &model,
        &second_distributive_law(&symbols)?,
        &Assignment::new(),
        stylus,
    )?;

    let (x1, x2, x12) = (Expr::var("x1"), Expr::var("x2"), Expr::var("x12"));
    let assignment: Assignment<Subset> = vec![
        ("x1", [1].iter().cloned().collect()),
        ("x2", [2].iter().cloned().collect()),
        ("x12", [1, 2].iter().cloned().collect()),
    ]
    .into_iter()
    .collect();
    let s = symbols.get("s")?;
    let i = symbols.get("i")?;
    let leq = symbols.get("<=")?;

    stylus.println(STYLE_INFO, "\nUnder x1 = {1}, x2 = {2}, x12 = {1, 2}:");
    let formulae = vec![
        Property::new("join of singletons", s.app2(&x1, &x2)?.equals(&x12), true),
        Property::new("singleton below pair", leq.app2(&x1, &x12)?, true),
    ];
    for property in formulae {
        check(&model, &property, &assignment, stylus)?;
    }

    let term = i.app2(&x1, &s.app2(&x1, &x2)?)?;
    let value = model.value_of(&term, &assignment)?;
    stylus.println(STYLE_THEORY, format!("  {} = {:?}", term, value));
    if value != [1].iter().cloned().collect::<Subset>() {
        return Err(Error::msg(format!("unexpected value of {}", term)));
    }

    print_separator(stylus);
    Ok(())
}

fn run_clamp(stylus: &Stylus) -> Result<(), Error> {
    let model = clamp().context("failed to build the clamp structure")?;
    print_model("Clamp", &model, stylus);

    let symbols = bind_symbols(model.theory().signature());
    for property in clamp_properties(&symbols)? {
        check(&model, &property, &Assignment::new(), stylus)?;
    }

    print_separator(stylus);
    Ok(())
}

fn run_explore(max_size: u32, stylus: &Stylus) -> Result<(), Error> {
    let theory = relation_theory()?;
    let symbols = bind_symbols(theory.signature());
    let (phi, psi) = relation_sentences(&symbols)?;
    let entailment = phi.implies(&psi);

    stylus.println(
        STYLE_INFO,
        format!(
            "Binary relations on universes of up to {} element(s)\n",
            max_size
        ),
    );
    stylus.println(STYLE_THEORY, format!("  {}\n", entailment));

    for size in 1..=max_size {
        let mut structures = 0u64;
        let mut converse_fails = 0u64;
        for relation in binary_relations(size) {
            let model = relation_model(theory.clone(), size, relation)?;
            if !model.satisfies(&entailment)? {
                return Err(Error::msg(format!(
                    "{} fails on a universe of size {}",
                    entailment, size
                )));
            }
            if model.satisfies(&psi)? && !model.satisfies(&phi)? {
                converse_fails += 1;
            }
            structures += 1;
        }
        info!(
            size = size as u64,
            structures = structures,
            converse_fails = converse_fails
        );

        stylus.println(
            STYLE_MODEL_UNIVERSE,
            format!(
                "  size {}: holds in all {} structures, the converse fails in {}",
                size, structures, converse_fails
            ),
        );
    }

    print_separator(stylus);
    Ok(())
}

#[derive(StructOpt)]
#[structopt(
    name = "tarski",
    about = "A tool for evaluating first-order formulae in small finite structures"
)]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
pub(super) struct Command {
    #[structopt(subcommand)]
    command: ProcessCommand,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        let stylus = stylus(!self.no_color);

        let log = self
            .log
            .map(|l| l.to_str().unwrap_or(DEFAULT_JSON_LOG_FILE).to_owned());

        if !self.no_color {
            stylus.println(STYLE_LOGO, ASCII_ART);
        }

        let run = || process.run(&stylus);

        if let Some(log) = log {
            let file = fs::File::create(&log)
                .with_context(|| format!("cannot create the log file {}", log))?;
            let logger = JsonLogger::new(file);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        Command::from_iter_safe(args).unwrap()
    }

    #[test]
    fn test_parse_command() {
        let command = parse(&["tarski", "--no-color", "explore", "--max-size", "2"]);
        assert!(command.no_color);
        assert!(command.log.is_none());
        assert!(matches!(
            command.command,
            ProcessCommand::Explore { max_size: Some(2) }
        ));

        let command = parse(&["tarski", "--log", "out.json", "posets"]);
        assert_eq!(Some(PathBuf::from("out.json")), command.log);
        assert!(matches!(command.command, ProcessCommand::Posets));

        let command = parse(&["tarski", "-l", "trace.json", "--no-color", "clamp"]);
        assert_eq!(Some(PathBuf::from("trace.json")), command.log);
        assert!(command.no_color);
        assert!(matches!(command.command, ProcessCommand::Clamp));

        // the log file is a required value
        assert!(Command::from_iter_safe(&["tarski", "--log"]).is_err());

        assert!(Command::from_iter_safe(&["tarski", "chase"]).is_err());
    }

    #[test]
    fn test_run_with_log() {
        let path = std::env::temp_dir().join(format!("tarski-cli-{}.json", std::process::id()));
        let path_str = path.to_str().unwrap();
        let command = parse(&["tarski", "--no-color", "--log", path_str, "clamp"]);
        assert!(command.run().is_ok());

        let log = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(log.contains("\"outcome\": \"@model\""));
    }

    #[test]
    fn test_run_examples() {
        let stylus = stylus(false);
        assert!(ProcessCommand::Posets.run(&stylus).is_ok());
        assert!(ProcessCommand::Boole.run(&stylus).is_ok());
        assert!(ProcessCommand::Clamp.run(&stylus).is_ok());
        assert!(ProcessCommand::Explore { max_size: Some(2) }
            .run(&stylus)
            .is_ok());
    }
}
