use boolsat::input::{join_arguments, read_expression, read_expression_from_file};
use boolsat::*;
use clap::{App, Arg};

// Same exit codes as minisat, except satisfiable is 0 unless --minisat is given
const EXIT_SATISFIABLE: i32 = 0;
const EXIT_SATISFIABLE_MINISAT: i32 = 10;
const EXIT_UNSATISFIABLE: i32 = 20;
const EXIT_CANNOT_READ_INPUT: i32 = 1;
const EXIT_CANNOT_PARSE_INPUT: i32 = 3;

fn main() {
    env_logger::init();

    let matches = App::new("boolsat")
        .about("A toy SAT (boolean satisfiability) solver")
        .after_help(
            "The expression can be given as arguments (in quotes), read from a file, or sent via \
             stdin.\n\nSupported: &=and, |=or, ~=not, ()=brackets, letters=literals\n\n\
             Example expressions:\n    a & ~b\n    x & ~x\n    mike & sally & ~peter\n    \
             ~(mike & sally) & ~peter",
        )
        .arg(
            Arg::with_name("EXPRESSION")
                .help("logic expression; multiple arguments are joined with spaces")
                .multiple(true)
                .index(1),
        )
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .value_name("FILE")
                .takes_value(true)
                .conflicts_with("EXPRESSION")
                .help("read the expression from a file"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("only print the verdict"),
        )
        .arg(
            Arg::with_name("minisat")
                .short("m")
                .long("minisat")
                .help("exit with 10 rather than 0 when satisfiable"),
        )
        .get_matches();

    let text = if let Some(args) = matches.values_of("EXPRESSION") {
        Ok(join_arguments(args))
    } else if let Some(path) = matches.value_of("file") {
        read_expression_from_file(path)
    } else {
        read_expression(std::io::stdin())
    };

    let exit_code = match text {
        Ok(text) => run(&text, matches.is_present("quiet"), matches.is_present("minisat")),
        Err(e) => {
            eprintln!("{}", e);
            EXIT_CANNOT_READ_INPUT
        }
    };
    std::process::exit(exit_code);
}

fn run(text: &str, quiet: bool, minisat: bool) -> i32 {
    let formula = match Formula::parse(text) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("{}", e);
            return EXIT_CANNOT_PARSE_INPUT;
        }
    };

    if !quiet {
        println!("Parsed Input: {}", formula);
        println!("Unique Literals: {}", formula.literals());
    }

    let mut solver = Solver::new(formula);
    let result = solver.solve();

    match result {
        Ok(result) => {
            println!("{}", result);
            if !quiet {
                let stats = solver.stats();
                println!("Number of Evals: {}", stats.evaluations);
                println!("Number of Lookups: {}", stats.lookups);
                println!("Max Depth: {}", stats.max_depth);
            }
            match result {
                SatResult::Satisfiable(_) if minisat => EXIT_SATISFIABLE_MINISAT,
                SatResult::Satisfiable(_) => EXIT_SATISFIABLE,
                SatResult::Unsatisfiable => EXIT_UNSATISFIABLE,
            }
        }
        Err(e) if e.is_syntax() => {
            eprintln!("Formula has invalid syntax -- {}", e);
            EXIT_CANNOT_PARSE_INPUT
        }
        Err(e) => {
            eprintln!("{}", e);
            EXIT_CANNOT_PARSE_INPUT
        }
    }
}
