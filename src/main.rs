use std::io::{self, BufRead, Write};

use rowdb::sql::{execute, Statement};
use rowdb::table::Table;
use rowdb::DbError;

// Non-SQL lines starting with '.' are meta-commands.
enum MetaCommand {
    Exit,
    Unrecognized,
}

impl MetaCommand {
    fn parse(line: &str) -> MetaCommand {
        match line {
            ".exit" => MetaCommand::Exit,
            _ => MetaCommand::Unrecognized,
        }
    }
}

fn print_prompt() {
    print!("db > ");
    io::stdout().flush().expect("Failed to flush stdout");
}

fn print_prepare_error(line: &str, err: &DbError) {
    match err {
        DbError::Syntax => println!("Syntax error. Could not parse statement."),
        DbError::StringTooLong { .. } => println!("String is too long."),
        DbError::NegativeId => println!("ID must be positive."),
        DbError::UnrecognizedStatement(_) => {
            println!("Unrecognized keyword at start of '{line}'.")
        }
        _ => println!("Error: {err}."),
    }
}

fn main() {
    let mut table = Table::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_prompt();
        let line = match lines.next() {
            Some(line) => line.expect("Failed to read line"),
            None => break,
        };

        if line.starts_with('.') {
            match MetaCommand::parse(&line) {
                MetaCommand::Exit => break,
                MetaCommand::Unrecognized => println!("Unrecognized command '{line}'."),
            }
            continue;
        }

        let statement = match Statement::prepare(&line) {
            Ok(statement) => statement,
            Err(err) => {
                print_prepare_error(&line, &err);
                continue;
            }
        };

        match execute(&statement, &mut table, |row| println!("{row}")) {
            Ok(()) => println!("Executed."),
            Err(DbError::TableFull) => println!("Error: Table full."),
            Err(err) => println!("Error: {err}."),
        }
    }
}
