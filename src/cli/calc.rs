//! Menu flow for the calculator tool.

use super::{farewell, output, prompt::Prompter};
use crate::calc::Operation;
use crate::config::Profile;
use crate::errors::CoreResult;

const TOOL_NAME: &str = "Calculator Tool";

const MENU: [&str; 5] = [
    "Addition (+)",
    "Subtraction (-)",
    "Multiplication (*)",
    "Division (/)",
    "Exit",
];

pub fn run(profile: &Profile, prompter: &Prompter) -> CoreResult<()> {
    println!("{}", profile.header("CALCULATOR TOOL"));
    output::info("Welcome to the Calculator Tool!");
    output::info("This calculator performs basic arithmetic operations.");

    loop {
        let Some(choice) = prompter.menu("Calculator Operations", &MENU)? else {
            break;
        };
        let Some(operation) = Operation::ALL.get(choice).copied() else {
            break;
        };

        let Some(a) = prompter.number("Enter first number")? else {
            break;
        };
        let Some(b) = prompter.number("Enter second number")? else {
            break;
        };

        match operation.apply(a, b) {
            Ok(result) => output::success(format!(
                "Result: {} {} {} = {}",
                a,
                operation.symbol(),
                b,
                result
            )),
            Err(err) => output::error(err),
        }

        output::separator();
        let keep_going = prompter
            .confirm("Do you want to perform another calculation?")?
            .unwrap_or(false);
        if !keep_going {
            break;
        }
    }
    farewell(profile, TOOL_NAME);
    Ok(())
}
